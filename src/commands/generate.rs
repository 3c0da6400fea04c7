//! Generate the post index

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::render::{render_document, render_index};
use crate::Site;

/// Command-line overrides for a generate run
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Replace the configured heading
    pub title: Option<String>,
    /// Replace the configured date format
    pub date_format: Option<String>,
    /// Wrap the listing in a full HTML document
    pub standalone: bool,
}

/// Render the index for a site without writing it anywhere
pub fn render(site: &Site, options: &GenerateOptions) -> Result<String> {
    let posts = site
        .load_posts()
        .with_context(|| format!("loading posts from {:?}", site.posts_path))?;

    let mut ctx = site.page_context()?;
    if let Some(title) = &options.title {
        ctx.page_title = title.clone();
    }
    if let Some(format) = &options.date_format {
        ctx.date_format = Some(format.clone());
    }

    tracing::info!("Rendering {} posts", posts.len());

    if options.standalone || site.config.standalone {
        Ok(render_document(&posts, &ctx))
    } else {
        Ok(render_index(&posts, &ctx))
    }
}

/// Render the index and write it to `<destination>/index.html`
pub fn run(site: &Site, options: &GenerateOptions) -> Result<PathBuf> {
    let start = std::time::Instant::now();

    let html = render(site, options)?;

    fs::create_dir_all(&site.destination)?;
    let path = site.index_path();
    fs::write(&path, html).with_context(|| format!("writing {:?}", path))?;

    let duration = start.elapsed();
    tracing::info!("Generated {:?} in {:.2}s", path, duration.as_secs_f64());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site_with(config: &str, posts: &str) -> (tempfile::TempDir, Site) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_config.yml"), config).unwrap();
        fs::write(dir.path().join("_posts.yml"), posts).unwrap();
        let site = Site::new(dir.path()).unwrap();
        (dir, site)
    }

    const POSTS: &str = r#"
- title: Second
  url: /second/
  date: 2025-01-05
- title: First
  url: /first/
  date: 2024-12-31
"#;

    #[test]
    fn test_run_writes_index() {
        let (_dir, site) = site_with("title: Blog\n", POSTS);
        let path = run(&site, &GenerateOptions::default()).unwrap();

        let html = fs::read_to_string(path).unwrap();
        assert!(html.starts_with("<div class=\"home\">"));
        assert!(html.contains(">Blog</h2>"));
        assert!(html.contains(">Jan 5, 2025</time>"));
        assert!(html.find("Second").unwrap() < html.find("First").unwrap());
    }

    #[test]
    fn test_options_override_config() {
        let (_dir, site) = site_with("title: Blog\ndate_format: '%d/%m/%Y'\n", POSTS);
        let options = GenerateOptions {
            title: Some("Archive".to_string()),
            date_format: Some("YYYY-MM-DD".to_string()),
            standalone: true,
        };

        let html = render(&site, &options).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Archive</title>"));
        assert!(html.contains(">2024-12-31</time>"));
    }

    #[test]
    fn test_config_date_format_and_root() {
        let (_dir, site) = site_with("date_format: '%d/%m/%Y'\nroot: /blog/\n", POSTS);
        let html = render(&site, &GenerateOptions::default()).unwrap();
        assert!(html.contains(">05/01/2025</time>"));
        assert!(html.contains(r#"href="/blog/second/""#));
    }

    #[test]
    fn test_missing_manifest_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        let err = render(&site, &GenerateOptions::default()).unwrap_err();
        assert!(err.to_string().contains("loading posts"));
    }
}
