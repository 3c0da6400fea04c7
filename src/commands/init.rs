//! Initialize a new site directory

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::error::Error;

const CONFIG_TEMPLATE: &str = r#"# post-index configuration

# Page
title: Posts
# list_title: Writing
language: en

# URL
root: ''

# Date / Time
timezone: ''
# strftime ("%b %-d, %Y") or Moment.js ("MMM D, YYYY"); default: %b %-d, %Y
# date_format: '%Y-%m-%d'

# Listing
excerpt: verbatim   # verbatim | escaped | plain
standalone: false

# Paths
posts: _posts.yml
destination: _site
"#;

const POSTS_TEMPLATE: &str = r#"# Posts in the order they are listed, newest first
posts:
  - title: Hello World
    url: /2025/01/05/hello-world/
    date: 2025-01-05 10:30:00 +0000
    excerpt: <p>Welcome! This is the first post.</p>
"#;

/// Initialize a new site in the given directory
///
/// Refuses to touch a directory that already has a config file.
pub fn init_site(target_dir: &Path) -> Result<()> {
    if let Some(existing) = SiteConfig::find(target_dir) {
        return Err(Error::ConfigExists(existing).into());
    }

    fs::create_dir_all(target_dir)?;
    fs::write(target_dir.join("_config.yml"), CONFIG_TEMPLATE)?;

    let posts_path = target_dir.join("_posts.yml");
    if !posts_path.exists() {
        fs::write(&posts_path, POSTS_TEMPLATE)?;
    }

    tracing::info!("Initialized site in {:?}", target_dir);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Site;

    #[test]
    fn test_init_creates_loadable_site() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("blog");
        init_site(&target).unwrap();

        let site = Site::new(&target).unwrap();
        assert_eq!(site.config, SiteConfig::default());

        let posts = site.load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Hello World");
    }

    #[test]
    fn test_init_refuses_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_config.toml"), "title = \"Mine\"\n").unwrap();

        let err = init_site(dir.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::ConfigExists(_))
        ));
        assert!(!dir.path().join("_config.yml").exists());
    }

    #[test]
    fn test_init_keeps_existing_posts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_posts.yml"), "posts: []\n").unwrap();

        init_site(dir.path()).unwrap();
        let content = fs::read_to_string(dir.path().join("_posts.yml")).unwrap();
        assert_eq!(content, "posts: []\n");
    }
}
