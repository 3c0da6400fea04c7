//! Clean the output directory

use anyhow::{Context, Result};
use std::fs;

use crate::Site;

/// Remove the output directory
///
/// Refuses when the destination is the site directory or one of its
/// parents, since removing it would take the config and manifest with it.
pub fn run(site: &Site) -> Result<()> {
    if !site.destination.exists() {
        return Ok(());
    }

    let destination = site
        .destination
        .canonicalize()
        .with_context(|| format!("resolving {:?}", site.destination))?;
    let base_dir = site
        .base_dir
        .canonicalize()
        .with_context(|| format!("resolving {:?}", site.base_dir))?;

    if base_dir.starts_with(&destination) {
        anyhow::bail!(
            "Refusing to clean {:?}: it contains the site directory {:?}",
            destination,
            base_dir
        );
    }

    fs::remove_dir_all(&destination)?;
    tracing::info!("Deleted: {:?}", destination);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_clean_removes_destination() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        fs::create_dir_all(&site.destination).unwrap();
        fs::write(site.index_path(), "<div></div>").unwrap();

        run(&site).unwrap();
        assert!(!site.destination.exists());

        // Nothing to remove is fine too
        run(&site).unwrap();
    }

    #[test]
    fn test_clean_refuses_site_directory() {
        for destination in ["", ".", ".."] {
            let dir = tempfile::tempdir().unwrap();
            let site_dir = dir.path().join("site");
            fs::create_dir_all(&site_dir).unwrap();
            let config_path = site_dir.join("_config.yml");
            fs::write(&config_path, "title: Blog\n").unwrap();

            let config = SiteConfig {
                destination: destination.to_string(),
                ..SiteConfig::default()
            };
            let site = Site::with_config(&site_dir, config);

            let err = run(&site).unwrap_err();
            assert!(err.to_string().contains("Refusing to clean"), "{:?}", destination);
            assert!(config_path.exists(), "config removed for {:?}", destination);
        }
    }
}
