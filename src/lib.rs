//! post-index: render a blog's post index
//!
//! Posts arrive already parsed (title, url, date, excerpt) and in the order
//! they should be listed. The renderer turns them into an HTML listing using
//! an explicit [`PageContext`]; the rest of the crate loads those inputs from
//! a site directory.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod render;

pub use content::{ExcerptMode, PageContext, Post};
pub use error::{Error, Result};
pub use render::{render_document, render_index};

use std::path::{Path, PathBuf};

/// A site directory: its config plus the paths derived from it
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Post manifest
    pub posts_path: PathBuf,
    /// Output directory
    pub destination: PathBuf,
}

impl Site {
    /// Open a site directory, reading `_config.yml` or `_config.toml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config = config::SiteConfig::discover(&base_dir)?;
        Ok(Self::with_config(base_dir, config))
    }

    /// Open a site directory with an already loaded config
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let posts_path = base_dir.join(&config.posts);
        let destination = base_dir.join(&config.destination);

        Self {
            config,
            base_dir,
            posts_path,
            destination,
        }
    }

    /// Load the posts listed in the manifest, in manifest order
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        content::load_posts(&self.posts_path, self.config.tz()?)
    }

    /// Page context built from the config
    pub fn page_context(&self) -> Result<PageContext> {
        self.config.page_context()
    }

    /// Path of the rendered index
    pub fn index_path(&self) -> PathBuf {
        self.destination.join("index.html")
    }
}
