//! Site configuration (_config.yml / _config.toml)

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::{ExcerptMode, PageContext};
use crate::error::{Error, Result};

/// Config file names, in lookup order
pub const CONFIG_FILES: [&str; 2] = ["_config.yml", "_config.toml"];

/// Main site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Page
    pub title: String,
    /// Heading for the post list; falls back to `title`
    pub list_title: Option<String>,
    pub language: String,

    // URL
    pub root: String,

    // Date / Time
    pub timezone: String,
    pub date_format: Option<String>,

    // Listing
    pub excerpt: ExcerptMode,
    pub standalone: bool,

    // Paths
    pub posts: String,
    pub destination: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Posts".to_string(),
            list_title: None,
            language: "en".to_string(),

            root: String::new(),

            timezone: String::new(),
            date_format: None,

            excerpt: ExcerptMode::Verbatim,
            standalone: false,

            posts: "_posts.yml".to_string(),
            destination: "_site".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a YAML or TOML file, chosen by extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content).map_err(|source| Error::Toml {
                path: path.to_path_buf(),
                source,
            })
        } else if content.trim().is_empty() {
            Ok(Self::default())
        } else {
            serde_yaml::from_str(&content).map_err(|source| Error::Yaml {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    /// Find the config file in a directory, if there is one
    pub fn find<P: AsRef<Path>>(base_dir: P) -> Option<PathBuf> {
        CONFIG_FILES
            .iter()
            .map(|name| base_dir.as_ref().join(name))
            .find(|path| path.exists())
    }

    /// Load the config from a directory, or use defaults when none exists
    pub fn discover<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        match Self::find(&base_dir) {
            Some(path) => {
                tracing::debug!("Loading config from {:?}", path);
                Self::load(path)
            }
            None => {
                tracing::debug!("No config in {:?}, using defaults", base_dir.as_ref());
                Ok(Self::default())
            }
        }
    }

    /// Parse the configured timezone; empty means none
    pub fn tz(&self) -> Result<Option<Tz>> {
        let name = self.timezone.trim();
        if name.is_empty() {
            return Ok(None);
        }
        name.parse::<Tz>()
            .map(Some)
            .map_err(|_| Error::UnknownTimezone(name.to_string()))
    }

    /// Build the explicit page context for a render pass
    pub fn page_context(&self) -> Result<PageContext> {
        Ok(PageContext {
            page_title: self
                .list_title
                .clone()
                .unwrap_or_else(|| self.title.clone()),
            date_format: self.date_format.clone(),
            base_path: self.root.clone(),
            timezone: self.tz()?,
            excerpt_mode: self.excerpt,
            language: self.language.clone(),
        })
    }
}
