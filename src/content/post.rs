//! Post and page context models

use chrono::{DateTime, FixedOffset};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// A published post, already parsed and routed upstream
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Link to the rendered post, relative or absolute
    pub url: String,

    /// Publication date
    pub date: DateTime<FixedOffset>,

    /// Pre-rendered summary, may be empty
    pub excerpt: String,
}

impl Post {
    /// Create a post without an excerpt
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        date: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            date,
            excerpt: String::new(),
        }
    }

    /// Set the excerpt
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }
}

/// How an excerpt is written into the index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExcerptMode {
    /// Embed the excerpt as-is; it is markup from the document processor
    #[default]
    Verbatim,
    /// Escape the excerpt so any markup shows as text
    Escaped,
    /// Drop tags and keep the text
    Plain,
}

/// Page-level settings for one render pass
#[derive(Debug, Clone, PartialEq)]
pub struct PageContext {
    /// Heading text
    pub page_title: String,

    /// Date format override, strftime or Moment.js style
    pub date_format: Option<String>,

    /// Prefix for relative post URLs
    pub base_path: String,

    /// Zone dates are shown in; `None` keeps each date's own offset
    pub timezone: Option<Tz>,

    /// How excerpts are written into each entry
    pub excerpt_mode: ExcerptMode,

    /// Value of the document's `lang` attribute
    pub language: String,
}

impl PageContext {
    /// Create a context with the given heading and defaults for the rest
    pub fn new(page_title: impl Into<String>) -> Self {
        Self {
            page_title: page_title.into(),
            ..Self::default()
        }
    }
}

impl Default for PageContext {
    fn default() -> Self {
        Self {
            page_title: "Posts".to_string(),
            date_format: None,
            base_path: String::new(),
            timezone: None,
            excerpt_mode: ExcerptMode::default(),
            language: "en".to_string(),
        }
    }
}
