//! Post manifest loading
//!
//! A manifest is a YAML or JSON file holding the ordered post records the
//! index is built from. It is either a bare list or a map with a `posts`
//! list:
//!
//! ```yaml
//! posts:
//!   - title: Hello World
//!     url: /2025/01/05/hello-world/
//!     date: 2025-01-05 10:30:00 +0100
//!     excerpt: <p>First post.</p>
//! ```
//!
//! Entry order is kept exactly as written.

use chrono_tz::Tz;
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

use super::Post;
use crate::error::{Error, Result};
use crate::helpers::parse_date;

/// Serialization format of a manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Yaml,
    Json,
}

impl ManifestFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "yml" | "yaml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Custom deserializer that reads any scalar as text
///
/// Unquoted YAML like `title: 1984` or `title: true` arrives as a number or
/// boolean; those are kept as their written form.
fn scalar_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ScalarText;

    impl<'de> Visitor<'de> for ScalarText {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, number or boolean")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_string<E: de::Error>(self, value: String) -> std::result::Result<Self::Value, E> {
            Ok(Some(value))
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> std::result::Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> std::result::Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }
    }

    deserializer.deserialize_any(ScalarText)
}

/// A post as written in the manifest, before its date is parsed
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPost {
    #[serde(deserialize_with = "scalar_text")]
    title: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    url: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    date: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    excerpt: Option<String>,
}

/// Top-level manifest: a bare list of posts, or a map holding `posts`
#[derive(Debug)]
struct Manifest(Vec<RawPost>);

impl<'de> Deserialize<'de> for Manifest {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ManifestVisitor;

        impl<'de> Visitor<'de> for ManifestVisitor {
            type Value = Manifest;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a list of posts or a map with a `posts` list")
            }

            fn visit_seq<S>(self, mut seq: S) -> std::result::Result<Self::Value, S::Error>
            where
                S: SeqAccess<'de>,
            {
                let mut posts = Vec::new();
                while let Some(post) = seq.next_element::<RawPost>()? {
                    posts.push(post);
                }
                Ok(Manifest(posts))
            }

            fn visit_map<M>(self, mut map: M) -> std::result::Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut posts = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key == "posts" {
                        posts = Some(map.next_value::<Option<Vec<RawPost>>>()?.unwrap_or_default());
                    } else {
                        map.next_value::<de::IgnoredAny>()?;
                    }
                }
                posts
                    .map(Manifest)
                    .ok_or_else(|| de::Error::missing_field("posts"))
            }
        }

        deserializer.deserialize_any(ManifestVisitor)
    }
}

/// Load posts from a manifest file
///
/// Dates without an offset are read in `tz` (UTC when `None`).
pub fn load_posts<P: AsRef<Path>>(path: P, tz: Option<Tz>) -> Result<Vec<Post>> {
    let path = path.as_ref();
    let format = ManifestFormat::from_path(path)
        .ok_or_else(|| Error::UnsupportedManifest(path.to_path_buf()))?;
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    let posts = parse_manifest(&content, format, tz).map_err(|e| match e {
        ParseError::Yaml(source) => Error::Yaml {
            path: path.to_path_buf(),
            source,
        },
        ParseError::Json(source) => Error::Json {
            path: path.to_path_buf(),
            source,
        },
        ParseError::Other(e) => e,
    })?;

    tracing::debug!("Loaded {} posts from {:?}", posts.len(), path);
    Ok(posts)
}

#[derive(Debug)]
enum ParseError {
    Yaml(serde_yaml::Error),
    Json(serde_json::Error),
    Other(Error),
}

fn parse_manifest(
    content: &str,
    format: ManifestFormat,
    tz: Option<Tz>,
) -> std::result::Result<Vec<Post>, ParseError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let manifest: Manifest = match format {
        ManifestFormat::Yaml => serde_yaml::from_str(content).map_err(ParseError::Yaml)?,
        ManifestFormat::Json => serde_json::from_str(content).map_err(ParseError::Json)?,
    };

    manifest
        .0
        .into_iter()
        .enumerate()
        .map(|(index, raw)| to_post(index, raw, tz).map_err(ParseError::Other))
        .collect()
}

fn to_post(index: usize, raw: RawPost, tz: Option<Tz>) -> Result<Post> {
    let value = raw.date.unwrap_or_default();
    let date = parse_date(&value, tz).ok_or(Error::InvalidDate { index, value })?;

    Ok(Post {
        title: raw.title.unwrap_or_default(),
        url: raw.url.unwrap_or_default(),
        date,
        excerpt: raw.excerpt.unwrap_or_default(),
    })
}
