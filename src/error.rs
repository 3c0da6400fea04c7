//! Errors raised while loading site config and post manifests

use std::path::PathBuf;

/// Result alias for the loading layer
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in {path:?}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid JSON in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid TOML in {path:?}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported manifest {0:?}: expected .yml, .yaml or .json")]
    UnsupportedManifest(PathBuf),

    #[error("post #{index} has an unparseable date: {value:?}")]
    InvalidDate { index: usize, value: String },

    #[error("unknown timezone: {0:?}")]
    UnknownTimezone(String),

    #[error("a site config already exists at {0:?}")]
    ConfigExists(PathBuf),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
