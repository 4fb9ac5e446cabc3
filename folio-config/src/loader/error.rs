use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while assembling a [`FolioConfig`](crate::FolioConfig).
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {origin}: {message}")]
    Parse { origin: String, message: String },

    #[error("invalid value for {key}: {message}")]
    InvalidEnv { key: &'static str, message: String },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
