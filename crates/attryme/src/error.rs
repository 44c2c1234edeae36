//! Errors raised while loading form descriptions
//!
//! Validation failures are not errors in this sense; they are messages inside
//! a [`ValidationResult`](crate::ValidationResult).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("Failed to read form file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON form: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML form: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported form file extension: {0:?} (expected .json or .toml)")]
    UnsupportedFormat(PathBuf),

    #[error("Field #{0} has no id")]
    MissingId(usize),

    #[error("Duplicate field id: {0}")]
    DuplicateId(String),
}

pub type Result<T> = std::result::Result<T, FormError>;
