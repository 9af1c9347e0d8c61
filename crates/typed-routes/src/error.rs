//! Error types for typed-routes I/O
//!
//! The compiler itself is total; only scanning, template loading,
//! declaration writing and config loading can fail.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for typed-routes operations.
pub type Result<T> = std::result::Result<T, TypedRoutesError>;

#[derive(Error, Debug)]
pub enum TypedRoutesError {
    /// Reading or writing a file failed
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Walking the router directory failed
    #[error("Failed to walk router directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// `typed-routes.toml` could not be parsed
    #[error("Invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl TypedRoutesError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TypedRoutesError::Io {
            path: path.into(),
            source,
        }
    }
}
