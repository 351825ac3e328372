//! Unified error type for the Campus facade.
//!
//! Internal crates keep their own error enums; this type wraps them so
//! callers of the facade handle a single `Error`.

use std::path::PathBuf;

use campus_core::CatalogError;
use campus_style::StyleError;
use thiserror::Error;

/// Result alias for facade operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the Campus facade
#[derive(Debug, Error)]
pub enum Error {
    /// Catalog data or field configuration was invalid
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Style configuration was invalid
    #[error(transparent)]
    Style(#[from] StyleError),

    /// Configuration file was not valid TOML or had the wrong shape
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
