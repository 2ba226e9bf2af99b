//! Error types for folio_app

use std::path::PathBuf;

use folio_theme::ThemeError;
use thiserror::Error;

/// Errors that can occur while loading or running a Folio site
#[derive(Error, Debug)]
pub enum FolioError {
    /// Failed to read or write a file
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration could not be encoded
    #[error("failed to encode configuration: {0}")]
    Encode(#[from] toml::ser::Error),

    /// Theme preference store failed
    #[error("theme preference: {0}")]
    Theme(#[from] ThemeError),
}

/// Result type for folio_app operations
pub type Result<T> = std::result::Result<T, FolioError>;
