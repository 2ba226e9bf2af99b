//! Error types for folio_theme

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by theme preference stores
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Reading or writing the preference file failed
    #[error("preference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The preference file is not valid TOML
    #[error("invalid preference file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The preference could not be encoded
    #[error("failed to encode preference: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A scheme name other than `light` or `dark`
    #[error("unknown color scheme `{0}` (expected `light` or `dark`)")]
    UnknownScheme(String),
}

/// Result type for folio_theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
