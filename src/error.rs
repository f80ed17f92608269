//! Error types for the bids-naming library.

use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum Error {
    // Component errors
    #[error("All values must be either absent or strings. Found {found} for '{field}'")]
    InvalidType { field: String, found: String },

    #[error("At least one entity must be given")]
    NoEntities,

    #[error("Unknown entity: '{0}'")]
    UnknownEntity(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_type(field: &str, found: &str) -> Self {
        Error::InvalidType {
            field: field.to_string(),
            found: found.to_string(),
        }
    }
}
