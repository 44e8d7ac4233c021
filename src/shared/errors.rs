//! Strict error handling with SettingsError enum
//!
//! All errors are serializable so they can cross to the dashboard frontend
//! unchanged.

use thiserror::Error;
use serde::Serialize;

/// Settings engine errors
///
/// Covers the storage boundary (read, write, decode) and field mutation.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum SettingsError {
    /// Stored value exists but does not decode into the aggregate shape
    #[error("Corrupt settings under '{namespace}': {detail}")]
    CorruptSettings { namespace: String, detail: String },

    /// Key-value backend failure (read or write)
    #[error("Storage error: {0}")]
    Persistence(String),

    /// Mutation addressed a field path the aggregate does not have
    #[error("Unknown settings field: {0}")]
    UnknownField(String),

    /// Mutation value is incompatible with the addressed field
    #[error("Invalid value for '{field}': {detail}")]
    InvalidValue { field: String, detail: String },
}

// Implement From for common error types
impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::Persistence(err.to_string())
    }
}

// Helper type alias for settings results
pub type SettingsResult<T> = Result<T, SettingsError>;
