//! Error types for strict reference validation.

use thiserror::Error;

/// Error type for the opt-in strict validation layer.
///
/// Parsing and formatting never produce these: every `from_id`/`to_id` is
/// total and recovers a best-effort structure from any input. Validation is
/// layered on top for callers that need to reject suspicious names before
/// handing them to downstream tooling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RefError {
    /// A required name (entity, type, or a present namespace level) is empty.
    #[error("name cannot be empty")]
    EmptyName,

    /// A name contains a null byte.
    #[error("name contains null byte: {0:?}")]
    NullByte(String),

    /// A name exceeds the maximum supported length.
    #[error("name exceeds maximum length of {max} bytes (got {len} bytes): {name:?}")]
    TooLong {
        name: String,
        len: usize,
        max: usize,
    },
}

/// Result type alias for validation operations.
pub type Result<T> = std::result::Result<T, RefError>;
