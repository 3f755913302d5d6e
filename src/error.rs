//! Error types for catalog construction and the mailbox boundary

use thiserror::Error;

/// Errors that can occur while building a detector or feeding it messages
#[derive(Error, Debug)]
pub enum DetectError {
    /// A catalog pattern failed to compile
    #[error("Invalid signal pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Two catalog entries share the same identifier
    #[error("Duplicate signal in catalog: {0}")]
    DuplicateSignal(String),

    /// Configuration could not be read or holds an unusable value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to parse the raw message structure
    #[error("Failed to parse message structure: {0}")]
    Structure(String),

    /// The mail source failed to list or fetch messages
    #[error("Mail source error: {0}")]
    Source(String),
}

/// Result type for fallible detector operations
pub type Result<T> = std::result::Result<T, DetectError>;
