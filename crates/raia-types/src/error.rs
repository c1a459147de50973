use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("invalid byte length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("unknown authority: {0}")]
    UnknownAuthority(String),

    #[error("unknown pathway: {0}")]
    UnknownPathway(String),

    #[error("unknown severity: {0}")]
    UnknownSeverity(String),
}
