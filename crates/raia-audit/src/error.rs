use thiserror::Error;

/// Errors from audit log operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuditError {
    #[error("failed to serialize audit entry payload: {0}")]
    Serialization(String),

    #[error("chain digest mismatch at entry {index}: stored digest does not match recomputation")]
    ChainMismatch { index: usize },

    #[error("cached chain head does not match recomputed head")]
    HeadMismatch,
}
