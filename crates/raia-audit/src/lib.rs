//! Append-only, hash-chained audit log.
//!
//! Every state-changing dossier operation appends one entry here. Each
//! entry's chain digest binds it to the full prefix of prior entries, so
//! any retroactive edit, deletion, or reordering of stored history is
//! detectable by [`AuditLog::verify`].
//!
//! Audit completeness is best-effort, not transactional: a failed append
//! never rolls back the business operation that triggered it. The failure
//! is surfaced separately through [`AuditOutcome`] so callers (and tests)
//! can observe both outcomes independently.

pub mod entry;
pub mod error;
pub mod log;
pub mod outcome;

pub use entry::AuditEntry;
pub use error::AuditError;
pub use log::AuditLog;
pub use outcome::AuditOutcome;
