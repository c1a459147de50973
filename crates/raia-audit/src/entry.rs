use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use raia_types::Digest;

use crate::error::AuditError;

/// A single immutable audit log entry.
///
/// The `chain_digest` is the fold of the previous entry's chain digest
/// (hex) with this entry's canonical payload. Entries are never mutated
/// after append; the digest is what makes that enforceable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the action happened (UTC).
    pub time: DateTime<Utc>,
    /// Free-text description of the action.
    pub action: String,
    /// Identity of the actor, supplied by the caller.
    pub actor: String,
    /// Digest binding this entry to the full prefix of prior entries.
    pub chain_digest: Digest,
}

impl AuditEntry {
    /// The canonical payload bytes this entry's chain digest covers.
    ///
    /// Field order is fixed by the payload struct; `verify` depends on
    /// this serialization being byte-stable across runs.
    pub fn payload_bytes(&self) -> Result<Vec<u8>, AuditError> {
        payload_bytes(&self.time, &self.action, &self.actor)
    }
}

#[derive(Serialize)]
struct Payload<'a> {
    time: &'a DateTime<Utc>,
    action: &'a str,
    actor: &'a str,
}

/// Serialize an entry payload canonically (stable field order, RFC 3339
/// timestamps).
pub(crate) fn payload_bytes(
    time: &DateTime<Utc>,
    action: &str,
    actor: &str,
) -> Result<Vec<u8>, AuditError> {
    serde_json::to_vec(&Payload {
        time,
        action,
        actor,
    })
    .map_err(|e| AuditError::Serialization(e.to_string()))
}
