use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use raia_crypto::chain::{fold_head, GENESIS_HEAD};

use crate::entry::{payload_bytes, AuditEntry};
use crate::error::AuditError;
use crate::outcome::AuditOutcome;

/// Append-only, order-preserving, tamper-evident record of actions.
///
/// The log caches its chain head for O(1) append, but [`verify`] never
/// trusts the cache: it recomputes the entire fold from the first entry.
///
/// [`verify`]: AuditLog::verify
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
    /// Cached chain head (hex). Empty string when the log is empty.
    #[serde(default)]
    head: String,
}

impl AuditLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry for `action` by `actor`, timestamped now.
    ///
    /// Never silently fails: payload serialization errors are returned to
    /// the caller. On success the cached head advances to the new entry's
    /// chain digest.
    pub fn append(&mut self, action: &str, actor: &str) -> Result<&AuditEntry, AuditError> {
        let time = Utc::now();
        let payload = payload_bytes(&time, action, actor)?;
        let chain_digest = fold_head(&self.head, &payload);

        self.head = chain_digest.to_hex();
        self.entries.push(AuditEntry {
            time,
            action: action.to_string(),
            actor: actor.to_string(),
            chain_digest,
        });
        debug!(action, actor, head = %self.head, "audit entry appended");
        Ok(self.entries.last().expect("entry just pushed"))
    }

    /// Best-effort append used by business operations.
    ///
    /// The returned [`AuditOutcome`] reports success or failure without
    /// propagating as a failure of the triggering action.
    pub fn record(&mut self, action: &str, actor: &str) -> AuditOutcome {
        match self.append(action, actor) {
            Ok(entry) => AuditOutcome::Logged {
                chain_digest: entry.chain_digest,
            },
            Err(err) => {
                tracing::warn!(action, %err, "audit append failed; action not rolled back");
                AuditOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }

    /// Recompute the chain from the first entry and confirm every stored
    /// chain digest (and the cached head) matches recomputation.
    ///
    /// Returns `false` on any mismatch, truncation, or reordering.
    pub fn verify(&self) -> bool {
        self.verify_detailed().is_ok()
    }

    /// Like [`verify`](AuditLog::verify), but names the first failing
    /// entry.
    pub fn verify_detailed(&self) -> Result<(), AuditError> {
        let mut head = GENESIS_HEAD.to_string();
        for (index, entry) in self.entries.iter().enumerate() {
            let payload = entry.payload_bytes()?;
            let expected = fold_head(&head, &payload);
            if expected != entry.chain_digest {
                return Err(AuditError::ChainMismatch { index });
            }
            head = expected.to_hex();
        }
        if head != self.head {
            return Err(AuditError::HeadMismatch);
        }
        Ok(())
    }

    /// The cached chain head (hex). Empty string for an empty log.
    pub fn head(&self) -> &str {
        &self.head
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
