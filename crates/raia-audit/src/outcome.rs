use serde::{Deserialize, Serialize};

use raia_types::Digest;

/// Result of the audit half of a two-outcome operation.
///
/// Business mutations succeed or fail on their own terms; the audit append
/// reports separately through this type. A `Failed` outcome means the
/// action completed but was not recorded in the trail: a recoverable
/// warning, never a rollback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditOutcome {
    /// The entry was appended; the chain head is now this digest.
    Logged { chain_digest: Digest },
    /// No entry was warranted: the operation changed nothing.
    Skipped,
    /// The append failed; the triggering action was not rolled back.
    Failed { reason: String },
}

impl AuditOutcome {
    pub fn is_logged(&self) -> bool {
        matches!(self, AuditOutcome::Logged { .. })
    }

    /// The failure reason, if the append failed.
    pub fn failure(&self) -> Option<&str> {
        match self {
            AuditOutcome::Failed { reason } => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logged_outcome_has_no_failure() {
        let outcome = AuditOutcome::Logged {
            chain_digest: Digest::from_hash([1; 32]),
        };
        assert!(outcome.is_logged());
        assert_eq!(outcome.failure(), None);
    }

    #[test]
    fn failed_outcome_carries_reason() {
        let outcome = AuditOutcome::Failed {
            reason: "serialization error".into(),
        };
        assert!(!outcome.is_logged());
        assert_eq!(outcome.failure(), Some("serialization error"));
    }
}
