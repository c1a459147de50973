use serde::{Deserialize, Serialize};

use raia_types::Severity;

/// One rule-to-chunk match.
///
/// A finding is a pure value: the engine emits it with no identity and no
/// reviewer state. The dossier layer wraps findings with an identifier and
/// a mutable review status when it records an analysis run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Identifier of the rule that matched.
    pub rule_id: String,
    pub severity: Severity,
    pub category: String,
    pub message: String,
    /// Bounded excerpt of the matching chunk's text.
    pub evidence: String,
    /// Name of the file the matching chunk came from.
    pub file_name: String,
    /// Impact × likelihood, copied from the rule at evaluation time.
    pub risk: u32,
    pub citations: Vec<String>,
}
