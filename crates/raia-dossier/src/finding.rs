use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use raia_rules::Finding;
use raia_types::FindingStatus;

/// Identifier of a recorded finding, assigned when an analysis run is
/// recorded. UUID v7, so identifiers sort by recording time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FindingId(Uuid);

impl FindingId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for FindingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FindingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FindingId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A finding as recorded on a dossier: the engine's pure match value plus
/// an identifier and the reviewer's decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingRecord {
    pub id: FindingId,
    #[serde(flatten)]
    pub finding: Finding,
    #[serde(default)]
    pub status: FindingStatus,
}

impl FindingRecord {
    /// Record a fresh engine finding with a new identifier and no
    /// reviewer decision.
    pub fn new(finding: Finding) -> Self {
        Self {
            id: FindingId::new(),
            finding,
            status: FindingStatus::Unset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raia_types::Severity;

    fn sample() -> FindingRecord {
        FindingRecord::new(Finding {
            rule_id: "SAHPRA-001".into(),
            severity: Severity::Critical,
            category: "Administrative".into(),
            message: "Reliance pathway declaration missing or unclear".into(),
            evidence: "the abridged pathway is declared".into(),
            file_name: "cover_letter.txt".into(),
            risk: 9,
            citations: vec!["SAHPRA Reliance Guideline §1.2".into()],
        })
    }

    #[test]
    fn new_records_start_unset() {
        assert_eq!(sample().status, FindingStatus::Unset);
    }

    #[test]
    fn serde_flattens_the_finding() {
        let record = sample();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["rule_id"], "SAHPRA-001");
        assert_eq!(json["risk"], 9);
        assert_eq!(json["status"], "unset");

        let restored: FindingRecord = serde_json::from_value(json).unwrap();
        assert_eq!(restored, record);
    }

    #[test]
    fn id_roundtrips_through_display() {
        let record = sample();
        let parsed: FindingId = record.id.to_string().parse().unwrap();
        assert_eq!(parsed, record.id);
    }
}
