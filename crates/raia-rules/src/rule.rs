use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use raia_types::Severity;

use crate::error::RuleError;

/// A single compliance rule with a compiled, case-insensitive pattern.
///
/// The pattern is compiled once, at construction. Serialization carries
/// the pattern source string and recompiles on deserialize, so rule sets
/// round-trip through exported dossiers.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RuleSpec", into = "RuleSpec")]
pub struct Rule {
    id: String,
    pattern: Regex,
    severity: Severity,
    category: String,
    message: String,
    impact: u32,
    likelihood: u32,
    citations: Vec<String>,
}

/// Serde mirror of [`Rule`] with the pattern as its source string.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RuleSpec {
    pub id: String,
    pub pattern: String,
    pub severity: Severity,
    pub category: String,
    pub message: String,
    #[serde(default = "default_weight")]
    pub impact: u32,
    #[serde(default = "default_weight")]
    pub likelihood: u32,
    #[serde(default)]
    pub citations: Vec<String>,
}

fn default_weight() -> u32 {
    1
}

impl Rule {
    /// Build a rule, compiling its pattern case-insensitively.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        pattern: &str,
        severity: Severity,
        category: impl Into<String>,
        message: impl Into<String>,
        impact: u32,
        likelihood: u32,
        citations: Vec<String>,
    ) -> Result<Self, RuleError> {
        let id = id.into();
        if impact == 0 || likelihood == 0 {
            return Err(RuleError::InvalidWeight { id });
        }
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| RuleError::InvalidPattern {
                id: id.clone(),
                source,
            })?;
        Ok(Self {
            id,
            pattern,
            severity,
            category: category.into(),
            message: message.into(),
            impact,
            likelihood,
            citations,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns `true` if this rule's pattern matches the given text.
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// The pattern source string.
    pub fn pattern_str(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn impact(&self) -> u32 {
        self.impact
    }

    pub fn likelihood(&self) -> u32 {
        self.likelihood
    }

    pub fn citations(&self) -> &[String] {
        &self.citations
    }

    /// Risk contribution of a match: impact × likelihood, read from the
    /// rule's current state.
    pub fn risk(&self) -> u32 {
        self.impact * self.likelihood
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.pattern.as_str() == other.pattern.as_str()
            && self.severity == other.severity
            && self.category == other.category
            && self.message == other.message
            && self.impact == other.impact
            && self.likelihood == other.likelihood
            && self.citations == other.citations
    }
}

impl Eq for Rule {}

impl TryFrom<RuleSpec> for Rule {
    type Error = RuleError;

    fn try_from(spec: RuleSpec) -> Result<Self, Self::Error> {
        Rule::new(
            spec.id,
            &spec.pattern,
            spec.severity,
            spec.category,
            spec.message,
            spec.impact,
            spec.likelihood,
            spec.citations,
        )
    }
}

impl From<Rule> for RuleSpec {
    fn from(rule: Rule) -> Self {
        RuleSpec {
            id: rule.id,
            pattern: rule.pattern.as_str().to_string(),
            severity: rule.severity,
            category: rule.category,
            message: rule.message,
            impact: rule.impact,
            likelihood: rule.likelihood,
            citations: rule.citations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rule() -> Rule {
        Rule::new(
            "TEST-001",
            "zone ivb|stability",
            Severity::Major,
            "Quality",
            "Zone IVb stability data missing",
            2,
            3,
            vec!["ICH Q1E".into()],
        )
        .unwrap()
    }

    #[test]
    fn matching_is_case_insensitive() {
        let rule = sample_rule();
        assert!(rule.matches("Long-term STABILITY studies were conducted"));
        assert!(rule.matches("data for Zone IVb conditions"));
        assert!(!rule.matches("nothing relevant here"));
    }

    #[test]
    fn risk_is_impact_times_likelihood() {
        assert_eq!(sample_rule().risk(), 6);
    }

    #[test]
    fn zero_weight_is_rejected() {
        let err = Rule::new("X", "a", Severity::Minor, "c", "m", 0, 1, vec![]).unwrap_err();
        assert!(matches!(err, RuleError::InvalidWeight { .. }));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = Rule::new("X", "(unclosed", Severity::Minor, "c", "m", 1, 1, vec![]).unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { .. }));
    }

    #[test]
    fn serde_roundtrip_preserves_pattern() {
        let rule = sample_rule();
        let json = serde_json::to_string(&rule).unwrap();
        let restored: Rule = serde_json::from_str(&json).unwrap();
        assert_eq!(rule, restored);
        assert!(restored.matches("STABILITY"));
    }

    #[test]
    fn weights_default_to_one_when_unspecified() {
        let json = r#"{
            "id": "X-001",
            "pattern": "gmp certificate",
            "severity": "minor",
            "category": "Quality",
            "message": "GMP certificate check"
        }"#;
        let rule: Rule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.impact(), 1);
        assert_eq!(rule.likelihood(), 1);
        assert_eq!(rule.risk(), 1);
        assert!(rule.citations().is_empty());
    }
}
