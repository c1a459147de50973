use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::RuleError;
use crate::rule::{Rule, RuleSpec};

/// An ordered collection of rules with unique identifiers.
///
/// Evaluation order is the order rules were given; the set never reorders
/// them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RuleSpec>", into = "Vec<RuleSpec>")]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build a rule set, rejecting duplicate rule ids.
    pub fn new(rules: Vec<Rule>) -> Result<Self, RuleError> {
        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.id().to_string()) {
                return Err(RuleError::DuplicateRuleId(rule.id().to_string()));
            }
        }
        Ok(Self { rules })
    }

    /// The empty rule set (evaluates to zero findings).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl TryFrom<Vec<RuleSpec>> for RuleSet {
    type Error = RuleError;

    fn try_from(specs: Vec<RuleSpec>) -> Result<Self, Self::Error> {
        let rules = specs
            .into_iter()
            .map(Rule::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        RuleSet::new(rules)
    }
}

impl From<RuleSet> for Vec<RuleSpec> {
    fn from(set: RuleSet) -> Self {
        set.rules.into_iter().map(RuleSpec::from).collect()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raia_types::Severity;

    fn rule(id: &str) -> Rule {
        Rule::new(id, "pattern", Severity::Minor, "cat", "msg", 1, 1, vec![]).unwrap()
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = RuleSet::new(vec![rule("A-1"), rule("A-1")]).unwrap_err();
        assert!(matches!(err, RuleError::DuplicateRuleId(id) if id == "A-1"));
    }

    #[test]
    fn preserves_insertion_order() {
        let set = RuleSet::new(vec![rule("B-1"), rule("A-1"), rule("C-1")]).unwrap();
        let ids: Vec<_> = set.iter().map(Rule::id).collect();
        assert_eq!(ids, ["B-1", "A-1", "C-1"]);
    }

    #[test]
    fn get_finds_by_id() {
        let set = RuleSet::new(vec![rule("A-1"), rule("B-2")]).unwrap();
        assert!(set.get("B-2").is_some());
        assert!(set.get("Z-9").is_none());
    }

    #[test]
    fn serde_roundtrip() {
        let set = RuleSet::new(vec![rule("A-1"), rule("B-2")]).unwrap();
        let json = serde_json::to_string(&set).unwrap();
        let restored: RuleSet = serde_json::from_str(&json).unwrap();
        assert_eq!(set, restored);
    }

    #[test]
    fn deserializing_duplicate_ids_fails() {
        let json = r#"[
            {"id": "A", "pattern": "x", "severity": "minor", "category": "c", "message": "m"},
            {"id": "A", "pattern": "y", "severity": "major", "category": "c", "message": "m"}
        ]"#;
        assert!(serde_json::from_str::<RuleSet>(json).is_err());
    }
}
