//! Built-in per-authority rule sets.
//!
//! These mirror the published reliance guidelines for each authority and
//! are used whenever a dossier carries no override rule set.

use std::sync::OnceLock;

use raia_types::{Authority, Severity};

use crate::rule::Rule;
use crate::ruleset::RuleSet;

/// The default rule set for an authority.
///
/// Compiled once per process; later calls return the cached set.
pub fn default_rules(authority: Authority) -> &'static RuleSet {
    match authority {
        Authority::Sahpra => {
            static SET: OnceLock<RuleSet> = OnceLock::new();
            SET.get_or_init(sahpra_rules)
        }
        Authority::Tmda => {
            static SET: OnceLock<RuleSet> = OnceLock::new();
            SET.get_or_init(tmda_rules)
        }
        Authority::Bomra => {
            static SET: OnceLock<RuleSet> = OnceLock::new();
            SET.get_or_init(bomra_rules)
        }
    }
}

/// Select the active rule set for a dossier: the override if present and
/// non-empty, else the authority defaults.
pub fn active_rules<'a>(
    override_set: Option<&'a RuleSet>,
    authority: Authority,
) -> &'a RuleSet {
    match override_set {
        Some(set) if !set.is_empty() => set,
        _ => default_rules(authority),
    }
}

fn sahpra_rules() -> RuleSet {
    build(vec![
        Rule::new(
            "SAHPRA-001",
            "abridged|verified",
            Severity::Critical,
            "Administrative",
            "Reliance pathway declaration missing or unclear",
            3,
            3,
            vec!["SAHPRA Reliance Guideline §1.2".into()],
        ),
        Rule::new(
            "SAHPRA-002",
            "zone ivb|stability",
            Severity::Major,
            "Quality",
            "Zone IVb stability data missing",
            2,
            3,
            vec!["ICH Q1E for South Africa".into()],
        ),
    ])
}

fn tmda_rules() -> RuleSet {
    build(vec![Rule::new(
        "TMDA-001",
        "sameness declaration",
        Severity::Critical,
        "Administrative",
        "Sameness declaration (Module 1.2) missing or incomplete",
        3,
        3,
        vec!["TMDA Guidelines §1.2".into()],
    )])
}

fn bomra_rules() -> RuleSet {
    build(vec![Rule::new(
        "BOMRA-001",
        "zazibona|recommendation",
        Severity::Critical,
        "Administrative",
        "ZAZIBONA recommendation or RRA approval not declared",
        3,
        2,
        vec!["BoMRA Reliance Guideline".into()],
    )])
}

fn build(rules: Vec<Result<Rule, crate::error::RuleError>>) -> RuleSet {
    let rules = rules
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .expect("built-in rules are valid");
    RuleSet::new(rules).expect("built-in rule ids are unique")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_authority_has_defaults() {
        for authority in Authority::ALL {
            assert!(!default_rules(authority).is_empty());
        }
    }

    #[test]
    fn sahpra_has_both_rules_in_order() {
        let set = default_rules(Authority::Sahpra);
        let ids: Vec<_> = set.iter().map(Rule::id).collect();
        assert_eq!(ids, ["SAHPRA-001", "SAHPRA-002"]);
    }

    #[test]
    fn sahpra_001_risk_is_nine() {
        let rule = default_rules(Authority::Sahpra).get("SAHPRA-001").unwrap();
        assert_eq!(rule.risk(), 9);
    }

    #[test]
    fn override_wins_when_non_empty() {
        let custom = RuleSet::new(vec![Rule::new(
            "X-1",
            "anything",
            Severity::Minor,
            "c",
            "m",
            1,
            1,
            vec![],
        )
        .unwrap()])
        .unwrap();
        let active = active_rules(Some(&custom), Authority::Sahpra);
        assert_eq!(active.len(), 1);
        assert!(active.get("X-1").is_some());
    }

    #[test]
    fn empty_override_falls_back_to_defaults() {
        let empty = RuleSet::empty();
        let active = active_rules(Some(&empty), Authority::Tmda);
        assert!(active.get("TMDA-001").is_some());
    }

    #[test]
    fn no_override_uses_defaults() {
        let active = active_rules(None, Authority::Bomra);
        assert!(active.get("BOMRA-001").is_some());
    }
}
