//! The rule evaluation engine.
//!
//! `evaluate` is a pure function: it holds no state, assigns no identity,
//! and produces byte-identical output for identical inputs.

use tracing::debug;

use raia_types::Chunk;

use crate::finding::Finding;
use crate::ruleset::RuleSet;

/// Maximum evidence excerpt length, in characters.
pub const EVIDENCE_MAX_CHARS: usize = 200;

/// Evaluate a rule set against a chunk corpus.
///
/// Iterates rules in set order and, per rule, chunks in corpus order.
/// Every matching rule-chunk pair emits exactly one finding, with no
/// deduplication. Output is grouped by rule order, then chunk order.
pub fn evaluate(rules: &RuleSet, chunks: &[Chunk]) -> Vec<Finding> {
    let mut findings = Vec::new();
    for rule in rules {
        for chunk in chunks {
            if rule.matches(&chunk.text) {
                findings.push(Finding {
                    rule_id: rule.id().to_string(),
                    severity: rule.severity(),
                    category: rule.category().to_string(),
                    message: rule.message().to_string(),
                    evidence: excerpt(&chunk.text),
                    file_name: chunk.file_name.clone(),
                    risk: rule.risk(),
                    citations: rule.citations().to_vec(),
                });
            }
        }
    }
    debug!(
        rules = rules.len(),
        chunks = chunks.len(),
        findings = findings.len(),
        "rule evaluation complete"
    );
    findings
}

/// First [`EVIDENCE_MAX_CHARS`] characters of a chunk, truncated on a
/// character boundary so multi-byte text is never corrupted.
fn excerpt(text: &str) -> String {
    match text.char_indices().nth(EVIDENCE_MAX_CHARS) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;
    use raia_types::Severity;

    fn rule(id: &str, pattern: &str, impact: u32, likelihood: u32) -> Rule {
        Rule::new(
            id,
            pattern,
            Severity::Critical,
            "Administrative",
            "message",
            impact,
            likelihood,
            vec![],
        )
        .unwrap()
    }

    fn chunks(texts: &[&str]) -> Vec<Chunk> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Chunk::new("doc.txt", *t, i))
            .collect()
    }

    #[test]
    fn emits_one_finding_per_matching_pair() {
        let rules = RuleSet::new(vec![
            rule("R-1", "stability", 1, 1),
            rule("R-2", "abridged", 1, 1),
        ])
        .unwrap();
        let corpus = chunks(&[
            "stability data attached",
            "abridged pathway declared",
            "stability and abridged both mentioned",
        ]);

        let findings = evaluate(&rules, &corpus);
        let pairs: Vec<_> = findings
            .iter()
            .map(|f| (f.rule_id.as_str(), f.evidence.as_str()))
            .collect();
        assert_eq!(
            pairs,
            [
                ("R-1", "stability data attached"),
                ("R-1", "stability and abridged both mentioned"),
                ("R-2", "abridged pathway declared"),
                ("R-2", "stability and abridged both mentioned"),
            ]
        );
    }

    #[test]
    fn evaluation_is_deterministic() {
        let rules = RuleSet::new(vec![rule("R-1", "zone ivb|stability", 2, 3)]).unwrap();
        let corpus = chunks(&["Zone IVb stability study", "unrelated text"]);
        assert_eq!(evaluate(&rules, &corpus), evaluate(&rules, &corpus));
    }

    #[test]
    fn risk_reflects_rule_state_at_evaluation_time() {
        let corpus = chunks(&["stability"]);
        let low = RuleSet::new(vec![rule("R-1", "stability", 1, 1)]).unwrap();
        let high = RuleSet::new(vec![rule("R-1", "stability", 3, 3)]).unwrap();
        assert_eq!(evaluate(&low, &corpus)[0].risk, 1);
        assert_eq!(evaluate(&high, &corpus)[0].risk, 9);
    }

    #[test]
    fn empty_rule_set_yields_no_findings() {
        let corpus = chunks(&["anything at all"]);
        assert!(evaluate(&RuleSet::empty(), &corpus).is_empty());
    }

    #[test]
    fn evidence_is_truncated_on_char_boundary() {
        let long = "é".repeat(500);
        let rules = RuleSet::new(vec![rule("R-1", "é", 1, 1)]).unwrap();
        let findings = evaluate(&rules, &chunks(&[&long]));
        assert_eq!(findings[0].evidence.chars().count(), EVIDENCE_MAX_CHARS);
        assert_eq!(findings[0].evidence, "é".repeat(EVIDENCE_MAX_CHARS));
    }

    #[test]
    fn short_evidence_is_untruncated() {
        let rules = RuleSet::new(vec![rule("R-1", "short", 1, 1)]).unwrap();
        let findings = evaluate(&rules, &chunks(&["short text"]));
        assert_eq!(findings[0].evidence, "short text");
    }

    proptest::proptest! {
        #[test]
        fn deterministic_over_arbitrary_corpora(
            texts in proptest::collection::vec(".{0,120}", 0..12),
        ) {
            let rules = RuleSet::new(vec![
                rule("R-1", "stability|abridged", 2, 3),
                rule("R-2", "declaration", 1, 2),
            ])
            .unwrap();
            let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
            let corpus = chunks(&refs);
            proptest::prop_assert_eq!(evaluate(&rules, &corpus), evaluate(&rules, &corpus));
        }
    }
}
