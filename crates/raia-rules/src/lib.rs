//! Deterministic rule matching and risk scoring.
//!
//! A [`RuleSet`] holds compiled pattern rules; [`evaluate`] runs them over
//! a chunk corpus and emits one [`Finding`] per rule–chunk match, in rule
//! order then chunk order. Same rules + same chunks ⇒ byte-identical
//! output. Patterns are compiled once at rule-set construction, never per
//! evaluation.

pub mod defaults;
pub mod engine;
pub mod error;
pub mod finding;
pub mod rule;
pub mod ruleset;

pub use defaults::{active_rules, default_rules};
pub use engine::{evaluate, EVIDENCE_MAX_CHARS};
pub use error::RuleError;
pub use finding::Finding;
pub use rule::Rule;
pub use ruleset::RuleSet;
