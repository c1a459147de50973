use thiserror::Error;

/// Errors from rule construction and rule-set loading.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("rule {id}: invalid pattern: {source}")]
    InvalidPattern {
        id: String,
        #[source]
        source: regex::Error,
    },

    #[error("rule {id}: impact and likelihood weights must be positive")]
    InvalidWeight { id: String },

    #[error("duplicate rule id: {0}")]
    DuplicateRuleId(String),
}
