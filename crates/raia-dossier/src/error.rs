use thiserror::Error;

/// Validation errors from dossier operations.
///
/// These are all rejected synchronously: nothing is mutated and no audit
/// entry is written when one of these is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DossierError {
    #[error("dossier name must not be empty")]
    EmptyName,

    #[error("duplicate file name: {0}")]
    DuplicateFile(String),

    #[error("no file named {0} in this dossier")]
    UnknownFile(String),

    #[error("unknown CTD taxonomy node: {0}")]
    UnknownTaxonomyNode(String),

    #[error("no finding with id {0} among current findings")]
    UnknownFinding(String),
}
