use thiserror::Error;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no dossier named {0}")]
    DossierNotFound(String),

    #[error("a dossier named {0} already exists")]
    DossierExists(String),

    #[error("no dossier selected")]
    NoActiveDossier,

    #[error("imported dossier failed audit chain verification: {0}")]
    ImportedChainInvalid(#[from] raia_audit::AuditError),

    #[error(transparent)]
    Dossier(#[from] raia_dossier::DossierError),

    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("snapshot I/O failed at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
