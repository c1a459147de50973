use thiserror::Error;

/// Errors from archive expansion.
///
/// Note that text extraction itself never errors: unsupported input
/// degrades to empty text. Only the archive seam can fail, because a
/// broken archive means the inner file list is unknowable.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read archive entry {name}: {source}")]
    EntryRead {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open archive: {0}")]
    Open(#[from] std::io::Error),
}
