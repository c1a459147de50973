use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use raia_types::Digest;

/// One uploaded file, owned exclusively by its dossier.
///
/// File names are unique within a dossier; a second upload under the same
/// name is rejected, never overwritten.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// File name, unique within the dossier.
    pub name: String,
    /// Size of the uploaded bytes.
    pub size: u64,
    /// Extracted plain text (empty when extraction was unsupported).
    pub content: String,
    /// Content digest of the uploaded bytes.
    pub digest: Digest,
    /// When the file was ingested (UTC).
    pub uploaded_at: DateTime<Utc>,
}
