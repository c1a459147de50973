use serde::{Deserialize, Serialize};

/// One paragraph of extracted document text.
///
/// Chunks are the atomic unit of rule matching. They are always derived
/// from a file's extracted text: split on blank-line boundaries, trimmed,
/// empty paragraphs dropped. They are never persisted independently of the
/// file they came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Name of the source file within the dossier.
    pub file_name: String,
    /// Trimmed paragraph text.
    pub text: String,
    /// Ordinal position of this paragraph within its source file.
    pub index: usize,
}

impl Chunk {
    pub fn new(file_name: impl Into<String>, text: impl Into<String>, index: usize) -> Self {
        Self {
            file_name: file_name.into(),
            text: text.into(),
            index,
        }
    }

    /// Split extracted text into chunks on blank-line boundaries.
    ///
    /// Line endings are normalized first, so CRLF documents chunk the
    /// same as LF ones. Paragraphs are trimmed; empty paragraphs are
    /// dropped. Surviving paragraphs are indexed 0..n-1 in original
    /// order.
    pub fn split_text(file_name: &str, text: &str) -> Vec<Chunk> {
        text.replace("\r\n", "\n")
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .enumerate()
            .map(|(index, para)| Chunk::new(file_name, para, index))
            .collect()
    }
}
