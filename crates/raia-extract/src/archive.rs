use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ExtractError;

/// Expands an archive into an ordered list of (inner name, bytes) pairs.
///
/// Inner entries are each routed back through ingestion individually, so
/// a single bad entry inside an archive does not affect its siblings.
pub trait ArchiveExpander: Send + Sync {
    fn expand(&self, path: &Path) -> Result<Vec<(String, Vec<u8>)>, ExtractError>;
}

/// Reference expander that treats a directory as an archive.
///
/// Reads every regular file in the directory (non-recursive, sorted by
/// name for a deterministic order). Subdirectories are skipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectoryExpander;

impl DirectoryExpander {
    pub fn new() -> Self {
        Self
    }
}

impl ArchiveExpander for DirectoryExpander {
    fn expand(&self, path: &Path) -> Result<Vec<(String, Vec<u8>)>, ExtractError> {
        let mut names: Vec<_> = fs::read_dir(path)?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .filter(|entry| entry.path().is_file())
            .map(|entry| entry.path())
            .collect();
        names.sort();

        let mut entries = Vec::with_capacity(names.len());
        for file_path in names {
            let name = file_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let bytes = fs::read(&file_path).map_err(|source| ExtractError::EntryRead {
                name: name.clone(),
                source,
            })?;
            debug!(name, size = bytes.len(), "expanded archive entry");
            entries.push((name, bytes));
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_directory_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), b"second").unwrap();
        fs::write(dir.path().join("a.txt"), b"first").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let entries = DirectoryExpander::new().expand(dir.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], ("a.txt".to_string(), b"first".to_vec()));
        assert_eq!(entries[1], ("b.txt".to_string(), b"second".to_vec()));
    }

    #[test]
    fn missing_directory_is_an_open_error() {
        let err = DirectoryExpander::new()
            .expand(Path::new("/nonexistent/raia-archive"))
            .unwrap_err();
        assert!(matches!(err, ExtractError::Open(_)));
    }
}
