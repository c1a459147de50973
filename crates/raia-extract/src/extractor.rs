use tracing::debug;

/// Best-effort plain-text extraction from raw file bytes.
///
/// Implementations must never fail a batch: unsupported or malformed
/// input returns an empty string, and the file is still ingested (with a
/// digest and an audit entry, but zero chunks).
pub trait TextExtractor: Send + Sync {
    /// Extract plain text from `bytes`, using `name` to sniff the format.
    fn extract(&self, name: &str, bytes: &[u8]) -> String;
}

/// Reference extractor for plain-text formats.
///
/// Handles `.txt`, `.md`, and `.csv` by extension (lossy UTF-8 decode).
/// Everything else yields empty text.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self
    }

    fn is_plain_text(name: &str) -> bool {
        let lowered = name.to_lowercase();
        [".txt", ".md", ".csv"]
            .iter()
            .any(|ext| lowered.ends_with(ext))
    }
}

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, name: &str, bytes: &[u8]) -> String {
        if Self::is_plain_text(name) {
            String::from_utf8_lossy(bytes).into_owned()
        } else {
            debug!(name, "unsupported format, extracting empty text");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_txt_md_csv() {
        let extractor = PlainTextExtractor::new();
        assert_eq!(extractor.extract("a.txt", b"hello"), "hello");
        assert_eq!(extractor.extract("A.MD", b"# title"), "# title");
        assert_eq!(extractor.extract("data.csv", b"x,y"), "x,y");
    }

    #[test]
    fn unsupported_formats_degrade_to_empty() {
        let extractor = PlainTextExtractor::new();
        assert_eq!(extractor.extract("scan.pdf", b"%PDF-1.7"), "");
        assert_eq!(extractor.extract("binary.bin", &[0, 1, 2]), "");
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let extractor = PlainTextExtractor::new();
        let text = extractor.extract("a.txt", &[b'h', b'i', 0xff]);
        assert!(text.starts_with("hi"));
    }
}
