//! The audit chain fold step.
//!
//! An audit log is a fold over its entries: each entry's chain digest is
//! computed from the previous entry's chain digest (hex) concatenated with
//! the entry's own serialized payload. The first entry folds over the
//! empty string. Verification is a pure recomputation of the same fold;
//! no cached state is trusted.

use raia_types::Digest;

use crate::hasher::ContentHasher;

/// Hex digest of the predecessor of the first chain entry.
pub const GENESIS_HEAD: &str = "";

/// Fold one payload into the chain: consumes the prior chain head (as a
/// lowercase hex string, empty for genesis) and produces the new head.
pub fn fold_head(prev_head_hex: &str, payload: &[u8]) -> Digest {
    let mut data = Vec::with_capacity(prev_head_hex.len() + payload.len());
    data.extend_from_slice(prev_head_hex.as_bytes());
    data.extend_from_slice(payload);
    ContentHasher::AUDIT.hash(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_is_deterministic() {
        let h1 = fold_head(GENESIS_HEAD, b"entry one");
        let h2 = fold_head(GENESIS_HEAD, b"entry one");
        assert_eq!(h1, h2);
    }

    #[test]
    fn fold_depends_on_previous_head() {
        let head_a = fold_head(GENESIS_HEAD, b"a").to_hex();
        let head_b = fold_head(GENESIS_HEAD, b"b").to_hex();
        assert_ne!(fold_head(&head_a, b"next"), fold_head(&head_b, b"next"));
    }

    #[test]
    fn fold_depends_on_payload() {
        let head = fold_head(GENESIS_HEAD, b"first").to_hex();
        assert_ne!(fold_head(&head, b"x"), fold_head(&head, b"y"));
    }

    #[test]
    fn genesis_differs_from_chained() {
        let head = fold_head(GENESIS_HEAD, b"seed").to_hex();
        assert_ne!(fold_head(GENESIS_HEAD, b"payload"), fold_head(&head, b"payload"));
    }
}
