use raia_types::Digest;

/// BLAKE3 hasher bound to a single content domain.
///
/// RAIA digests two kinds of content: uploaded file bytes and audit
/// chain payloads. Each has a versioned domain tag that is mixed in
/// ahead of the data, so identical bytes playing different roles never
/// end up with the same digest. Bumping a tag's version retires every
/// digest minted under the old one.
pub struct ContentHasher {
    domain: &'static str,
}

impl ContentHasher {
    /// Digests the raw bytes of uploaded dossier files.
    pub const FILE: Self = Self {
        domain: "raia-file-v1",
    };
    /// Digests canonical audit entry payloads during chain folding.
    pub const AUDIT: Self = Self {
        domain: "raia-audit-v1",
    };

    /// A hasher over a caller-supplied domain tag.
    pub const fn new(domain: &'static str) -> Self {
        Self { domain }
    }

    /// Digest `data` under this hasher's domain.
    pub fn hash(&self, data: &[u8]) -> Digest {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.domain.as_bytes());
        hasher.update(b":");
        hasher.update(data);
        Digest::from_hash(*hasher.finalize().as_bytes())
    }

    /// Serialize `value` to JSON and digest the bytes.
    pub fn hash_json<T: serde::Serialize>(&self, value: &T) -> Result<Digest, HasherError> {
        let data =
            serde_json::to_vec(value).map_err(|e| HasherError::Serialization(e.to_string()))?;
        Ok(self.hash(&data))
    }

    /// Check `data` against a previously computed digest.
    pub fn verify(&self, data: &[u8], expected: &Digest) -> bool {
        self.hash(data) == *expected
    }

    /// The domain tag this hasher mixes into every digest.
    pub fn domain(&self) -> &str {
        self.domain
    }
}

/// Errors from hashing operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HasherError {
    #[error("serialization error: {0}")]
    Serialization(String),
}
