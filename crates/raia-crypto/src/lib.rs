//! Cryptographic primitives for RAIA.
//!
//! Provides domain-separated BLAKE3 content hashing and the audit chain
//! fold step. All crypto operations wrap established libraries; no custom
//! cryptography.

pub mod chain;
pub mod hasher;

pub use chain::fold_head;
pub use hasher::{ContentHasher, HasherError};
