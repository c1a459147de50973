//! Foundation types for RAIA, the regulatory reliance review core.
//!
//! This crate provides the enums, identifiers, and structural types shared
//! by every other RAIA crate.
//!
//! # Key Types
//!
//! - [`Authority`] - Target regulatory authority for a dossier
//! - [`Pathway`] - Reliance pathway declared for a submission
//! - [`Severity`] - Finding severity classification
//! - [`FindingStatus`] - Reviewer decision on a finding
//! - [`Digest`] - 256-bit content digest, rendered as lowercase hex
//! - [`Chunk`] - One paragraph of extracted document text, the atomic unit
//!   of rule matching
//! - [`taxonomy`] - The fixed CTD module tree and filename keyword table

pub mod chunk;
pub mod digest;
pub mod error;
pub mod regulatory;
pub mod taxonomy;

pub use chunk::Chunk;
pub use digest::Digest;
pub use error::TypeError;
pub use regulatory::{Authority, FindingStatus, Pathway, Severity};
pub use taxonomy::{CtdNode, TaxonomyNodeId};
