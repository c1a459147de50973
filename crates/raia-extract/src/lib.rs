//! Collaborator seams for document ingestion.
//!
//! Binary format parsing (PDF, Word, zip archives) is out of scope for the
//! core: it is modeled as external collaborators behind the
//! [`TextExtractor`] and [`ArchiveExpander`] traits. The reference
//! implementations here handle plain-text formats and directory trees;
//! richer extractors plug in at the same seams.
//!
//! Extraction is always best-effort: an unsupported or unreadable file
//! degrades to empty text and never aborts a batch.

pub mod archive;
pub mod error;
pub mod extractor;

pub use archive::{ArchiveExpander, DirectoryExpander};
pub use error::ExtractError;
pub use extractor::{PlainTextExtractor, TextExtractor};
