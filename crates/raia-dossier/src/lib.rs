//! The dossier aggregate.
//!
//! A [`Dossier`] is one regulatory submission under review: its files,
//! derived text chunks, CTD mapping, findings, override rule set, and
//! audit log. All mutation goes through the operations on `Dossier`,
//! which take `&mut self` (one owner per dossier is the concurrency
//! model), and every state-changing operation appends one audit entry,
//! reporting the append's outcome separately from the business result
//! (see [`Audited`]).

pub mod dossier;
pub mod error;
pub mod file;
pub mod finding;
pub mod guidelines;
pub mod ops;
pub mod progress;

pub use dossier::Dossier;
pub use error::DossierError;
pub use file::FileRecord;
pub use finding::{FindingId, FindingRecord};
pub use guidelines::guidelines;
pub use ops::{Audited, BatchReport, IncomingFile, IngestReceipt};
pub use progress::{progress, Progress};
