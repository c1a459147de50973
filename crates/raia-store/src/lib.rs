//! Application state store.
//!
//! The whole application state (every dossier, the active selection, and
//! settings) serializes to a single JSON snapshot on disk. A single
//! dossier exports independently as its own JSON document, and the export
//! round-trips: import reproduces an equivalent dossier whose audit log
//! independently passes verification.
//!
//! Persistence failures are warning-grade: by the time a save fails, the
//! in-memory mutation has already happened; the caller is told the
//! changes may not survive a restart, nothing is rolled back.

pub mod error;
pub mod export;
pub mod state;
pub mod store;

pub use error::StoreError;
pub use export::{export_dossier, export_file_name, import_dossier};
pub use state::{AppState, Settings};
pub use store::Store;
