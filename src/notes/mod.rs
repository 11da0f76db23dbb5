//! Project notes
//!
//! Category-tagged, append-only record of project activity:
//! - `models`: note struct, category enum, and the static category metadata
//!   table (display concerns, decoupled from any rendering layer)
//! - `ledger`: head-insertion append, category filter, order-preserving
//!   delete, persisted through the project store

pub mod ledger;
pub mod models;

pub use ledger::NoteLedger;
pub use models::{category_meta, CategoryMeta, NoteCategory, ProjectNote, CATEGORY_METADATA};
