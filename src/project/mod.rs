//! Project aggregate
//!
//! The `Project` is the persistence unit of the engine: title, description,
//! whiteboard, status, and the note ledger all live on it.

pub mod models;

pub use models::{Project, ProjectStatus};
