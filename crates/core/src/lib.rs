//! Record model for Reflect
//!
//! This crate provides:
//! - Time-sortable record IDs (ULID-based)
//! - The three collections: vim commands, daily reports, notes
//! - The `Searchable` contract consumed by the filter
//! - The `Document` contract consumed by the store
//! - Tag normalization and validation errors

pub mod collection;
pub mod error;
pub mod note;
pub mod record;
pub mod report;
pub mod vim;

// Re-exports
pub use collection::Collection;
pub use error::RecordError;
pub use note::Note;
pub use record::{normalize_tags, now_ms, Document, RecordId, Searchable};
pub use report::Report;
pub use vim::Vim;
