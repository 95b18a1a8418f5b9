//! Persistent record storage
//!
//! This crate provides:
//! - One embedded sled database per data directory
//! - One sled tree per collection, keyed by record ID bytes
//! - JSON-encoded documents
//! - ID and prefix resolution

pub mod error;
pub mod store;

// Re-exports
pub use error::StoreError;
pub use store::RecordStore;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
