//! Debounced incremental filtering for Reflect
//!
//! This crate provides:
//! - The tag substring match predicate
//! - A last-write-wins debounce scheduler (at most one pending pass)
//! - A filter controller that owns the search term and filtered view
//!
//! Filtering runs on the Tokio runtime; all timers are cooperative tasks.

pub mod config;
pub mod controller;
pub mod debounce;
pub mod predicate;

// Re-exports
pub use config::{FilterConfig, DEFAULT_DEBOUNCE_MS};
pub use controller::FilterController;
pub use debounce::DebounceScheduler;
pub use predicate::{filter_records, matches};
