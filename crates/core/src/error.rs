//! Record validation errors

use crate::Collection;
use thiserror::Error;

/// Errors raised while building or validating records
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A required text field is blank
    #[error("{} record requires a non-empty {field}", .collection.singular())]
    EmptyField {
        collection: Collection,
        field: &'static str,
    },

    /// Not a valid record ID
    #[error("invalid record id: {0}")]
    InvalidId(String),

    /// Collection name not recognized
    #[error("unknown collection: {0}")]
    UnknownCollection(String),
}
