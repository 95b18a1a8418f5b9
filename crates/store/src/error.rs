//! Store errors

use reflect_core::{Collection, RecordError, RecordId};
use thiserror::Error;

/// Errors raised by the record store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Db(#[from] sled::Error),

    #[error("corrupt record: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] RecordError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not allocate record id: {0}")]
    Id(#[from] ulid::MonotonicError),

    #[error("no {} matching '{reference}'", .collection.singular())]
    NotFound {
        collection: Collection,
        reference: String,
    },

    #[error("{} {id} already exists", .collection.singular())]
    AlreadyExists { collection: Collection, id: RecordId },

    #[error("ambiguous {} prefix '{reference}': matches {count} records", .collection.singular())]
    Ambiguous {
        collection: Collection,
        reference: String,
        count: usize,
    },
}
