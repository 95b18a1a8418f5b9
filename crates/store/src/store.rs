//! Record store using sled

use crate::{Result, StoreError};
use parking_lot::Mutex;
use reflect_core::{now_ms, Collection, Document, RecordId};
use sled::{Db, Tree};
use std::path::{Path, PathBuf};
use tracing::debug;
use ulid::Generator;

/// Database file name inside the data directory
const DB_NAME: &str = "records.db";

/// Minimum length of an ID prefix accepted by `resolve`
pub const MIN_PREFIX_LEN: usize = 4;

/// Persistent store for all three collections
///
/// Layout:
/// ```text
/// <data_dir>/
///   records.db/      sled database
///     vims           tree: RecordId bytes -> JSON document
///     reports
///     notes
/// ```
pub struct RecordStore {
    /// Data directory
    root: PathBuf,
    /// Sled database
    db: Db,
    /// Monotonic ID source
    ids: Mutex<Generator>,
}

impl RecordStore {
    /// Open or create a store in the given data directory
    pub fn open(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)?;
        let db = sled::open(data_dir.join(DB_NAME))?;
        debug!("Opened record store at {}", data_dir.display());

        Ok(Self {
            root: data_dir.to_path_buf(),
            db,
            ids: Mutex::new(Generator::new()),
        })
    }

    /// Data directory this store lives in
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Allocate a fresh record ID
    ///
    /// IDs from one store are strictly increasing, even within a millisecond.
    pub fn next_id(&self) -> Result<RecordId> {
        let ulid = self.ids.lock().generate()?;
        Ok(RecordId::from_ulid(ulid))
    }

    /// Insert a new document
    pub fn insert<T: Document>(&self, doc: &T) -> Result<()> {
        doc.validate()?;

        let tree = self.tree(T::COLLECTION)?;
        let key = doc.id().to_bytes();
        let value = serde_json::to_vec(doc)?;

        let swapped = tree.compare_and_swap(key, None as Option<&[u8]>, Some(value))?;
        if swapped.is_err() {
            return Err(StoreError::AlreadyExists {
                collection: T::COLLECTION,
                id: doc.id(),
            });
        }

        self.db.flush()?;
        debug!("Inserted {} {}", T::COLLECTION.singular(), doc.id());
        Ok(())
    }

    /// Get a document by ID
    pub fn get<T: Document>(&self, id: &RecordId) -> Result<Option<T>> {
        let tree = self.tree(T::COLLECTION)?;
        match tree.get(id.to_bytes())? {
            Some(value) => Ok(Some(serde_json::from_slice(&value)?)),
            None => Ok(None),
        }
    }

    /// All documents of a collection, oldest first
    pub fn list<T: Document>(&self) -> Result<Vec<T>> {
        let tree = self.tree(T::COLLECTION)?;

        let mut docs = Vec::new();
        for item in tree.iter() {
            let (_, value) = item?;
            docs.push(serde_json::from_slice(&value)?);
        }
        Ok(docs)
    }

    /// Replace an existing document
    ///
    /// Refreshes the document's modification time.
    pub fn update<T: Document>(&self, doc: &T) -> Result<T> {
        doc.validate()?;

        let tree = self.tree(T::COLLECTION)?;
        let key = doc.id().to_bytes();
        if !tree.contains_key(key)? {
            return Err(StoreError::NotFound {
                collection: T::COLLECTION,
                reference: doc.id().to_string(),
            });
        }

        let mut doc = doc.clone();
        doc.touch(now_ms().max(doc.created_ms()));
        tree.insert(key, serde_json::to_vec(&doc)?)?;

        self.db.flush()?;
        debug!("Updated {} {}", T::COLLECTION.singular(), doc.id());
        Ok(doc)
    }

    /// Delete a document
    ///
    /// Returns false when it did not exist.
    pub fn remove<T: Document>(&self, id: &RecordId) -> Result<bool> {
        let tree = self.tree(T::COLLECTION)?;
        let removed = tree.remove(id.to_bytes())?.is_some();

        if removed {
            self.db.flush()?;
            debug!("Removed {} {}", T::COLLECTION.singular(), id);
        }
        Ok(removed)
    }

    /// Number of documents in a collection
    pub fn count(&self, collection: Collection) -> Result<usize> {
        Ok(self.tree(collection)?.len())
    }

    /// Resolve a record reference to an existing ID
    ///
    /// Supports:
    /// - Full ULID: "01HN8XYZ..."
    /// - ID prefix: "01HN8" (at least 4 characters, must be unique)
    pub fn resolve<T: Document>(&self, reference: &str) -> Result<RecordId> {
        let reference = reference.trim();
        let not_found = || StoreError::NotFound {
            collection: T::COLLECTION,
            reference: reference.to_string(),
        };

        if let Ok(id) = reference.parse::<RecordId>() {
            return match self.get::<T>(&id)? {
                Some(_) => Ok(id),
                None => Err(not_found()),
            };
        }

        if reference.len() < MIN_PREFIX_LEN {
            return Err(not_found());
        }

        let prefix = reference.to_ascii_uppercase();
        let mut matching = Vec::new();
        for key in self.tree(T::COLLECTION)?.iter().keys() {
            let id = RecordId::from_slice(&key?)?;
            if id.to_string().starts_with(&prefix) {
                matching.push(id);
            }
        }

        match matching.len() {
            0 => Err(not_found()),
            1 => Ok(matching[0]),
            count => Err(StoreError::Ambiguous {
                collection: T::COLLECTION,
                reference: reference.to_string(),
                count,
            }),
        }
    }

    /// Sled tree backing a collection
    fn tree(&self, collection: Collection) -> Result<Tree> {
        Ok(self.db.open_tree(collection.name())?)
    }
}
