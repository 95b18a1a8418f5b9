//! Record identity and the contracts shared by all collections

use crate::{Collection, RecordError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};
use ulid::Ulid;

/// Unique, time-sortable record identifier
///
/// Displayed and serialized as the 26-character Crockford base32 ULID string.
/// Stored as 16 big-endian bytes so that key order equals creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Ulid);

impl RecordId {
    /// Wrap an existing ULID
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    /// Generate a fresh ID from the current time
    pub fn generate() -> Self {
        Self(Ulid::new())
    }

    /// Underlying ULID
    pub fn ulid(&self) -> Ulid {
        self.0
    }

    /// Storage key form
    pub fn to_bytes(&self) -> [u8; 16] {
        self.0.to_bytes()
    }

    /// Decode from the storage key form
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Ulid::from_bytes(bytes))
    }

    /// Decode from a storage key slice
    pub fn from_slice(bytes: &[u8]) -> Result<Self, RecordError> {
        let bytes: [u8; 16] = bytes
            .try_into()
            .map_err(|_| RecordError::InvalidId(format!("{} byte key", bytes.len())))?;
        Ok(Self::from_bytes(bytes))
    }

    /// Milliseconds since the Unix epoch encoded in the ID
    pub fn timestamp_ms(&self) -> u64 {
        self.0.timestamp_ms()
    }

    /// First eight characters, for compact display
    pub fn short(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulid::from_string(s)
            .map(Self)
            .map_err(|_| RecordError::InvalidId(s.to_string()))
    }
}

/// Anything carrying a sequence of search tags
///
/// A record without tags returns an empty slice and never matches a
/// non-empty search term.
pub trait Searchable {
    /// Tags/keywords associated with the record, in order
    fn search(&self) -> &[String];
}

/// A record that lives in one of the persistent collections
pub trait Document:
    Searchable + Serialize + DeserializeOwned + Clone + Send + Sync + 'static
{
    /// Collection this document type belongs to
    const COLLECTION: Collection;

    /// Record ID
    fn id(&self) -> RecordId;

    /// One-line summary used in listings
    fn headline(&self) -> String;

    /// Creation time (Unix milliseconds)
    fn created_ms(&self) -> u64;

    /// Last modification time (Unix milliseconds)
    fn updated_ms(&self) -> u64;

    /// Mark the document as modified at `now_ms`
    fn touch(&mut self, now_ms: u64);

    /// Check the document's required fields
    fn validate(&self) -> Result<(), RecordError>;
}

/// Normalize a tag list
///
/// Trims each tag, drops blank ones and removes duplicates, keeping the
/// first occurrence. Case is preserved.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim();
        if tag.is_empty() || !seen.insert(tag.to_string()) {
            continue;
        }
        out.push(tag.to_string());
    }
    out
}

/// Current wall-clock time in Unix milliseconds
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

pub(crate) fn require_text(
    collection: Collection,
    field: &'static str,
    value: &str,
) -> Result<(), RecordError> {
    if value.trim().is_empty() {
        return Err(RecordError::EmptyField { collection, field });
    }
    Ok(())
}
