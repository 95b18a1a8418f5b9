//! Free-form notes

use crate::record::require_text;
use crate::{normalize_tags, now_ms, Collection, Document, RecordError, RecordId, Searchable};
use serde::{Deserialize, Serialize};

/// A titled note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Record ID
    pub id: RecordId,
    /// Note title, shown in listings
    pub title: String,
    /// Free-form text
    #[serde(default)]
    pub body: String,
    /// Search tags
    #[serde(default)]
    pub search: Vec<String>,
    /// Creation time (Unix milliseconds)
    pub created_ms: u64,
    /// Last modification time (Unix milliseconds)
    pub updated_ms: u64,
}

impl Note {
    /// Build a validated note
    pub fn new<I, S>(
        id: RecordId,
        title: impl Into<String>,
        body: impl Into<String>,
        tags: I,
    ) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let now = now_ms();
        let note = Self {
            id,
            title: title.into().trim().to_string(),
            body: body.into(),
            search: normalize_tags(tags),
            created_ms: now,
            updated_ms: now,
        };
        note.validate()?;
        Ok(note)
    }

    /// Replace the tag list
    pub fn set_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.search = normalize_tags(tags);
    }
}

impl Searchable for Note {
    fn search(&self) -> &[String] {
        &self.search
    }
}

impl Document for Note {
    const COLLECTION: Collection = Collection::Notes;

    fn id(&self) -> RecordId {
        self.id
    }

    fn headline(&self) -> String {
        self.title.clone()
    }

    fn created_ms(&self) -> u64 {
        self.created_ms
    }

    fn updated_ms(&self) -> u64 {
        self.updated_ms
    }

    fn touch(&mut self, now_ms: u64) {
        self.updated_ms = now_ms;
    }

    fn validate(&self) -> Result<(), RecordError> {
        require_text(Self::COLLECTION, "title", &self.title)
    }
}
