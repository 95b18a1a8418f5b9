//! Vim command references

use crate::record::require_text;
use crate::{normalize_tags, now_ms, Collection, Document, RecordError, RecordId, Searchable};
use serde::{Deserialize, Serialize};

/// A vim command with a short explanation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vim {
    /// Record ID
    pub id: RecordId,
    /// Key sequence or ex command (e.g. `gd`, `:CocList`)
    pub command: String,
    /// What the command does
    #[serde(default)]
    pub description: String,
    /// Search tags
    #[serde(default)]
    pub search: Vec<String>,
    /// Creation time (Unix milliseconds)
    pub created_ms: u64,
    /// Last modification time (Unix milliseconds)
    pub updated_ms: u64,
}

impl Vim {
    /// Build a validated vim record
    pub fn new<I, S>(
        id: RecordId,
        command: impl Into<String>,
        description: impl Into<String>,
        tags: I,
    ) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let now = now_ms();
        let vim = Self {
            id,
            command: command.into().trim().to_string(),
            description: description.into(),
            search: normalize_tags(tags),
            created_ms: now,
            updated_ms: now,
        };
        vim.validate()?;
        Ok(vim)
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

impl Searchable for Vim {
    fn search(&self) -> &[String] {
        &self.search
    }
}

impl Document for Vim {
    const COLLECTION: Collection = Collection::Vims;

    fn id(&self) -> RecordId {
        self.id
    }

    fn headline(&self) -> String {
        if self.description.is_empty() {
            self.command.clone()
        } else {
            format!("{} - {}", self.command, self.description)
        }
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
        require_text(Self::COLLECTION, "command", &self.command)
    }
}
