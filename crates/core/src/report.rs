//! Daily reports

use crate::record::require_text;
use crate::{normalize_tags, now_ms, Collection, Document, RecordError, RecordId, Searchable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day's report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Record ID
    pub id: RecordId,
    /// Day the report covers
    pub date: NaiveDate,
    /// Optional title; listings fall back to the date
    #[serde(default)]
    pub title: String,
    /// Report text
    pub body: String,
    /// Search tags
    #[serde(default)]
    pub search: Vec<String>,
    /// Creation time (Unix milliseconds)
    pub created_ms: u64,
    /// Last modification time (Unix milliseconds)
    pub updated_ms: u64,
}

impl Report {
    /// Build a validated report
    pub fn new<I, S>(
        id: RecordId,
        date: NaiveDate,
        title: impl Into<String>,
        body: impl Into<String>,
        tags: I,
    ) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let now = now_ms();
        let report = Self {
            id,
            date,
            title: title.into().trim().to_string(),
            body: body.into(),
            search: normalize_tags(tags),
            created_ms: now,
            updated_ms: now,
        };
        report.validate()?;
        Ok(report)
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

impl Searchable for Report {
    fn search(&self) -> &[String] {
        &self.search
    }
}

impl Document for Report {
    const COLLECTION: Collection = Collection::Reports;

    fn id(&self) -> RecordId {
        self.id
    }

    fn headline(&self) -> String {
        if self.title.is_empty() {
            self.date.format("%Y-%m-%d").to_string()
        } else {
            format!("{} {}", self.date.format("%Y-%m-%d"), self.title)
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
        require_text(Self::COLLECTION, "body", &self.body)
    }
}
