//! The three record collections

use crate::RecordError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named collection of records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    /// Vim command references
    Vims,
    /// Daily reports
    Reports,
    /// Free-form notes
    Notes,
}

impl Collection {
    /// Every collection, in display order
    pub const ALL: [Collection; 3] = [Collection::Vims, Collection::Reports, Collection::Notes];

    /// Stable name, also used as the storage tree name
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Vims => "vims",
            Collection::Reports => "reports",
            Collection::Notes => "notes",
        }
    }

    /// Singular noun for messages ("vim", "report", "note")
    pub fn singular(&self) -> &'static str {
        match self {
            Collection::Vims => "vim",
            Collection::Reports => "report",
            Collection::Notes => "note",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Collection {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vims" | "vim" => Ok(Collection::Vims),
            "reports" | "report" => Ok(Collection::Reports),
            "notes" | "note" => Ok(Collection::Notes),
            _ => Err(RecordError::UnknownCollection(s.to_string())),
        }
    }
}
