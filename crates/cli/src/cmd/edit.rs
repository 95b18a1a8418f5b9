//! Modify existing records

use crate::util;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use reflect_core::{Document, Note, Report, Vim};
use std::path::Path;
use store::RecordStore;

/// Requested change to a record's tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagChange {
    /// Leave tags alone
    Keep,
    /// Replace with the given tags
    Replace(Vec<String>),
    /// Remove every tag
    Clear,
}

impl TagChange {
    /// Build from `--tag` values and the `--clear-tags` flag
    pub fn from_args(tags: Vec<String>, clear: bool) -> Self {
        if clear {
            TagChange::Clear
        } else if tags.is_empty() {
            TagChange::Keep
        } else {
            TagChange::Replace(tags)
        }
    }

    fn new_tags(self) -> Option<Vec<String>> {
        match self {
            TagChange::Keep => None,
            TagChange::Replace(tags) => Some(tags),
            TagChange::Clear => Some(Vec::new()),
        }
    }
}

/// Edit a vim command reference
pub async fn run_vim(
    data_dir: &Path,
    reference: &str,
    command: Option<String>,
    description: Option<String>,
    tags: TagChange,
) -> Result<()> {
    if command.is_none() && description.is_none() && tags == TagChange::Keep {
        anyhow::bail!("Nothing to change (see 'reflect edit vim --help')");
    }

    let store = util::open_store(data_dir)?;
    let mut vim: Vim = load(&store, reference)?;

    if let Some(command) = command {
        vim.command = command.trim().to_string();
    }
    if let Some(description) = description {
        vim.description = description;
    }
    if let Some(tags) = tags.new_tags() {
        vim.set_tags(tags);
    }

    save(&store, &vim)
}

/// Edit a daily report
pub async fn run_report(
    data_dir: &Path,
    reference: &str,
    date: Option<NaiveDate>,
    title: Option<String>,
    body: Option<String>,
    tags: TagChange,
) -> Result<()> {
    if date.is_none() && title.is_none() && body.is_none() && tags == TagChange::Keep {
        anyhow::bail!("Nothing to change (see 'reflect edit report --help')");
    }

    let store = util::open_store(data_dir)?;
    let mut report: Report = load(&store, reference)?;

    if let Some(date) = date {
        report.date = date;
    }
    if let Some(title) = title {
        report.title = title.trim().to_string();
    }
    if let Some(body) = body {
        report.body = body;
    }
    if let Some(tags) = tags.new_tags() {
        report.set_tags(tags);
    }

    save(&store, &report)
}

/// Edit a note
pub async fn run_note(
    data_dir: &Path,
    reference: &str,
    title: Option<String>,
    body: Option<String>,
    tags: TagChange,
) -> Result<()> {
    if title.is_none() && body.is_none() && tags == TagChange::Keep {
        anyhow::bail!("Nothing to change (see 'reflect edit note --help')");
    }

    let store = util::open_store(data_dir)?;
    let mut note: Note = load(&store, reference)?;

    if let Some(title) = title {
        note.title = title.trim().to_string();
    }
    if let Some(body) = body {
        note.body = body;
    }
    if let Some(tags) = tags.new_tags() {
        note.set_tags(tags);
    }

    save(&store, &note)
}

fn load<T: Document>(store: &RecordStore, reference: &str) -> Result<T> {
    let id = store.resolve::<T>(reference)?;
    store
        .get::<T>(&id)?
        .with_context(|| format!("{} {} disappeared", T::COLLECTION.singular(), id))
}

fn save<T: Document>(store: &RecordStore, doc: &T) -> Result<()> {
    let saved = store.update(doc)?;
    println!("{} Updated {} {}", "✓".green(), T::COLLECTION.singular(), saved.id());
    println!("  {}", saved.headline());
    Ok(())
}
