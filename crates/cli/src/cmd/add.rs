//! Create records

use crate::util;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use owo_colors::OwoColorize;
use reflect_core::{Document, Note, Report, Vim};
use std::path::Path;

/// Add a vim command reference
pub async fn run_vim(data_dir: &Path, command: &str, description: &str, tags: &[String]) -> Result<()> {
    let store = util::open_store(data_dir)?;
    let vim = Vim::new(store.next_id()?, command, description, tags)?;
    store.insert(&vim).context("Failed to save vim command")?;
    print_added(&vim);
    Ok(())
}

/// Add a daily report (dated today unless `date` is given)
pub async fn run_report(
    data_dir: &Path,
    body: &str,
    title: Option<&str>,
    date: Option<NaiveDate>,
    tags: &[String],
) -> Result<()> {
    let store = util::open_store(data_dir)?;
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let report = Report::new(store.next_id()?, date, title.unwrap_or_default(), body, tags)?;
    store.insert(&report).context("Failed to save report")?;
    print_added(&report);
    Ok(())
}

/// Add a note
pub async fn run_note(data_dir: &Path, title: &str, body: &str, tags: &[String]) -> Result<()> {
    let store = util::open_store(data_dir)?;
    let note = Note::new(store.next_id()?, title, body, tags)?;
    store.insert(&note).context("Failed to save note")?;
    print_added(&note);
    Ok(())
}

fn print_added<T: Document>(doc: &T) {
    println!("{} Added {} {}", "✓".green(), T::COLLECTION.singular(), doc.id());
    println!("  {}", doc.headline());
    if !doc.search().is_empty() {
        println!("  {}", util::format_tags(doc.search()).cyan());
    }
}
