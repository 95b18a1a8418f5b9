//! Shared utilities for CLI commands

use crate::system_config;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use owo_colors::OwoColorize;
use reflect_core::Document;
use std::path::{Path, PathBuf};
use store::RecordStore;

/// Resolve the data directory
///
/// Precedence: `--data-dir` / `$REFLECT_DATA_DIR`, then `store.data_dir`
/// from the config file, then `<platform data dir>/reflect`.
pub fn resolve_data_dir(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir);
    }

    let config = system_config::load()?;
    if let Some(dir) = config.store.data_dir {
        return Ok(dir);
    }

    dirs::data_dir()
        .map(|dir| dir.join("reflect"))
        .context("Could not determine a data directory; pass --data-dir")
}

/// Open the record store
pub fn open_store(data_dir: &Path) -> Result<RecordStore> {
    RecordStore::open(data_dir)
        .with_context(|| format!("Failed to open record store at {}", data_dir.display()))
}

/// Format timestamp as relative time ("2 hours ago")
pub fn format_relative_time(ts_ms: u64) -> String {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    let datetime = UNIX_EPOCH + Duration::from_millis(ts_ms);

    if let Ok(elapsed) = SystemTime::now().duration_since(datetime) {
        let seconds = elapsed.as_secs();

        if seconds < 60 {
            format!("{} seconds ago", seconds)
        } else if seconds < 3600 {
            format!("{} minutes ago", seconds / 60)
        } else if seconds < 86400 {
            format!("{} hours ago", seconds / 3600)
        } else if seconds < 604800 {
            format!("{} days ago", seconds / 86400)
        } else {
            format!("{} weeks ago", seconds / 604800)
        }
    } else {
        "in the future".to_string()
    }
}

/// Format timestamp as local absolute time ("2024-01-03 14:30:00")
pub fn format_absolute_time(ts_ms: u64) -> String {
    i64::try_from(ts_ms)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .map(|utc| {
            utc.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|| "invalid time".to_string())
}

/// Format file size in human-readable format
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Render a tag list as `[a, b, c]`
pub fn format_tags(tags: &[String]) -> String {
    format!("[{}]", tags.join(", "))
}

/// Display a record in compact one-line format
pub fn display_record_compact<T: Document>(doc: &T) {
    let tags = if doc.search().is_empty() {
        String::new()
    } else {
        format!(" {}", format_tags(doc.search()))
    };

    println!(
        "{} {}{} {}",
        doc.id().short().yellow(),
        doc.headline(),
        tags.cyan(),
        format!("({})", format_relative_time(doc.created_ms())).dimmed()
    );
}

/// Calculate directory size recursively
pub fn calculate_dir_size(dir: &Path) -> Result<u64> {
    if !dir.exists() {
        return Ok(0);
    }

    let mut total = 0u64;

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() {
            total += entry.metadata()?.len();
        } else if path.is_dir() {
            total += calculate_dir_size(&path)?;
        }
    }

    Ok(total)
}
