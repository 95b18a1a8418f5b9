//! Search a collection by tag
//!
//! One-shot mode applies the match predicate directly. Interactive mode
//! treats every stdin line as a keystroke-level change of the search term
//! and prints the view each time the debounced filter settles.

use crate::system_config::{self, SystemConfig};
use crate::util;
use anyhow::{Context, Result};
use filter::{filter_records, FilterConfig, FilterController};
use owo_colors::OwoColorize;
use reflect_core::{Collection, Document, Note, Report, Vim};
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};

pub async fn run(
    data_dir: &Path,
    collection: Collection,
    term: Option<&str>,
    interactive: bool,
    delay_ms: Option<u64>,
) -> Result<()> {
    match collection {
        Collection::Vims => search::<Vim>(data_dir, term, interactive, delay_ms).await,
        Collection::Reports => search::<Report>(data_dir, term, interactive, delay_ms).await,
        Collection::Notes => search::<Note>(data_dir, term, interactive, delay_ms).await,
    }
}

async fn search<T: Document>(
    data_dir: &Path,
    term: Option<&str>,
    interactive: bool,
    delay_ms: Option<u64>,
) -> Result<()> {
    if interactive {
        let config = interactive_config(delay_ms)?;
        let records = util::open_store(data_dir)?.list::<T>()?;
        return run_interactive(records, &config).await;
    }

    let records = util::open_store(data_dir)?.list::<T>()?;

    let term = term.unwrap_or_default();
    let hits = if term.is_empty() {
        records.clone()
    } else {
        filter_records(term, &records)
    };
    print_results(term, &hits, records.len());
    Ok(())
}

/// Filter settings for interactive mode
///
/// `--delay-ms` obeys the same bounds as `filter.debounce_ms`.
fn interactive_config(delay_ms: Option<u64>) -> Result<FilterConfig> {
    let Some(ms) = delay_ms else {
        return Ok(system_config::load()?.filter);
    };

    let config = SystemConfig {
        filter: FilterConfig::with_debounce_ms(ms),
        ..SystemConfig::default()
    };
    config.validate().context("Invalid --delay-ms")?;
    Ok(config.filter)
}

async fn run_interactive<T: Document>(records: Vec<T>, config: &FilterConfig) -> Result<()> {
    let total = records.len();
    let mut controller = FilterController::new(records, config);
    let mut changes = controller.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    eprintln!(
        "{}",
        format!(
            "Searching {} {}: one term per line, results after {} ms of quiet, Ctrl-D to finish",
            total,
            T::COLLECTION,
            controller.delay().as_millis()
        )
        .dimmed()
    );

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line.context("Failed to read search input")? {
                    Some(term) => controller.on_search_term_change(term.trim_end_matches('\r')),
                    None => break,
                }
            }
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                let (term, hits) = controller.view();
                print_results(&term, &hits, total);
            }
        }
    }

    // Let the last term settle before exiting.
    controller.settle().await;
    if changes.has_changed().unwrap_or(false) {
        let (term, hits) = controller.view();
        print_results(&term, &hits, total);
    }

    controller.dispose();
    Ok(())
}

fn print_results<T: Document>(term: &str, hits: &[T], total: usize) {
    println!("Results for {:?}: {} of {}", term, hits.len(), total);
    if hits.is_empty() {
        println!("  {}", "no matches".dimmed());
    }
    for hit in hits {
        util::display_record_compact(hit);
    }
}
