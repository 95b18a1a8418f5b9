//! List a collection

use crate::util;
use anyhow::Result;
use owo_colors::OwoColorize;
use reflect_core::{Collection, Document, Note, Report, Vim};
use std::path::Path;

pub async fn run(data_dir: &Path, collection: Collection, limit: Option<usize>) -> Result<()> {
    match collection {
        Collection::Vims => list::<Vim>(data_dir, limit),
        Collection::Reports => list::<Report>(data_dir, limit),
        Collection::Notes => list::<Note>(data_dir, limit),
    }
}

fn list<T: Document>(data_dir: &Path, limit: Option<usize>) -> Result<()> {
    let store = util::open_store(data_dir)?;
    let mut docs = store.list::<T>()?;
    let total = docs.len();

    if total == 0 {
        println!("{}", format!("No {} yet", T::COLLECTION).dimmed());
        return Ok(());
    }

    // Most recent N
    if let Some(limit) = limit {
        docs.drain(..total.saturating_sub(limit));
    }

    println!("{} ({} of {})", T::COLLECTION.name().bold(), docs.len(), total);
    for doc in &docs {
        util::display_record_compact(doc);
    }

    Ok(())
}
