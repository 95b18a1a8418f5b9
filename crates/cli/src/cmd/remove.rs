//! Delete a record

use crate::util;
use anyhow::Result;
use owo_colors::OwoColorize;
use reflect_core::{Collection, Document, Note, Report, Vim};
use std::path::Path;

pub async fn run(data_dir: &Path, collection: Collection, reference: &str) -> Result<()> {
    match collection {
        Collection::Vims => remove::<Vim>(data_dir, reference),
        Collection::Reports => remove::<Report>(data_dir, reference),
        Collection::Notes => remove::<Note>(data_dir, reference),
    }
}

fn remove<T: Document>(data_dir: &Path, reference: &str) -> Result<()> {
    let store = util::open_store(data_dir)?;
    let id = store.resolve::<T>(reference)?;

    if store.remove::<T>(&id)? {
        println!("{} Removed {} {}", "✓".green(), T::COLLECTION.singular(), id);
    } else {
        tracing::warn!("{} {} was already gone", T::COLLECTION.singular(), id);
    }

    Ok(())
}
