//! Show one record in full

use crate::render::{self, Describe};
use crate::util;
use anyhow::{Context, Result};
use reflect_core::{Collection, Note, Report, Vim};
use std::path::Path;

pub async fn run(data_dir: &Path, collection: Collection, reference: &str) -> Result<()> {
    match collection {
        Collection::Vims => show::<Vim>(data_dir, reference),
        Collection::Reports => show::<Report>(data_dir, reference),
        Collection::Notes => show::<Note>(data_dir, reference),
    }
}

fn show<T: Describe>(data_dir: &Path, reference: &str) -> Result<()> {
    let store = util::open_store(data_dir)?;
    let id = store.resolve::<T>(reference)?;
    let doc = store
        .get::<T>(&id)?
        .with_context(|| format!("{} {} disappeared", T::COLLECTION.singular(), id))?;

    render::display_record_detail(&doc);
    Ok(())
}
