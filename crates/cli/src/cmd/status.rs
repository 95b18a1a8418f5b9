//! Show store and configuration status

use crate::{system_config, util};
use anyhow::Result;
use owo_colors::OwoColorize;
use reflect_core::Collection;
use std::path::Path;

pub async fn run(data_dir: &Path) -> Result<()> {
    let config = system_config::load()?;
    let store = util::open_store(data_dir)?;
    let total_size = util::calculate_dir_size(data_dir)?;

    println!("{}", "Reflect Status".bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!();

    println!("Data:          {}", data_dir.display().to_string().cyan());
    match system_config::config_file_path() {
        Some(path) if path.exists() => println!("Config:        {}", path.display()),
        Some(path) => println!(
            "Config:        {} {}",
            path.display(),
            "(not created, using defaults)".dimmed()
        ),
        None => println!("Config:        {}", "(defaults)".dimmed()),
    }
    println!("Debounce:      {} ms", config.filter.debounce_ms);
    println!();

    println!("Records:");
    let mut total = 0;
    for collection in Collection::ALL {
        let count = store.count(collection)?;
        total += count;
        println!("  {:<12} {}", format!("{}:", collection), count);
    }
    println!();

    println!("Storage:");
    println!("  Total size:  {}", util::format_size(total_size));
    println!();

    if total == 0 {
        println!(
            "{}",
            "Tip: Add a record with 'reflect add vim <command> -t <tag>'".dimmed()
        );
    }

    Ok(())
}
