//! Configuration management command
//!
//! Provides CLI interface to view and edit system configuration.

use crate::system_config::{self, SystemConfig, MAX_DEBOUNCE_MS};
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::PathBuf;

/// Keys accepted by `--get` / `--set`
pub const KEYS: &[&str] = &["filter.debounce_ms", "store.data_dir"];

/// List all configuration values
pub async fn run_list() -> Result<()> {
    let config = system_config::load()?;
    let config_path = system_config::config_file_path()
        .context("Could not determine config file path")?;

    println!("{}", "System Configuration".bold());
    println!("{}: {}\n", "Location".dimmed(), config_path.display().dimmed());

    println!("{}", "[filter]".yellow());
    println!(
        "  {} = {} {}",
        "debounce_ms".cyan(),
        config.filter.debounce_ms,
        format!("({} ms quiet before re-filtering)", config.filter.debounce_ms).dimmed()
    );

    println!("\n{}", "[store]".yellow());
    match &config.store.data_dir {
        Some(dir) => println!("  {} = {}", "data_dir".cyan(), dir.display()),
        None => println!(
            "  {} = {}",
            "data_dir".cyan(),
            "(platform default)".dimmed()
        ),
    }

    println!("\n{}", "Valid Ranges:".bold());
    println!("  debounce_ms: 0-{}", MAX_DEBOUNCE_MS);

    Ok(())
}

/// Get a single configuration value
pub async fn run_get(key: &str) -> Result<()> {
    let config = system_config::load()?;
    println!("{}", get_value(&config, key)?);
    Ok(())
}

/// Set a configuration value
pub async fn run_set(key: &str, value: &str) -> Result<()> {
    let mut config = system_config::load()?;
    set_value(&mut config, key, value)?;

    // Validate before saving
    config.validate().context("Invalid configuration value")?;

    system_config::save(&config)?;

    println!("{} {} = {}", "✓".green(), key.cyan(), value);
    Ok(())
}

/// Show the config file path and optionally create it
pub async fn run_path(create: bool) -> Result<()> {
    let config_path = system_config::config_file_path()
        .context("Could not determine config file path")?;

    if create && !config_path.exists() {
        system_config::init_if_missing()?;
        println!("{} Created config file at: {}", "✓".green(), config_path.display());
    } else if config_path.exists() {
        println!("{}", config_path.display());
    } else {
        println!("{}", config_path.display());
        println!("{}", "File does not exist. Use --create to create it.".yellow());
    }

    Ok(())
}

/// Show example configuration
pub async fn run_example() -> Result<()> {
    print!("{}", system_config::example_config());
    Ok(())
}

fn get_value(config: &SystemConfig, key: &str) -> Result<String> {
    let value = match key {
        "filter.debounce_ms" => config.filter.debounce_ms.to_string(),
        "store.data_dir" => config
            .store
            .data_dir
            .as_ref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_default(),
        _ => unknown_key(key)?,
    };
    Ok(value)
}

fn set_value(config: &mut SystemConfig, key: &str, value: &str) -> Result<()> {
    match key {
        "filter.debounce_ms" => {
            config.filter.debounce_ms = value
                .parse()
                .context("Invalid value: must be a non-negative integer")?;
        }
        "store.data_dir" => {
            // An empty value goes back to the platform default.
            config.store.data_dir = if value.is_empty() {
                None
            } else {
                Some(PathBuf::from(value))
            };
        }
        _ => unknown_key(key)?,
    }
    Ok(())
}

fn unknown_key<T>(key: &str) -> Result<T> {
    anyhow::bail!(
        "Unknown config key: {}. Valid keys: {}",
        key,
        KEYS.join(", ")
    )
}
