//! System configuration
//!
//! Stored as TOML at `$REFLECT_CONFIG`, or `<config dir>/reflect/config.toml`.
//! A missing file means defaults.

use anyhow::{Context, Result};
use filter::FilterConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "REFLECT_CONFIG";

/// Upper bound for `filter.debounce_ms`
pub const MAX_DEBOUNCE_MS: u64 = 60_000;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Search filter settings
    pub filter: FilterConfig,
    /// Storage settings
    pub store: StoreConfig,
}

/// Storage settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Data directory (default: `<data dir>/reflect`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl SystemConfig {
    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.filter.debounce_ms > MAX_DEBOUNCE_MS {
            anyhow::bail!(
                "filter.debounce_ms must be between 0 and {} (got {})",
                MAX_DEBOUNCE_MS,
                self.filter.debounce_ms
            );
        }

        if let Some(dir) = &self.store.data_dir {
            if dir.as_os_str().is_empty() {
                anyhow::bail!("store.data_dir must not be empty");
            }
        }

        Ok(())
    }
}

/// Location of the config file
pub fn config_file_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("reflect").join("config.toml"))
}

/// Load configuration, falling back to defaults when no file exists
pub fn load() -> Result<SystemConfig> {
    let Some(path) = config_file_path() else {
        return Ok(SystemConfig::default());
    };

    if !path.exists() {
        return Ok(SystemConfig::default());
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    parse(&contents).with_context(|| format!("Invalid config file {}", path.display()))
}

/// Parse and validate configuration text
pub fn parse(contents: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

/// Write configuration to disk
pub fn save(config: &SystemConfig) -> Result<()> {
    let path = config_file_path().context("Could not determine config file path")?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
    std::fs::write(&path, contents)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;
    Ok(())
}

/// Create the config file with defaults if it does not exist yet
pub fn init_if_missing() -> Result<()> {
    let path = config_file_path().context("Could not determine config file path")?;
    if !path.exists() {
        save(&SystemConfig::default())?;
    }
    Ok(())
}

/// Annotated example configuration
pub fn example_config() -> &'static str {
    r#"# Reflect configuration

[filter]
# Quiet period before a search re-filters, in milliseconds (0-60000)
debounce_ms = 1000

[store]
# Where records are kept (default: platform data directory)
# data_dir = "/home/me/.local/share/reflect"
"#
}
