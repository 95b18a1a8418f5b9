//! Filter configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Quiet period before a filter pass runs (milliseconds)
pub const DEFAULT_DEBOUNCE_MS: u64 = 1000;

/// Filter configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Debounce delay in milliseconds (default: 1000)
    pub debounce_ms: u64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl FilterConfig {
    /// Config with an explicit delay
    pub fn with_debounce_ms(debounce_ms: u64) -> Self {
        Self { debounce_ms }
    }

    /// Debounce delay as a `Duration`
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
