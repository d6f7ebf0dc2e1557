//! Runtime configuration

use crate::wordlists::DEFAULT_DICTIONARY;
use anyhow::{Result, bail};
use std::time::Duration;

pub const DEFAULT_ATTEMPTS: usize = 6;
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Settings shared by every front-end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Rows per board
    pub total_attempts: usize,
    /// Sessions untouched for this long are evicted
    pub idle_timeout: Duration,
    /// How often the reaper looks for idle sessions
    pub sweep_interval: Duration,
    /// Dictionary used when a client does not name one
    pub default_dictionary: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_attempts: DEFAULT_ATTEMPTS,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
            default_dictionary: DEFAULT_DICTIONARY.to_string(),
        }
    }
}

impl GameConfig {
    /// # Errors
    /// Returns an error if attempts is zero, a duration is zero, or the
    /// default dictionary name is blank.
    pub fn validate(&self) -> Result<()> {
        if self.total_attempts == 0 {
            bail!("attempts must be at least 1");
        }
        if self.idle_timeout.is_zero() {
            bail!("idle timeout must be greater than zero");
        }
        if self.sweep_interval.is_zero() {
            bail!("sweep interval must be greater than zero");
        }
        if self.default_dictionary.trim().is_empty() {
            bail!("dictionary name must not be empty");
        }
        Ok(())
    }
}
