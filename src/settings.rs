//! Driver settings
//!
//! How the host schedules ticks and seeds the session. Loaded from JSON,
//! every field optional.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::DEFAULT_TICK_INTERVAL_MS;

/// Errors from loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("tick interval must be at least 1ms")]
    InvalidTickInterval,
}

/// Session driver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Milliseconds between ticks
    pub tick_interval_ms: u64,
    /// Fixed seed for reproducible sessions (None = clock-derived)
    pub seed: Option<u64>,
    /// Headless driver gives up after this many ticks
    pub max_ticks: u64,
    /// Sleep for the tick interval between ticks
    pub realtime: bool,
    /// Let the built-in autopilot steer
    pub autopilot: bool,
    /// Level a blank ledger starts at (ignored with `progress_path`)
    pub start_level: u32,
    /// Skin to wear, by name (must already be owned)
    pub skin: Option<String>,
    /// Player progress JSON to start from instead of a blank ledger
    pub progress_path: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            seed: None,
            max_ticks: 20_000,
            realtime: false,
            autopilot: true,
            start_level: 1,
            skin: None,
            progress_path: None,
        }
    }
}

impl Settings {
    /// Parse and validate settings
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        if settings.tick_interval_ms == 0 {
            return Err(SettingsError::InvalidTickInterval);
        }
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Seed for this session: the fixed one, or derived from the clock
    pub fn session_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0x5eed)
        })
    }
}
