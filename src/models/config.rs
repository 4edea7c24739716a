//! Slot configuration: interval width and the daily scheduling window.
//!
//! There is one configuration per process in the original tool
//! (`timeSlotConfig_global`), but the core never reads ambient state — a
//! `SlotConfig` value is threaded explicitly through every call.

use crate::models::time::{TimeOfDay, TimeParseError};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Configuration errors surfaced to the caller as validation messages.
///
/// A failed validation leaves the prior configuration in place; nothing in
/// the core panics on bad user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid slot interval: {0} minutes (expected 15, 30 or 60)")]
    InvalidInterval(u32),

    #[error("end time {end} must be after start time {start}")]
    EndNotAfterStart { start: TimeOfDay, end: TimeOfDay },

    #[error(transparent)]
    InvalidTime(#[from] TimeParseError),
}

/// Width of one grid slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum SlotInterval {
    Quarter,
    Half,
    Hour,
}

impl SlotInterval {
    pub fn minutes(&self) -> u16 {
        match self {
            SlotInterval::Quarter => 15,
            SlotInterval::Half => 30,
            SlotInterval::Hour => 60,
        }
    }
}

impl TryFrom<u32> for SlotInterval {
    type Error = ConfigError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            15 => Ok(SlotInterval::Quarter),
            30 => Ok(SlotInterval::Half),
            60 => Ok(SlotInterval::Hour),
            other => Err(ConfigError::InvalidInterval(other)),
        }
    }
}

impl From<SlotInterval> for u32 {
    fn from(interval: SlotInterval) -> Self {
        u32::from(interval.minutes())
    }
}

/// The configured scheduling window for every shop and week.
///
/// `end_time` may be the `"24:00"` end-of-day sentinel. Serialized field
/// names match the persisted `timeSlotConfig_global` document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotConfig {
    pub interval: SlotInterval,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

impl SlotConfig {
    pub fn new(interval: SlotInterval, start_time: TimeOfDay, end_time: TimeOfDay) -> Self {
        SlotConfig {
            interval,
            start_time,
            end_time,
        }
    }

    /// Check the window invariant: the start strictly precedes the end,
    /// with `"24:00"` counting as 1440 minutes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_time >= self.end_time {
            return Err(ConfigError::EndNotAfterStart {
                start: self.start_time,
                end: self.end_time,
            });
        }
        Ok(())
    }
}

impl Default for SlotConfig {
    /// The original tool's defaults: 30-minute slots from 09:00 to 24:00.
    fn default() -> Self {
        SlotConfig {
            interval: SlotInterval::Half,
            start_time: TimeOfDay::from_minutes(9 * 60),
            end_time: TimeOfDay::END_OF_DAY,
        }
    }
}

/// Parse and validate a persisted slot configuration document.
pub fn parse_config_json(json: &str) -> Result<SlotConfig> {
    let config: SlotConfig =
        serde_json::from_str(json).context("invalid slot configuration JSON")?;
    config
        .validate()
        .context("slot configuration failed validation")?;
    Ok(config)
}
