//! Time-of-day primitives for the planning grid.
//!
//! All times are minutes since midnight. The grid allows `"24:00"` as an
//! end-of-day sentinel (1440 minutes), which `chrono` clock types cannot
//! represent, so the crate carries its own newtype.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Error for unparsable `"HH:MM"` strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time of day: {0:?}")]
pub struct TimeParseError(pub String);

/// A clock time expressed as minutes since midnight.
///
/// Valid values are `0..=1440`; 1440 renders as the `"24:00"` end-of-day
/// sentinel. Slot arithmetic may push values slightly past 1440 (a slot
/// starting at the configured end time), which `Display` still renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// End-of-day sentinel (`"24:00"`, 1440 minutes).
    pub const END_OF_DAY: TimeOfDay = TimeOfDay(1440);

    pub fn from_minutes(minutes: u16) -> Self {
        TimeOfDay(minutes)
    }

    pub fn minutes(&self) -> u16 {
        self.0
    }

    /// Hour-of-day of this time (24 for the end-of-day sentinel).
    pub fn hour(&self) -> u16 {
        self.0 / 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| TimeParseError(s.to_string()))?;
        let hours: u16 = h.parse().map_err(|_| TimeParseError(s.to_string()))?;
        let mins: u16 = m.parse().map_err(|_| TimeParseError(s.to_string()))?;
        if mins > 59 || hours > 24 || (hours == 24 && mins != 0) {
            return Err(TimeParseError(s.to_string()));
        }
        Ok(TimeOfDay(hours * 60 + mins))
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// A half-open time interval `[start, end)` within one day.
///
/// Renders as `"HH:MM-HH:MM"`; with zero-padded components the textual
/// ordering of ranges matches their chronological ordering, which the
/// aggregator relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeRange {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl TimeRange {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        TimeRange { start, end }
    }

    /// Slot width in minutes.
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }

    /// Slot width in hours.
    pub fn duration_hours(&self) -> f64 {
        f64::from(self.duration_minutes()) / 60.0
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for TimeRange {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| TimeParseError(s.to_string()))?;
        let range = TimeRange {
            start: start.parse()?,
            end: end.parse()?,
        };
        if range.start >= range.end {
            return Err(TimeParseError(s.to_string()));
        }
        Ok(range)
    }
}

impl Serialize for TimeRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Convert worked minutes to tenths of an hour, rounding half-up.
///
/// Hour totals are carried as integer tenths so that a weekly total is
/// exactly the sum of the displayed daily totals.
pub fn minutes_to_tenths(minutes: u32) -> i64 {
    (f64::from(minutes) / 6.0).round() as i64
}

/// Render tenths of an hour with exactly one decimal digit.
pub fn format_tenths(tenths: i64) -> String {
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// Format an hour count with one decimal digit, rounding half-up.
///
/// Matches the display rule of the original grid (`1.25` renders as
/// `"1.3"`), which Rust's default float formatting would round to even.
pub fn format_hours(hours: f64) -> String {
    format_tenths((hours * 10.0).round() as i64)
}
