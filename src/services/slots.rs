//! Slot partitioning: cut the configured window into fixed-width slots and
//! group them into named display periods.
//!
//! The emission loop is inclusive on the end bound: a slot whose start
//! equals the configured end time is still emitted. The `"24:00"` sentinel
//! is the one exception — the loop stops at 23:59 so the last slot ends at
//! `"24:00"` and none starts there. Hour totals of persisted plannings
//! depend on exactly this slot set, so the boundary rule must not change.

use crate::models::config::{ConfigError, SlotConfig, SlotInterval};
use crate::models::time::{TimeOfDay, TimeRange};
use serde::{Deserialize, Serialize};

/// Named display period a slot belongs to.
///
/// 30/60-minute grids use the coarse `Morning`/`Afternoon`/`Evening` split;
/// 15-minute grids the five finer periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    Morning,
    Afternoon,
    Evening,
    EarlyAfternoon,
    LateAfternoon,
    EarlyEvening,
    LateEvening,
}

impl Period {
    /// French table heading for this period.
    pub fn label(&self) -> &'static str {
        match self {
            Period::Morning => "Matin",
            Period::Afternoon => "Après-midi",
            Period::Evening => "Soirée",
            Period::EarlyAfternoon => "Début après-midi",
            Period::LateAfternoon => "Fin après-midi",
            Period::EarlyEvening => "Début soirée",
            Period::LateEvening => "Fin soirée",
        }
    }
}

/// One period with its chronologically ordered slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSlots {
    pub period: Period,
    pub slots: Vec<TimeRange>,
}

/// The ordered partition of the configured window.
///
/// Invariant: concatenating the groups in order reproduces the emitted
/// slot list exactly — no duplicates, no omissions, no re-sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotBuckets {
    groups: Vec<PeriodSlots>,
}

impl SlotBuckets {
    pub fn groups(&self) -> &[PeriodSlots] {
        &self.groups
    }

    /// All slots in fixed bucket order (chronological within each bucket).
    pub fn iter_slots(&self) -> impl Iterator<Item = &TimeRange> {
        self.groups.iter().flat_map(|g| g.slots.iter())
    }

    /// Flattened copy of the full slot list.
    pub fn all_slots(&self) -> Vec<TimeRange> {
        self.iter_slots().copied().collect()
    }

    pub fn slot_count(&self) -> usize {
        self.groups.iter().map(|g| g.slots.len()).sum()
    }

    /// True when no schedulable time exists; callers render an explicit
    /// empty state instead of a grid.
    pub fn is_empty(&self) -> bool {
        self.slot_count() == 0
    }
}

/// Partition the configured window into slots bucketed by hour of day.
///
/// Boundaries for 15-minute slots: morning before 12:00, early afternoon
/// before 15:00, late afternoon before 18:00, early evening before 21:00,
/// late evening after. For 30/60-minute slots: morning before 12:00,
/// afternoon before 18:00, evening after.
pub fn partition(config: &SlotConfig) -> Result<SlotBuckets, ConfigError> {
    config.validate()?;
    let slots = emit_slots(config);

    let groups = match config.interval {
        SlotInterval::Quarter => {
            let mut groups = [
                PeriodSlots { period: Period::Morning, slots: Vec::new() },
                PeriodSlots { period: Period::EarlyAfternoon, slots: Vec::new() },
                PeriodSlots { period: Period::LateAfternoon, slots: Vec::new() },
                PeriodSlots { period: Period::EarlyEvening, slots: Vec::new() },
                PeriodSlots { period: Period::LateEvening, slots: Vec::new() },
            ];
            for slot in slots {
                let idx = match slot.start.hour() {
                    h if h < 12 => 0,
                    h if h < 15 => 1,
                    h if h < 18 => 2,
                    h if h < 21 => 3,
                    _ => 4,
                };
                groups[idx].slots.push(slot);
            }
            groups.to_vec()
        }
        SlotInterval::Half | SlotInterval::Hour => {
            let mut groups = [
                PeriodSlots { period: Period::Morning, slots: Vec::new() },
                PeriodSlots { period: Period::Afternoon, slots: Vec::new() },
                PeriodSlots { period: Period::Evening, slots: Vec::new() },
            ];
            for slot in slots {
                let idx = match slot.start.hour() {
                    h if h < 12 => 0,
                    h if h < 18 => 1,
                    _ => 2,
                };
                groups[idx].slots.push(slot);
            }
            groups.to_vec()
        }
    };

    Ok(SlotBuckets { groups })
}

/// Re-group a coarse partition into three contiguous display tables of
/// equal size, remainder appended to the evening table.
///
/// This is the split the grid uses for 30/60-minute intervals so the three
/// tables have balanced heights; 15-minute partitions are returned
/// unchanged (their five hour-based tables already balance). The flattened
/// slot order is preserved.
pub fn rebalance_thirds(buckets: &SlotBuckets) -> SlotBuckets {
    if buckets.groups.len() != 3 {
        return buckets.clone();
    }

    let all = buckets.all_slots();
    let per_table = all.len() / 3;
    let groups = vec![
        PeriodSlots {
            period: Period::Morning,
            slots: all[..per_table].to_vec(),
        },
        PeriodSlots {
            period: Period::Afternoon,
            slots: all[per_table..2 * per_table].to_vec(),
        },
        PeriodSlots {
            period: Period::Evening,
            slots: all[2 * per_table..].to_vec(),
        },
    ];
    SlotBuckets { groups }
}

/// Emit the ordered slot list for the window.
///
/// The loop bound is inclusive; `"24:00"` is treated as 23:59 before the
/// comparison, matching the original grid.
fn emit_slots(config: &SlotConfig) -> Vec<TimeRange> {
    let interval = config.interval.minutes();
    let loop_end = config.end_time.minutes().min(1439);
    let mut slots = Vec::new();
    let mut current = config.start_time.minutes();
    while current <= loop_end {
        let next = current + interval;
        slots.push(TimeRange::new(
            TimeOfDay::from_minutes(current),
            TimeOfDay::from_minutes(next),
        ));
        current = next;
    }
    slots
}
