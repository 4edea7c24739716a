//! The occupancy map: which employee works which slot on which day.
//!
//! The original grid keyed a flat object by `"{day}_{slot}_{employee}"`
//! strings, which breaks for employee names containing the separator. The
//! map is keyed here by a structured [`SlotKey`] compared by value, and
//! serializes as a deterministically ordered entry list.

use crate::models::time::TimeRange;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Day of the planning week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    #[serde(rename = "Lundi")]
    Monday,
    #[serde(rename = "Mardi")]
    Tuesday,
    #[serde(rename = "Mercredi")]
    Wednesday,
    #[serde(rename = "Jeudi")]
    Thursday,
    #[serde(rename = "Vendredi")]
    Friday,
    #[serde(rename = "Samedi")]
    Saturday,
    #[serde(rename = "Dimanche")]
    Sunday,
}

impl Day {
    /// The seven days in grid order.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// French label, as shown in the grid and recap tables.
    pub fn label(&self) -> &'static str {
        match self {
            Day::Monday => "Lundi",
            Day::Tuesday => "Mardi",
            Day::Wednesday => "Mercredi",
            Day::Thursday => "Jeudi",
            Day::Friday => "Vendredi",
            Day::Saturday => "Samedi",
            Day::Sunday => "Dimanche",
        }
    }

    /// Position within the week, 0-based from Monday.
    pub fn index(&self) -> usize {
        Day::ALL.iter().position(|d| d == self).unwrap_or(0)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Day::ALL
            .into_iter()
            .find(|d| d.label() == s)
            .ok_or_else(|| format!("unknown day label: {s:?}"))
    }
}

/// Composite key of one grid cell: (day, slot, employee).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotKey {
    pub day: Day,
    pub slot: TimeRange,
    pub employee: String,
}

impl SlotKey {
    pub fn new(day: Day, slot: TimeRange, employee: impl Into<String>) -> Self {
        SlotKey {
            day,
            slot,
            employee: employee.into(),
        }
    }
}

/// One serialized occupancy entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningEntry {
    pub day: Day,
    pub slot: TimeRange,
    pub employee: String,
    pub working: bool,
}

/// Sparse boolean occupancy map for one shop and week.
///
/// An absent key means "not working". Copy/merge operations never mutate a
/// map they were given; they build and return a new one for the caller to
/// commit to storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Planning {
    entries: HashMap<SlotKey, bool>,
}

impl Planning {
    pub fn new() -> Self {
        Planning::default()
    }

    /// Whether the given employee works the given slot on the given day.
    pub fn is_working(&self, day: Day, slot: TimeRange, employee: &str) -> bool {
        self.entries
            .get(&SlotKey::new(day, slot, employee))
            .copied()
            .unwrap_or(false)
    }

    pub fn get(&self, key: &SlotKey) -> Option<bool> {
        self.entries.get(key).copied()
    }

    pub fn set(&mut self, key: SlotKey, working: bool) {
        self.entries.insert(key, working);
    }

    /// Flip one cell, returning the new value. This is the grid's
    /// click handler.
    pub fn toggle(&mut self, key: SlotKey) -> bool {
        let value = !self.entries.get(&key).copied().unwrap_or(false);
        self.entries.insert(key, value);
        value
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SlotKey, bool)> {
        self.entries.iter().map(|(k, v)| (k, *v))
    }

    /// New map with `overlay`'s entries written over this one. Keys absent
    /// from the overlay are preserved unchanged.
    pub fn merged(&self, overlay: &Planning) -> Planning {
        let mut result = self.clone();
        for (key, working) in overlay.iter() {
            result.set(key.clone(), working);
        }
        result
    }

    /// Entries sorted by (day, slot, employee). Persisted documents and
    /// their checksums depend on this order being stable.
    pub fn sorted_entries(&self) -> Vec<PlanningEntry> {
        let mut keys: Vec<&SlotKey> = self.entries.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| PlanningEntry {
                day: key.day,
                slot: key.slot,
                employee: key.employee.clone(),
                working: self.entries[key],
            })
            .collect()
    }
}

impl FromIterator<(SlotKey, bool)> for Planning {
    fn from_iter<I: IntoIterator<Item = (SlotKey, bool)>>(iter: I) -> Self {
        Planning {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Serialize for Planning {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.sorted_entries().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Planning {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<PlanningEntry>::deserialize(deserializer)?;
        Ok(entries
            .into_iter()
            .map(|e| (SlotKey::new(e.day, e.slot, e.employee), e.working))
            .collect())
    }
}
