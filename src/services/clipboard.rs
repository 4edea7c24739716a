//! Copy/merge engine: extract a day, an employee's day, or a whole week of
//! occupancy data and apply it onto other days, employees or weeks.
//!
//! State between extract and apply is a single clipboard slot; a second
//! copy overwrites the first. The clipboard is a tagged variant so the
//! paste path matches on what was actually copied instead of trusting a
//! separately tracked mode flag.

use crate::models::planning::{Day, Planning, SlotKey};
use crate::services::slots::SlotBuckets;
use log::{debug, warn};

/// How a day copy selects its source entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMode {
    /// Every selected employee's entries for the source day.
    AllEmployees,
    /// One employee's entries, pasted back under the same name.
    SingleEmployee,
    /// One employee's entries, pasted under the target employee's name.
    EmployeeToEmployee,
}

/// Result of a copy: how much was extracted.
///
/// An empty extraction is a reportable notice ("nothing to copy"), not an
/// error; the clipboard still holds the (empty) selection afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied { entries: usize },
    NothingToCopy,
}

/// Paste rejections, surfaced as transient user notices. The planning map
/// is left unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PasteError {
    #[error("nothing to paste: clipboard is empty")]
    NothingToPaste,
    #[error("clipboard selection does not match the paste target")]
    SelectionMismatch,
}

/// The single pending-clipboard slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Clipboard {
    #[default]
    Empty,
    Day { mode: CopyMode, data: Planning },
    Week { data: Planning },
}

impl Clipboard {
    pub fn new() -> Self {
        Clipboard::Empty
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Clipboard::Empty)
    }

    /// Extract one day's true entries into the clipboard.
    ///
    /// `AllEmployees` scans every employee in `employees`; the other modes
    /// scan `source_employee` only and extract nothing when it is absent.
    pub fn copy_day(
        &mut self,
        day: Day,
        mode: CopyMode,
        source_employee: Option<&str>,
        employees: &[String],
        buckets: &SlotBuckets,
        planning: &Planning,
    ) -> CopyOutcome {
        let mut data = Planning::new();

        let sources: Vec<&str> = match mode {
            CopyMode::AllEmployees => employees.iter().map(String::as_str).collect(),
            CopyMode::SingleEmployee | CopyMode::EmployeeToEmployee => {
                match source_employee {
                    Some(employee) => vec![employee],
                    None => {
                        warn!("copy_day: no source employee for {mode:?} copy of {day}");
                        Vec::new()
                    }
                }
            }
        };

        for employee in sources {
            for slot in buckets.iter_slots() {
                if planning.is_working(day, *slot, employee) {
                    data.set(SlotKey::new(day, *slot, employee), true);
                }
            }
        }

        let entries = data.len();
        debug!("copy_day: extracted {entries} entries for {day} ({mode:?})");
        *self = Clipboard::Day { mode, data };
        if entries == 0 {
            CopyOutcome::NothingToCopy
        } else {
            CopyOutcome::Copied { entries }
        }
    }

    /// Place a whole stored week into the clipboard, unfiltered. The data
    /// comes from persistent storage (another week's planning), not from
    /// the live map.
    pub fn copy_week(&mut self, data: Planning) -> CopyOutcome {
        let entries = data.len();
        debug!("copy_week: extracted {entries} entries");
        *self = Clipboard::Week { data };
        if entries == 0 {
            CopyOutcome::NothingToCopy
        } else {
            CopyOutcome::Copied { entries }
        }
    }

    /// Apply a day clipboard onto the target days, returning the merged
    /// map.
    ///
    /// Each copied key is rewritten to the target day; the employee name is
    /// substituted only in `EmployeeToEmployee` mode, falling back to the
    /// source employee when no target is given. Destination keys not
    /// touched by a copied entry are preserved. The clipboard is cleared on
    /// success.
    pub fn paste_day(
        &mut self,
        target_days: &[Day],
        target_employee: Option<&str>,
        planning: &Planning,
    ) -> Result<Planning, PasteError> {
        let (mode, data) = match self {
            Clipboard::Empty => return Err(PasteError::NothingToPaste),
            Clipboard::Week { .. } => return Err(PasteError::SelectionMismatch),
            Clipboard::Day { mode, data } => (*mode, data),
        };

        let mut result = planning.clone();
        for target_day in target_days {
            for (key, working) in data.iter() {
                let employee = match mode {
                    CopyMode::AllEmployees | CopyMode::SingleEmployee => key.employee.clone(),
                    CopyMode::EmployeeToEmployee => target_employee
                        .unwrap_or(key.employee.as_str())
                        .to_string(),
                };
                result.set(SlotKey::new(*target_day, key.slot, employee), working);
            }
        }

        debug!(
            "paste_day: applied clipboard to {} day(s){}",
            target_days.len(),
            target_employee.map_or(String::new(), |e| format!(" for {e}"))
        );
        *self = Clipboard::Empty;
        Ok(result)
    }

    /// Apply a week clipboard verbatim onto the destination map, returning
    /// the merged map. No day or employee rewriting; destination keys
    /// absent from the clipboard are preserved. Clears the clipboard on
    /// success.
    pub fn paste_week(&mut self, planning: &Planning) -> Result<Planning, PasteError> {
        let data = match self {
            Clipboard::Empty => return Err(PasteError::NothingToPaste),
            Clipboard::Day { .. } => return Err(PasteError::SelectionMismatch),
            Clipboard::Week { data } => data,
        };

        let result = planning.merged(data);
        debug!("paste_week: applied {} entries", data.len());
        *self = Clipboard::Empty;
        Ok(result)
    }
}
