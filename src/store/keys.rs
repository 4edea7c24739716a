//! Storage key namespace.
//!
//! Key layout carried over from the original tool: plannings are stored
//! per shop and week (the week identified by its Monday in ISO date form),
//! rosters per shop, and the slot configuration process-wide.

use chrono::NaiveDate;

/// Shop roster list.
pub const SHOPS: &str = "shops";

/// The week currently selected in the wizard.
pub const SELECTED_WEEK: &str = "selectedWeek";

/// The single process-wide slot configuration.
pub const TIME_SLOT_CONFIG: &str = "timeSlotConfig_global";

/// Key of one shop's planning for the week starting at `week_monday`.
pub fn planning(shop: &str, week_monday: NaiveDate) -> String {
    format!("planning_{}_{}", shop, week_monday.format("%Y-%m-%d"))
}

/// Key of one shop's employee roster.
pub fn employees(shop: &str) -> String {
    format!("employees_{shop}")
}

/// Key of one shop's currently selected employees.
pub fn selected_employees(shop: &str) -> String {
    format!("selectedEmployees_{shop}")
}
