//! Derived schedule types: what the recap tables and the printable export
//! consume.
//!
//! Everything here is produced fresh from the occupancy map on each call
//! and never persisted.

use crate::models::planning::Day;
use serde::{Deserialize, Serialize};

/// Arrival label for a day without any worked slot.
pub const REST_LABEL: &str = "Repos";
/// Placeholder for an absent departure/return/end time.
pub const EMPTY_LABEL: &str = "-";

/// One employee's derived day: arrival, optional break (departure/return),
/// end of day.
///
/// Times are `"HH:MM"` strings; a day off carries `"Repos"` as arrival and
/// `"-"` everywhere else. Only the first break of the day is reported —
/// a day split three or more ways still shows a single departure/return
/// pair (longstanding grid behavior, kept as-is).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPeriod {
    pub arrival: String,
    pub departure: String,
    #[serde(rename = "return")]
    pub return_time: String,
    pub end: String,
}

impl DailyPeriod {
    /// The day-off placeholder row.
    pub fn rest() -> Self {
        DailyPeriod {
            arrival: REST_LABEL.to_string(),
            departure: EMPTY_LABEL.to_string(),
            return_time: EMPTY_LABEL.to_string(),
            end: EMPTY_LABEL.to_string(),
        }
    }
}

/// One recap row: a day with its derived periods and hour total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: Day,
    pub periods: Vec<DailyPeriod>,
    pub total_hours: String,
}

/// One employee's full week, Monday through Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    pub days: Vec<DaySchedule>,
    pub week_total: String,
}

/// One employee's derived day within a shop-wide recap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDaySchedule {
    pub name: String,
    pub periods: Vec<DailyPeriod>,
    pub total_hours: String,
}

/// All employees' derived schedules for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopDaySchedule {
    pub day: Day,
    pub employees: Vec<EmployeeDaySchedule>,
}

/// Input contract of the employee-recap export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecap {
    pub employee: String,
    pub schedule: WeeklySchedule,
}

/// Input contract of the shop-recap export: the whole week day by day,
/// cross-employee totals per day, and the week grand total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopRecap {
    pub days: Vec<ShopDaySchedule>,
    pub day_totals: Vec<String>,
    pub week_total: String,
}

/// Column order for employee-recap tables.
pub const EMPLOYEE_RECAP_COLUMNS: [&str; 6] = [
    "Jour",
    "Arrivée",
    "Départ",
    "Retour",
    "Fin",
    "Total heures",
];

/// Column order for shop-recap tables.
pub const SHOP_RECAP_COLUMNS: [&str; 7] = [
    "Jour",
    "Employé",
    "Arrivée",
    "Départ",
    "Retour",
    "Fin",
    "Total heures",
];
