//! Public API surface for the planning core.
//!
//! This file consolidates the types UI event handlers and the export
//! adapter work with. All DTOs derive Serialize/Deserialize for JSON
//! serialization.

pub use crate::models::config::parse_config_json;
pub use crate::models::config::ConfigError;
pub use crate::models::config::SlotConfig;
pub use crate::models::config::SlotInterval;
pub use crate::models::planning::Day;
pub use crate::models::planning::Planning;
pub use crate::models::planning::PlanningEntry;
pub use crate::models::planning::SlotKey;
pub use crate::models::schedule::DailyPeriod;
pub use crate::models::schedule::DaySchedule;
pub use crate::models::schedule::EmployeeDaySchedule;
pub use crate::models::schedule::EmployeeRecap;
pub use crate::models::schedule::ShopDaySchedule;
pub use crate::models::schedule::ShopRecap;
pub use crate::models::schedule::WeeklySchedule;
pub use crate::models::time::TimeOfDay;
pub use crate::models::time::TimeRange;
pub use crate::services::clipboard::Clipboard;
pub use crate::services::clipboard::CopyMode;
pub use crate::services::clipboard::CopyOutcome;
pub use crate::services::clipboard::PasteError;
pub use crate::services::slots::Period;
pub use crate::services::slots::PeriodSlots;
pub use crate::services::slots::SlotBuckets;
pub use crate::store::repository::StoreError;
