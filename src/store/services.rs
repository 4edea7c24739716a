//! Typed load/save helpers over the raw key-value store.
//!
//! Plannings are wrapped in a checksummed document before persisting. On
//! load, a malformed payload is not fatal: the `_or_empty` variant logs a
//! warning and hands the caller a fresh map, which is how the grid
//! recovers from corrupted browser storage.

use crate::models::config::SlotConfig;
use crate::models::planning::Planning;
use crate::store::checksum::calculate_checksum;
use crate::store::keys;
use crate::store::repository::{KeyValueStore, StoreError, StoreResult};
use chrono::{Datelike, NaiveDate, Weekday};
use log::warn;
use serde::{Deserialize, Serialize};

/// Persisted wrapper around one week's planning entries.
#[derive(Debug, Serialize, Deserialize)]
struct PlanningDocument {
    checksum: String,
    planning: Planning,
}

/// Persist one shop-and-week planning.
pub fn save_planning(
    store: &dyn KeyValueStore,
    shop: &str,
    week_monday: NaiveDate,
    planning: &Planning,
) -> StoreResult<()> {
    let entries_json = serde_json::to_string(planning)?;
    let document = PlanningDocument {
        checksum: calculate_checksum(&entries_json),
        planning: planning.clone(),
    };
    store.set(
        &keys::planning(shop, week_monday),
        &serde_json::to_string(&document)?,
    )
}

/// Load one shop-and-week planning. `Ok(None)` when nothing was stored;
/// a malformed payload is a [`StoreError::Serialization`].
pub fn load_planning(
    store: &dyn KeyValueStore,
    shop: &str,
    week_monday: NaiveDate,
) -> StoreResult<Option<Planning>> {
    let key = keys::planning(shop, week_monday);
    let Some(raw) = store.get(&key)? else {
        return Ok(None);
    };
    let document: PlanningDocument = serde_json::from_str(&raw)?;

    let entries_json = serde_json::to_string(&document.planning)?;
    if calculate_checksum(&entries_json) != document.checksum {
        // Soft integrity check: keep the data, flag the mismatch.
        warn!("load_planning: checksum mismatch for {key}");
    }
    Ok(Some(document.planning))
}

/// Load one shop-and-week planning, falling back to an empty map (with a
/// logged warning) when the stored payload is missing or unreadable.
pub fn load_planning_or_empty(
    store: &dyn KeyValueStore,
    shop: &str,
    week_monday: NaiveDate,
) -> Planning {
    match load_planning(store, shop, week_monday) {
        Ok(Some(planning)) => planning,
        Ok(None) => Planning::new(),
        Err(e) => {
            warn!(
                "load_planning_or_empty: unreadable planning for {}: {e}",
                keys::planning(shop, week_monday)
            );
            Planning::new()
        }
    }
}

/// Drop one shop-and-week planning (the grid's reset action).
pub fn delete_planning(
    store: &dyn KeyValueStore,
    shop: &str,
    week_monday: NaiveDate,
) -> StoreResult<()> {
    store.remove(&keys::planning(shop, week_monday))
}

/// Persist the process-wide slot configuration.
pub fn save_slot_config(store: &dyn KeyValueStore, config: &SlotConfig) -> StoreResult<()> {
    store.set(keys::TIME_SLOT_CONFIG, &serde_json::to_string(config)?)
}

/// Load the process-wide slot configuration, if one was saved.
pub fn load_slot_config(store: &dyn KeyValueStore) -> StoreResult<Option<SlotConfig>> {
    match store.get(keys::TIME_SLOT_CONFIG)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Persist the shop list.
pub fn save_shops(store: &dyn KeyValueStore, shops: &[String]) -> StoreResult<()> {
    store.set(keys::SHOPS, &serde_json::to_string(shops)?)
}

/// Load the shop list (empty when none was saved).
pub fn load_shops(store: &dyn KeyValueStore) -> StoreResult<Vec<String>> {
    load_string_list(store, keys::SHOPS)
}

/// Persist one shop's employee roster.
pub fn save_employees(
    store: &dyn KeyValueStore,
    shop: &str,
    employees: &[String],
) -> StoreResult<()> {
    store.set(&keys::employees(shop), &serde_json::to_string(employees)?)
}

/// Load one shop's employee roster (empty when none was saved).
pub fn load_employees(store: &dyn KeyValueStore, shop: &str) -> StoreResult<Vec<String>> {
    load_string_list(store, &keys::employees(shop))
}

/// Persist which of a shop's employees are selected in the wizard.
pub fn save_selected_employees(
    store: &dyn KeyValueStore,
    shop: &str,
    employees: &[String],
) -> StoreResult<()> {
    store.set(
        &keys::selected_employees(shop),
        &serde_json::to_string(employees)?,
    )
}

/// Load a shop's selected employees (empty when none was saved).
pub fn load_selected_employees(store: &dyn KeyValueStore, shop: &str) -> StoreResult<Vec<String>> {
    load_string_list(store, &keys::selected_employees(shop))
}

/// Persist the selected week. The week is identified by its Monday;
/// any other weekday is rejected.
pub fn save_selected_week(store: &dyn KeyValueStore, week: NaiveDate) -> StoreResult<()> {
    if week.weekday() != Weekday::Mon {
        return Err(StoreError::validation(format!(
            "selected week must start on a Monday, got {week}"
        )));
    }
    store.set(keys::SELECTED_WEEK, &week.format("%Y-%m-%d").to_string())
}

/// Load the selected week. A stored date that is not a Monday is treated
/// as stale state: it is removed and `None` returned, as the original
/// week selector does.
pub fn load_selected_week(store: &dyn KeyValueStore) -> StoreResult<Option<NaiveDate>> {
    let Some(raw) = store.get(keys::SELECTED_WEEK)? else {
        return Ok(None);
    };
    match raw.parse::<NaiveDate>() {
        Ok(date) if date.weekday() == Weekday::Mon => Ok(Some(date)),
        Ok(date) => {
            warn!("load_selected_week: stored week {date} is not a Monday, clearing");
            store.remove(keys::SELECTED_WEEK)?;
            Ok(None)
        }
        Err(_) => {
            warn!("load_selected_week: unparsable stored week {raw:?}, clearing");
            store.remove(keys::SELECTED_WEEK)?;
            Ok(None)
        }
    }
}

fn load_string_list(store: &dyn KeyValueStore, key: &str) -> StoreResult<Vec<String>> {
    match store.get(key)? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(Vec::new()),
    }
}
