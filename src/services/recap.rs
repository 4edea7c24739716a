//! Schedule derivation: from the sparse occupancy map to arrival, break,
//! return and departure times plus hour totals.
//!
//! Every function here is a pure read over its inputs. Missing or empty
//! inputs degrade to placeholder results with a logged warning; they never
//! fail the caller.

use crate::models::planning::{Day, Planning};
use crate::models::schedule::{
    DailyPeriod, DaySchedule, EmployeeDaySchedule, EmployeeRecap, ShopDaySchedule, ShopRecap,
    WeeklySchedule,
};
use crate::models::time::{format_tenths, minutes_to_tenths, TimeRange};
use crate::services::slots::SlotBuckets;
use log::warn;

/// Slots the employee works on the given day, in chronological order.
pub(crate) fn selected_slots(
    employee: &str,
    day: Day,
    planning: &Planning,
    buckets: &SlotBuckets,
) -> Vec<TimeRange> {
    let mut slots: Vec<TimeRange> = buckets
        .iter_slots()
        .filter(|slot| planning.is_working(day, **slot, employee))
        .copied()
        .collect();
    // Equivalent to the lexical sort of "HH:MM-HH:MM" strings the grid
    // used: zero-padded components make the two orders coincide.
    slots.sort();
    slots
}

/// Worked time on one day, in tenths of an hour.
pub(crate) fn daily_tenths(
    employee: &str,
    day: Day,
    planning: &Planning,
    buckets: &SlotBuckets,
) -> i64 {
    let minutes: u32 = selected_slots(employee, day, planning, buckets)
        .iter()
        .map(|slot| u32::from(slot.duration_minutes()))
        .sum();
    minutes_to_tenths(minutes)
}

/// Derive arrival/break/return/end from a non-empty sorted slot list.
///
/// Only the first gap between consecutive slots becomes the
/// departure/return pair; further gaps are ignored (kept from the original
/// grid — see `DailyPeriod`).
fn derive_period(slots: &[TimeRange]) -> DailyPeriod {
    let mut period = DailyPeriod::rest();
    period.arrival = slots[0].start.to_string();
    period.end = slots[slots.len() - 1].end.to_string();
    for pair in slots.windows(2) {
        if pair[0].end != pair[1].start {
            period.departure = pair[0].end.to_string();
            period.return_time = pair[1].start.to_string();
            break;
        }
    }
    period
}

/// One employee's derived schedule for one day.
pub fn daily_schedule(
    employee: &str,
    day: Day,
    planning: &Planning,
    buckets: &SlotBuckets,
) -> DaySchedule {
    let slots = selected_slots(employee, day, planning, buckets);
    if slots.is_empty() {
        return DaySchedule {
            day,
            periods: vec![DailyPeriod::rest()],
            total_hours: format_tenths(0),
        };
    }

    let minutes: u32 = slots.iter().map(|s| u32::from(s.duration_minutes())).sum();
    DaySchedule {
        day,
        periods: vec![derive_period(&slots)],
        total_hours: format_tenths(minutes_to_tenths(minutes)),
    }
}

/// Worked hours on one day, formatted with one decimal.
pub fn daily_hours(employee: &str, day: Day, planning: &Planning, buckets: &SlotBuckets) -> String {
    format_tenths(daily_tenths(employee, day, planning, buckets))
}

/// Hours worked by all given employees on one day, formatted. The sum of
/// the displayed per-employee totals, so the grid's numbers always add up.
pub fn total_daily_hours(
    employees: &[String],
    day: Day,
    planning: &Planning,
    buckets: &SlotBuckets,
) -> String {
    if employees.is_empty() {
        return format_tenths(0);
    }
    let tenths: i64 = employees
        .iter()
        .map(|employee| daily_tenths(employee, day, planning, buckets))
        .sum();
    format_tenths(tenths)
}

/// One employee's hours over the whole week, formatted. Defined as the sum
/// of the displayed daily totals so the recap's week line matches its rows.
pub fn weekly_hours(employee: &str, planning: &Planning, buckets: &SlotBuckets) -> String {
    let tenths: i64 = Day::ALL
        .iter()
        .map(|day| daily_tenths(employee, *day, planning, buckets))
        .sum();
    format_tenths(tenths)
}

/// One employee's full week, Monday through Sunday.
pub fn weekly_schedule(employee: &str, planning: &Planning, buckets: &SlotBuckets) -> WeeklySchedule {
    if buckets.is_empty() {
        warn!("weekly_schedule: empty slot set for {employee}, returning rest week");
    }
    let days: Vec<DaySchedule> = Day::ALL
        .iter()
        .map(|day| daily_schedule(employee, *day, planning, buckets))
        .collect();
    let week_total = format_tenths(
        Day::ALL
            .iter()
            .map(|day| daily_tenths(employee, *day, planning, buckets))
            .sum(),
    );
    WeeklySchedule { days, week_total }
}

/// Every employee's derived schedule for one day, preserving caller order.
pub fn shop_daily_schedule(
    employees: &[String],
    day: Day,
    planning: &Planning,
    buckets: &SlotBuckets,
) -> Vec<EmployeeDaySchedule> {
    if employees.is_empty() {
        warn!("shop_daily_schedule: no employees selected for {day}");
        return Vec::new();
    }
    employees
        .iter()
        .map(|employee| {
            let schedule = daily_schedule(employee, day, planning, buckets);
            EmployeeDaySchedule {
                name: employee.clone(),
                periods: schedule.periods,
                total_hours: schedule.total_hours,
            }
        })
        .collect()
}

/// The shop's whole week, day by day.
pub fn shop_week_schedule(
    employees: &[String],
    planning: &Planning,
    buckets: &SlotBuckets,
) -> Vec<ShopDaySchedule> {
    Day::ALL
        .iter()
        .map(|day| ShopDaySchedule {
            day: *day,
            employees: shop_daily_schedule(employees, *day, planning, buckets),
        })
        .collect()
}

/// Assemble the employee-recap export input.
pub fn employee_recap(employee: &str, planning: &Planning, buckets: &SlotBuckets) -> EmployeeRecap {
    EmployeeRecap {
        employee: employee.to_string(),
        schedule: weekly_schedule(employee, planning, buckets),
    }
}

/// Assemble the shop-recap export input: the full week plus per-day and
/// weekly cross-employee totals.
pub fn shop_recap(employees: &[String], planning: &Planning, buckets: &SlotBuckets) -> ShopRecap {
    let days = shop_week_schedule(employees, planning, buckets);
    let day_tenths: Vec<i64> = Day::ALL
        .iter()
        .map(|day| {
            employees
                .iter()
                .map(|employee| daily_tenths(employee, *day, planning, buckets))
                .sum()
        })
        .collect();
    let week_total = format_tenths(day_tenths.iter().sum());
    ShopRecap {
        days,
        day_totals: day_tenths.into_iter().map(format_tenths).collect(),
        week_total,
    }
}
