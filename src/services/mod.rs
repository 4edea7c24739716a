//! Service layer: the pure planning algorithms.
//!
//! - [`slots`]: partition the configured window into bucketed time slots
//! - [`recap`]: derive daily/weekly schedules and hour totals from the
//!   occupancy map
//! - [`clipboard`]: copy/merge occupancy data across days, employees and
//!   weeks

pub mod clipboard;
pub mod recap;
pub mod slots;


#[cfg(test)]
#[path = "recap_tests.rs"]
mod recap_tests;
