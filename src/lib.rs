//! # planhebdo
//!
//! Weekly staff-planning core for a shop scheduling grid.
//!
//! This crate holds the algorithmic heart of a browser-based weekly
//! planning tool: a user picks a shop, a week and a set of employees,
//! then toggles cells in a time-slot grid to mark working periods. The
//! crate derives everything the grid and the printable recaps display.
//!
//! ## Features
//!
//! - **Slot partitioning**: cut a configured daily window into 15/30/60
//!   minute slots, bucketed into display periods (Matin, Après-midi, ...)
//! - **Schedule derivation**: per employee and day, arrival, break,
//!   return and departure times plus hour totals, from the sparse
//!   occupancy map
//! - **Copy/merge**: copy a day, one employee's day, or a whole stored
//!   week onto other days, employees or weeks, with merge semantics
//! - **Persistence boundary**: checksummed planning documents over a
//!   string-keyed store, with graceful fallback on unreadable data
//!
//! ## Architecture
//!
//! - [`api`]: consolidated DTO surface for UI handlers and exports
//! - [`models`]: time primitives, slot configuration, the occupancy map
//!   and derived schedule types
//! - [`services`]: the pure planning algorithms (partition, recap,
//!   clipboard)
//! - [`store`]: the key-value persistence boundary
//!
//! ## Execution model
//!
//! Every core operation is a synchronous pure function over its inputs:
//! it returns a fresh value (or a placeholder plus a reportable
//! condition) and never mutates shared state. The occupancy map for a
//! (shop, week) pair has exactly one writer at a time — the caller — so
//! the core performs no internal synchronization. A host exposing these
//! functions to concurrent callers must serialize per (shop, week) key
//! itself.

pub mod api;
pub mod models;
pub mod services;
pub mod store;
