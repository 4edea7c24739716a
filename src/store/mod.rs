//! Persistence boundary for planning data.
//!
//! A planning is durable per (shop, week) pair in a plain string-keyed
//! get/set store. The module layers:
//!
//! - [`repository`]: the `KeyValueStore` trait and its error type
//! - [`local`]: in-memory implementation for tests and local development
//! - [`keys`]: the storage key namespace
//! - [`checksum`]: integrity hash for persisted planning documents
//! - [`services`]: typed load/save helpers (use these in application code)
//!
//! The core treats the store as an external collaborator: every mutation
//! happens through a value the caller commits, and unreadable persisted
//! data degrades to an empty planning with a warning rather than an error
//! reaching the user.

pub mod checksum;
pub mod keys;
pub mod local;
pub mod repository;
pub mod services;

pub use checksum::calculate_checksum;
pub use local::LocalStore;
pub use repository::{KeyValueStore, StoreError, StoreResult};
