pub mod config;
pub mod planning;
pub mod schedule;
pub mod time;

pub use config::*;
pub use planning::*;
pub use schedule::*;
pub use time::*;
