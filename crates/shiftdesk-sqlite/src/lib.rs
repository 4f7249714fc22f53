//! SQLite schedule store for ShiftDesk.
//!
//! Provides durable job and shift storage using SQLite.

mod rows;
mod schema;
mod store;

pub use store::SqliteScheduleStore;
