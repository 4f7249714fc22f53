//! # ShiftDesk Core
//!
//! Scheduling engine for temporary-work assignments.
//!
//! ## Features
//!
//! - Job creation with one shift per calendar day
//! - Talent booking with optional overlap detection
//! - Shift cancellation scoped to its job
//! - Bulk replacement of one talent's shifts by another
//! - Pluggable persistence behind [`ScheduleStore`]

pub mod assignment;
pub mod config;
pub mod engine;
pub mod error;
pub mod job;
pub mod shift;
pub mod store;

pub use assignment::{Cancellation, Reassigned, Replacement};
pub use config::{ReplacementIdentity, SchedulingConfig};
pub use engine::SchedulingEngine;
pub use error::ScheduleError;
pub use job::{days_between, Job};
pub use shift::{Shift, SHIFT_END_HOUR, SHIFT_START_HOUR};
pub use store::{MemoryScheduleStore, ScheduleStore};
