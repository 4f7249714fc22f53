//! Scheduling errors.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// Scheduling error types.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Job not found.
    #[error("Job not found: {0}")]
    JobNotFound(Uuid),

    /// Shift not found.
    #[error("Shift not found: {0}")]
    ShiftNotFound(Uuid),

    /// A job with this ID already exists.
    #[error("Job already exists: {0}")]
    JobAlreadyExists(Uuid),

    /// The shift exists but belongs to another job.
    #[error("Shift {shift_id} does not belong to job {job_id}")]
    ShiftNotInJob { shift_id: Uuid, job_id: Uuid },

    /// The talent already holds a shift overlapping the requested window.
    #[error("Talent {talent_id} is already booked on shift {conflicting_shift_id} overlapping shift {shift_id}")]
    TalentUnavailable {
        talent_id: Uuid,
        shift_id: Uuid,
        conflicting_shift_id: Uuid,
    },

    /// Start date after end date.
    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// Storage error.
    #[error("Database error: {0}")]
    Database(String),
}

impl ScheduleError {
    /// A referenced job or shift does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::JobNotFound(_) | Self::ShiftNotFound(_))
    }

    /// The request contradicts the current state of the schedule.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::JobAlreadyExists(_) | Self::ShiftNotInJob { .. } | Self::TalentUnavailable { .. }
        )
    }
}
