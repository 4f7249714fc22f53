//! Job definition and shift derivation.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ScheduleError;
use crate::shift::{at_hour, Shift, SHIFT_END_HOUR, SHIFT_START_HOUR};

/// A company's work order spanning a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Job ID, supplied by the caller.
    pub id: Uuid,
    /// Company that posted the job.
    pub company_id: Uuid,
    /// Start date at 08:00 UTC.
    pub start_time: DateTime<Utc>,
    /// End date at 17:00 UTC.
    pub end_time: DateTime<Utc>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Shifts ordered by start time.
    #[serde(default)]
    pub shifts: Vec<Shift>,
}

impl Job {
    /// Create a job for a new company posting and derive its shifts.
    ///
    /// One shift is derived per calendar day in `[start_date, end_date)`, so
    /// a job whose dates are equal has no shifts.
    pub fn new(id: Uuid, start_date: NaiveDate, end_date: NaiveDate) -> Result<Self, ScheduleError> {
        if start_date > end_date {
            return Err(ScheduleError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }

        let shifts = (0..days_between(start_date, end_date))
            .map(|offset| Shift::for_day(id, start_date + Duration::days(offset)))
            .collect();

        Ok(Self {
            id,
            company_id: Uuid::new_v4(),
            start_time: at_hour(start_date, SHIFT_START_HOUR),
            end_time: at_hour(end_date, SHIFT_END_HOUR),
            created_at: Utc::now(),
            shifts,
        })
    }

    /// Number of shifts currently attached.
    pub fn shift_count(&self) -> usize {
        self.shifts.len()
    }
}

/// Whole days from `start` to `end`; negative when `end` comes first.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}
