//! Shift definition.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hour (UTC) at which every shift starts.
pub const SHIFT_START_HOUR: i64 = 8;

/// Hour (UTC) at which every shift ends.
pub const SHIFT_END_HOUR: i64 = 17;

/// A single day's bookable time window belonging to one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique shift ID.
    pub id: Uuid,
    /// Owning job.
    pub job_id: Uuid,
    /// Assigned talent (None = unbooked).
    pub talent_id: Option<Uuid>,
    /// Window start.
    pub start_time: DateTime<Utc>,
    /// Window end.
    pub end_time: DateTime<Utc>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl Shift {
    /// Create an unbooked shift covering `day` from 08:00 to 17:00 UTC.
    pub fn for_day(job_id: Uuid, day: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            job_id,
            talent_id: None,
            start_time: at_hour(day, SHIFT_START_HOUR),
            end_time: at_hour(day, SHIFT_END_HOUR),
            created_at: Utc::now(),
        }
    }

    /// Assign a talent.
    pub fn with_talent(mut self, talent_id: Uuid) -> Self {
        self.talent_id = Some(talent_id);
        self
    }

    /// Check if a talent is assigned.
    pub fn is_booked(&self) -> bool {
        self.talent_id.is_some()
    }

    /// Check if the two windows intersect. Touching windows do not overlap.
    pub fn overlaps(&self, other: &Shift) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }

    /// Copy of this shift held by another talent.
    ///
    /// With `keep_id` the copy has the same ID, otherwise a fresh one. The
    /// job reference and the time window are always carried over.
    pub fn handed_over(&self, talent_id: Uuid, keep_id: bool) -> Self {
        Self {
            id: if keep_id { self.id } else { Uuid::new_v4() },
            job_id: self.job_id,
            talent_id: Some(talent_id),
            start_time: self.start_time,
            end_time: self.end_time,
            created_at: if keep_id { self.created_at } else { Utc::now() },
        }
    }
}

/// `day` at `hour`:00 UTC.
pub(crate) fn at_hour(day: NaiveDate, hour: i64) -> DateTime<Utc> {
    (day.and_time(NaiveTime::MIN) + Duration::hours(hour)).and_utc()
}
