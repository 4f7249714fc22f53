//! Schedule persistence store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::assignment::Reassigned;
use crate::error::ScheduleError;
use crate::job::Job;
use crate::shift::Shift;

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

/// Schedule store trait for persistence.
///
/// Every method is atomic: a call either applies all of its writes or none.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Insert a new job together with its shifts.
    async fn save_job(&self, job: &Job) -> Result<(), ScheduleError>;

    /// Load a job and its current shifts.
    async fn get_job(&self, id: &Uuid) -> Result<Option<Job>, ScheduleError>;

    /// Delete a job and every shift that references it.
    async fn delete_job(&self, id: &Uuid) -> Result<(), ScheduleError>;

    /// Set the talent of an existing shift and return the updated record.
    ///
    /// Returns `None` and writes nothing if the shift is gone.
    async fn assign_talent(&self, shift_id: &Uuid, talent_id: Uuid) -> Result<Option<Shift>, ScheduleError>;

    /// Load a shift by ID.
    async fn get_shift(&self, id: &Uuid) -> Result<Option<Shift>, ScheduleError>;

    /// Delete a shift. Deleting a missing shift is not an error.
    async fn delete_shift(&self, id: &Uuid) -> Result<(), ScheduleError>;

    /// All shifts of a job, ordered by start time.
    async fn find_shifts_by_job(&self, job_id: &Uuid) -> Result<Vec<Shift>, ScheduleError>;

    /// All shifts held by a talent across jobs, ordered by start time.
    async fn find_shifts_by_talent(&self, talent_id: &Uuid) -> Result<Vec<Shift>, ScheduleError>;

    /// Replace each `previous_id` with its successor shift.
    ///
    /// Fails with [`ScheduleError::ShiftNotFound`] without writing anything
    /// if any previous shift is gone.
    async fn reassign_shifts(&self, changes: &[Reassigned]) -> Result<(), ScheduleError>;
}

/// Order shifts by start time, breaking ties by ID.
pub fn sort_shifts(shifts: &mut [Shift]) {
    shifts.sort_by(|a, b| a.start_time.cmp(&b.start_time).then_with(|| a.id.cmp(&b.id)));
}

#[derive(Default)]
struct MemoryState {
    jobs: HashMap<Uuid, Job>,
    shifts: HashMap<Uuid, Shift>,
}

impl MemoryState {
    fn shifts_where(&self, predicate: impl Fn(&Shift) -> bool) -> Vec<Shift> {
        let mut shifts: Vec<Shift> = self.shifts.values().filter(|&s| predicate(s)).cloned().collect();
        sort_shifts(&mut shifts);
        shifts
    }
}

/// In-memory schedule store.
///
/// Jobs and shifts sit behind one lock so multi-record writes are atomic.
pub struct MemoryScheduleStore {
    state: RwLock<MemoryState>,
}

impl MemoryScheduleStore {
    /// Create a new memory store.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState::default()),
        }
    }
}

impl Default for MemoryScheduleStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScheduleStore for MemoryScheduleStore {
    async fn save_job(&self, job: &Job) -> Result<(), ScheduleError> {
        let mut state = self.state.write().await;
        if state.jobs.contains_key(&job.id) {
            return Err(ScheduleError::JobAlreadyExists(job.id));
        }
        if let Some(shift) = job.shifts.iter().find(|s| state.shifts.contains_key(&s.id)) {
            return Err(ScheduleError::Database(format!("shift {} is already stored", shift.id)));
        }

        for shift in &job.shifts {
            state.shifts.insert(shift.id, shift.clone());
        }
        let mut header = job.clone();
        header.shifts.clear();
        state.jobs.insert(job.id, header);

        debug!("Saved job {} with {} shifts", job.id, job.shifts.len());
        Ok(())
    }

    async fn get_job(&self, id: &Uuid) -> Result<Option<Job>, ScheduleError> {
        let state = self.state.read().await;
        Ok(state.jobs.get(id).map(|job| {
            let mut job = job.clone();
            job.shifts = state.shifts_where(|s| s.job_id == *id);
            job
        }))
    }

    async fn delete_job(&self, id: &Uuid) -> Result<(), ScheduleError> {
        let mut state = self.state.write().await;
        if state.jobs.remove(id).is_some() {
            state.shifts.retain(|_, s| s.job_id != *id);
            debug!("Deleted job {} and its shifts", id);
        }
        Ok(())
    }

    async fn assign_talent(&self, shift_id: &Uuid, talent_id: Uuid) -> Result<Option<Shift>, ScheduleError> {
        let mut state = self.state.write().await;
        Ok(state.shifts.get_mut(shift_id).map(|shift| {
            shift.talent_id = Some(talent_id);
            shift.clone()
        }))
    }

    async fn get_shift(&self, id: &Uuid) -> Result<Option<Shift>, ScheduleError> {
        let state = self.state.read().await;
        Ok(state.shifts.get(id).cloned())
    }

    async fn delete_shift(&self, id: &Uuid) -> Result<(), ScheduleError> {
        let mut state = self.state.write().await;
        state.shifts.remove(id);
        Ok(())
    }

    async fn find_shifts_by_job(&self, job_id: &Uuid) -> Result<Vec<Shift>, ScheduleError> {
        let state = self.state.read().await;
        Ok(state.shifts_where(|s| s.job_id == *job_id))
    }

    async fn find_shifts_by_talent(&self, talent_id: &Uuid) -> Result<Vec<Shift>, ScheduleError> {
        let state = self.state.read().await;
        Ok(state.shifts_where(|s| s.talent_id == Some(*talent_id)))
    }

    async fn reassign_shifts(&self, changes: &[Reassigned]) -> Result<(), ScheduleError> {
        let mut state = self.state.write().await;

        // Validate the whole batch before touching anything.
        for change in changes {
            if !state.shifts.contains_key(&change.previous_id) {
                return Err(ScheduleError::ShiftNotFound(change.previous_id));
            }
            if !state.jobs.contains_key(&change.shift.job_id) {
                return Err(ScheduleError::Database(format!(
                    "shift {} references missing job {}",
                    change.shift.id, change.shift.job_id
                )));
            }
        }

        for change in changes {
            state.shifts.remove(&change.previous_id);
            state.shifts.insert(change.shift.id, change.shift.clone());
        }

        debug!("Reassigned {} shifts", changes.len());
        Ok(())
    }
}
