//! Scheduling engine.
//!
//! Every operation is a single request-scoped unit of work against the
//! store. The engine holds no state of its own besides its configuration.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::assignment::{Cancellation, Reassigned, Replacement};
use crate::config::{ReplacementIdentity, SchedulingConfig};
use crate::error::ScheduleError;
use crate::job::Job;
use crate::shift::Shift;
use crate::store::{MemoryScheduleStore, ScheduleStore};

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;

/// Creates jobs and manages the lifecycle of their shifts.
pub struct SchedulingEngine {
    config: SchedulingConfig,
    store: Arc<dyn ScheduleStore>,
}

impl SchedulingEngine {
    /// Create an engine backed by an in-memory store.
    pub fn new(config: SchedulingConfig) -> Self {
        Self {
            config,
            store: Arc::new(MemoryScheduleStore::new()),
        }
    }

    /// Create an engine with a custom store.
    pub fn with_store(config: SchedulingConfig, store: Arc<dyn ScheduleStore>) -> Self {
        Self { config, store }
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &SchedulingConfig {
        &self.config
    }

    /// Create a job and persist it with one shift per day in `[start_date, end_date)`.
    pub async fn create_job(
        &self,
        id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Job, ScheduleError> {
        let job = Job::new(id, start_date, end_date)?;

        if self.store.get_job(&id).await?.is_some() {
            warn!("Rejected job {}: ID already in use", id);
            return Err(ScheduleError::JobAlreadyExists(id));
        }

        self.store.save_job(&job).await?;
        info!(
            "Created job {} for company {} ({} shifts, {} to {})",
            job.id,
            job.company_id,
            job.shifts.len(),
            start_date,
            end_date
        );
        Ok(job)
    }

    /// Get a job with its current shifts.
    pub async fn get_job(&self, job_id: Uuid) -> Result<Option<Job>, ScheduleError> {
        self.store.get_job(&job_id).await
    }

    /// All shifts of a job. Unknown jobs have no shifts.
    pub async fn get_shifts_by_job(&self, job_id: Uuid) -> Result<Vec<Shift>, ScheduleError> {
        self.store.find_shifts_by_job(&job_id).await
    }

    /// All shifts currently assigned to a talent.
    pub async fn get_shifts_by_talent(&self, talent_id: Uuid) -> Result<Vec<Shift>, ScheduleError> {
        self.store.find_shifts_by_talent(&talent_id).await
    }

    /// Assign a talent to a shift, overwriting any previous assignment.
    pub async fn book_talent(&self, shift_id: Uuid, talent_id: Uuid) -> Result<Shift, ScheduleError> {
        let shift = self
            .store
            .get_shift(&shift_id)
            .await?
            .ok_or(ScheduleError::ShiftNotFound(shift_id))?;

        let previous = shift.talent_id;

        if self.config.reject_overlaps {
            let held = self.store.find_shifts_by_talent(&talent_id).await?;
            ensure_free(talent_id, &shift.with_talent(talent_id), &held)?;
        }

        // Update-only: a shift cancelled or reissued since the read stays gone.
        let Some(booked) = self.store.assign_talent(&shift_id, talent_id).await? else {
            warn!("Cannot book talent {}: shift {} vanished", talent_id, shift_id);
            return Err(ScheduleError::ShiftNotFound(shift_id));
        };

        match previous {
            Some(prev) if prev != talent_id => {
                info!("Booked talent {} on shift {} (was {})", talent_id, shift_id, prev)
            }
            _ => info!("Booked talent {} on shift {}", talent_id, shift_id),
        }
        Ok(booked)
    }

    /// Cancel a shift within the scope of its job.
    ///
    /// The job must exist. A shift that is already gone counts as cancelled.
    pub async fn cancel_shift(&self, job_id: Uuid, shift_id: Uuid) -> Result<Cancellation, ScheduleError> {
        if self.store.get_job(&job_id).await?.is_none() {
            warn!("Cannot cancel shift {}: job {} not found", shift_id, job_id);
            return Err(ScheduleError::JobNotFound(job_id));
        }

        let Some(shift) = self.store.get_shift(&shift_id).await? else {
            debug!("Shift {} already absent from job {}", shift_id, job_id);
            return Ok(Cancellation::AlreadyAbsent);
        };

        if shift.job_id != job_id {
            warn!(
                "Cannot cancel shift {}: belongs to job {}, not {}",
                shift_id, shift.job_id, job_id
            );
            return Err(ScheduleError::ShiftNotInJob { shift_id, job_id });
        }

        self.store.delete_shift(&shift_id).await?;
        info!("Cancelled shift {} of job {}", shift_id, job_id);
        Ok(Cancellation::Cancelled(shift))
    }

    /// Move every shift held by `talent_id` to `replacement_id`.
    ///
    /// Each shift is swapped in its own store transaction unless
    /// `all_or_nothing` is set, in which case the whole set is swapped at
    /// once. In the independent mode a shift cancelled in the meantime is
    /// skipped, the first other failure is returned and the shifts moved
    /// before it stay moved.
    pub async fn replace_all_shifts(
        &self,
        talent_id: Uuid,
        replacement_id: Uuid,
    ) -> Result<Replacement, ScheduleError> {
        let held = self.store.find_shifts_by_talent(&talent_id).await?;
        if held.is_empty() || talent_id == replacement_id {
            debug!("Nothing to replace for talent {}", talent_id);
            return Ok(Replacement::default());
        }

        let keep_id = self.config.replacement_identity == ReplacementIdentity::Preserve;
        let changes: Vec<Reassigned> = held
            .iter()
            .map(|shift| Reassigned {
                previous_id: shift.id,
                shift: shift.handed_over(replacement_id, keep_id),
            })
            .collect();

        let reassigned = if self.config.all_or_nothing {
            self.reassign_together(replacement_id, changes).await?
        } else {
            self.reassign_each(replacement_id, changes).await?
        };

        info!(
            "Replaced talent {} with {} on {} shifts",
            talent_id,
            replacement_id,
            reassigned.len()
        );
        Ok(Replacement { reassigned })
    }

    /// Delete a job and all of its shifts.
    pub async fn delete_job(&self, job_id: Uuid) -> Result<(), ScheduleError> {
        if self.store.get_job(&job_id).await?.is_none() {
            return Err(ScheduleError::JobNotFound(job_id));
        }

        self.store.delete_job(&job_id).await?;
        info!("Deleted job {}", job_id);
        Ok(())
    }

    async fn reassign_together(
        &self,
        replacement_id: Uuid,
        changes: Vec<Reassigned>,
    ) -> Result<Vec<Reassigned>, ScheduleError> {
        if self.config.reject_overlaps {
            let mut taken = self.store.find_shifts_by_talent(&replacement_id).await?;
            for change in &changes {
                ensure_free(replacement_id, &change.shift, &taken)?;
                taken.push(change.shift.clone());
            }
        }

        self.store.reassign_shifts(&changes).await?;
        Ok(changes)
    }

    async fn reassign_each(
        &self,
        replacement_id: Uuid,
        changes: Vec<Reassigned>,
    ) -> Result<Vec<Reassigned>, ScheduleError> {
        let total = changes.len();
        let mut done = Vec::with_capacity(total);

        for change in changes {
            match self.reassign_one(replacement_id, &change).await {
                Ok(()) => {
                    debug!("Moved shift {} to {}", change.previous_id, change.shift.id);
                    done.push(change);
                }
                Err(ScheduleError::ShiftNotFound(id)) if id == change.previous_id => {
                    debug!("Shift {} vanished before replacement, skipping", id);
                }
                Err(e) => {
                    warn!(
                        "Replacement stopped at shift {} after {}/{} shifts: {}",
                        change.previous_id,
                        done.len(),
                        total,
                        e
                    );
                    return Err(e);
                }
            }
        }

        Ok(done)
    }

    async fn reassign_one(&self, replacement_id: Uuid, change: &Reassigned) -> Result<(), ScheduleError> {
        if self.config.reject_overlaps {
            let taken = self.store.find_shifts_by_talent(&replacement_id).await?;
            ensure_free(replacement_id, &change.shift, &taken)?;
        }
        self.store.reassign_shifts(std::slice::from_ref(change)).await
    }
}

/// Fail if `candidate` overlaps any other shift in `taken`.
fn ensure_free(talent_id: Uuid, candidate: &Shift, taken: &[Shift]) -> Result<(), ScheduleError> {
    match taken
        .iter()
        .find(|held| held.id != candidate.id && held.overlaps(candidate))
    {
        Some(conflict) => {
            warn!(
                "Talent {} already booked on shift {} overlapping {}",
                talent_id, conflict.id, candidate.id
            );
            Err(ScheduleError::TalentUnavailable {
                talent_id,
                shift_id: candidate.id,
                conflicting_shift_id: conflict.id,
            })
        }
        None => Ok(()),
    }
}
