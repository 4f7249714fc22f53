//! SQLite schedule store implementation.

use std::path::Path;

use async_trait::async_trait;
use rusqlite::{ffi, OptionalExtension};
use tokio_rusqlite::Connection;
use tracing::debug;
use uuid::Uuid;

use shiftdesk_core::{Job, Reassigned, ScheduleError, ScheduleStore, Shift};

use crate::rows::{
    insert_job, insert_shift, row_to_job, select_shifts, update_talent, ShiftColumn, SELECT_JOB,
};
use crate::schema::init_schema;

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

fn db_err(e: tokio_rusqlite::Error) -> ScheduleError {
    ScheduleError::Database(e.to_string())
}

fn is_primary_key_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY
    )
}

/// SQLite-based schedule store.
///
/// Multi-record writes run inside a single SQLite transaction.
#[derive(Clone)]
pub struct SqliteScheduleStore {
    conn: Connection,
}

impl SqliteScheduleStore {
    /// Create a new in-memory database.
    pub async fn in_memory() -> Result<Self, ScheduleError> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| ScheduleError::Database(e.to_string()))?;

        conn.call(|conn| Ok(init_schema(conn)?))
            .await
            .map_err(db_err)?;

        Ok(Self { conn })
    }

    /// Create a new file-backed database.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let path = path.as_ref().to_path_buf();
        debug!("Opening schedule database at {}", path.display());
        let conn = Connection::open(path)
            .await
            .map_err(|e| ScheduleError::Database(e.to_string()))?;

        conn.call(|conn| Ok(init_schema(conn)?))
            .await
            .map_err(db_err)?;

        Ok(Self { conn })
    }

    async fn shifts_where(&self, column: ShiftColumn, value: &Uuid) -> Result<Vec<Shift>, ScheduleError> {
        let value = value.to_string();
        self.conn
            .call(move |conn| Ok(select_shifts(conn, column, &value)?))
            .await
            .map_err(db_err)
    }
}

#[async_trait]
impl ScheduleStore for SqliteScheduleStore {
    async fn save_job(&self, job: &Job) -> Result<(), ScheduleError> {
        let job = job.clone();
        let (job_id, count) = (job.id, job.shifts.len());

        self.conn
            .call(move |conn| {
                let tx = conn.transaction()?;
                match insert_job(&tx, &job) {
                    Err(e) if is_primary_key_violation(&e) => {
                        return Ok(Err(ScheduleError::JobAlreadyExists(job.id)));
                    }
                    other => other?,
                }
                for shift in &job.shifts {
                    insert_shift(&tx, shift)?;
                }
                tx.commit()?;
                Ok(Ok(()))
            })
            .await
            .map_err(db_err)??;

        debug!("Saved job {} with {} shifts", job_id, count);
        Ok(())
    }

    async fn get_job(&self, id: &Uuid) -> Result<Option<Job>, ScheduleError> {
        let id = id.to_string();
        self.conn
            .call(move |conn| {
                let job = conn.query_row(SELECT_JOB, [&id], row_to_job).optional()?;
                match job {
                    Some(mut job) => {
                        job.shifts = select_shifts(conn, ShiftColumn::Job, &id)?;
                        Ok(Some(job))
                    }
                    None => Ok(None),
                }
            })
            .await
            .map_err(db_err)
    }

    async fn delete_job(&self, id: &Uuid) -> Result<(), ScheduleError> {
        let id = id.to_string();
        self.conn
            .call(move |conn| {
                // Shifts go with the job through ON DELETE CASCADE.
                conn.execute("DELETE FROM jobs WHERE id = ?1", [&id])?;
                Ok(())
            })
            .await
            .map_err(db_err)
    }

    async fn assign_talent(&self, shift_id: &Uuid, talent_id: Uuid) -> Result<Option<Shift>, ScheduleError> {
        let (shift_id, talent_id) = (shift_id.to_string(), talent_id.to_string());
        self.conn
            .call(move |conn| Ok(update_talent(conn, &shift_id, &talent_id)?))
            .await
            .map_err(db_err)
    }

    async fn get_shift(&self, id: &Uuid) -> Result<Option<Shift>, ScheduleError> {
        let mut found = self.shifts_where(ShiftColumn::Id, id).await?;
        Ok(found.pop())
    }

    async fn delete_shift(&self, id: &Uuid) -> Result<(), ScheduleError> {
        let id = id.to_string();
        self.conn
            .call(move |conn| {
                conn.execute("DELETE FROM shifts WHERE id = ?1", [&id])?;
                Ok(())
            })
            .await
            .map_err(db_err)
    }

    async fn find_shifts_by_job(&self, job_id: &Uuid) -> Result<Vec<Shift>, ScheduleError> {
        self.shifts_where(ShiftColumn::Job, job_id).await
    }

    async fn find_shifts_by_talent(&self, talent_id: &Uuid) -> Result<Vec<Shift>, ScheduleError> {
        self.shifts_where(ShiftColumn::Talent, talent_id).await
    }

    async fn reassign_shifts(&self, changes: &[Reassigned]) -> Result<(), ScheduleError> {
        let changes = changes.to_vec();
        let count = changes.len();

        let outcome = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction()?;
                for change in &changes {
                    let removed = tx.execute(
                        "DELETE FROM shifts WHERE id = ?1",
                        [change.previous_id.to_string()],
                    )?;
                    if removed == 0 {
                        // Dropping the transaction rolls back earlier deletes.
                        return Ok(Err(ScheduleError::ShiftNotFound(change.previous_id)));
                    }
                    insert_shift(&tx, &change.shift)?;
                }
                tx.commit()?;
                Ok(Ok(()))
            })
            .await
            .map_err(db_err)?;

        if outcome.is_ok() {
            debug!("Reassigned {} shifts", count);
        }
        outcome
    }
}
