//! Row mapping between SQLite and the schedule model.

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

use shiftdesk_core::{Job, Shift};

const SHIFT_COLUMNS: &str = "id, job_id, talent_id, start_time, end_time, created_at";

pub(crate) const SELECT_JOB: &str =
    "SELECT id, company_id, start_time, end_time, created_at FROM jobs WHERE id = ?1";

pub(crate) fn insert_job(conn: &Connection, job: &Job) -> Result<(), rusqlite::Error> {
    conn.execute(
        "INSERT INTO jobs (id, company_id, start_time, end_time, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            job.id.to_string(),
            job.company_id.to_string(),
            job.start_time.to_rfc3339(),
            job.end_time.to_rfc3339(),
            job.created_at.to_rfc3339(),
        ],
    )?;
    Ok(())
}

pub(crate) fn insert_shift(conn: &Connection, shift: &Shift) -> Result<(), rusqlite::Error> {
    conn.execute(
        "INSERT INTO shifts (id, job_id, talent_id, start_time, end_time, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            shift.id.to_string(),
            shift.job_id.to_string(),
            shift.talent_id.map(|t| t.to_string()),
            shift.start_time.to_rfc3339(),
            shift.end_time.to_rfc3339(),
            shift.created_at.to_rfc3339(),
        ],
    )?;
    Ok(())
}

/// Set the talent of an existing shift. Never inserts.
pub(crate) fn update_talent(
    conn: &Connection,
    shift_id: &str,
    talent_id: &str,
) -> Result<Option<Shift>, rusqlite::Error> {
    let sql = format!(
        "UPDATE shifts SET talent_id = ?2 WHERE id = ?1 RETURNING {}",
        SHIFT_COLUMNS
    );
    conn.query_row(&sql, params![shift_id, talent_id], row_to_shift)
        .optional()
}

/// Shifts whose `column` equals `value`, ordered by start time.
pub(crate) fn select_shifts(
    conn: &Connection,
    column: ShiftColumn,
    value: &str,
) -> Result<Vec<Shift>, rusqlite::Error> {
    let sql = format!(
        "SELECT {} FROM shifts WHERE {} = ?1 ORDER BY start_time, id",
        SHIFT_COLUMNS,
        column.as_str()
    );
    let mut stmt = conn.prepare(&sql)?;
    let shifts = stmt
        .query_map([value], row_to_shift)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(shifts)
}

/// Columns shifts can be looked up by.
#[derive(Debug, Clone, Copy)]
pub(crate) enum ShiftColumn {
    Id,
    Job,
    Talent,
}

impl ShiftColumn {
    fn as_str(self) -> &'static str {
        match self {
            ShiftColumn::Id => "id",
            ShiftColumn::Job => "job_id",
            ShiftColumn::Talent => "talent_id",
        }
    }
}

pub(crate) fn row_to_job(row: &Row<'_>) -> Result<Job, rusqlite::Error> {
    Ok(Job {
        id: uuid_at(row, 0)?,
        company_id: uuid_at(row, 1)?,
        start_time: time_at(row, 2)?,
        end_time: time_at(row, 3)?,
        created_at: time_at(row, 4)?,
        shifts: Vec::new(),
    })
}

fn row_to_shift(row: &Row<'_>) -> Result<Shift, rusqlite::Error> {
    let talent_id = match row.get::<_, Option<String>>(2)? {
        Some(raw) => Some(parse_uuid(2, &raw)?),
        None => None,
    };

    Ok(Shift {
        id: uuid_at(row, 0)?,
        job_id: uuid_at(row, 1)?,
        talent_id,
        start_time: time_at(row, 3)?,
        end_time: time_at(row, 4)?,
        created_at: time_at(row, 5)?,
    })
}

fn uuid_at(row: &Row<'_>, idx: usize) -> Result<Uuid, rusqlite::Error> {
    let raw: String = row.get(idx)?;
    parse_uuid(idx, &raw)
}

fn parse_uuid(idx: usize, raw: &str) -> Result<Uuid, rusqlite::Error> {
    Uuid::parse_str(raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn time_at(row: &Row<'_>, idx: usize) -> Result<DateTime<Utc>, rusqlite::Error> {
    let raw: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
