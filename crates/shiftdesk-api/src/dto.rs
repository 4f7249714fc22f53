//! Request and response bodies.
//!
//! Field names are camelCase on the wire.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shiftdesk_core::{Job, Reassigned, Shift};

/// Envelope around every successful response body.
#[derive(Debug, Serialize)]
pub struct ResponseDto<T> {
    pub data: T,
}

impl<T> ResponseDto<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// POST /job
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub job_id: Uuid,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobResponse {
    pub job_id: Uuid,
}

/// PATCH /shift/{shift_id}/book
#[derive(Debug, Deserialize)]
pub struct BookTalentRequest {
    pub talent: Uuid,
}

/// Query of DELETE /shift/cancelShift/{job_id}
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelShiftQuery {
    pub shift_id: Uuid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CancelStatus {
    Cancelled,
    AlreadyAbsent,
}

#[derive(Debug, Serialize)]
pub struct CancelShiftResponse {
    pub status: CancelStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftDto {
    pub id: Uuid,
    pub talent_id: Option<Uuid>,
    pub job_id: Uuid,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl From<Shift> for ShiftDto {
    fn from(shift: Shift) -> Self {
        Self {
            id: shift.id,
            talent_id: shift.talent_id,
            job_id: shift.job_id,
            start: shift.start_time,
            end: shift.end_time,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ShiftListResponse {
    pub shifts: Vec<ShiftDto>,
}

impl From<Vec<Shift>> for ShiftListResponse {
    fn from(shifts: Vec<Shift>) -> Self {
        Self {
            shifts: shifts.into_iter().map(ShiftDto::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDto {
    pub id: Uuid,
    pub company_id: Uuid,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub shifts: Vec<ShiftDto>,
}

impl From<Job> for JobDto {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            company_id: job.company_id,
            start: job.start_time,
            end: job.end_time,
            created_at: job.created_at,
            shifts: job.shifts.into_iter().map(ShiftDto::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReassignedDto {
    pub previous_id: Uuid,
    pub shift: ShiftDto,
}

impl From<Reassigned> for ReassignedDto {
    fn from(change: Reassigned) -> Self {
        Self {
            previous_id: change.previous_id,
            shift: change.shift.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReplacementResponse {
    pub reassigned: Vec<ReassignedDto>,
}
