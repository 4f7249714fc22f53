//! Job route handlers.
//!
//! - POST   /job          - Create job
//! - GET    /job/{job_id} - Get job
//! - DELETE /job/{job_id} - Delete job

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::dto::{CreateJobRequest, CreateJobResponse, JobDto, ResponseDto};
use crate::error::ApiError;
use crate::state::AppState;

/// Create a job and derive its shifts.
///
/// POST /job
pub async fn create_job(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateJobRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!(
        "Creating job: {} ({} to {})",
        request.job_id, request.start, request.end
    );

    let job = state
        .engine
        .create_job(request.job_id, request.start, request.end)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ResponseDto::new(CreateJobResponse { job_id: job.id })),
    ))
}

/// Get a job by ID.
///
/// GET /job/{job_id}
pub async fn get_job(
    State(state): State<Arc<AppState>>,
    Path(job_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    match state.engine.get_job(job_id).await? {
        Some(job) => Ok(Json(ResponseDto::new(JobDto::from(job)))),
        None => Err(ApiError::NotFound(format!("Job '{}' not found", job_id))),
    }
}

/// Delete a job and its shifts.
///
/// DELETE /job/{job_id}
pub async fn delete_job(
    State(state): State<Arc<AppState>>,
    Path(job_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    info!("Deleting job: {}", job_id);
    state.engine.delete_job(job_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
