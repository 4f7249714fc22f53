//! Shift route handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use shiftdesk_core::Cancellation;
use tracing::info;
use uuid::Uuid;

use crate::dto::{
    BookTalentRequest, CancelShiftQuery, CancelShiftResponse, CancelStatus, ReassignedDto,
    ReplacementResponse, ResponseDto, ShiftListResponse,
};
use crate::error::ApiError;
use crate::state::AppState;

/// Shifts of a job. Unknown jobs have none.
///
/// GET /shift/{job_id}
pub async fn shifts_by_job(
    State(state): State<Arc<AppState>>,
    Path(job_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let shifts = state.engine.get_shifts_by_job(job_id).await?;
    Ok(Json(ResponseDto::new(ShiftListResponse::from(shifts))))
}

/// Shifts held by a talent.
///
/// GET /shift/talent/{talent_id}
pub async fn shifts_by_talent(
    State(state): State<Arc<AppState>>,
    Path(talent_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let shifts = state.engine.get_shifts_by_talent(talent_id).await?;
    Ok(Json(ResponseDto::new(ShiftListResponse::from(shifts))))
}

/// Book a talent on a shift.
///
/// PATCH /shift/{shift_id}/book
pub async fn book_talent(
    State(state): State<Arc<AppState>>,
    Path(shift_id): Path<Uuid>,
    Json(request): Json<BookTalentRequest>,
) -> Result<StatusCode, ApiError> {
    state.engine.book_talent(shift_id, request.talent).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Cancel a shift of a job.
///
/// DELETE /shift/cancelShift/{job_id}?shiftId=
pub async fn cancel_shift(
    State(state): State<Arc<AppState>>,
    Path(job_id): Path<Uuid>,
    Query(query): Query<CancelShiftQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let status = match state.engine.cancel_shift(job_id, query.shift_id).await? {
        Cancellation::Cancelled(_) => CancelStatus::Cancelled,
        Cancellation::AlreadyAbsent => CancelStatus::AlreadyAbsent,
    };
    Ok(Json(ResponseDto::new(CancelShiftResponse { status })))
}

/// Hand every shift of one talent to another.
///
/// DELETE /shift/cancelAll/{talent_id}/{replacement_talent_id}
pub async fn replace_talent(
    State(state): State<Arc<AppState>>,
    Path((talent_id, replacement_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Replacing talent {} with {}", talent_id, replacement_id);
    let replacement = state
        .engine
        .replace_all_shifts(talent_id, replacement_id)
        .await?;

    Ok(Json(ResponseDto::new(ReplacementResponse {
        reassigned: replacement
            .reassigned
            .into_iter()
            .map(ReassignedDto::from)
            .collect(),
    })))
}
