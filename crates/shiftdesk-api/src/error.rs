//! API error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shiftdesk_core::ScheduleError;
use thiserror::Error;
use tracing::error;

/// Errors returned by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Engine or store failure.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// Lookup that found nothing.
    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Schedule(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Self::Schedule(e) if e.is_conflict() => StatusCode::CONFLICT,
            Self::Schedule(ScheduleError::InvalidDateRange { .. }) => StatusCode::BAD_REQUEST,
            Self::Schedule(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }
        (status, Json(serde_json::json!({"error": self.to_string()}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    #[test]
    fn test_not_found_status() {
        assert_eq!(ApiError::NotFound("job".into()).status(), StatusCode::NOT_FOUND);
        let err = ApiError::from(ScheduleError::ShiftNotFound(Uuid::new_v4()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_status() {
        let err = ApiError::from(ScheduleError::ShiftNotInJob {
            shift_id: Uuid::new_v4(),
            job_id: Uuid::new_v4(),
        });
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_bad_range_status() {
        let err = ApiError::from(ScheduleError::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        });
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_database_status() {
        let err = ApiError::from(ScheduleError::Database("disk full".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("disk full"));
    }
}
