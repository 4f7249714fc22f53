//! HTTP route definitions.

use std::sync::Arc;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::http::{jobs, monitoring, shifts};
use crate::state::AppState;

/// Create the router.
///
/// ```text
/// /job
///   POST   /job          - Create job
///   GET    /job/{id}     - Get job
///   DELETE /job/{id}     - Delete job
///
/// /shift
///   GET    /shift/{id}                       - Shifts of a job
///   GET    /shift/talent/{id}                - Shifts of a talent
///   PATCH  /shift/{id}/book                  - Book a talent on a shift
///   DELETE /shift/cancelShift/{id}?shiftId=  - Cancel a shift of a job
///   DELETE /shift/cancelAll/{id}/{replacement} - Replace a talent
///
/// /health - Health check
/// ```
pub fn create_router(state: Arc<AppState>) -> Router {
    let job_routes = Router::new()
        .route("/", post(jobs::create_job))
        .route("/{id}", get(jobs::get_job).delete(jobs::delete_job));

    // Path params share one name per position
    let shift_routes = Router::new()
        .route("/{id}", get(shifts::shifts_by_job))
        .route("/{id}/book", patch(shifts::book_talent))
        .route("/talent/{id}", get(shifts::shifts_by_talent))
        .route("/cancelShift/{id}", delete(shifts::cancel_shift))
        .route("/cancelAll/{id}/{replacement}", delete(shifts::replace_talent));

    Router::new()
        .nest("/job", job_routes)
        .nest("/shift", shift_routes)
        .route("/health", get(monitoring::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
