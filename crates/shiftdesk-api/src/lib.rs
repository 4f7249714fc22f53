//! # ShiftDesk API
//!
//! HTTP interface over the scheduling engine.
//!
//! ```text
//! POST   /job                                      - Create job
//! GET    /job/{job_id}                             - Get job with shifts
//! DELETE /job/{job_id}                             - Delete job
//! GET    /shift/{job_id}                           - Shifts of a job
//! GET    /shift/talent/{talent_id}                 - Shifts of a talent
//! PATCH  /shift/{shift_id}/book                    - Book a talent
//! DELETE /shift/cancelShift/{job_id}?shiftId=      - Cancel a shift
//! DELETE /shift/cancelAll/{talent_id}/{replacement} - Replace a talent
//! GET    /health                                   - Health check
//! ```

pub mod dto;
pub mod error;
pub mod http;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use http::routes::create_router;
pub use server::{ApiServer, ApiServerConfig};
pub use state::AppState;
