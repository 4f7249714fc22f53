//! Application state.

use std::sync::Arc;
use std::time::Instant;

use shiftdesk_core::SchedulingEngine;

/// Application state shared across handlers.
pub struct AppState {
    pub engine: Arc<SchedulingEngine>,
    start_time: Instant,
}

impl AppState {
    pub fn new(engine: Arc<SchedulingEngine>) -> Self {
        Self {
            engine,
            start_time: Instant::now(),
        }
    }

    /// Get uptime.
    pub fn uptime(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }
}
