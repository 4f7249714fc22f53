//! HTTP handlers and routing.

pub mod jobs;
pub mod monitoring;
pub mod routes;
pub mod shifts;
