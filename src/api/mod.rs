//! HTTP API module for the Attendance Compliance Engine.
//!
//! This module provides the REST endpoints for recording attendance and
//! querying compliance status, projections, and reporting periods.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AttendanceRequest, ComplianceRequest, PredictionRequest};
pub use response::{ApiError, ComplianceReport, ComplianceResponse};
pub use state::AppState;
