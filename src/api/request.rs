//! Request types for the Attendance Compliance Engine API.
//!
//! This module defines the deserialized request bodies for the API
//! endpoints. Optional dates default to today at handling time, matching
//! the engine's notion of "now" being the caller's local calendar date.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::AttendanceStatus;

/// Request body for `POST /attendance`.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceRequest {
    /// The date to record; defaults to today when omitted.
    pub date: Option<NaiveDate>,
    /// The status to record for that date.
    pub status: AttendanceStatus,
}

/// Request body for `POST /compliance/status`.
///
/// With a `period_number`, the status of that one period is returned.
/// Without one, every period containing the as-of date is evaluated, so
/// overlapping periods are all surfaced.
#[derive(Debug, Clone, Deserialize)]
pub struct ComplianceRequest {
    /// Evaluate a specific period rather than resolving by date.
    pub period_number: Option<u32>,
    /// The date to evaluate as of; defaults to today.
    pub as_of_date: Option<NaiveDate>,
}

/// Request body for `POST /compliance/predict`.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionRequest {
    /// Project a specific period; defaults to the first period containing
    /// the as-of date.
    pub period_number: Option<u32>,
    /// Future dates the caller plans to be in the office.
    #[serde(default)]
    pub planned_dates: Vec<NaiveDate>,
    /// The date to project from; defaults to today.
    pub as_of_date: Option<NaiveDate>,
}
