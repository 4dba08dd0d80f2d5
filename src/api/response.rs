//! Response types for the Attendance Compliance Engine API.
//!
//! This module defines the success and error response structures for the
//! HTTP API, including the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::ComplianceStatus;

/// Compliance status as presented to API clients.
///
/// Wraps the engine's [`ComplianceStatus`] with derived display
/// statistics. `required_attendance_rate` is the percentage of remaining
/// workdays that must be spent in the office; it is presentation-only and
/// plays no part in risk classification, which uses the absolute buffer
/// rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceResponse {
    /// The computed compliance status.
    #[serde(flatten)]
    pub status: ComplianceStatus,
    /// Percentage of remaining workdays that must be in-office (0–100,
    /// one decimal place; 0 when no workdays remain).
    pub required_attendance_rate: f64,
}

impl From<ComplianceStatus> for ComplianceResponse {
    fn from(status: ComplianceStatus) -> Self {
        let required_attendance_rate = if status.remaining_workdays == 0 {
            0.0
        } else {
            let rate = f64::from(status.remaining_required_days)
                / f64::from(status.remaining_workdays)
                * 100.0;
            (rate * 10.0).round() / 10.0
        };

        Self {
            status,
            required_attendance_rate,
        }
    }
}

/// Response body for `POST /compliance/status`.
///
/// Contains one entry per evaluated period; overlapping periods each get
/// their own status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// The date the statuses were evaluated as of.
    pub as_of_date: NaiveDate,
    /// One status per matching period, in configured period order.
    pub statuses: Vec<ComplianceResponse>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a period-number-not-found error response.
    pub fn period_number_not_found(period_number: u32) -> Self {
        Self::with_details(
            "PERIOD_NOT_FOUND",
            format!("Reporting period {} is not defined", period_number),
            "No configured reporting period has this period number",
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfig { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Invalid configuration", message),
            },
            EngineError::PeriodNotFound { date } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "PERIOD_NOT_FOUND",
                    format!("No reporting period defined for date {}", date),
                    "The date is not covered by any configured reporting period",
                ),
            },
            EngineError::InvalidDateRange { start, end } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(format!(
                    "Invalid date range: start {} is after end {}",
                    start, end
                )),
            },
            EngineError::InvalidStatus { value } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORAGE_ERROR",
                    format!("Invalid attendance status '{}' in stored data", value),
                    "Stored attendance records contain a status outside in-office/remote",
                ),
            },
            EngineError::Storage { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORAGE_ERROR",
                    "Attendance storage failure",
                    format!("{}: {}", path, message),
                ),
            },
        }
    }
}
