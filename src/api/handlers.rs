//! HTTP request handlers for the Attendance Compliance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{Local, NaiveDate};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{AttendanceRecord, ReportingPeriod};

use super::request::{AttendanceRequest, ComplianceRequest, PredictionRequest};
use super::response::{ApiError, ApiErrorResponse, ComplianceReport, ComplianceResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/attendance", post(record_attendance_handler))
        .route("/compliance/status", post(compliance_status_handler))
        .route("/compliance/predict", post(predict_compliance_handler))
        .route("/periods", get(list_periods_handler))
        .with_state(state)
}

/// Converts a JSON extraction rejection into an API error body.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn bad_request(error: ApiError) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Resolves the periods a compliance request refers to.
///
/// A period number selects exactly that period; otherwise every period
/// containing the as-of date is returned so overlap is surfaced rather
/// than hidden.
fn resolve_periods(
    state: &AppState,
    period_number: Option<u32>,
    as_of_date: NaiveDate,
) -> Result<Vec<ReportingPeriod>, ApiErrorResponse> {
    match period_number {
        Some(number) => match state.periods().period_by_number(number) {
            Some(period) => Ok(vec![period.clone()]),
            None => Err(ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::period_number_not_found(number),
            }),
        },
        None => {
            let matches: Vec<ReportingPeriod> = state
                .periods()
                .periods_for_date(as_of_date)
                .into_iter()
                .cloned()
                .collect();
            if matches.is_empty() {
                Err(ApiErrorResponse::from(
                    crate::error::EngineError::PeriodNotFound { date: as_of_date },
                ))
            } else {
                Ok(matches)
            }
        }
    }
}

/// Handler for POST /attendance.
///
/// Records (or overwrites) the attendance status for one date.
async fn record_attendance_handler(
    State(state): State<AppState>,
    payload: Result<Json<AttendanceRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(correlation_id, rejection)),
    };

    let date = request.date.unwrap_or_else(today);
    let record = AttendanceRecord {
        date,
        status: request.status,
    };

    match state.store().save_record(&record) {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                date = %date,
                status = %request.status,
                "Attendance recorded"
            );
            (StatusCode::OK, Json(record)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Failed to save attendance");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /compliance/status.
///
/// Evaluates compliance for one period (by number) or for every period
/// containing the as-of date.
async fn compliance_status_handler(
    State(state): State<AppState>,
    payload: Result<Json<ComplianceRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(correlation_id, rejection)),
    };

    let as_of_date = request.as_of_date.unwrap_or_else(today);
    let periods = match resolve_periods(&state, request.period_number, as_of_date) {
        Ok(periods) => periods,
        Err(err) => return err.into_response(),
    };

    let mut statuses = Vec::with_capacity(periods.len());
    for period in &periods {
        let enriched = state.periods().enrich_period(period);
        match state.checker().compliance_status(&enriched, as_of_date) {
            Ok(status) => statuses.push(ComplianceResponse::from(status)),
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    period = period.period_number,
                    error = %err,
                    "Compliance check failed"
                );
                return ApiErrorResponse::from(err).into_response();
            }
        }
    }

    info!(
        correlation_id = %correlation_id,
        as_of_date = %as_of_date,
        periods = statuses.len(),
        "Compliance status computed"
    );
    (
        StatusCode::OK,
        Json(ComplianceReport {
            as_of_date,
            statuses,
        }),
    )
        .into_response()
}

/// Handler for POST /compliance/predict.
///
/// Projects compliance to the end of one period assuming attendance on
/// the planned dates. First-match resolution applies when the period is
/// chosen by date.
async fn predict_compliance_handler(
    State(state): State<AppState>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(correlation_id, rejection)),
    };

    let as_of_date = request.as_of_date.unwrap_or_else(today);

    let period = match request.period_number {
        Some(number) => match state.periods().period_by_number(number) {
            Some(period) => period.clone(),
            None => {
                return ApiErrorResponse {
                    status: StatusCode::NOT_FOUND,
                    error: ApiError::period_number_not_found(number),
                }
                .into_response();
            }
        },
        None => match state.periods().period_for_date(as_of_date) {
            Ok(period) => period.clone(),
            Err(err) => return ApiErrorResponse::from(err).into_response(),
        },
    };

    let enriched = state.periods().enrich_period(&period);
    match state
        .checker()
        .predict_compliance(&enriched, &request.planned_dates, as_of_date)
    {
        Ok(status) => {
            info!(
                correlation_id = %correlation_id,
                period = enriched.period_number,
                planned_dates = request.planned_dates.len(),
                risk = %status.risk_level,
                "Compliance projection computed"
            );
            (StatusCode::OK, Json(ComplianceResponse::from(status))).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Projection failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /periods.
///
/// Lists all configured reporting periods, enriched with their exclusion
/// days and effective requirements.
async fn list_periods_handler(State(state): State<AppState>) -> impl IntoResponse {
    let enriched: Vec<ReportingPeriod> = state
        .periods()
        .all_periods()
        .iter()
        .map(|p| state.periods().enrich_period(p))
        .collect();

    (StatusCode::OK, Json(enriched))
}
