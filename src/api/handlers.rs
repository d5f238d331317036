//! HTTP request handlers for the Timesheet Reconstruction Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{EmployeeProfile, PunchEvent, PunchSource, ReportPeriod};
use crate::timesheet::build_period_report;

use super::request::ReportRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/report", post(report_handler))
        .with_state(state)
}

/// Handler for POST /report endpoint.
///
/// Accepts an employee descriptor, shift code, date range and punch
/// events, and returns the reconstructed timesheet report.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
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
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Convert request types to domain types
    let employee: EmployeeProfile = request.employee.into();
    let period: ReportPeriod = request.period.into();

    // Reject malformed ranges before the engine runs
    if let Err(err) = period.validate() {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Invalid report period"
        );
        let api_error: ApiErrorResponse = err.into();
        return (
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response();
    }

    // Only active employees can be reported on
    if !employee.is_active() {
        warn!(
            correlation_id = %correlation_id,
            registration_number = %employee.registration_number,
            "Employee is not active"
        );
        return (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/json")],
            Json(ApiError::inactive_employee(&employee.registration_number)),
        )
            .into_response();
    }

    // Resolve the shift from the catalog
    let shift = match state.catalog().get_shift(&request.shift_code) {
        Ok(shift) => shift.clone(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                shift_code = %request.shift_code,
                "Shift not found"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    // Manual adjustments must carry a justification
    for punch in &request.punches {
        let justified = punch
            .justification
            .as_deref()
            .is_some_and(|j| !j.trim().is_empty());
        if punch.source == PunchSource::ManualAdjustment && !justified {
            warn!(
                correlation_id = %correlation_id,
                timestamp = %punch.timestamp,
                "Manual adjustment without justification"
            );
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApiError::unjustified_adjustment(
                    &punch.timestamp.to_rfc3339(),
                )),
            )
                .into_response();
        }
    }

    // Convert punches and restore timestamp order; the engine contract
    // expects an ascending stream and the sort is stable for duplicates.
    let mut punches: Vec<PunchEvent> = request
        .punches
        .into_iter()
        .map(|p| p.into_event(&employee.registration_number))
        .collect();
    punches.sort_by_key(|p| p.timestamp);

    // Run the engine
    let start_time = Instant::now();
    let report = build_period_report(employee, shift, period, &punches);
    let duration = start_time.elapsed();
    info!(
        correlation_id = %correlation_id,
        registration_number = %report.employee.registration_number,
        punches_count = punches.len(),
        days_count = report.days.len(),
        worked_hours = %report.totals.worked_hours,
        duration_us = duration.as_micros(),
        "Report generated successfully"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(report),
    )
        .into_response()
}
