//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::borrow::Cow;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::run_payroll;
use crate::config::{PayrollConfig, SplitConfig};
use crate::models::Employee;

use super::request::PayrollRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll", post(payroll_handler))
        .with_state(state)
}

/// Handler for POST /payroll endpoint.
///
/// Accepts a batch of employees and returns the calculated payroll run.
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
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
                JsonRejection::MissingJsonContentType(_) => {
                    warn!(correlation_id = %correlation_id, "Missing JSON content type");
                    ApiError::malformed_json("Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return error_response(StatusCode::BAD_REQUEST, error);
        }
    };

    if request.employees.is_empty() {
        warn!(correlation_id = %correlation_id, "Payroll request without employees");
        return error_response(
            StatusCode::BAD_REQUEST,
            ApiError::validation_error("at least one employee is required"),
        );
    }

    let employees: Vec<Employee> = request.employees.into_iter().map(Into::into).collect();

    // A request-level split override applies to this run only.
    let config: Cow<'_, PayrollConfig> = match request.split {
        Some(settings) => {
            Cow::Owned(state.config().config().with_split(SplitConfig::from(settings)))
        }
        None => Cow::Borrowed(state.config().config()),
    };

    match run_payroll(&employees, &config) {
        Ok(run) => {
            info!(
                correlation_id = %correlation_id,
                run_id = %run.run_id,
                employees = run.totals.employee_count,
                gross_pay = %run.totals.gross_pay,
                duration_us = run.duration_us,
                "Payroll calculated successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(run),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            error_response(api_error.status, api_error.error)
        }
    }
}

fn error_response(status: StatusCode, error: ApiError) -> axum::response::Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
