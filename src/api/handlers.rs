//! HTTP request handlers for the Severance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_severance, generate_trend, resolve_period};
use crate::error::EngineResult;
use crate::format::{build_chart, summarize};
use crate::models::{AuditTrace, WageInput};

use super::request::{CalculationRequest, TrendRequest};
use super::response::{
    ApiError, ApiErrorResponse, CalculationResponse, DefaultsResponse, TrendResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/trend", post(trend_handler))
        .route("/defaults", get(defaults_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the severance result, its
/// display summary, the trend chart and the audit trace. Any validation
/// failure replaces the whole body with an error.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match perform_calculation(&request, &state) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                working_days = response.result.working_days,
                amount = %response.result.amount.round_dp(2),
                prorated = response.result.prorated,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /trend endpoint.
///
/// Returns the projection for a period independent of the proration policy.
async fn trend_handler(
    State(state): State<AppState>,
    payload: Result<Json<TrendRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing trend request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    match perform_trend(&request, &state) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                points = response.points.len(),
                "Trend completed successfully"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Trend failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for GET /defaults endpoint.
async fn defaults_handler(State(state): State<AppState>) -> Response {
    let config = state.config();
    let today = state.today();
    let defaults = config.input_defaults();

    json_response(
        StatusCode::OK,
        DefaultsResponse {
            bounds: config.date_bounds(today),
            average_wage: defaults.average_wage,
            wage_step: defaults.wage_step,
            policy: config.policy(),
            locale: config.locale(),
            today,
        },
    )
}

/// Runs period resolution, the severance calculation and trend generation.
///
/// The period is resolved before the wage is checked so that reversed dates
/// are always reported as `InvalidRange`.
fn perform_calculation(
    request: &CalculationRequest,
    state: &AppState,
) -> EngineResult<CalculationResponse> {
    let start_time = Instant::now();
    let config = state.config();
    let settings = config.settings();
    let policy = config.policy();
    let bounds = config.date_bounds(state.today());

    let resolution = resolve_period(
        request.start_date,
        request.end_date,
        &bounds,
        &settings,
        1,
    )?;
    let wage = WageInput::new(request.average_wage)?;

    let calculation = calculate_severance(&resolution.period, &wage, policy, &settings, 2)?;
    let generation = generate_trend(&resolution.period, &wage, &settings, 3)?;

    let fmt = config.display_format(request.locale);
    let summary = summarize(&resolution.period, &wage, &calculation.result, &fmt);
    let chart = build_chart(&generation.series, &fmt);

    let audit_trace = AuditTrace {
        steps: vec![
            resolution.audit_step,
            calculation.audit_step,
            generation.audit_step,
        ],
        warnings: calculation.warning.into_iter().collect(),
        duration_us: start_time.elapsed().as_micros() as u64,
    };

    Ok(CalculationResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        policy,
        result: calculation.result,
        summary,
        chart,
        audit_trace,
    })
}

fn perform_trend(request: &TrendRequest, state: &AppState) -> EngineResult<TrendResponse> {
    let config = state.config();
    let settings = config.settings();
    let bounds = config.date_bounds(state.today());

    let resolution = resolve_period(
        request.start_date,
        request.end_date,
        &bounds,
        &settings,
        1,
    )?;
    let wage = WageInput::new(request.average_wage)?;
    let generation = generate_trend(&resolution.period, &wage, &settings, 2)?;

    Ok(TrendResponse {
        points: generation.series.points,
    })
}

/// Converts a JSON extraction failure into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
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
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    json_response(StatusCode::BAD_REQUEST, error)
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, api_error.error)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_state() -> AppState {
        AppState::with_today(ConfigLoader::default(), date(2026, 10, 19))
    }

    fn request(start: NaiveDate, end: NaiveDate, wage: i64) -> CalculationRequest {
        CalculationRequest {
            start_date: start,
            end_date: end,
            average_wage: Decimal::from(wage),
            locale: None,
        }
    }

    #[test]
    fn test_perform_calculation_records_three_steps() {
        let response = perform_calculation(
            &request(date(2020, 1, 1), date(2023, 1, 1), 3_000_000),
            &test_state(),
        )
        .unwrap();

        let rule_ids: Vec<&str> = response
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec!["period_resolution", "severance_amount", "trend_series"]
        );
        assert!(response.audit_trace.warnings.is_empty());
        assert_eq!(response.chart.points.len(), 5);
    }

    #[test]
    fn test_reversed_dates_win_over_negative_wage() {
        let result = perform_calculation(
            &request(date(2023, 6, 1), date(2023, 1, 1), -1),
            &test_state(),
        );

        assert!(matches!(
            result,
            Err(crate::error::EngineError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_prorated_warning_in_trace() {
        let response = perform_calculation(
            &request(date(2023, 1, 1), date(2023, 6, 1), 3_000_000),
            &test_state(),
        )
        .unwrap();

        assert_eq!(response.audit_trace.warnings.len(), 1);
        assert!(response.summary.notice.is_some());
    }
}
