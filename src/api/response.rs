//! Response types for the Severance Engine API.
//!
//! This module defines the success bodies of each endpoint and the error
//! response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::format::{Locale, SeveranceSummary, TrendChart};
use crate::models::{AuditTrace, DateBounds, ProrationPolicy, SeveranceResult, TrendPoint};

/// Response body of a successful `/calculate` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The proration policy that was applied.
    pub policy: ProrationPolicy,
    /// The severance result at full precision.
    pub result: SeveranceResult,
    /// The result formatted for display.
    pub summary: SeveranceSummary,
    /// The trend series with chart labels.
    pub chart: TrendChart,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

/// Response body of a successful `/trend` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendResponse {
    /// The projected amounts, ascending by years of service.
    pub points: Vec<TrendPoint>,
}

/// Response body of `/defaults`: what an input form needs to constrain its
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsResponse {
    /// The accepted date range as of today.
    pub bounds: DateBounds,
    /// Suggested average wage.
    pub average_wage: Decimal,
    /// Step size of the wage input.
    pub wage_step: Decimal,
    /// The active proration policy.
    pub policy: ProrationPolicy,
    /// The default display locale.
    pub locale: Locale,
    /// Today's date according to the server.
    pub today: NaiveDate,
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
        let message = error.to_string();
        match error {
            EngineError::InvalidRange { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "INVALID_RANGE",
                    message,
                    "The separation date must be on or after the hire date",
                ),
            },
            EngineError::InsufficientService { minimum_days, .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "INSUFFICIENT_SERVICE",
                    message,
                    format!(
                        "Severance requires at least {} days of continuous service",
                        minimum_days
                    ),
                ),
            },
            EngineError::DateOutOfRange { field, .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "DATE_OUT_OF_RANGE",
                    message,
                    format!("The field '{}' is outside the supported dates", field),
                ),
            },
            EngineError::InvalidWage { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::new("INVALID_WAGE", message),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_range_maps_to_unprocessable() {
        let api_error: ApiErrorResponse = EngineError::InvalidRange {
            start_date: date(2023, 6, 1),
            end_date: date(2023, 1, 1),
        }
        .into();

        assert_eq!(api_error.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api_error.error.code, "INVALID_RANGE");
        assert!(api_error.error.message.contains("2023-01-01"));
    }

    #[test]
    fn test_insufficient_service_maps_to_unprocessable() {
        let api_error: ApiErrorResponse = EngineError::InsufficientService {
            working_days: 151,
            minimum_days: 365,
        }
        .into();

        assert_eq!(api_error.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api_error.error.code, "INSUFFICIENT_SERVICE");
        assert!(api_error.error.details.unwrap().contains("365 days"));
    }

    #[test]
    fn test_date_out_of_range_names_field() {
        let api_error: ApiErrorResponse = EngineError::DateOutOfRange {
            field: "end_date".to_string(),
            date: date(2051, 1, 1),
            min: date(2020, 1, 1),
            max: date(2050, 12, 31),
        }
        .into();

        assert_eq!(api_error.error.code, "DATE_OUT_OF_RANGE");
        assert!(api_error.error.details.unwrap().contains("end_date"));
    }

    #[test]
    fn test_config_error_maps_to_internal_error() {
        let api_error: ApiErrorResponse = EngineError::InvalidConfig {
            field: "engine.days_per_year".to_string(),
            message: "must be greater than zero".to_string(),
        }
        .into();

        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }
}
