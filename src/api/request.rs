//! Request types for the Severance Engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! and `/trend` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::Locale;

/// Request body for the `/calculate` endpoint.
///
/// The proration policy is not part of the request; it is fixed by the
/// deployment configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The hire date.
    pub start_date: NaiveDate,
    /// The separation date.
    pub end_date: NaiveDate,
    /// The average wage, as a number or a decimal string.
    pub average_wage: Decimal,
    /// Locale for the formatted summary; the configured default if absent.
    #[serde(default)]
    pub locale: Option<Locale>,
}

/// Request body for the `/trend` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendRequest {
    /// The hire date.
    pub start_date: NaiveDate,
    /// The separation date.
    pub end_date: NaiveDate,
    /// The average wage, as a number or a decimal string.
    pub average_wage: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_calculation_request() {
        let json = r#"{
            "start_date": "2020-01-01",
            "end_date": "2023-01-01",
            "average_wage": 3000000
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request.start_date,
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );
        assert_eq!(request.average_wage, Decimal::from(3_000_000));
        assert!(request.locale.is_none());
    }

    #[test]
    fn test_deserialize_wage_from_string_with_locale() {
        let json = r#"{
            "start_date": "2023-01-01",
            "end_date": "2023-06-01",
            "average_wage": "2500000.50",
            "locale": "en_us"
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.average_wage.to_string(), "2500000.50");
        assert_eq!(request.locale, Some(Locale::EnUs));
    }

    #[test]
    fn test_missing_wage_is_rejected() {
        let json = r#"{"start_date": "2020-01-01", "end_date": "2023-01-01"}"#;

        let result: Result<TrendRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("missing field"));
    }
}
