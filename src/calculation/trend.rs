//! Trend series generation.
//!
//! This module builds the "what if you stayed `y` years" projection shown
//! next to a severance result. Each marker uses the full-year formula,
//! `y * average_wage * days_of_wage_per_year`, independent of the fractional
//! tenure of the real period. The curve is a linear reference line and is
//! not expected to pass through the point estimate when years of service
//! is fractional.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, EmploymentPeriod, EngineSettings, TrendPoint, TrendSeries, WageInput};

/// The result of generating a trend series, including the audit step.
#[derive(Debug, Clone)]
pub struct TrendGeneration {
    /// The generated series.
    pub series: TrendSeries,
    /// The audit step recording this generation.
    pub audit_step: AuditStep,
}

/// Generates the trend series for a period and wage.
///
/// With `Y = floor(years_of_service)` the markers are `0..=Y+1` in
/// [`TrendMode::IncludeZero`](crate::models::TrendMode::IncludeZero) and
/// `1..=Y+1` in [`TrendMode::ExcludeZero`](crate::models::TrendMode::ExcludeZero).
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::{generate_trend, resolve};
/// use severance_engine::models::{EngineSettings, WageInput};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let period = resolve(
///     NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
/// )
/// .unwrap();
/// let wage = WageInput::new(Decimal::from(3_000_000)).unwrap();
///
/// let generation = generate_trend(&period, &wage, &EngineSettings::default(), 3).unwrap();
/// let years: Vec<u32> = generation.series.iter().map(|p| p.years_of_service).collect();
///
/// assert_eq!(years, vec![0, 1, 2, 3, 4]);
/// ```
pub fn generate_trend(
    period: &EmploymentPeriod,
    wage: &WageInput,
    settings: &EngineSettings,
    step_number: u32,
) -> EngineResult<TrendGeneration> {
    let days_per_year = i64::from(settings.days_per_year);
    if days_per_year == 0 {
        return Err(EngineError::InvalidConfig {
            field: "engine.days_per_year".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    // working_days is never negative, so integer division is the floor
    let whole_years = period.working_days() / days_per_year;
    let last_marker =
        u32::try_from(whole_years + 1).map_err(|_| EngineError::CalculationError {
            message: format!("trend series too long for {} years of service", whole_years),
        })?;

    let average_wage = wage.average_wage();
    let per_year = average_wage
        .checked_mul(Decimal::from(settings.days_of_wage_per_year))
        .ok_or_else(|| overflow(average_wage))?;

    let first_marker = settings.trend_mode.first_marker();
    let points = (first_marker..=last_marker)
        .map(|years| {
            per_year
                .checked_mul(Decimal::from(years))
                .map(|projected_amount| TrendPoint {
                    years_of_service: years,
                    projected_amount,
                })
                .ok_or_else(|| overflow(average_wage))
        })
        .collect::<EngineResult<Vec<_>>>()?;

    debug!(points = points.len(), "Generated trend series");

    let audit_step = AuditStep {
        step_number,
        rule_id: "trend_series".to_string(),
        rule_name: "Severance Trend Series".to_string(),
        input: serde_json::json!({
            "average_wage": average_wage.normalize().to_string(),
            "whole_years": whole_years,
            "trend_mode": settings.trend_mode
        }),
        output: serde_json::json!({
            "first_marker": first_marker,
            "last_marker": last_marker,
            "points": points.len(),
            "amount_per_year": per_year.normalize().to_string()
        }),
        reasoning: format!(
            "Years {}..={} at {} x {} = {} per year",
            first_marker,
            last_marker,
            average_wage.normalize(),
            settings.days_of_wage_per_year,
            per_year.normalize()
        ),
    };

    Ok(TrendGeneration {
        series: TrendSeries {
            mode: settings.trend_mode,
            points,
        },
        audit_step,
    })
}

/// Generates the trend series with the default formula settings.
pub fn trend(period: &EmploymentPeriod, wage: &WageInput) -> EngineResult<TrendSeries> {
    generate_trend(period, wage, &EngineSettings::default(), 1).map(|generation| generation.series)
}

fn overflow(average_wage: Decimal) -> EngineError {
    EngineError::CalculationError {
        message: format!("trend projection overflowed for wage {}", average_wage),
    }
}
