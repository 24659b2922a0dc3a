//! Employment period resolution.
//!
//! This module turns a raw (start, end) date pair into a validated
//! [`EmploymentPeriod`] with its whole-day and fractional-year durations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, DateBounds, EmploymentPeriod, EngineSettings};

/// The result of resolving an employment period, including the audit step.
#[derive(Debug, Clone)]
pub struct PeriodResolution {
    /// The validated employment period.
    pub period: EmploymentPeriod,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

/// Validates a date pair and derives its working days and years of service.
///
/// Checks are applied in this order:
/// 1. `end_date` before `start_date` yields `InvalidRange`, whatever the bounds.
/// 2. A `start_date` outside `earliest_start..=latest_start` yields `DateOutOfRange`.
/// 3. An `end_date` after `latest_end` yields `DateOutOfRange`.
///
/// `working_days` is `end_date - start_date` in whole days and
/// `years_of_service` is `working_days / days_per_year`. The year length is
/// a fixed average (365 by default) and leap days are not accounted for.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::resolve_period;
/// use severance_engine::models::{DateBounds, EngineSettings};
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
///
/// let resolution = resolve_period(
///     start,
///     end,
///     &DateBounds::unbounded(),
///     &EngineSettings::default(),
///     1,
/// )
/// .unwrap();
///
/// assert_eq!(resolution.period.working_days(), 1096);
/// assert_eq!(resolution.audit_step.rule_id, "period_resolution");
/// ```
pub fn resolve_period(
    start_date: NaiveDate,
    end_date: NaiveDate,
    bounds: &DateBounds,
    settings: &EngineSettings,
    step_number: u32,
) -> EngineResult<PeriodResolution> {
    if end_date < start_date {
        debug!(%start_date, %end_date, "Rejected reversed employment period");
        return Err(EngineError::InvalidRange {
            start_date,
            end_date,
        });
    }

    if !bounds.accepts_start(start_date) {
        return Err(EngineError::DateOutOfRange {
            field: "start_date".to_string(),
            date: start_date,
            min: bounds.earliest_start,
            max: bounds.latest_start,
        });
    }

    if !bounds.accepts_end(start_date, end_date) {
        return Err(EngineError::DateOutOfRange {
            field: "end_date".to_string(),
            date: end_date,
            min: start_date,
            max: bounds.latest_end,
        });
    }

    let working_days = end_date.signed_duration_since(start_date).num_days();
    let years_of_service = Decimal::from(working_days)
        .checked_div(Decimal::from(settings.days_per_year))
        .ok_or_else(|| EngineError::InvalidConfig {
            field: "engine.days_per_year".to_string(),
            message: "must be greater than zero".to_string(),
        })?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "period_resolution".to_string(),
        rule_name: "Employment Period Resolution".to_string(),
        input: serde_json::json!({
            "start_date": start_date.to_string(),
            "end_date": end_date.to_string(),
            "days_per_year": settings.days_per_year
        }),
        output: serde_json::json!({
            "working_days": working_days,
            "years_of_service": years_of_service.normalize().to_string()
        }),
        reasoning: format!(
            "{} - {} = {} days; {} / {} = {} years",
            end_date,
            start_date,
            working_days,
            working_days,
            settings.days_per_year,
            years_of_service.round_dp(4).normalize()
        ),
    };

    Ok(PeriodResolution {
        period: EmploymentPeriod {
            start_date,
            end_date,
            working_days,
            years_of_service,
        },
        audit_step,
    })
}

/// Resolves a date pair with no bounds beyond ordering and the default
/// 365-day year.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::resolve;
/// use severance_engine::error::EngineError;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
///
/// assert!(matches!(resolve(start, end), Err(EngineError::InvalidRange { .. })));
/// ```
pub fn resolve(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<EmploymentPeriod> {
    resolve_period(
        start_date,
        end_date,
        &DateBounds::unbounded(),
        &EngineSettings::default(),
        1,
    )
    .map(|resolution| resolution.period)
}
