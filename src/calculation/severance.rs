//! Severance amount calculation.
//!
//! This module applies the severance formula, 30 days of average wage per
//! year of service prorated continuously by working days, and the
//! [`ProrationPolicy`] that governs tenures under one year.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditWarning, EmploymentPeriod, EngineSettings, ProrationPolicy, SeveranceResult,
    WageInput,
};

/// Warning code attached to a prorated result under
/// [`ProrationPolicy::ProrateWithWarning`].
pub const PRORATED_WARNING_CODE: &str = "PRORATED_SHORT_SERVICE";

/// Warning message attached to a prorated result under
/// [`ProrationPolicy::ProrateWithWarning`].
pub const PRORATED_WARNING_MESSAGE: &str =
    "Service is under one year; the severance amount is proportional to the period worked";

/// The result of a severance calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct SeveranceCalculation {
    /// The calculated severance.
    pub result: SeveranceResult,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
    /// The warning raised for a prorated short tenure, if any.
    pub warning: Option<AuditWarning>,
}

/// Computes `average_wage * days_of_wage_per_year * working_days / days_per_year`.
///
/// Both multiplications happen before the single division, so one full year
/// of service yields exactly `average_wage * days_of_wage_per_year`.
///
/// # Errors
///
/// Returns `InvalidConfig` if `days_per_year` is zero and `CalculationError`
/// if the amount overflows the decimal range.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::severance_amount;
/// use severance_engine::models::EngineSettings;
/// use rust_decimal::Decimal;
///
/// let amount = severance_amount(Decimal::from(3_000_000), 365, &EngineSettings::default()).unwrap();
/// assert_eq!(amount, Decimal::from(90_000_000));
/// ```
pub fn severance_amount(
    average_wage: Decimal,
    working_days: i64,
    settings: &EngineSettings,
) -> EngineResult<Decimal> {
    if settings.days_per_year == 0 {
        return Err(EngineError::InvalidConfig {
            field: "engine.days_per_year".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    average_wage
        .checked_mul(Decimal::from(settings.days_of_wage_per_year))
        .and_then(|v| v.checked_mul(Decimal::from(working_days)))
        .and_then(|v| v.checked_div(Decimal::from(settings.days_per_year)))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "severance amount overflowed for wage {} over {} days",
                average_wage, working_days
            ),
        })
}

/// Calculates severance pay for a resolved employment period.
///
/// When `working_days` is below the year length the policy decides:
/// - [`ProrationPolicy::Reject`]: `InsufficientService`, no amount is computed.
/// - [`ProrationPolicy::ProrateWithWarning`]: the prorated amount with
///   `prorated = true` and a warning message.
/// - [`ProrationPolicy::ProrateSilently`]: the prorated amount with
///   `prorated = true` and no warning.
///
/// At or above one year the policy has no effect and `prorated` is false.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::{calculate_severance, resolve};
/// use severance_engine::models::{EngineSettings, ProrationPolicy, WageInput};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let period = resolve(
///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
/// )
/// .unwrap();
/// let wage = WageInput::new(Decimal::from(3_000_000)).unwrap();
///
/// let calculation = calculate_severance(
///     &period,
///     &wage,
///     ProrationPolicy::ProrateWithWarning,
///     &EngineSettings::default(),
///     2,
/// )
/// .unwrap();
///
/// assert!(calculation.result.prorated);
/// assert!(calculation.result.warning.is_some());
/// ```
pub fn calculate_severance(
    period: &EmploymentPeriod,
    wage: &WageInput,
    policy: ProrationPolicy,
    settings: &EngineSettings,
    step_number: u32,
) -> EngineResult<SeveranceCalculation> {
    let working_days = period.working_days();
    let minimum_days = i64::from(settings.days_per_year);
    let short_service = working_days < minimum_days;

    if short_service && policy == ProrationPolicy::Reject {
        debug!(working_days, minimum_days, "Rejected short tenure");
        return Err(EngineError::InsufficientService {
            working_days,
            minimum_days,
        });
    }

    let average_wage = wage.average_wage();
    let amount = severance_amount(average_wage, working_days, settings)?;

    let warning = if short_service && policy == ProrationPolicy::ProrateWithWarning {
        Some(AuditWarning {
            code: PRORATED_WARNING_CODE.to_string(),
            message: PRORATED_WARNING_MESSAGE.to_string(),
            severity: "medium".to_string(),
        })
    } else {
        None
    };

    let mut reasoning = format!(
        "{} x {} x {} / {} = {}",
        average_wage.normalize(),
        settings.days_of_wage_per_year,
        working_days,
        settings.days_per_year,
        amount.round_dp(2).normalize()
    );
    if short_service {
        reasoning.push_str(&format!(
            " (prorated: {} of {} days, policy {})",
            working_days,
            minimum_days,
            policy.as_str()
        ));
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "severance_amount".to_string(),
        rule_name: "Severance Amount".to_string(),
        input: serde_json::json!({
            "average_wage": average_wage.normalize().to_string(),
            "working_days": working_days,
            "days_of_wage_per_year": settings.days_of_wage_per_year,
            "days_per_year": settings.days_per_year,
            "policy": policy.as_str()
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string(),
            "prorated": short_service,
            "warning_issued": warning.is_some()
        }),
        reasoning,
    };

    let result = SeveranceResult {
        amount,
        working_days,
        years_of_service: period.years_of_service(),
        prorated: short_service,
        warning: warning.as_ref().map(|w| w.message.clone()),
    };

    Ok(SeveranceCalculation {
        result,
        audit_step,
        warning,
    })
}

/// Calculates severance pay with the default formula settings.
pub fn calculate(
    period: &EmploymentPeriod,
    wage: &WageInput,
    policy: ProrationPolicy,
) -> EngineResult<SeveranceResult> {
    calculate_severance(period, wage, policy, &EngineSettings::default(), 1)
        .map(|calculation| calculation.result)
}
