//! Result summary for textual display.

use serde::{Deserialize, Serialize};

use crate::models::{EmploymentPeriod, SeveranceResult, WageInput};

use super::{DisplayFormat, format_amount, format_count, format_date, format_years};

/// Preformatted strings describing a severance result.
///
/// Mirrors the information panel shown beside a result: service period,
/// hire and separation dates, wage basis and amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceSummary {
    /// Years and days of service, e.g. `3.0년 (1,096일)`.
    pub service_period: String,
    /// Formatted hire date.
    pub start_date: String,
    /// Formatted separation date.
    pub end_date: String,
    /// Formatted average wage.
    pub average_wage: String,
    /// Formatted severance amount, rounded to whole units.
    pub amount: String,
    /// Notice shown when the result carries a warning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Formats a severance result for display.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::{calculate, resolve};
/// use severance_engine::format::{DisplayFormat, Locale, summarize};
/// use severance_engine::models::{ProrationPolicy, WageInput};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let period = resolve(
///     NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
/// )
/// .unwrap();
/// let wage = WageInput::new(Decimal::from(3_000_000)).unwrap();
/// let result = calculate(&period, &wage, ProrationPolicy::Reject).unwrap();
///
/// let summary = summarize(&period, &wage, &result, &DisplayFormat::for_locale(Locale::KoKr));
/// assert_eq!(summary.service_period, "3.0년 (1,096일)");
/// assert_eq!(summary.amount, "270,246,575원");
/// ```
pub fn summarize(
    period: &EmploymentPeriod,
    wage: &WageInput,
    result: &SeveranceResult,
    fmt: &DisplayFormat,
) -> SeveranceSummary {
    SeveranceSummary {
        service_period: format!(
            "{}{} ({}{})",
            format_years(result.years_of_service),
            fmt.years_suffix,
            format_count(result.working_days, fmt),
            fmt.days_suffix
        ),
        start_date: format_date(period.start_date(), fmt),
        end_date: format_date(period.end_date(), fmt),
        average_wage: format_amount(wage.average_wage(), fmt),
        amount: format_amount(result.amount, fmt),
        notice: result
            .has_warning()
            .then(|| fmt.prorated_notice.clone()),
    }
}
