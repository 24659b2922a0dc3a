//! Locale presets and primitive value formatters.

use std::fmt::Write;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// The locales with built-in display presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// Korean: `270,246,575원`, `2020년 01월 01일`.
    #[default]
    KoKr,
    /// English: `270,246,575 won`, `2020-01-01`.
    EnUs,
}

/// The formatting conventions for one locale.
///
/// Callers pass a `DisplayFormat` explicitly to every formatter.
///
/// # Example
///
/// ```
/// use severance_engine::format::{DisplayFormat, Locale, format_amount};
/// use rust_decimal::Decimal;
///
/// let fmt = DisplayFormat::for_locale(Locale::KoKr);
/// assert_eq!(format_amount(Decimal::from(3_000_000), &fmt), "3,000,000원");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFormat {
    /// The locale these conventions belong to.
    pub locale: Locale,
    /// Separator inserted between groups of three digits.
    pub thousands_separator: char,
    /// Appended to monetary amounts.
    pub currency_suffix: String,
    /// Appended to a number of years.
    pub years_suffix: String,
    /// Appended to a number of days.
    pub days_suffix: String,
    /// A chrono `strftime` pattern for dates.
    pub date_pattern: String,
    /// Chart title for the trend series.
    pub chart_title: String,
    /// Chart x-axis label.
    pub x_axis_label: String,
    /// Chart y-axis label.
    pub y_axis_label: String,
    /// Notice shown next to a prorated amount.
    pub prorated_notice: String,
}

impl DisplayFormat {
    /// Returns the preset for `locale`.
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::KoKr => Self {
                locale,
                thousands_separator: ',',
                currency_suffix: "원".to_string(),
                years_suffix: "년".to_string(),
                days_suffix: "일".to_string(),
                date_pattern: "%Y년 %m월 %d일".to_string(),
                chart_title: "근속연수별 퇴직금 추이".to_string(),
                x_axis_label: "근속연수".to_string(),
                y_axis_label: "퇴직금(원)".to_string(),
                prorated_notice: "1년 미만 근무 시 퇴직금은 근무 기간에 비례하여 계산됩니다."
                    .to_string(),
            },
            Locale::EnUs => Self {
                locale,
                thousands_separator: ',',
                currency_suffix: " won".to_string(),
                years_suffix: " years".to_string(),
                days_suffix: " days".to_string(),
                date_pattern: "%Y-%m-%d".to_string(),
                chart_title: "Projected severance by years of service".to_string(),
                x_axis_label: "Years of service".to_string(),
                y_axis_label: "Severance (won)".to_string(),
                prorated_notice:
                    "Service under one year: the severance is proportional to the period worked."
                        .to_string(),
            },
        }
    }
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

/// Formats a monetary amount in whole currency units.
///
/// The amount is rounded half-to-even to a whole unit, grouped by thousands
/// and suffixed with the currency. A value that rounds to zero is shown
/// without a sign.
///
/// # Examples
///
/// ```
/// use severance_engine::format::{DisplayFormat, Locale, format_amount};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let fmt = DisplayFormat::for_locale(Locale::EnUs);
/// let amount = Decimal::from_str("37232876.7123").unwrap();
/// assert_eq!(format_amount(amount, &fmt), "37,232,877 won");
/// ```
pub fn format_amount(amount: Decimal, fmt: &DisplayFormat) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
    let digits = rounded.abs().trunc().normalize().to_string();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!(
        "{}{}{}",
        sign,
        group_digits(&digits, fmt.thousands_separator),
        fmt.currency_suffix
    )
}

/// Formats an integer count with thousands grouping.
pub fn format_count(count: i64, fmt: &DisplayFormat) -> String {
    let digits = count.unsigned_abs().to_string();
    let sign = if count < 0 { "-" } else { "" };
    format!("{}{}", sign, group_digits(&digits, fmt.thousands_separator))
}

/// Formats years of service with one decimal place.
///
/// # Examples
///
/// ```
/// use severance_engine::format::format_years;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_years(Decimal::from(1096) / Decimal::from(365)), "3.0");
/// assert_eq!(format_years(Decimal::ZERO), "0.0");
/// ```
pub fn format_years(years: Decimal) -> String {
    let rounded = years.round_dp_with_strategy(1, RoundingStrategy::MidpointNearestEven);
    format!("{:.1}", rounded)
}

/// Formats a date with the locale's pattern.
///
/// Falls back to ISO 8601 if the pattern cannot be rendered.
pub fn format_date(date: NaiveDate, fmt: &DisplayFormat) -> String {
    let mut out = String::new();
    match write!(out, "{}", date.format(&fmt.date_pattern)) {
        Ok(()) => out,
        Err(_) => date.to_string(),
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
