//! Calculation policy and settings.
//!
//! The handling of sub-one-year tenures differs between deployments, so it is
//! expressed as a [`ProrationPolicy`] chosen by the embedding application
//! rather than inferred from the input.

use serde::{Deserialize, Serialize};

/// Controls how a tenure shorter than one year is handled.
///
/// Exactly one policy is active per calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProrationPolicy {
    /// Refuse to compute and report `InsufficientService`.
    Reject,
    /// Compute a prorated amount and attach a warning.
    ProrateWithWarning,
    /// Compute a prorated amount without a warning.
    ProrateSilently,
}

impl ProrationPolicy {
    /// Returns the snake_case identifier used in configuration and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProrationPolicy::Reject => "reject",
            ProrationPolicy::ProrateWithWarning => "prorate_with_warning",
            ProrationPolicy::ProrateSilently => "prorate_silently",
        }
    }
}

/// Whether the trend series starts at zero years of service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendMode {
    /// Markers `0..=Y+1`; the zero point projects to a zero amount.
    #[default]
    IncludeZero,
    /// Markers `1..=Y+1`; the trend excludes the zero-service point.
    ExcludeZero,
}

impl TrendMode {
    /// The first year marker produced in this mode.
    pub fn first_marker(&self) -> u32 {
        match self {
            TrendMode::IncludeZero => 0,
            TrendMode::ExcludeZero => 1,
        }
    }
}

/// Numeric parameters of the severance formula.
///
/// The defaults give 30 days of average wage per 365-day year of service
/// and a trend series that includes the zero point.
///
/// # Example
///
/// ```
/// use severance_engine::models::{EngineSettings, TrendMode};
///
/// let settings = EngineSettings::default();
/// assert_eq!(settings.days_of_wage_per_year, 30);
/// assert_eq!(settings.days_per_year, 365);
/// assert_eq!(settings.trend_mode, TrendMode::IncludeZero);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Days of average wage owed per full year of service.
    pub days_of_wage_per_year: u32,
    /// Length of a service year in days.
    pub days_per_year: u32,
    /// Whether the trend series includes the zero-service point.
    pub trend_mode: TrendMode,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            days_of_wage_per_year: 30,
            days_per_year: 365,
            trend_mode: TrendMode::IncludeZero,
        }
    }
}
