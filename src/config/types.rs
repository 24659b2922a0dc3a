//! Configuration types for the severance engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::Locale;
use crate::models::{EngineSettings, ProrationPolicy, TrendMode};

/// The `engine` section: policy and formula parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSection {
    /// The proration policy for tenures under one year.
    pub policy: ProrationPolicy,
    /// Days of average wage per full year of service.
    #[serde(default = "default_days_of_wage_per_year")]
    pub days_of_wage_per_year: u32,
    /// Length of a service year in days.
    #[serde(default = "default_days_per_year")]
    pub days_per_year: u32,
    /// Whether the trend series includes the zero-service point.
    #[serde(default)]
    pub trend_mode: TrendMode,
}

impl EngineSection {
    /// Returns the formula settings of this section.
    pub fn settings(&self) -> EngineSettings {
        EngineSettings {
            days_of_wage_per_year: self.days_of_wage_per_year,
            days_per_year: self.days_per_year,
            trend_mode: self.trend_mode,
        }
    }
}

fn default_days_of_wage_per_year() -> u32 {
    EngineSettings::default().days_of_wage_per_year
}

fn default_days_per_year() -> u32 {
    EngineSettings::default().days_per_year
}

/// The `bounds` section: the fixed ends of the supported date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundsConfig {
    /// The earliest accepted hire date.
    pub earliest_start: NaiveDate,
    /// The latest accepted separation date.
    pub latest_end: NaiveDate,
}

/// The `display` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Locale used when a request does not name one.
    #[serde(default)]
    pub locale: Locale,
}

/// The `input_defaults` section: presentation defaults for the wage field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputDefaults {
    /// Suggested average wage.
    pub average_wage: Decimal,
    /// Step size of the wage input.
    pub wage_step: Decimal,
}

/// The complete engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Policy and formula parameters.
    pub engine: EngineSection,
    /// Supported date range.
    pub bounds: BoundsConfig,
    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Presentation defaults.
    pub input_defaults: InputDefaults,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let settings = EngineSettings::default();
        Self {
            engine: EngineSection {
                policy: ProrationPolicy::ProrateWithWarning,
                days_of_wage_per_year: settings.days_of_wage_per_year,
                days_per_year: settings.days_per_year,
                trend_mode: settings.trend_mode,
            },
            bounds: BoundsConfig {
                earliest_start: NaiveDate::from_ymd_opt(1950, 1, 1).unwrap_or(NaiveDate::MIN),
                latest_end: NaiveDate::from_ymd_opt(2050, 12, 31).unwrap_or(NaiveDate::MAX),
            },
            display: DisplayConfig::default(),
            input_defaults: InputDefaults {
                average_wage: Decimal::from(3_000_000),
                wage_step: Decimal::from(100_000),
            },
        }
    }
}
