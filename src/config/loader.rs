//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::format::{DisplayFormat, Locale};
use crate::models::{DateBounds, EngineSettings, ProrationPolicy};

use super::types::{EngineConfig, InputDefaults};

/// Loads and provides access to the engine configuration.
///
/// # File Structure
///
/// ```text
/// engine:
///   policy: prorate_with_warning
///   days_of_wage_per_year: 30
///   days_per_year: 365
///   trend_mode: include_zero
/// bounds:
///   earliest_start: 1950-01-01
///   latest_end: 2050-12-31
/// display:
///   locale: ko_kr
/// input_defaults:
///   average_wage: 3000000
///   wage_step: 100000
/// ```
///
/// # Example
///
/// ```no_run
/// use severance_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/severance.yaml").unwrap();
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let bounds = loader.date_bounds(today);
/// println!("Hire dates from {} to {}", bounds.earliest_start, bounds.latest_start);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - A value is inconsistent (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Parses configuration from YAML text. `origin` names the source in
    /// error messages.
    pub fn from_yaml_str(content: &str, origin: &str) -> EngineResult<Self> {
        let config: EngineConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        Self::from_config(config)
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: EngineConfig) -> EngineResult<Self> {
        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn validate(config: &EngineConfig) -> EngineResult<()> {
        if config.engine.days_per_year == 0 {
            return Err(invalid("engine.days_per_year", "must be greater than zero"));
        }
        if config.engine.days_of_wage_per_year == 0 {
            return Err(invalid(
                "engine.days_of_wage_per_year",
                "must be greater than zero",
            ));
        }
        if config.bounds.earliest_start > config.bounds.latest_end {
            return Err(invalid(
                "bounds.earliest_start",
                "must not be after bounds.latest_end",
            ));
        }
        if config.input_defaults.average_wage.is_sign_negative()
            && !config.input_defaults.average_wage.is_zero()
        {
            return Err(invalid("input_defaults.average_wage", "must not be negative"));
        }
        if config.input_defaults.wage_step <= Decimal::ZERO {
            return Err(invalid("input_defaults.wage_step", "must be greater than zero"));
        }
        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the active proration policy.
    pub fn policy(&self) -> ProrationPolicy {
        self.config.engine.policy
    }

    /// Returns the formula settings.
    pub fn settings(&self) -> EngineSettings {
        self.config.engine.settings()
    }

    /// Returns the date bounds for a request made on `today`.
    ///
    /// Hire dates run from the configured earliest start up to `today`,
    /// separation dates up to the configured latest end.
    pub fn date_bounds(&self, today: NaiveDate) -> DateBounds {
        DateBounds {
            earliest_start: self.config.bounds.earliest_start,
            latest_start: today,
            latest_end: self.config.bounds.latest_end,
        }
    }

    /// Returns the default display locale.
    pub fn locale(&self) -> Locale {
        self.config.display.locale
    }

    /// Returns the display format for `locale`, or for the configured
    /// default locale when `None`.
    pub fn display_format(&self, locale: Option<Locale>) -> DisplayFormat {
        DisplayFormat::for_locale(locale.unwrap_or_else(|| self.locale()))
    }

    /// Returns the presentation defaults for the wage input.
    pub fn input_defaults(&self) -> &InputDefaults {
        &self.config.input_defaults
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TrendMode;

    fn config_path() -> &'static str {
        "./config/severance.yaml"
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const MINIMAL: &str = r#"
engine:
  policy: reject
bounds:
  earliest_start: 1950-01-01
  latest_end: 2050-12-31
input_defaults:
  average_wage: 3000000
  wage_step: 100000
"#;

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.policy(), ProrationPolicy::ProrateWithWarning);
        assert_eq!(loader.settings(), EngineSettings::default());
        assert_eq!(loader.locale(), Locale::KoKr);
        assert_eq!(loader.input_defaults().average_wage, Decimal::from(3_000_000));
        assert_eq!(loader.input_defaults().wage_step, Decimal::from(100_000));
    }

    #[test]
    fn test_minimal_configuration_uses_defaults() {
        let loader = ConfigLoader::from_yaml_str(MINIMAL, "minimal").unwrap();

        assert_eq!(loader.policy(), ProrationPolicy::Reject);
        assert_eq!(loader.settings().days_of_wage_per_year, 30);
        assert_eq!(loader.settings().days_per_year, 365);
        assert_eq!(loader.settings().trend_mode, TrendMode::IncludeZero);
        assert_eq!(loader.locale(), Locale::KoKr);
    }

    #[test]
    fn test_date_bounds_use_today_for_latest_start() {
        let loader = ConfigLoader::from_yaml_str(MINIMAL, "minimal").unwrap();
        let bounds = loader.date_bounds(date(2026, 10, 19));

        assert_eq!(bounds.earliest_start, date(1950, 1, 1));
        assert_eq!(bounds.latest_start, date(2026, 10, 19));
        assert_eq!(bounds.latest_end, date(2050, 12, 31));
    }

    #[test]
    fn test_display_format_prefers_requested_locale() {
        let loader = ConfigLoader::default();

        assert_eq!(loader.display_format(None).locale, Locale::KoKr);
        assert_eq!(
            loader.display_format(Some(Locale::EnUs)).locale,
            Locale::EnUs
        );
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/severance.yaml");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("severance.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_policy_is_parse_error() {
        let yaml = MINIMAL.replace("policy: reject", "policy: round_up");
        let result = ConfigLoader::from_yaml_str(&yaml, "bad_policy.yaml");

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert_eq!(path, "bad_policy.yaml");
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_days_per_year_is_invalid() {
        let yaml = MINIMAL.replace("policy: reject", "policy: reject\n  days_per_year: 0");
        let result = ConfigLoader::from_yaml_str(&yaml, "zero.yaml");

        match result {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "engine.days_per_year");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_inverted_bounds_are_invalid() {
        let yaml = MINIMAL.replace("latest_end: 2050-12-31", "latest_end: 1900-01-01");
        let result = ConfigLoader::from_yaml_str(&yaml, "inverted.yaml");

        assert!(matches!(
            result,
            Err(EngineError::InvalidConfig { ref field, .. }) if field == "bounds.earliest_start"
        ));
    }

    #[test]
    fn test_zero_wage_step_is_invalid() {
        let yaml = MINIMAL.replace("wage_step: 100000", "wage_step: 0");
        let result = ConfigLoader::from_yaml_str(&yaml, "step.yaml");

        assert!(matches!(
            result,
            Err(EngineError::InvalidConfig { ref field, .. }) if field == "input_defaults.wage_step"
        ));
    }

    #[test]
    fn test_default_loader_matches_shipped_file() {
        let shipped = ConfigLoader::load(config_path()).unwrap();
        let default = ConfigLoader::default();

        assert_eq!(shipped.policy(), default.policy());
        assert_eq!(shipped.settings(), default.settings());
        assert_eq!(
            shipped.config().bounds.earliest_start,
            default.config().bounds.earliest_start
        );
        assert_eq!(
            shipped.config().bounds.latest_end,
            default.config().bounds.latest_end
        );
    }
}
