//! Employment period and date bound models.
//!
//! This module contains the [`EmploymentPeriod`] produced by the period
//! resolver and the [`DateBounds`] it validates against.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A validated span of continuous employment.
///
/// An `EmploymentPeriod` is only produced by
/// [`resolve_period`](crate::calculation::resolve_period), so `end_date`
/// never precedes `start_date` and the derived values always agree with
/// the dates.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::resolve;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let period = resolve(
///     NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(period.working_days(), 365);
/// assert_eq!(period.years_of_service(), Decimal::ONE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmploymentPeriod {
    pub(crate) start_date: NaiveDate,
    pub(crate) end_date: NaiveDate,
    pub(crate) working_days: i64,
    pub(crate) years_of_service: Decimal,
}

impl EmploymentPeriod {
    /// The hire date.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// The separation date.
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Whole days between the start and end dates.
    pub fn working_days(&self) -> i64 {
        self.working_days
    }

    /// Working days divided by the configured year length (365 by default).
    ///
    /// This is an average-year approximation and deliberately ignores leap
    /// days, so a period spanning a leap year reports slightly more than
    /// its calendar years.
    pub fn years_of_service(&self) -> Decimal {
        self.years_of_service
    }

    /// Whole years of service, rounded down.
    pub fn whole_years(&self) -> Decimal {
        self.years_of_service.floor()
    }
}

/// The range of dates accepted by the period resolver.
///
/// `latest_start` is the caller's notion of "today" and is supplied at
/// request time, never taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateBounds {
    /// The earliest accepted hire date.
    pub earliest_start: NaiveDate,
    /// The latest accepted hire date.
    pub latest_start: NaiveDate,
    /// The latest accepted separation date.
    pub latest_end: NaiveDate,
}

impl DateBounds {
    /// Creates bounds that accept every date chrono can represent.
    ///
    /// With these bounds only the ordering of the two dates is checked.
    pub fn unbounded() -> Self {
        Self {
            earliest_start: NaiveDate::MIN,
            latest_start: NaiveDate::MAX,
            latest_end: NaiveDate::MAX,
        }
    }

    /// Returns true if `date` is an acceptable hire date.
    pub fn accepts_start(&self, date: NaiveDate) -> bool {
        date >= self.earliest_start && date <= self.latest_start
    }

    /// Returns true if `date` is an acceptable separation date for a
    /// period starting on `start`.
    pub fn accepts_end(&self, start: NaiveDate, date: NaiveDate) -> bool {
        date >= start && date <= self.latest_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn standard_bounds() -> DateBounds {
        DateBounds {
            earliest_start: date(1950, 1, 1),
            latest_start: date(2026, 10, 19),
            latest_end: date(2050, 12, 31),
        }
    }

    #[test]
    fn test_accepts_start_is_inclusive() {
        let bounds = standard_bounds();

        assert!(bounds.accepts_start(date(1950, 1, 1)));
        assert!(bounds.accepts_start(date(2026, 10, 19)));
        assert!(!bounds.accepts_start(date(1949, 12, 31)));
        assert!(!bounds.accepts_start(date(2026, 10, 20)));
    }

    #[test]
    fn test_accepts_end_requires_start_or_later() {
        let bounds = standard_bounds();
        let start = date(2020, 1, 1);

        assert!(bounds.accepts_end(start, start));
        assert!(bounds.accepts_end(start, date(2050, 12, 31)));
        assert!(!bounds.accepts_end(start, date(2019, 12, 31)));
        assert!(!bounds.accepts_end(start, date(2051, 1, 1)));
    }

    #[test]
    fn test_unbounded_accepts_extreme_dates() {
        let bounds = DateBounds::unbounded();

        assert!(bounds.accepts_start(date(1800, 1, 1)));
        assert!(bounds.accepts_end(date(1800, 1, 1), date(2999, 12, 31)));
    }

    #[test]
    fn test_whole_years_rounds_down() {
        let period = EmploymentPeriod {
            start_date: date(2020, 1, 1),
            end_date: date(2023, 1, 1),
            working_days: 1096,
            years_of_service: Decimal::from(1096) / Decimal::from(365),
        };

        assert_eq!(period.whole_years(), Decimal::from(3));
    }
}
