//! Trend series models.
//!
//! A [`TrendSeries`] is the hypothetical "what if you stayed `y` years at
//! this wage" curve shown beside a severance result.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TrendMode;

/// One point of a trend series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Whole years of service.
    pub years_of_service: u32,
    /// Projected severance for that many full years.
    pub projected_amount: Decimal,
}

/// Trend points ordered by ascending years of service.
///
/// # Example
///
/// ```
/// use severance_engine::models::{TrendMode, TrendPoint, TrendSeries};
/// use rust_decimal::Decimal;
///
/// let series = TrendSeries {
///     mode: TrendMode::IncludeZero,
///     points: vec![
///         TrendPoint { years_of_service: 0, projected_amount: Decimal::ZERO },
///         TrendPoint { years_of_service: 1, projected_amount: Decimal::from(90) },
///     ],
/// };
/// assert_eq!(series.len(), 2);
/// assert_eq!(series.last().unwrap().years_of_service, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSeries {
    /// Whether the series includes the zero-service point.
    pub mode: TrendMode,
    /// The points, ascending by years of service.
    pub points: Vec<TrendPoint>,
}

impl TrendSeries {
    /// Number of points in the series.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The point with the most years of service.
    pub fn last(&self) -> Option<&TrendPoint> {
        self.points.last()
    }

    /// Iterates over the points in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, TrendPoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a TrendSeries {
    type Item = &'a TrendPoint;
    type IntoIter = std::slice::Iter<'a, TrendPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
