//! Severance calculation result.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The outcome of a single severance calculation.
///
/// `amount` keeps full precision; rounding to whole currency units happens
/// only when the value is formatted for display.
///
/// # Example
///
/// ```
/// use severance_engine::models::SeveranceResult;
/// use rust_decimal::Decimal;
///
/// let result = SeveranceResult {
///     amount: Decimal::from(90_000_000),
///     working_days: 365,
///     years_of_service: Decimal::ONE,
///     prorated: false,
///     warning: None,
/// };
/// assert!(!result.has_warning());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceResult {
    /// The severance amount at full precision.
    pub amount: Decimal,
    /// Whole days between hire and separation.
    pub working_days: i64,
    /// Working days divided by the year length.
    pub years_of_service: Decimal,
    /// True when tenure was under one year and the amount was prorated.
    pub prorated: bool,
    /// A message to display next to the amount, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl SeveranceResult {
    /// Returns true if a warning should be displayed with this result.
    pub fn has_warning(&self) -> bool {
        self.warning.is_some()
    }
}
