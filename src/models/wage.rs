//! Average wage input.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{EngineError, EngineResult};

/// The wage basis for a severance calculation.
///
/// Wraps a non-negative average wage. The currency is implicit and the
/// same for every amount the engine produces.
///
/// # Example
///
/// ```
/// use severance_engine::models::WageInput;
/// use rust_decimal::Decimal;
///
/// let wage = WageInput::new(Decimal::from(3_000_000)).unwrap();
/// assert_eq!(wage.average_wage(), Decimal::from(3_000_000));
///
/// assert!(WageInput::new(Decimal::from(-1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WageInput {
    average_wage: Decimal,
}

impl WageInput {
    /// Creates a wage input, rejecting negative amounts with `InvalidWage`.
    pub fn new(average_wage: Decimal) -> EngineResult<Self> {
        if average_wage.is_sign_negative() && !average_wage.is_zero() {
            return Err(EngineError::InvalidWage { average_wage });
        }
        Ok(Self { average_wage })
    }

    /// The average wage.
    pub fn average_wage(&self) -> Decimal {
        self.average_wage
    }
}
