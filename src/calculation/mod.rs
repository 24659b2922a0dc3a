//! Calculation logic for the Severance Engine.
//!
//! This module contains the period resolver, which validates a hire and
//! separation date pair into an [`EmploymentPeriod`](crate::models::EmploymentPeriod),
//! the severance calculation with its proration policy branching, and the
//! generation of the year-by-year trend series used for charts.
//!
//! All functions are pure: they perform only in-memory date and decimal
//! arithmetic and may be called concurrently without coordination.

mod period_resolver;
mod severance;
mod trend;

pub use period_resolver::{PeriodResolution, resolve, resolve_period};
pub use severance::{
    PRORATED_WARNING_CODE, PRORATED_WARNING_MESSAGE, SeveranceCalculation, calculate,
    calculate_severance, severance_amount,
};
pub use trend::{TrendGeneration, generate_trend, trend};
