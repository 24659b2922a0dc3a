//! Core data models for the Severance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod employment_period;
mod policy;
mod severance_result;
mod trend;
mod wage;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use employment_period::{DateBounds, EmploymentPeriod};
pub use policy::{EngineSettings, ProrationPolicy, TrendMode};
pub use severance_result::SeveranceResult;
pub use trend::{TrendPoint, TrendSeries};
pub use wage::WageInput;
