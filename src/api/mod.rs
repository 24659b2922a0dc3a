//! HTTP API module for the Severance Engine.
//!
//! This module provides the REST API endpoints for calculating severance
//! pay and its trend series.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, TrendRequest};
pub use response::{ApiError, CalculationResponse, DefaultsResponse, TrendResponse};
pub use state::AppState;
