//! Severance Engine
//!
//! This crate computes severance pay from an employment period and an average
//! wage, applies a configurable proration policy to tenures under one year,
//! and produces the year-by-year trend series used for charts.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
