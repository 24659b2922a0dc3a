//! Display formatting for severance results.
//!
//! Every function here is a pure function of its value and an explicit
//! [`DisplayFormat`]. There is no process-wide locale, so concurrent
//! requests using different locales cannot interfere with each other.

mod chart;
mod display;
mod summary;

pub use chart::{ChartStyle, TrendChart, build_chart};
pub use display::{DisplayFormat, Locale, format_amount, format_count, format_date, format_years};
pub use summary::{SeveranceSummary, summarize};
