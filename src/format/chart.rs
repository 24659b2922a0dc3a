//! Chart description for trend series.
//!
//! The engine does not render charts. It hands the rendering layer a
//! [`TrendChart`] with everything needed to draw a line-with-markers plot.

use serde::{Deserialize, Serialize};

use crate::models::{TrendPoint, TrendSeries};

use super::DisplayFormat;

/// How a series is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartStyle {
    /// A line connecting markers at each point.
    #[default]
    #[serde(rename = "lines+markers")]
    LinesMarkers,
}

/// A renderer-agnostic description of the trend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendChart {
    /// Chart title.
    pub title: String,
    /// Label for the x axis (years of service).
    pub x_axis_label: String,
    /// Label for the y axis (projected amount).
    pub y_axis_label: String,
    /// Drawing style.
    pub style: ChartStyle,
    /// The points to plot, ascending by years of service.
    pub points: Vec<TrendPoint>,
}

/// Builds a chart description for `series` using the labels of `fmt`.
///
/// # Example
///
/// ```
/// use severance_engine::format::{ChartStyle, DisplayFormat, Locale, build_chart};
/// use severance_engine::models::{TrendMode, TrendSeries};
///
/// let series = TrendSeries { mode: TrendMode::IncludeZero, points: vec![] };
/// let chart = build_chart(&series, &DisplayFormat::for_locale(Locale::KoKr));
///
/// assert_eq!(chart.title, "근속연수별 퇴직금 추이");
/// assert_eq!(chart.style, ChartStyle::LinesMarkers);
/// ```
pub fn build_chart(series: &TrendSeries, fmt: &DisplayFormat) -> TrendChart {
    TrendChart {
        title: fmt.chart_title.clone(),
        x_axis_label: fmt.x_axis_label.clone(),
        y_axis_label: fmt.y_axis_label.clone(),
        style: ChartStyle::LinesMarkers,
        points: series.points.clone(),
    }
}
