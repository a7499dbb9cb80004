//! Value-axis bounds and layout for the duration charts.

mod axis;
mod layout;

pub use axis::{compute_axis_max, round_axis_max};
pub use layout::{AxisLayout, ChartOptions, PlacedSeries, YAxis, plan_axes};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChartError {
    #[error("axis max requires at least one series with at least one point")]
    EmptySeries,
    #[error("series '{series}' contains non-finite value {value}")]
    NonFiniteValue { series: String, value: f64 },
}

/// Display name used in tooltips; events-per-minute reads as throughput.
pub fn tooltip_series_name(name: &str) -> &str {
    match name {
        "epm()" => "tpm()",
        _ => name,
    }
}
