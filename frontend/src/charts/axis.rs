use super::ChartError;
use shared::TimeSeries;

/// Rounded upper bound of a value axis whose minimum is fixed at zero.
///
/// Values are assumed non-negative. Fails when no series carries a point.
pub fn compute_axis_max(series: &[TimeSeries]) -> Result<f64, ChartError> {
    let mut max_value: Option<f64> = None;
    for one_series in series {
        for point in &one_series.data {
            if !point.value.is_finite() {
                return Err(ChartError::NonFiniteValue {
                    series: one_series.series_name.clone(),
                    value: point.value,
                });
            }
            max_value = Some(max_value.map_or(point.value, |max| max.max(point.value)));
        }
    }

    max_value.map(round_axis_max).ok_or(ChartError::EmptySeries)
}

/// Rounds `max_value` up to a step of 2, 5, 10 or 20 within its decade.
pub fn round_axis_max(max_value: f64) -> f64 {
    if max_value <= 1.0 {
        return 1.0;
    }

    let power = max_value.log10();
    let magnitude = 10_f64.powf(power - power.floor()).clamp(0.0, 10.0);

    let scale = if magnitude <= 2.5 {
        0.2
    } else if magnitude <= 5.0 {
        0.5
    } else if magnitude <= 7.5 {
        1.0
    } else {
        2.0
    };

    let step = 10_f64.powf(power.floor()) * scale;
    let grid_max = (max_value / step).ceil() * step;

    // Sub-unit steps can round below the data; never cut the top off.
    let rounded = grid_max.round();
    if rounded < max_value { grid_max.ceil() } else { rounded }
}
