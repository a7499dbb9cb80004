use super::{ChartError, compute_axis_max};
use serde::Serialize;
use shared::{ChartsSection, OutputType, TimeSeries};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartOptions {
    pub disable_multi_axis: bool,
    pub defined_axis_ticks: Option<u32>,
}

impl From<&ChartsSection> for ChartOptions {
    fn from(section: &ChartsSection) -> Self {
        Self {
            disable_multi_axis: section.disable_multi_axis,
            defined_axis_ticks: section.defined_axis_ticks,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxis {
    pub grid_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_number: Option<u32>,
    /// Field whose formatter labels this axis.
    pub label_field: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedSeries {
    pub series_name: String,
    pub x_axis_index: usize,
    pub y_axis_index: usize,
}

/// Axis arrangement handed to the chart renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLayout {
    /// Number of side-by-side panels, each with its own time x-axis.
    pub grids: usize,
    pub y_axes: Vec<YAxis>,
    /// Panels share one pointer across their x-axes.
    pub linked_x_axes: bool,
    pub series: Vec<PlacedSeries>,
    pub tooltip_field: String,
}

impl AxisLayout {
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// Plans the value axes for a duration chart.
///
/// Returns `None` when there is nothing to draw. A shared maximum, with the
/// minimum pinned at zero, is applied to both panels only when every series
/// is duration-typed; otherwise the renderer scales each axis itself.
pub fn plan_axes(
    series: &[TimeSeries],
    options: &ChartOptions,
) -> Result<Option<AxisLayout>, ChartError> {
    let Some(first) = series.first() else {
        return Ok(None);
    };

    let duration_only = series
        .iter()
        .all(|one_series| one_series.output_type() == OutputType::Duration);
    let has_points = series.iter().any(|one_series| !one_series.data.is_empty());
    let data_max = if duration_only && has_points {
        Some(compute_axis_max(series)?)
    } else {
        None
    };

    let y_axes = if options.disable_multi_axis {
        vec![YAxis {
            grid_index: 0,
            min: None,
            max: None,
            split_number: options.defined_axis_ticks,
            label_field: first.field().to_string(),
        }]
    } else {
        let second = series.get(1).unwrap_or(first);
        [first, second]
            .into_iter()
            .enumerate()
            .map(|(grid_index, one_series)| YAxis {
                grid_index,
                min: data_max.map(|_| 0.0),
                max: data_max,
                split_number: None,
                label_field: one_series.series_name.clone(),
            })
            .collect()
    };

    let last_axis = y_axes.len() - 1;
    let placed = series
        .iter()
        .enumerate()
        .map(|(index, one_series)| PlacedSeries {
            series_name: one_series.series_name.clone(),
            x_axis_index: index.min(last_axis),
            y_axis_index: index.min(last_axis),
        })
        .collect();

    log::debug!(
        "Planned {} value axes for {} series (shared max: {:?})",
        y_axes.len(),
        series.len(),
        data_max
    );

    Ok(Some(AxisLayout {
        grids: y_axes.len(),
        linked_x_axes: !options.disable_multi_axis,
        y_axes,
        series: placed,
        tooltip_field: first.field().to_string(),
    }))
}
