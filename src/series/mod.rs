//! Series builder
//!
//! Projects one numeric column of a [`Dataset`] into an ordered sequence of
//! labeled points, the shape consumed by a time-series presentation layer.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;

/// Label used when a row has no usable label value
const UNKNOWN_LABEL: &str = "Unknown";

/// One point of a built series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Display label for the point
    pub label: String,
    /// Numeric value of the point
    pub value: f64,
    /// Sort key the series is ordered by (typically a year)
    pub ordering_key: i64,
}

/// Build an ordered series from one value column.
///
/// Rows whose `value_column` entry fails numeric coercion are dropped.
/// `order_column` is parsed as an integer sort key, defaulting to 0 when
/// missing or unparseable; the sort is stable, so ties keep their input
/// order. Missing labels become `"Unknown"`. `max_points` truncates from
/// the front of the sorted sequence; `None` leaves the series uncapped.
///
/// An empty result is valid: the builder never fabricates points, that is
/// the fallback layer's business.
pub fn build_series(
    dataset: &Dataset,
    value_column: &str,
    order_column: &str,
    label_column: &str,
    max_points: Option<usize>,
) -> Vec<SeriesPoint> {
    let mut points: Vec<SeriesPoint> = (0..dataset.len())
        .filter_map(|row| {
            let value = dataset.value(row, value_column)?.as_number()?;
            let ordering_key = dataset
                .value(row, order_column)
                .and_then(|v| v.as_integer())
                .unwrap_or(0);
            let label = dataset
                .value(row, label_column)
                .and_then(|v| v.as_label())
                .unwrap_or_else(|| UNKNOWN_LABEL.to_string());
            Some(SeriesPoint {
                label,
                value,
                ordering_key,
            })
        })
        .collect();

    points.sort_by_key(|p| p.ordering_key);
    if let Some(cap) = max_points {
        points.truncate(cap);
    }
    points
}
