//! Statistics module
//!
//! Public facade for the tabular analytics engine: distribution summaries,
//! Pearson correlation, and z-score anomaly detection. Each function is a
//! pure computation over its inputs; degenerate data resolves through the
//! [`FallbackPolicy`](crate::FallbackPolicy) rather than through errors.

pub mod anomaly;
pub mod correlation;
pub mod descriptive;

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::fallback::FallbackPolicy;

/// Recommended cap on correlation matrix variables
pub const DEFAULT_MAX_VARIABLES: usize = 5;

/// Default histogram bin count
pub const DEFAULT_BIN_COUNT: usize = 10;

/// Fixed-width histogram plus its summary statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Bin boundaries, `bin_count + 1` entries spanning `[min, max]`.
    /// Empty when a strict policy meets an empty input.
    pub bin_edges: Vec<f64>,
    /// Per-bin frequencies; sums to `count` outside the fallback paths
    pub frequencies: Vec<u64>,
    /// Population mean
    pub mean: f64,
    /// Lower-middle median (`sorted[n / 2]`, even counts are not averaged)
    pub median: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Third standardized moment; 0 when `std_dev` is 0
    pub skewness: f64,
    /// Number of values actually binned
    pub count: usize,
    /// True when any placeholder substitution occurred
    pub used_fallback: bool,
}

/// Symmetric Pearson correlation matrix over classified columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    /// Variable names in classifier order
    pub variables: Vec<String>,
    /// Row-major coefficients; diagonal is exactly 1.0
    pub matrix: Vec<Vec<f64>>,
    /// Off-diagonal entry with the largest signed value
    pub strongest_positive: Option<CorrelationPair>,
    /// Off-diagonal entry with the smallest signed value
    pub strongest_negative: Option<CorrelationPair>,
}

/// One off-diagonal matrix entry, identified by variable indices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationPair {
    /// Row index into `variables`
    pub i: usize,
    /// Column index into `variables`
    pub j: usize,
    /// Correlation coefficient of the pair
    pub value: f64,
}

/// A value flagged by the z-score scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    /// The flagged value
    pub value: f64,
    /// Index of the value in the scanned sequence
    pub index: usize,
    /// Absolute z-score, always greater than the threshold
    pub zscore: f64,
}

/// Compute a fixed-count histogram with summary statistics.
///
/// Total over all inputs: empty values and zero ranges resolve via the
/// policy's fallback rules instead of failing. See
/// [`descriptive`](self::descriptive) for the binning convention.
pub fn build_distribution(values: &[f64], bin_count: usize, policy: &FallbackPolicy) -> Histogram {
    descriptive::build_distribution_impl(values, bin_count, policy)
}

/// Pearson correlation coefficient between two equal-length sequences.
///
/// Returns 0 when the lengths differ or either side has zero variance;
/// degenerate input is a safe default here, not an error.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    correlation::pearson_impl(x, y)
}

/// Build a symmetric correlation matrix over up to `max_variables` of the
/// given columns, in order. Pairs with fewer than 2 row-aligned valid
/// values default to the 0.1 placeholder coefficient.
pub fn build_correlation_matrix(
    dataset: &Dataset,
    columns: &[String],
    max_variables: usize,
) -> CorrelationMatrix {
    correlation::correlation_matrix_impl(dataset, columns, max_variables)
}

/// Flag values whose absolute z-score exceeds 2, sorted by severity.
/// A zero-variance input yields no anomalies.
pub fn find_anomalies(values: &[f64]) -> Vec<Anomaly> {
    anomaly::find_anomalies_impl(values)
}

/// Sum anomaly counts across every classified numeric column of the
/// dataset. Under the demo policy a true total of 0 is replaced by a small
/// pseudo-random positive count.
pub fn count_anomalies(dataset: &Dataset, policy: &FallbackPolicy) -> u64 {
    anomaly::count_anomalies_impl(dataset, policy)
}
