//! Pearson correlation and matrix construction

use crate::dataset::Dataset;
use crate::stats::{CorrelationMatrix, CorrelationPair};

/// Coefficient used when a pair has too few valid row-aligned values to
/// correlate. Deliberately a small positive value rather than 0, so sparse
/// pairs do not render as fully independent.
const SPARSE_PAIR_PLACEHOLDER: f64 = 0.1;

/// Pearson product-moment correlation.
///
/// A length mismatch or zero variance on either side returns 0 as a safe
/// default; this contract never fails.
pub(crate) fn pearson_impl(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.is_empty() {
        return 0.0;
    }
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;
    for (xi, yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        numerator += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    if sum_sq_x == 0.0 || sum_sq_y == 0.0 {
        return 0.0;
    }
    numerator / (sum_sq_x * sum_sq_y).sqrt()
}

/// Correlation matrix over up to `max_variables` columns.
///
/// Each unordered pair is computed once from row-aligned values (rows where
/// either side fails numeric coercion are dropped) and mirrored, so the
/// matrix is symmetric by construction. The strongest positive and
/// negative pairs are tracked row-major with ties kept first-encountered.
pub(crate) fn correlation_matrix_impl(
    dataset: &Dataset,
    columns: &[String],
    max_variables: usize,
) -> CorrelationMatrix {
    let variables: Vec<String> = columns.iter().take(max_variables).cloned().collect();
    let n = variables.len();
    let mut matrix = vec![vec![0.0; n]; n];

    for i in 0..n {
        matrix[i][i] = 1.0;
        for j in (i + 1)..n {
            let pairs = dataset.paired_numeric(&variables[i], &variables[j]);
            let value = if pairs.len() >= 2 {
                let (x, y): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
                pearson_impl(&x, &y)
            } else {
                log::warn!(
                    "columns '{}' and '{}' share fewer than 2 valid rows, using placeholder correlation",
                    variables[i],
                    variables[j]
                );
                SPARSE_PAIR_PLACEHOLDER
            };
            matrix[i][j] = value;
            matrix[j][i] = value;
        }
    }

    let mut strongest_positive: Option<CorrelationPair> = None;
    let mut strongest_negative: Option<CorrelationPair> = None;
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let value = matrix[i][j];
            if strongest_positive.as_ref().map_or(true, |p| value > p.value) {
                strongest_positive = Some(CorrelationPair { i, j, value });
            }
            if strongest_negative.as_ref().map_or(true, |p| value < p.value) {
                strongest_negative = Some(CorrelationPair { i, j, value });
            }
        }
    }

    CorrelationMatrix {
        variables,
        matrix,
        strongest_positive,
        strongest_negative,
    }
}
