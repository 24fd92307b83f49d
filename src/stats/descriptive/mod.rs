//! Descriptive statistics and histogram construction
//!
//! All statistics here use population conventions (divide by `n`) and the
//! lower-middle median, matching the observed behavior of the dashboard
//! this engine was ported from.

use crate::fallback::FallbackPolicy;
use crate::stats::Histogram;
use rand::Rng;

/// Representative substitute used when the demo policy meets an empty
/// value set ("insufficient-data fallback").
const INSUFFICIENT_DATA_FALLBACK: [f64; 11] = [
    25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0, 75.0,
];

/// Population mean. Callers guarantee a non-empty slice.
pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation. Callers guarantee a non-empty slice.
pub(crate) fn std_dev(values: &[f64]) -> f64 {
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Lower-middle median: the element at `sorted[n / 2]`. Even-length input
/// deliberately takes the upper of the two central elements instead of
/// averaging them.
pub(crate) fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted[sorted.len() / 2]
}

/// Third standardized moment in population form. Zero variance yields 0
/// rather than a division by zero.
pub(crate) fn skewness(values: &[f64], mean: f64, std_dev: f64) -> f64 {
    if std_dev == 0.0 {
        return 0.0;
    }
    values
        .iter()
        .map(|v| ((v - mean) / std_dev).powi(3))
        .sum::<f64>()
        / values.len() as f64
}

/// Histogram construction.
///
/// Bin `i` covers `[min + i*width, min + (i+1)*width)` with the final bin
/// also including `max`, implemented by clamping the computed bin index to
/// `bin_count - 1`. A zero range is widened to `max = min + 1` so the bin
/// width stays positive.
pub(crate) fn build_distribution_impl(
    values: &[f64],
    bin_count: usize,
    policy: &FallbackPolicy,
) -> Histogram {
    let bin_count = bin_count.max(1);

    let substituted;
    let mut used_fallback = false;
    let values: &[f64] = if values.is_empty() {
        if policy.allow_empty() {
            return Histogram {
                bin_edges: Vec::new(),
                frequencies: vec![0; bin_count],
                mean: 0.0,
                median: 0.0,
                std_dev: 0.0,
                skewness: 0.0,
                count: 0,
                used_fallback: false,
            };
        }
        log::warn!("no valid values for distribution, substituting representative set");
        used_fallback = true;
        substituted = INSUFFICIENT_DATA_FALLBACK.to_vec();
        &substituted
    } else {
        values
    };

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let observed_max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    // Synthetic widening for constant input.
    let max = if observed_max == min { min + 1.0 } else { observed_max };
    let width = (max - min) / bin_count as f64;

    let mut frequencies = vec![0u64; bin_count];
    for &v in values {
        let bin = (((v - min) / width).floor() as usize).min(bin_count - 1);
        frequencies[bin] += 1;
    }

    // Floating edge guard; cannot trigger after the substitutions above but
    // kept as the last line of the never-show-nothing contract.
    if frequencies.iter().all(|&f| f == 0) && !policy.allow_empty() {
        log::warn!("all frequency bins are zero, substituting placeholder frequencies");
        let mut rng = policy.rng();
        for f in &mut frequencies {
            *f = 5 + rng.random_range(0..10);
        }
        used_fallback = true;
    }

    let mut bin_edges: Vec<f64> = (0..=bin_count).map(|i| min + i as f64 * width).collect();
    bin_edges[bin_count] = max;

    let m = mean(values);
    let sd = std_dev(values);
    Histogram {
        bin_edges,
        frequencies,
        mean: m,
        median: median(values),
        std_dev: sd,
        skewness: skewness(values, m, sd),
        count: values.len(),
        used_fallback,
    }
}
