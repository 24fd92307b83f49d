//! tabrs: a small tabular analytics engine
//!
//! Turns a raw row-set into the derived structures a presentation layer
//! consumes: ordered series, fixed-count histograms with summary
//! statistics, Pearson correlation matrices, and z-score anomaly reports.
//! Every contract is a pure, synchronous function of its inputs; degenerate
//! data resolves through a togglable [`FallbackPolicy`] instead of errors.

pub mod dataset;
pub mod error;
pub mod fallback;
pub mod io;
pub mod series;
pub mod stats;

// Re-export commonly used types
pub use dataset::{Dataset, Value};
pub use error::{Error, Result};
pub use fallback::FallbackPolicy;
pub use series::{build_series, SeriesPoint};
pub use stats::{
    build_correlation_matrix, build_distribution, count_anomalies, find_anomalies, pearson,
    Anomaly, CorrelationMatrix, CorrelationPair, Histogram, DEFAULT_BIN_COUNT,
    DEFAULT_MAX_VARIABLES,
};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
