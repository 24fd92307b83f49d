use thiserror::Error;

/// Error type for the ingestion boundary.
///
/// The statistics contracts themselves are total: degenerate numeric input
/// (empty sets, zero variance, mismatched lengths) resolves to documented
/// defaults instead of errors. Only malformed input shape and I/O can fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error")]
    Io(#[source] std::io::Error),

    #[error("CSV error")]
    Csv(#[source] csv::Error),

    #[error("JSON error")]
    Json(#[source] serde_json::Error),

    #[error("Row count mismatch: expected {expected} values, found {found}")]
    InconsistentRowCount { expected: usize, found: usize },

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Duplicate column name: {0}")]
    DuplicateColumnName(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;
