//! Data ingestion boundary
//!
//! Readers that turn external record files into a [`Dataset`](crate::Dataset).
//! This is the only fallible layer of the crate; the analytics engine never
//! performs I/O itself. Network acquisition, caching and retries live with
//! the caller.

pub mod csv;
pub mod json;

// Re-export commonly used functions
pub use csv::read_csv;
pub use json::{read_json, read_json_str};
