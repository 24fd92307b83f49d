//! Row-set data model
//!
//! A [`Dataset`] is an ordered sequence of rows sharing one schema. The
//! schema is taken from the first record and column order is preserved,
//! since downstream consumers (classifier, correlation engine) depend on
//! declaration order. Rows are read-only once ingested.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Column name fragments that disqualify a column from numeric analysis.
/// Matched case-insensitively as substrings.
const EXCLUDED_NAME_FRAGMENTS: [&str; 3] = ["id", "year", "slug"];

/// A single cell value in a row-set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Missing value
    Null,
    /// Boolean flag (never numeric-analyzable)
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Free-text label (may still hold a numeric string)
    Text(String),
}

impl Value {
    /// Coerce to a finite `f64` if possible.
    ///
    /// Integers and finite floats convert directly; text is trimmed and
    /// parsed as a full number. Booleans and nulls never coerce.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) if v.is_finite() => Some(*v),
            Value::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None,
        }
    }

    /// Coerce to an integer sort key. Fractional values truncate.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            Value::Float(v) if v.is_finite() => Some(*v as i64),
            Value::Text(s) => {
                let trimmed = s.trim();
                trimmed
                    .parse::<i64>()
                    .ok()
                    .or_else(|| trimmed.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v as i64))
            }
            _ => None,
        }
    }

    /// Render a display label. Nulls have no label.
    pub fn as_label(&self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::Bool(v) => Some(v.to_string()),
            Value::Int(v) => Some(v.to_string()),
            Value::Float(v) => Some(v.to_string()),
            Value::Text(s) => Some(s.clone()),
        }
    }

    /// True for the missing value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

/// An ordered, homogeneous row-set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Dataset {
    /// Create an empty dataset with no schema
    pub fn new() -> Self {
        Dataset::default()
    }

    /// Create an empty dataset with a fixed schema
    pub fn with_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        for (i, name) in columns.iter().enumerate() {
            if columns[..i].contains(name) {
                return Err(Error::DuplicateColumnName(name.clone()));
            }
        }
        Ok(Dataset {
            columns,
            rows: Vec::new(),
        })
    }

    /// Append a row. The value count must match the schema.
    pub fn push_row(&mut self, values: Vec<Value>) -> Result<()> {
        if values.len() != self.columns.len() {
            return Err(Error::InconsistentRowCount {
                expected: self.columns.len(),
                found: values.len(),
            });
        }
        self.rows.push(values);
        Ok(())
    }

    /// Build a dataset from ordered records.
    ///
    /// The first record's key order becomes the schema. Later records are
    /// matched by name; keys absent from a record yield [`Value::Null`] and
    /// keys outside the schema are ignored, since rows are assumed
    /// homogeneous.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vec<(String, Value)>>,
    {
        let mut iter = records.into_iter();
        let first = match iter.next() {
            Some(record) => record,
            None => return Ok(Dataset::new()),
        };

        let mut dataset = Dataset::with_columns(first.iter().map(|(name, _)| name.clone()))?;
        dataset
            .rows
            .push(first.into_iter().map(|(_, value)| value).collect());

        for record in iter {
            let row = dataset
                .columns
                .iter()
                .map(|name| {
                    record
                        .iter()
                        .find(|(key, _)| key == name)
                        .map(|(_, value)| value.clone())
                        .unwrap_or(Value::Null)
                })
                .collect();
            dataset.rows.push(row);
        }
        Ok(dataset)
    }

    /// Column names in declaration order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the dataset holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column in the schema
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell lookup by row index and column name
    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        let col = self.column_index(column)?;
        self.rows.get(row).map(|r| &r[col])
    }

    /// Row access by index
    pub fn row(&self, index: usize) -> Option<&[Value]> {
        self.rows.get(index).map(|r| r.as_slice())
    }

    /// Iterate over rows
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Value]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// Extract a column as finite numbers, dropping values that fail to
    /// coerce. An unknown column yields an empty vector.
    pub fn numeric_values(&self, column: &str) -> Vec<f64> {
        let col = match self.column_index(column) {
            Some(col) => col,
            None => return Vec::new(),
        };
        self.rows
            .iter()
            .filter_map(|row| row[col].as_number())
            .collect()
    }

    /// Extract two columns row-aligned, dropping any row where either side
    /// fails numeric coercion.
    pub fn paired_numeric(&self, left: &str, right: &str) -> Vec<(f64, f64)> {
        let (a, b) = match (self.column_index(left), self.column_index(right)) {
            (Some(a), Some(b)) => (a, b),
            _ => return Vec::new(),
        };
        self.rows
            .iter()
            .filter_map(|row| match (row[a].as_number(), row[b].as_number()) {
                (Some(x), Some(y)) => Some((x, y)),
                _ => None,
            })
            .collect()
    }

    /// Classify the numeric-analyzable columns.
    ///
    /// A column qualifies when its first-row value coerces to a finite
    /// number, is not a boolean, and its lower-cased name contains none of
    /// the identifier fragments (`id`, `year`, `slug`). Only the first row
    /// is inspected; later rows may still fail coercion and are filtered by
    /// the numeric projections instead. Declaration order is preserved.
    pub fn numeric_columns(&self) -> Vec<String> {
        let first = match self.rows.first() {
            Some(row) => row,
            None => return Vec::new(),
        };
        self.columns
            .iter()
            .zip(first.iter())
            .filter(|(name, value)| {
                if matches!(value, Value::Bool(_)) || value.as_number().is_none() {
                    return false;
                }
                let lower = name.to_lowercase();
                let excluded = EXCLUDED_NAME_FRAGMENTS.iter().any(|f| lower.contains(f));
                if excluded {
                    log::debug!("column '{}' excluded from numeric analysis by name", name);
                }
                !excluded
            })
            .map(|(name, _)| name.clone())
            .collect()
    }
}
