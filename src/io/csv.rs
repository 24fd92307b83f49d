use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::dataset::{Dataset, Value};
use crate::error::Result;

/// Read a dataset from a CSV file. The header row defines the schema.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let file = File::open(path.as_ref())?;
    read_csv_reader(file)
}

/// Read a dataset from any CSV reader
pub fn read_csv_reader<R: Read>(reader: R) -> Result<Dataset> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
    let mut dataset = Dataset::with_columns(headers.clone())?;

    for record in rdr.records() {
        let record = record?;
        let row = (0..headers.len())
            .map(|i| infer_value(record.get(i).unwrap_or("")))
            .collect();
        dataset.push_row(row)?;
    }
    Ok(dataset)
}

/// Light type inference for a CSV field: integer, then float, then boolean,
/// with empty fields as null and everything else as text.
fn infer_value(field: &str) -> Value {
    if field.is_empty() {
        return Value::Null;
    }
    if let Ok(v) = field.parse::<i64>() {
        return Value::Int(v);
    }
    if let Ok(v) = field.parse::<f64>() {
        return Value::Float(v);
    }
    match field.to_ascii_lowercase().as_str() {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::Text(field.to_string()),
    }
}
