use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value as JsonValue;

use crate::dataset::{Dataset, Value};
use crate::error::{Error, Result};

/// Read a dataset from a JSON file holding an array of record objects
/// (the Data USA response shape). Key order of the first record becomes
/// the schema order; `serde_json`'s order-preserving maps keep it intact.
pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let file = File::open(path.as_ref())?;
    let json: JsonValue = serde_json::from_reader(BufReader::new(file))?;
    records_from_json(json)
}

/// Read a dataset from an in-memory JSON string
pub fn read_json_str(content: &str) -> Result<Dataset> {
    let json: JsonValue = serde_json::from_str(content)?;
    records_from_json(json)
}

fn records_from_json(json: JsonValue) -> Result<Dataset> {
    let array = match json {
        JsonValue::Array(array) => array,
        _ => {
            return Err(Error::InvalidInput(
                "JSON input must be an array of record objects".to_string(),
            ))
        }
    };

    let mut records = Vec::with_capacity(array.len());
    for item in array {
        match item {
            JsonValue::Object(map) => {
                records.push(
                    map.into_iter()
                        .map(|(key, value)| (key, convert_value(value)))
                        .collect(),
                );
            }
            _ => {
                return Err(Error::InvalidInput(
                    "every JSON array element must be a record object".to_string(),
                ))
            }
        }
    }
    Dataset::from_records(records)
}

fn convert_value(value: JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(v) => Value::Bool(v),
        JsonValue::Number(n) => {
            if let Some(v) = n.as_i64() {
                Value::Int(v)
            } else {
                Value::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        JsonValue::String(s) => Value::Text(s),
        // Nested structures are flattened to their JSON text; the engine
        // treats them as unparseable labels.
        other => Value::Text(other.to_string()),
    }
}
