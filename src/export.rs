// License: MIT

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::DexError;
use crate::value::Value;

/// Convert a parsed value into its JSON equivalent.
///
/// The mapping is 1:1: Null → null, Bool → bool, Number → number,
/// String → string, List → array, Map → object with key order preserved.
/// Integral numbers come out as JSON integers so identifiers don't grow
/// a trailing `.0`.
pub fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => json!(b),
        Value::Number(n) => match value.as_i64() {
            Some(i) => json!(i),
            None => json!(n),
        },
        Value::String(s) => json!(s),
        Value::List(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        Value::Map(map) => {
            let mut out = serde_json::Map::new();
            for (key, value) in map {
                out.insert(key.clone(), to_json(value));
            }
            serde_json::Value::Object(out)
        }
    }
}

/// JSON array over a slice of parsed records.
pub fn slice_to_json(items: &[Value]) -> serde_json::Value {
    serde_json::Value::Array(items.iter().map(to_json).collect())
}

/// Write pretty-printed JSON to disk.
pub fn write_json<P: AsRef<Path>>(path: P, json: &serde_json::Value) -> Result<(), DexError> {
    let path = path.as_ref();
    let text = serde_json::to_string_pretty(json).map_err(|e| DexError::FileError {
        message: format!("Failed to serialize: {}", e),
        path: path.to_string_lossy().to_string(),
    })?;
    fs::write(path, text).map_err(|e| DexError::FileError {
        message: format!("Failed to write file: {}", e),
        path: path.to_string_lossy().to_string(),
    })
}
