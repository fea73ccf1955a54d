use indexmap::IndexMap;

use crate::value::Value;

/// Map trimmed value text to a typed scalar.
///
/// The literal keywords are matched by exact equality before the numeric
/// and string fallbacks, so `truex` or `nullable` stay strings. Anything
/// that does not parse fully as a finite number degrades to a string
/// rather than erroring.
pub(crate) fn coerce_scalar(text: &str) -> Value {
    match text {
        "[]" => return Value::List(Vec::new()),
        "{}" => return Value::Map(IndexMap::new()),
        "null" => return Value::Null,
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    if !text.is_empty() {
        if let Ok(n) = text.parse::<f64>() {
            if n.is_finite() {
                return Value::Number(n);
            }
        }
    }

    if let Some(inner) = strip_matching_quotes(text) {
        // Quotes are stripped verbatim; the subset has no escape syntax.
        return Value::String(inner.to_string());
    }

    Value::String(text.to_string())
}

/// Text wrapped in one matching pair of double or single quotes.
fn strip_matching_quotes(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 && (bytes[0] == b'"' || bytes[0] == b'\'') && bytes[bytes.len() - 1] == bytes[0] {
        Some(&text[1..text.len() - 1])
    } else {
        None
    }
}
