use crate::value::Value;

/// Render a value tree back to the subset notation.
///
/// Covers every tree the notation itself can produce; the inverse of
/// parsing up to scalar spelling (a parsed `1e3` comes back as `1000`).
pub fn to_subset_text(value: &Value) -> String {
    let mut out = String::new();
    match value {
        Value::Map(_) => emit_map_block(value, 0, &mut out),
        Value::List(_) => emit_list_block(value, 0, &mut out),
        scalar => {
            // Not a document root the grammar can produce; best effort.
            out.push_str(&scalar_text(scalar));
            out.push('\n');
        }
    }
    out
}

fn emit_map_block(value: &Value, indent: usize, out: &mut String) {
    let Some(map) = value.as_map() else { return };
    let pad = " ".repeat(indent);
    for (key, child) in map {
        if is_block(child) {
            out.push_str(&format!("{}{}:\n", pad, key));
            emit_block(child, indent + 2, out);
        } else {
            out.push_str(&format!("{}{}: {}\n", pad, key, scalar_text(child)));
        }
    }
}

fn emit_list_block(value: &Value, indent: usize, out: &mut String) {
    let Some(items) = value.as_list() else { return };
    let pad = " ".repeat(indent);
    for item in items {
        if is_block(item) {
            // A lone dash opens the item; its body sits one level deeper.
            out.push_str(&pad);
            out.push_str("-\n");
            emit_block(item, indent + 2, out);
        } else {
            out.push_str(&format!("{}- {}\n", pad, scalar_text(item)));
        }
    }
}

fn emit_block(value: &Value, indent: usize, out: &mut String) {
    match value {
        Value::Map(_) => emit_map_block(value, indent, out),
        Value::List(_) => emit_list_block(value, indent, out),
        _ => {}
    }
}

/// Containers with children need their own block; everything else fits
/// on the parent line ([] and {} have flow spellings).
fn is_block(value: &Value) -> bool {
    match value {
        Value::Map(map) => !map.is_empty(),
        Value::List(items) => !items.is_empty(),
        _ => false,
    }
}

/// The flow spelling of a value, as used in value position and in
/// diagnostics. Non-empty containers render in a bracketed summary form
/// meant for messages, not for re-parsing.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) => "false".to_string(),
        Value::Number(n) => match value.as_i64() {
            Some(i) => i.to_string(),
            None => n.to_string(),
        },
        Value::String(s) => {
            if needs_quoting(s) {
                quoted(s)
            } else {
                s.clone()
            }
        }
        Value::List(items) => {
            if items.is_empty() {
                "[]".to_string()
            } else {
                let inner: Vec<String> = items.iter().map(scalar_text).collect();
                format!("[{}]", inner.join(", "))
            }
        }
        Value::Map(map) => {
            if map.is_empty() {
                "{}".to_string()
            } else {
                format!("{{{} entries}}", map.len())
            }
        }
    }
}

/// A bare spelling of this text would coerce to something other than the
/// string itself.
fn needs_quoting(text: &str) -> bool {
    if text.is_empty() || text.trim() != text {
        return true;
    }
    if matches!(text, "[]" | "{}" | "null" | "true" | "false") {
        return true;
    }
    if text.parse::<f64>().map(|n| n.is_finite()).unwrap_or(false) {
        return true;
    }
    let bytes = text.as_bytes();
    bytes.len() >= 2 && (bytes[0] == b'"' || bytes[0] == b'\'') && bytes[bytes.len() - 1] == bytes[0]
}

fn quoted(text: &str) -> String {
    if !text.contains('"') {
        format!("\"{}\"", text)
    } else if !text.contains('\'') {
        format!("'{}'", text)
    } else {
        // No escape syntax exists; leave it bare.
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn round_trip(input: &str) {
        let first = parse(input).expect("first parse");
        let text = to_subset_text(&first);
        let second = parse(&text).expect("re-parse");
        assert_eq!(first, second, "round trip changed the tree for:\n{}", text);
    }

    #[test]
    fn test_round_trip_flat_mapping() {
        round_trip("a: 1\nb: two\nc: true\n");
    }

    #[test]
    fn test_round_trip_nested_records() {
        round_trip(
            "id: 4\nslug: flamlet\nname:\n  de: Flamling\ntypes:\n  - fire\nevolutions:\n  - target: 5\n    condition: Level 16\n",
        );
    }

    #[test]
    fn test_round_trip_tricky_scalars() {
        round_trip("a: \"10\"\nb: \"true\"\nc: null\nd: []\ne: {}\nf: 0.5\n");
    }

    #[test]
    fn test_round_trip_root_list() {
        round_trip("- 1\n- x\n- null\n");
    }

    #[test]
    fn test_round_trip_preserves_key_order() {
        let first = parse("z: 1\na: 2\nm: 3\n").expect("parse");
        let second = parse(&to_subset_text(&first)).expect("re-parse");
        let (Value::Map(first), Value::Map(second)) = (&first, &second) else {
            panic!("expected maps");
        };
        let first_keys: Vec<_> = first.keys().collect();
        let second_keys: Vec<_> = second.keys().collect();
        assert_eq!(first_keys, second_keys);
    }

    #[test]
    fn test_deep_structure_round_trip() {
        round_trip("outer:\n  -\n    - 1\n    - 2\n  - plain\ninner:\n  a:\n    b: x\n");
    }

    #[test]
    fn test_scalar_text_quotes_when_coercion_would_differ() {
        assert_eq!(scalar_text(&Value::String("10".into())), "\"10\"");
        assert_eq!(scalar_text(&Value::String("plain".into())), "plain");
        assert_eq!(scalar_text(&Value::String("".into())), "\"\"");
    }
}
