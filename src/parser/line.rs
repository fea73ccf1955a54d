use indexmap::IndexMap;

use super::{Attachment, Parser, coerce_scalar};
use crate::DexError;
use crate::scanner::Line;
use crate::value::Value;

/// Classify one line against the current parent frame and attach the
/// resulting node. Two shapes exist: list items and mapping entries;
/// anything else is a structural error.
pub(super) fn build_node(parser: &mut Parser, line: &Line) -> Result<(), DexError> {
    if let Some(rest) = line.content.strip_prefix("- ") {
        list_item(parser, line, rest)
    } else if line.content == "-" {
        // A lone dash opens an item with nothing on its own line.
        list_item(parser, line, "")
    } else if let Some((key, rest)) = line.content.split_once(':') {
        mapping_entry(parser, line, key.trim(), rest.trim())
    } else {
        Err(DexError::MalformedLine {
            line: line.number,
            text: line.content.to_string(),
        })
    }
}

fn list_item(parser: &mut Parser, line: &Line, rest: &str) -> Result<(), DexError> {
    parser.promote_to_list(line)?;

    if rest.is_empty() {
        // Deeper lines populate the fresh item.
        parser.push(line.indent, Value::Map(IndexMap::new()), Attachment::ListItem);
    } else if let Some((key, value_text)) = rest.split_once(':') {
        let key = key.trim();
        let value_text = value_text.trim();
        let mut item = IndexMap::new();
        let value = if value_text.is_empty() {
            Value::Map(IndexMap::new())
        } else {
            coerce_scalar(value_text)
        };
        item.insert(key.to_string(), value);
        parser.push(line.indent, Value::Map(item), Attachment::ListItem);
    } else {
        // Leaf scalar; no frame.
        parser.append_item(coerce_scalar(rest));
    }
    Ok(())
}

fn mapping_entry(
    parser: &mut Parser,
    line: &Line,
    key: &str,
    value_text: &str,
) -> Result<(), DexError> {
    if value_text.is_empty() {
        parser.require_map(line)?;
        // Open a block at this key; a list-item child may still turn the
        // container into a list before anything is stored.
        parser.push(
            line.indent,
            Value::Map(IndexMap::new()),
            Attachment::MapKey(key.to_string()),
        );
    } else {
        let value = coerce_scalar(value_text);
        parser.require_map(line)?.insert(key.to_string(), value);
    }
    Ok(())
}
