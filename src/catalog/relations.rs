use std::collections::HashMap;

use indexmap::IndexMap;

use crate::value::Value;

/// Resolved display info for one species id.
#[derive(Debug, Clone, PartialEq)]
pub struct NameRef {
    pub name: String,
    pub slug: Option<String>,
}

/// Numeric-identifier coercion: integral numbers pass through, numeric
/// strings parse, everything else is `None`.
pub fn to_dex_number(value: &Value) -> Option<i64> {
    let n = match value {
        Value::Number(n) => *n,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if n.fract() == 0.0 { Some(n as i64) } else { None }
}

/// id → name/slug over the raw (unpadded) species list, for resolving
/// evolution references.
pub fn name_index(species: &[Value]) -> HashMap<i64, NameRef> {
    let mut index = HashMap::new();
    for record in species {
        let Some(id) = record.get("id").and_then(to_dex_number) else {
            continue;
        };
        index.insert(
            id,
            NameRef {
                name: display_name(record),
                slug: record
                    .get("slug")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            },
        );
    }
    index
}

/// `name.de`, falling back to a scalar `name`, else the unknown marker.
fn display_name(record: &Value) -> String {
    let name = record.get("name");
    name.and_then(|n| n.get("de"))
        .and_then(Value::as_str)
        .or_else(|| name.and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| "???".to_string())
}

/// Fill id gaps with placeholder records so the list is dense from 1 to
/// the highest id.
pub fn pad_species(list: Vec<Value>) -> Vec<Value> {
    if list.is_empty() {
        return list;
    }
    let max_id = list
        .iter()
        .filter_map(|record| record.get("id").and_then(to_dex_number))
        .max()
        .unwrap_or(0);

    let mut by_id: HashMap<i64, Value> = HashMap::new();
    for record in list {
        if let Some(id) = record.get("id").and_then(to_dex_number) {
            by_id.insert(id, record);
        }
    }

    let mut padded = Vec::new();
    for id in 1..=max_id {
        match by_id.remove(&id) {
            Some(record) => padded.push(record),
            None => {
                let mut placeholder = IndexMap::new();
                placeholder.insert("id".to_string(), Value::Number(id as f64));
                placeholder.insert("placeholder".to_string(), Value::Bool(true));
                padded.push(Value::Map(placeholder));
            }
        }
    }
    padded
}

/// Resolve evolves-from/evolutions references against the name index.
/// Placeholder records pass through untouched.
pub fn resolve_relations(list: Vec<Value>, index: &HashMap<i64, NameRef>) -> Vec<Value> {
    list.into_iter()
        .map(|record| resolve_record(record, index))
        .collect()
}

fn resolve_record(record: Value, index: &HashMap<i64, NameRef>) -> Value {
    if is_placeholder(&record) {
        return record;
    }
    let Value::Map(mut map) = record else {
        return record;
    };

    let evolves_from = map.get("evolves_from").and_then(to_dex_number);
    let resolved_evolutions: Vec<Value> = map
        .get("evolutions")
        .and_then(Value::as_list)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| resolve_evolution_entry(entry, index))
                .collect()
        })
        .unwrap_or_default();

    if let Some(id) = evolves_from {
        let info = index.get(&id);
        map.insert(
            "evolves_from_name".to_string(),
            Value::String(info.map_or_else(|| "???".to_string(), |i| i.name.clone())),
        );
        if let Some(slug) = info.and_then(|i| i.slug.clone()) {
            map.insert("evolves_from_slug".to_string(), Value::String(slug));
        }
    }
    map.insert("evolutions".to_string(), Value::List(resolved_evolutions));
    Value::Map(map)
}

/// One evolution reference: either a bare id or `{target, condition}`.
/// Unknown targets keep the unknown marker so gaps stay visible.
fn resolve_evolution_entry(entry: &Value, index: &HashMap<i64, NameRef>) -> Option<Value> {
    if entry.is_null() {
        return None;
    }
    let mut target = entry;
    let mut condition = None;
    if let Value::Map(map) = entry {
        if let Some(t) = map.get("target") {
            target = t;
        }
        condition = map.get("condition").filter(|c| !c.is_null());
    }

    let target_id = to_dex_number(target);
    let info = target_id.and_then(|id| index.get(&id));

    let mut resolved = IndexMap::new();
    resolved.insert(
        "target_id".to_string(),
        target_id.map_or(Value::Null, |id| Value::Number(id as f64)),
    );
    resolved.insert(
        "target_name".to_string(),
        Value::String(info.map_or_else(|| "???".to_string(), |i| i.name.clone())),
    );
    if let Some(slug) = info.and_then(|i| i.slug.clone()) {
        resolved.insert("target_slug".to_string(), Value::String(slug));
    }
    if let Some(condition) = condition {
        resolved.insert("condition".to_string(), condition.clone());
    }
    Some(Value::Map(resolved))
}

/// Join each record's `signature_move` slug against the move list.
pub fn attach_signature_moves(list: Vec<Value>, moves: &[Value]) -> Vec<Value> {
    let by_slug: HashMap<&str, &Value> = moves
        .iter()
        .filter_map(|m| Some((m.get("slug")?.as_str()?, m)))
        .collect();

    list.into_iter()
        .map(|record| {
            if is_placeholder(&record) {
                return record;
            }
            let Value::Map(mut map) = record else {
                return record;
            };
            let data = map
                .get("signature_move")
                .and_then(Value::as_str)
                .and_then(|slug| by_slug.get(slug))
                .map(|m| (*m).clone())
                .unwrap_or(Value::Null);
            map.insert("signature_move_data".to_string(), data);
            Value::Map(map)
        })
        .collect()
}

fn is_placeholder(record: &Value) -> bool {
    record
        .get("placeholder")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}
