use std::collections::HashSet;

use super::{LintReport, non_empty_str};
use crate::emit::scalar_text;
use crate::value::Value;

/// Check every species file: field presence and types, referential
/// integrity against the type and move sets, filename-vs-id/slug
/// consistency, and id/slug uniqueness across the directory.
///
/// `files` pairs each document with its base file name. An unresolvable
/// `evolves_from` target is not an error; the build renders it unknown.
pub fn lint_species(
    files: &[(String, Value)],
    type_slugs: &HashSet<String>,
    move_slugs: &HashSet<String>,
    report: &mut LintReport,
) {
    let mut by_id: HashSet<i64> = HashSet::new();
    let mut by_slug: HashSet<String> = HashSet::new();

    for (base, doc) in files {
        if doc.as_map().is_none() {
            report.push(format!("{} is not a valid object", base));
            continue;
        }

        let id = doc.get("id").and_then(Value::as_i64);
        if id.is_none() {
            report.push(format!("{} invalid id", base));
        }
        let slug = non_empty_str(doc.get("slug"));
        if slug.is_none() {
            report.push(format!("{} missing slug", base));
        }
        if non_empty_str(doc.get("name").and_then(|n| n.get("de"))).is_none() {
            report.push(format!("{} missing name.de", base));
        }
        if non_empty_str(doc.get("entry").and_then(|e| e.get("de"))).is_none() {
            report.push(format!("{} missing entry.de", base));
        }

        match doc.get("types").and_then(Value::as_list) {
            None => report.push(format!("{} missing types", base)),
            Some(entries) if entries.is_empty() => {
                report.push(format!("{} missing types", base));
            }
            Some(entries) => {
                for entry in entries {
                    let known = entry
                        .as_str()
                        .map(|t| type_slugs.contains(t))
                        .unwrap_or(false);
                    if !known {
                        report.push(format!("{} unknown type slug: {}", base, scalar_text(entry)));
                    }
                }
            }
        }

        for field in ["height_m", "weight_kg"] {
            if doc.get(field).and_then(Value::as_f64).is_none() {
                report.push(format!("{} invalid {}", base, field));
            }
        }

        match non_empty_str(doc.get("signature_move")) {
            None => report.push(format!("{} missing signature_move", base)),
            Some(s) if !move_slugs.contains(s) => {
                report.push(format!("{} unknown signature_move: {}", base, s));
            }
            _ => {}
        }

        if let Some(evolves_from) = doc.get("evolves_from").filter(|v| !v.is_null()) {
            if evolves_from.as_f64().is_none() {
                report.push(format!("{} invalid evolves_from", base));
            }
        }

        match doc.get("evolutions").and_then(Value::as_list) {
            None => report.push(format!("{} evolutions must be an array", base)),
            Some(entries) => {
                for (idx, entry) in entries.iter().enumerate() {
                    if entry.as_map().is_none() {
                        report.push(format!("{} evolutions[{}] must be object", base, idx));
                        continue;
                    }
                    if entry.get("target").and_then(Value::as_i64).is_none() {
                        report.push(format!("{} evolutions[{}] invalid target", base, idx));
                    }
                    if non_empty_str(entry.get("condition")).is_none() {
                        report.push(format!("{} evolutions[{}] missing condition", base, idx));
                    }
                }
            }
        }

        if let (Some(id), Some(slug)) = (id, slug) {
            let expected = format!("{:03}_{}.yml", id, slug);
            if base != &expected {
                report.push(format!("{} filename mismatch (expected {})", base, expected));
            }
            if !by_id.insert(id) {
                report.push(format!("{} duplicate id {}", base, id));
            }
            if !by_slug.insert(slug.to_string()) {
                report.push(format!("{} duplicate slug {}", base, slug));
            }
        }
    }
}
