use std::collections::HashSet;

use super::{LintReport, SLUG_RE, check_tts, non_empty_str};
use crate::value::Value;

/// Check the move-record document; `type_slugs` is the known type set
/// for referential checks.
pub fn lint_moves(doc: &Value, type_slugs: &HashSet<String>, report: &mut LintReport) {
    let Some(entries) = doc.as_list() else {
        report.push("moves.yml must be a list");
        return;
    };

    let mut seen = HashSet::new();
    for (idx, entry) in entries.iter().enumerate() {
        let label = format!("moves.yml entry {}", idx + 1);
        if entry.as_map().is_none() {
            report.push(format!("{} must be an object", label));
            continue;
        }

        let slug = non_empty_str(entry.get("slug"));
        match slug {
            None => report.push(format!("{} missing slug", label)),
            Some(s) if !SLUG_RE.is_match(s) => {
                report.push(format!("{} invalid slug: {}", label, s));
            }
            _ => {}
        }

        for lang in ["de", "en"] {
            if non_empty_str(entry.get("name").and_then(|n| n.get(lang))).is_none() {
                report.push(format!("{} missing name.{}", label, lang));
            }
        }

        match non_empty_str(entry.get("type")) {
            None => report.push(format!("{} missing type", label)),
            Some(t) if !type_slugs.contains(t) => {
                report.push(format!("{} unknown type: {}", label, t));
            }
            _ => {}
        }

        match entry.get("power").and_then(Value::as_f64) {
            Some(power) if power >= 0.0 => {}
            _ => report.push(format!("{} invalid power", label)),
        }

        if non_empty_str(entry.get("description").and_then(|d| d.get("de"))).is_none() {
            report.push(format!("{} missing description.de", label));
        }

        check_tts(entry, &label, report);

        if let Some(s) = slug {
            if !seen.insert(s.to_string()) {
                report.push(format!("moves.yml duplicate slug: {}", s));
            }
        }
    }
}
