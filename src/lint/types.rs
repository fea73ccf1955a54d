use std::collections::HashSet;

use super::{COLOR_RE, LintReport, SLUG_RE, check_tts, non_empty_str};
use crate::value::Value;

/// Check the type-record document: slugs, display names, colors, and
/// slug uniqueness.
pub fn lint_types(doc: &Value, report: &mut LintReport) {
    let Some(entries) = doc.as_list() else {
        report.push("types.yml must be a list");
        return;
    };

    let mut seen = HashSet::new();
    for (idx, entry) in entries.iter().enumerate() {
        let label = format!("types.yml entry {}", idx + 1);
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

        if non_empty_str(entry.get("name").and_then(|n| n.get("de"))).is_none() {
            report.push(format!("{} missing name.de", label));
        }

        match non_empty_str(entry.get("color")) {
            None => report.push(format!("{} missing color", label)),
            Some(c) if !COLOR_RE.is_match(c) => {
                report.push(format!("{} invalid color: {}", label, c));
            }
            _ => {}
        }

        check_tts(entry, &label, report);

        if let Some(s) = slug {
            if !seen.insert(s.to_string()) {
                report.push(format!("types.yml duplicate slug: {}", s));
            }
        }
    }
}
