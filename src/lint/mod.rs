use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::value::Value;

mod moves;
mod species;
mod types;

pub use moves::lint_moves;
pub use species::lint_species;
pub use types::lint_types;

pub(crate) static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[a-z0-9-]+$").unwrap());
pub(crate) static COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

/// Accumulated findings for one lint run. Tools report everything before
/// failing, so a single run surfaces every violation at once.
#[derive(Debug, Default)]
pub struct LintReport {
    findings: Vec<String>,
}

impl LintReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, finding: impl Into<String>) {
        self.findings.push(finding.into());
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn findings(&self) -> &[String] {
        &self.findings
    }
}

/// The set of `slug` values in a sequence document; entries without a
/// usable slug are skipped (their absence is reported elsewhere).
pub fn slug_set(doc: &Value) -> HashSet<String> {
    doc.as_list()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|e| e.get("slug").and_then(Value::as_str))
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// A non-empty string field, the way the checks below want them.
pub(crate) fn non_empty_str<'a>(value: Option<&'a Value>) -> Option<&'a str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Shared check for the optional `tts` block: must be a map carrying a
/// string `de` entry.
pub(crate) fn check_tts(entry: &Value, label: &str, report: &mut LintReport) {
    let Some(tts) = entry.get("tts").filter(|t| !t.is_null()) else {
        return;
    };
    if tts.as_map().is_none() {
        report.push(format!("{} tts must be an object", label));
    }
    if non_empty_str(tts.get("de")).is_none() {
        report.push(format!("{} missing tts.de", label));
    }
}
