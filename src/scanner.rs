/// One non-blank input line.
#[derive(Debug, Clone, PartialEq)]
pub struct Line<'a> {
    /// 1-based position in the raw input, counting blank lines.
    pub number: usize,
    /// Count of leading space characters. Tabs are not interpreted as
    /// indentation; a tab-indented line scans as indent 0.
    pub indent: usize,
    /// The line with surrounding whitespace trimmed.
    pub content: &'a str,
}

/// Split raw text into (indent, content) pairs, dropping lines whose
/// trimmed content is empty. Handles both bare and CRLF line endings.
pub fn scan(text: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    for (idx, raw) in text.split('\n').enumerate() {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        let content = raw.trim();
        if content.is_empty() {
            continue;
        }
        let indent = raw.chars().take_while(|c| *c == ' ').count();
        lines.push(Line {
            number: idx + 1,
            indent,
            content,
        });
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_skips_blank_lines() {
        let lines = scan("a: 1\n\n   \nb: 2\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], Line { number: 1, indent: 0, content: "a: 1" });
        assert_eq!(lines[1], Line { number: 4, indent: 0, content: "b: 2" });
    }

    #[test]
    fn test_scan_counts_leading_spaces() {
        let lines = scan("key:\n    - item\n");
        assert_eq!(lines[1].indent, 4);
        assert_eq!(lines[1].content, "- item");
    }

    #[test]
    fn test_scan_handles_crlf() {
        let lines = scan("a: 1\r\n  b: 2\r\n");
        assert_eq!(lines[0].content, "a: 1");
        assert_eq!(lines[1], Line { number: 2, indent: 2, content: "b: 2" });
    }

    #[test]
    fn test_scan_does_not_count_tabs_as_indent() {
        let lines = scan("\tkey: 1\n");
        assert_eq!(lines[0].indent, 0);
        assert_eq!(lines[0].content, "key: 1");
    }

    #[test]
    fn test_scan_empty_input() {
        assert!(scan("").is_empty());
        assert!(scan("\n\n").is_empty());
    }
}
