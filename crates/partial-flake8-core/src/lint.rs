// Rust guideline compliant 2026-02-06

//! Parsing of linter diagnostics.
//!
//! The linter emits one diagnostic per line as `<path>:<line>:<col>: CODE message`.

use crate::models::LintFinding;
use regex::Regex;
use std::sync::OnceLock;

/// Width of a diagnostic code such as `E501`.
const CODE_WIDTH: usize = 4;

fn diagnostic_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // The lazy path group stops at the first `:<line>:<col>:`, so drive
    // letters in the path and colons in the message both survive.
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?P<path>.*?):(?P<line>\d+):(?P<col>\d+):(?P<rest>.*)$")
            .expect("diagnostic pattern must compile")
    })
}

/// Parses one diagnostic line.
///
/// Returns `None` for empty or malformed lines. Line and column numbers below
/// 1 (reported by some linters for whole-file errors) are clamped to 1.
///
/// # Examples
///
/// ```
/// use partial_flake8_core::parse_finding;
///
/// let finding = parse_finding("/repo/app.py:3:80: E501 line too long (91 > 79 characters)").unwrap();
/// assert_eq!(finding.line_number, 3);
/// assert_eq!(finding.code, "E501");
/// ```
pub fn parse_finding(line: &str) -> Option<LintFinding> {
    let line = line.trim_end_matches('\r');
    if line.is_empty() {
        return None;
    }

    let caps = diagnostic_pattern().captures(line)?;
    let line_number: u32 = caps.name("line")?.as_str().parse().ok()?;
    let column: u32 = caps.name("col")?.as_str().parse().ok()?;
    let rest = caps.name("rest")?.as_str();

    // One separator character precedes the code.
    let mut chars = rest.chars();
    chars.next()?;
    let after_separator = chars.as_str();

    let code: String = after_separator.chars().take(CODE_WIDTH).collect();
    if code.chars().count() != CODE_WIDTH || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    let text = &after_separator[code.len()..];
    let text = text.strip_prefix(' ').unwrap_or(text);

    Some(LintFinding {
        line_number: line_number.max(1),
        column: column.max(1),
        code,
        text: text.to_string(),
    })
}

/// Parses a full linter report, skipping lines that are not diagnostics.
///
/// Findings keep the order the linter emitted them in.
pub fn parse_report(output: &str) -> Vec<LintFinding> {
    output.lines().filter_map(parse_finding).collect()
}
