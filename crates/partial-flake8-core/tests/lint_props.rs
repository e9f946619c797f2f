// Rust guideline compliant 2026-02-06

//! Property-based tests for linter diagnostic parsing.

use partial_flake8_core::{parse_finding, parse_report};
use proptest::prelude::*;

proptest! {
    /// Well-formed diagnostics parse back into their fields, whatever the message holds.
    #[test]
    fn prop_parse_well_formed(
        dir in "/[a-z]{1,8}(/[a-z_]{1,8}){0,3}",
        line in 1u32..100_000,
        col in 1u32..500,
        code in "[EWFC][0-9]{3}",
        text in "[ -~]{0,60}",
    ) {
        let raw = format!("{dir}/mod.py:{line}:{col}: {code} {text}");
        let finding = parse_finding(&raw).unwrap();
        prop_assert_eq!(finding.line_number, line);
        prop_assert_eq!(finding.column, col);
        prop_assert_eq!(finding.code, code);
        prop_assert_eq!(finding.text, text);
    }

    /// Arbitrary output never panics and never yields more findings than lines.
    #[test]
    fn prop_parse_report_total(output in "\\PC{0,200}") {
        let findings = parse_report(&output);
        prop_assert!(findings.len() <= output.lines().count());
    }
}
