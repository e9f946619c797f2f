// Rust guideline compliant 2026-02-06

//! Significance and eligibility policies.
//!
//! Both tables are compiled in. Callers build them once at startup and pass
//! them explicitly to [`filter_significant`] and [`is_eligible`].

use crate::models::{ChangeSet, LintFinding};
use std::collections::BTreeSet;
use std::path::Path;

/// Cosmetic lint codes: style issues only reported on touched lines.
pub const COSMETIC_CODES: &[&str] = &[
    "E113", // unexpected indentation
    "E121", // continuation line under-indented for hanging indent
    "E123", // closing bracket does not match indentation of opening bracket's line
    "E126", // continuation line over-indented for hanging indent
    "E127", // continuation line over-indented for visual indent
    "E128", // continuation line under-indented for visual indent
    "E131", // continuation line unaligned for hanging indent
    "E203", // whitespace before ':'
    "E221", // multiple spaces before operator
    "E225", // missing whitespace around operator
    "E226", // missing whitespace around arithmetic operator
    "E231", // missing whitespace after ','
    "E251", // unexpected spaces around keyword / parameter equals
    "E265", // block comment should start with '# '
    "E302", // expected 2 blank lines, found 1
    "E303", // too many blank lines
    "E501", // line too long
    "W291", // trailing whitespace
];

/// Classification of lint codes into cosmetic and always-significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignificancePolicy {
    cosmetic: BTreeSet<String>,
}

impl SignificancePolicy {
    /// Creates a policy treating exactly `codes` as cosmetic.
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cosmetic: codes.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns whether `code` is cosmetic.
    pub fn is_cosmetic(&self, code: &str) -> bool {
        self.cosmetic.contains(code)
    }

    /// Returns whether `finding` blocks the commit given the touched lines.
    pub fn is_significant(&self, finding: &LintFinding, changes: &ChangeSet) -> bool {
        !self.is_cosmetic(&finding.code) || changes.contains(finding.line_number)
    }
}

impl Default for SignificancePolicy {
    fn default() -> Self {
        Self::new(COSMETIC_CODES.iter().copied())
    }
}

/// Keeps the findings that block the commit, preserving their order.
///
/// A finding is kept when its code is not cosmetic, or when it sits on a
/// line the commit touches.
///
/// # Examples
///
/// ```
/// use partial_flake8_core::{filter_significant, ChangeSet, LintFinding, SignificancePolicy};
///
/// let findings = vec![
///     LintFinding::new(10, 80, "E501", "line too long"),
///     LintFinding::new(20, 1, "F821", "undefined name 'x'"),
/// ];
/// let changes: ChangeSet = [5, 6].into_iter().collect();
/// let kept = filter_significant(&findings, &changes, &SignificancePolicy::default());
/// assert_eq!(kept, vec![findings[1].clone()]);
/// ```
pub fn filter_significant(
    findings: &[LintFinding],
    changes: &ChangeSet,
    policy: &SignificancePolicy,
) -> Vec<LintFinding> {
    findings
        .iter()
        .filter(|f| policy.is_significant(f, changes))
        .cloned()
        .collect()
}

/// A single path exclusion pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExclusionRule {
    /// Any `/<name>/` directory segment in the path.
    Directory(&'static str),
    /// The path contains this text anywhere.
    Contains(&'static str),
    /// The path ends with this text.
    Suffix(&'static str),
}

impl ExclusionRule {
    /// Returns whether `path` matches this rule.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Directory(name) => path.contains(&format!("/{name}/")),
            Self::Contains(text) => path.contains(text),
            Self::Suffix(text) => path.ends_with(text),
        }
    }
}

/// Which staged files are worth linting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityPolicy {
    /// Required source file extension, including the dot.
    pub extension: &'static str,
    /// Paths matching any of these rules are skipped.
    pub exclusions: Vec<ExclusionRule>,
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self {
            extension: ".py",
            exclusions: vec![
                ExclusionRule::Directory("migrations"),
                ExclusionRule::Directory("features"),
                ExclusionRule::Contains("settings.py"),
                ExclusionRule::Suffix("urls.py"),
            ],
        }
    }
}

impl EligibilityPolicy {
    /// Returns whether `path` passes the extension and exclusion checks.
    ///
    /// This does not touch the filesystem; see [`is_eligible`].
    pub fn accepts(&self, path: &Path) -> bool {
        let path = path.to_string_lossy().replace('\\', "/");
        path.ends_with(self.extension) && !self.exclusions.iter().any(|rule| rule.matches(&path))
    }
}

/// Returns whether `path` should be linted.
///
/// The path must pass the policy and be readable by the current process.
pub fn is_eligible(path: &Path, policy: &EligibilityPolicy) -> bool {
    policy.accepts(path) && std::fs::File::open(path).is_ok()
}
