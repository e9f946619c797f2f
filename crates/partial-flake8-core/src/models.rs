// Rust guideline compliant 2026-02-06

//! Core data models for partial-flake8.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// A single diagnostic reported by the linter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintFinding {
    /// 1-based line number in the linted file.
    pub line_number: u32,
    /// 1-based column number.
    pub column: u32,
    /// Short diagnostic code, e.g. `E501`.
    pub code: String,
    /// Human-readable message.
    pub text: String,
}

impl LintFinding {
    /// Creates a new finding.
    pub fn new(line_number: u32, column: u32, code: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            line_number,
            column,
            code: code.into(),
            text: text.into(),
        }
    }
}

impl fmt::Display for LintFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {} {}",
            self.line_number, self.column, self.code, self.text
        )
    }
}

/// Line numbers touched by the pending commit for one file.
///
/// Built once from the staged diff and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    lines: BTreeSet<u32>,
}

impl ChangeSet {
    /// Creates an empty change set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether `line` was added or modified.
    pub fn contains(&self, line: u32) -> bool {
        self.lines.contains(&line)
    }

    /// Number of touched lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns whether no line was touched.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterates touched lines in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.lines.iter().copied()
    }

    /// Marks `line` as touched.
    pub fn insert(&mut self, line: u32) {
        self.lines.insert(line);
    }
}

impl FromIterator<u32> for ChangeSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

/// Significant findings for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileVerdict {
    /// Absolute path of the linted file.
    pub file_path: PathBuf,
    /// Findings that block the commit, in linter order.
    pub findings: Vec<LintFinding>,
}

impl FileVerdict {
    /// Creates a verdict for `file_path`.
    pub fn new(file_path: impl AsRef<Path>, findings: Vec<LintFinding>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
            findings,
        }
    }

    /// Returns whether this file blocks the commit.
    pub fn is_blocking(&self) -> bool {
        !self.findings.is_empty()
    }
}
