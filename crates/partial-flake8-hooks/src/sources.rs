// Rust guideline compliant 2026-02-06

//! Collaborator seams for the pre-commit hook.
//!
//! The hook only ever talks to git and the linter through these traits, so
//! the decision logic can be exercised with canned text.

use partial_flake8_core::{ChangeSet, LintFinding, Result};
use std::path::Path;

/// Source of the lines the pending commit touches.
pub trait DiffSource {
    /// Returns the added or modified line numbers of `file` in the index.
    ///
    /// A file without a staged diff yields an empty set.
    ///
    /// # Errors
    ///
    /// Returns an error if the version-control system cannot be queried.
    fn changed_lines(&self, file: &Path) -> Result<ChangeSet>;
}

/// Source of lint findings.
pub trait LintSource {
    /// Lints `file` and returns its findings in report order.
    ///
    /// # Errors
    ///
    /// Returns an error if the linter cannot be run.
    fn findings(&self, file: &Path) -> Result<Vec<LintFinding>>;
}
