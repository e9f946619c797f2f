// Rust guideline compliant 2026-02-06

//! Pre-commit hook implementation.
//!
//! Lints the staged Python files and blocks the commit when a significant
//! finding remains: any non-cosmetic finding, or a cosmetic one on a line the
//! commit touches.

use crate::report;
use crate::sources::{DiffSource, LintSource};
use partial_flake8_core::{
    filter_significant, is_eligible, EligibilityPolicy, FileVerdict, Result, SignificancePolicy,
};
use std::path::{Path, PathBuf};
use termcolor::WriteColor;
use tracing::{debug, info};

/// Result of a hook run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookOutcome {
    /// Verdicts of every linted file, in input order.
    pub verdicts: Vec<FileVerdict>,
    /// Number of significant findings across all files.
    pub total_findings: usize,
    /// Number of files with at least one significant finding.
    pub files_with_findings: usize,
}

impl HookOutcome {
    /// Exit code allowing the commit.
    pub const SUCCESS: i32 = 0;
    /// Exit code blocking the commit.
    pub const FAILURE: i32 = 1;

    /// Returns whether the commit must be blocked.
    pub fn is_blocking(&self) -> bool {
        self.total_findings > 0
    }

    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        if self.is_blocking() {
            Self::FAILURE
        } else {
            Self::SUCCESS
        }
    }
}

/// The hook pipeline over a diff source and a lint source.
pub struct PreCommitHook<D, L> {
    diff: D,
    lint: L,
    repo_root: PathBuf,
    significance: SignificancePolicy,
    eligibility: EligibilityPolicy,
}

impl<D: DiffSource, L: LintSource> PreCommitHook<D, L> {
    /// Creates a hook with the built-in policies.
    ///
    /// Relative input paths are resolved against `repo_root`.
    pub fn new(diff: D, lint: L, repo_root: impl Into<PathBuf>) -> Self {
        Self {
            diff,
            lint,
            repo_root: repo_root.into(),
            significance: SignificancePolicy::default(),
            eligibility: EligibilityPolicy::default(),
        }
    }

    /// Replaces the significance and eligibility policies.
    pub fn with_policies(mut self, significance: SignificancePolicy, eligibility: EligibilityPolicy) -> Self {
        self.significance = significance;
        self.eligibility = eligibility;
        self
    }

    /// Resolves `paths` and keeps the ones worth linting, in input order.
    pub fn relevant_files(&self, paths: &[PathBuf]) -> Vec<PathBuf> {
        paths
            .iter()
            .map(|p| self.repo_root.join(p))
            .filter(|p| {
                let keep = is_eligible(p, &self.eligibility);
                if !keep {
                    debug!(file = %p.display(), "skipping ineligible file");
                }
                keep
            })
            .collect()
    }

    /// Computes the significant findings of one file.
    ///
    /// # Errors
    ///
    /// Returns an error if either collaborator fails.
    pub fn check_file(&self, file: &Path) -> Result<FileVerdict> {
        let changes = self.diff.changed_lines(file)?;
        let findings = self.lint.findings(file)?;
        let significant = filter_significant(&findings, &changes, &self.significance);
        debug!(
            file = %file.display(),
            findings = findings.len(),
            significant = significant.len(),
            "checked file"
        );
        Ok(FileVerdict::new(file, significant))
    }

    /// Runs the hook over `paths`, writing the report to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if a collaborator fails or the report cannot be written.
    /// No partial outcome is produced in that case.
    pub fn run(&self, paths: &[PathBuf], out: &mut dyn WriteColor) -> Result<HookOutcome> {
        let files = self.relevant_files(paths);
        if files.is_empty() {
            info!("no eligible files among {} staged paths", paths.len());
            report::write_nothing_to_check(out)?;
            return Ok(HookOutcome::default());
        }

        let mut outcome = HookOutcome::default();
        for file in &files {
            let verdict = self.check_file(file)?;
            if verdict.is_blocking() {
                report::write_verdict(out, &verdict)?;
                outcome.files_with_findings += 1;
                outcome.total_findings += verdict.findings.len();
            }
            outcome.verdicts.push(verdict);
        }

        if outcome.is_blocking() {
            report::write_summary(out, outcome.total_findings, outcome.files_with_findings)?;
        }

        Ok(outcome)
    }
}
