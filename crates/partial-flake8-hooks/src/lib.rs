// Rust guideline compliant 2026-02-06

//! Partial Flake8 Git Hooks
//!
//! This crate wires the core decision logic to its collaborators:
//! - Staged diffs from git (libgit2) and their added line numbers
//! - Findings from an external flake8 process
//! - The pre-commit pipeline and its colored report

pub mod flake8;
pub mod git;
pub mod patch;
pub mod pre_commit;
pub mod report;
pub mod sources;

pub use flake8::Flake8;
pub use git::GitDiffSource;
pub use patch::added_lines;
pub use pre_commit::{HookOutcome, PreCommitHook};
pub use sources::{DiffSource, LintSource};
