// Rust guideline compliant 2026-02-06

//! Partial Flake8 Core Library
//!
//! This crate provides the decision logic behind the partial-flake8 pre-commit hook:
//! - Data models (LintFinding, ChangeSet, FileVerdict)
//! - Linter diagnostic parsing
//! - Significance and eligibility policies
//! - Configuration loading
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod lint;
pub mod models;
pub mod policy;

pub use config::{ColorMode, HookConfig};
pub use error::{Collaborator, Error, Result};
pub use lint::{parse_finding, parse_report};
pub use models::{ChangeSet, FileVerdict, LintFinding};
pub use policy::{filter_significant, is_eligible, EligibilityPolicy, ExclusionRule, SignificancePolicy};
