// Rust guideline compliant 2026-02-06

//! Integration tests for the pre-commit pipeline with canned collaborators.

use partial_flake8_core::{ChangeSet, Error, LintFinding, Result};
use partial_flake8_hooks::{DiffSource, HookOutcome, LintSource, PreCommitHook};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use termcolor::NoColor;

#[derive(Default)]
struct CannedDiff(HashMap<PathBuf, ChangeSet>);

impl DiffSource for CannedDiff {
    fn changed_lines(&self, file: &Path) -> Result<ChangeSet> {
        Ok(self.0.get(file).cloned().unwrap_or_default())
    }
}

#[derive(Default)]
struct CannedLint(HashMap<PathBuf, Vec<LintFinding>>);

impl LintSource for CannedLint {
    fn findings(&self, file: &Path) -> Result<Vec<LintFinding>> {
        Ok(self.0.get(file).cloned().unwrap_or_default())
    }
}

struct BrokenLint;

impl LintSource for BrokenLint {
    fn findings(&self, _file: &Path) -> Result<Vec<LintFinding>> {
        Err(Error::linter("flake8: command not found"))
    }
}

fn finding(line: u32, code: &str) -> LintFinding {
    LintFinding::new(line, 1, code, "message")
}

fn touch(dir: &Path, rel: &str) -> PathBuf {
    let path = dir.join(rel);
    std::fs::create_dir_all(path.parent().expect("file has a parent")).expect("Failed to create dirs");
    std::fs::write(&path, "x = 1\n").expect("Failed to write file");
    path
}

fn run<D: DiffSource, L: LintSource>(
    hook: &PreCommitHook<D, L>,
    paths: &[&str],
) -> (HookOutcome, String) {
    let paths: Vec<PathBuf> = paths.iter().map(PathBuf::from).collect();
    let mut out = NoColor::new(Vec::new());
    let outcome = hook.run(&paths, &mut out).expect("Hook run failed");
    let text = String::from_utf8(out.into_inner()).expect("Report is UTF-8");
    (outcome, text)
}

#[test]
fn test_untouched_cosmetic_dropped_correctness_kept() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file = touch(temp_dir.path(), "a.py");

    let mut diff = CannedDiff::default();
    diff.0.insert(file.clone(), [5, 6].into_iter().collect());
    let mut lint = CannedLint::default();
    lint.0
        .insert(file.clone(), vec![finding(10, "E501"), finding(20, "F821")]);

    let hook = PreCommitHook::new(diff, lint, temp_dir.path());
    let (outcome, text) = run(&hook, &["a.py"]);

    assert_eq!(outcome.verdicts.len(), 1);
    assert_eq!(outcome.verdicts[0].findings, vec![finding(20, "F821")]);
    assert_eq!(outcome.exit_code(), HookOutcome::FAILURE);
    assert!(text.contains("[F821]"));
    assert!(!text.contains("[E501]"));
}

#[test]
fn test_touched_cosmetic_kept() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file = touch(temp_dir.path(), "b.py");

    let mut diff = CannedDiff::default();
    diff.0.insert(file.clone(), [10].into_iter().collect());
    let mut lint = CannedLint::default();
    lint.0.insert(file.clone(), vec![finding(10, "E501")]);

    let hook = PreCommitHook::new(diff, lint, temp_dir.path());
    let (outcome, _) = run(&hook, &["b.py"]);

    assert_eq!(outcome.verdicts[0].findings, vec![finding(10, "E501")]);
    assert!(outcome.is_blocking());
}

#[test]
fn test_no_eligible_files_succeeds_without_banners() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    touch(temp_dir.path(), "README.md");
    touch(temp_dir.path(), "app/migrations/0001_initial.py");
    touch(temp_dir.path(), "project/settings.py");
    touch(temp_dir.path(), "project/urls.py");

    let hook = PreCommitHook::new(CannedDiff::default(), BrokenLint, temp_dir.path());
    let (outcome, text) = run(
        &hook,
        &[
            "README.md",
            "app/migrations/0001_initial.py",
            "project/settings.py",
            "project/urls.py",
            "missing.py",
        ],
    );

    assert_eq!(outcome.exit_code(), HookOutcome::SUCCESS);
    assert!(outcome.verdicts.is_empty());
    assert!(text.contains("No files found that are worth checking"));
    assert!(!text.contains("*****"));
}

#[test]
fn test_single_finding_summary() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file = touch(temp_dir.path(), "app/views.py");

    let mut lint = CannedLint::default();
    lint.0.insert(file.clone(), vec![finding(3, "F401")]);

    let hook = PreCommitHook::new(CannedDiff::default(), lint, temp_dir.path());
    let (outcome, text) = run(&hook, &["app/views.py"]);

    assert_eq!(outcome.exit_code(), HookOutcome::FAILURE);
    assert_eq!(outcome.total_findings, 1);
    assert_eq!(outcome.files_with_findings, 1);
    assert!(text.contains("1 errors in 1 files"));
    assert!(text.contains("git commit --no-verify"));
}

#[test]
fn test_clean_files_print_no_banner() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let clean = touch(temp_dir.path(), "clean.py");
    let dirty = touch(temp_dir.path(), "dirty.py");

    let mut lint = CannedLint::default();
    lint.0.insert(clean.clone(), vec![finding(1, "E302")]);
    lint.0.insert(dirty.clone(), vec![finding(2, "F811"), finding(4, "E999")]);

    let hook = PreCommitHook::new(CannedDiff::default(), lint, temp_dir.path());
    let (outcome, text) = run(&hook, &["clean.py", "dirty.py"]);

    assert_eq!(outcome.verdicts.len(), 2);
    assert!(!outcome.verdicts[0].is_blocking());
    assert_eq!(outcome.total_findings, 2);
    assert_eq!(outcome.files_with_findings, 1);
    assert!(!text.contains("clean.py"));
    assert!(text.contains(&format!("***** 2 ERRORS in {} *****", dirty.display())));
    assert!(text.contains("2 errors in 1 files"));
}

#[test]
fn test_all_clean_succeeds_silently() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    touch(temp_dir.path(), "ok.py");

    let hook = PreCommitHook::new(CannedDiff::default(), CannedLint::default(), temp_dir.path());
    let (outcome, text) = run(&hook, &["ok.py"]);

    assert_eq!(outcome.exit_code(), HookOutcome::SUCCESS);
    assert!(text.is_empty());
}

#[test]
fn test_absolute_paths_kept() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file = touch(temp_dir.path(), "abs.py");

    let hook = PreCommitHook::new(CannedDiff::default(), CannedLint::default(), "/nonexistent-root");
    let files = hook.relevant_files(&[file.clone()]);
    assert_eq!(files, vec![file]);
}

#[test]
fn test_linter_failure_aborts_run() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    touch(temp_dir.path(), "a.py");

    let hook = PreCommitHook::new(CannedDiff::default(), BrokenLint, temp_dir.path());
    let mut out = NoColor::new(Vec::new());
    let err = hook
        .run(&[PathBuf::from("a.py")], &mut out)
        .expect_err("Broken linter must abort the hook");
    assert!(err.is_collaborator_failure());
}
