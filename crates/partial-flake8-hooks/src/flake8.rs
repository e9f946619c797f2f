// Rust guideline compliant 2026-02-06

//! Linting through an external flake8 process.

use crate::sources::LintSource;
use partial_flake8_core::{parse_report, Error, HookConfig, LintFinding, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

/// Runs `<program> --config=<config> <file>` and parses its report.
#[derive(Debug, Clone)]
pub struct Flake8 {
    program: String,
    config: PathBuf,
}

impl Flake8 {
    /// Creates a runner for `program` using the configuration file at `config`.
    pub fn new(program: impl Into<String>, config: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            config: config.into(),
        }
    }

    /// Creates a runner from the hook configuration, resolving paths against `repo_root`.
    pub fn from_config(config: &HookConfig, repo_root: &Path) -> Self {
        Self::new(config.linter.clone(), config.linter_config_path(repo_root))
    }

    /// Path of the linter configuration file.
    pub fn config_path(&self) -> &Path {
        &self.config
    }

    /// Runs the linter on `file` and returns its report.
    ///
    /// Exit status 0 (clean) and 1 (findings reported) are both successes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file does not exist
    /// - The linter cannot be spawned
    /// - The linter exits with any other status
    pub fn run(&self, file: &Path) -> Result<LintRun> {
        if !self.config.is_file() {
            return Err(Error::linter(format!(
                "configuration file {} not found",
                self.config.display()
            )));
        }

        debug!(
            program = %self.program,
            config = %self.config.display(),
            file = %file.display(),
            "running linter"
        );
        let output = Command::new(&self.program)
            .arg(format!("--config={}", self.config.display()))
            .arg(file)
            .output()
            .map_err(|e| Error::linter(format!("cannot run {}: {}", self.program, e)))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        let reported = match output.status.code() {
            Some(0) => false,
            Some(1) => true,
            code => {
                let status = code.map_or_else(|| "a signal".to_string(), |c| format!("status {c}"));
                return Err(Error::linter(format!(
                    "{} exited with {}: {}",
                    self.program,
                    status,
                    stderr.trim()
                )));
            }
        };

        Ok(LintRun {
            reported,
            stdout,
            stderr,
        })
    }
}

/// Output of one linter invocation.
#[derive(Debug, Clone)]
pub struct LintRun {
    /// The linter exited with status 1, claiming it found problems.
    pub reported: bool,
    pub stdout: String,
    pub stderr: String,
}

impl LintRun {
    /// Stdout followed by stderr, the way the linter's diagnostics are read.
    pub fn combined(&self) -> String {
        let mut combined = self.stdout.clone();
        if !combined.is_empty() && !combined.ends_with('\n') {
            combined.push('\n');
        }
        combined.push_str(&self.stderr);
        combined
    }
}

impl LintSource for Flake8 {
    fn findings(&self, file: &Path) -> Result<Vec<LintFinding>> {
        let run = self.run(file)?;
        let output = run.combined();
        let findings = parse_report(&output);

        // flake8 also exits 1 when it crashes, printing no diagnostics.
        if run.reported && findings.is_empty() {
            let detail = if run.stderr.trim().is_empty() {
                run.stdout.trim()
            } else {
                run.stderr.trim()
            };
            return Err(Error::linter(format!(
                "{} failed on {} without reporting diagnostics: {}",
                self.program,
                file.display(),
                detail
            )));
        }

        let lines = output.lines().filter(|l| !l.trim().is_empty()).count();
        if lines > findings.len() {
            warn!(
                file = %file.display(),
                skipped = lines - findings.len(),
                "skipped unparseable linter output lines"
            );
        }
        Ok(findings)
    }
}
