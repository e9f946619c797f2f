// Rust guideline compliant 2026-02-06

//! Command-line surface of the partial-flake8 hook.

use crate::{logging, terminal};
use anyhow::{Context, Result};
use clap::Parser;
use partial_flake8_core::{ColorMode, HookConfig};
use partial_flake8_hooks::{Flake8, GitDiffSource, PreCommitHook};
use std::io::Write;
use std::path::PathBuf;
use termcolor::StandardStream;
use tracing::debug;

/// Lint staged Python files, blocking only on problems the commit is responsible for.
#[derive(Parser, Debug)]
#[command(
    name = "partial-flake8",
    version,
    about = "Pre-commit hook running flake8 on the lines a commit touches",
    long_about = "Runs flake8 against staged Python files. Style findings only block the commit when they sit on added or modified lines; every other finding always blocks.",
    after_help = "Examples:\n  partial-flake8 app/views.py app/models.py\n  partial-flake8 --linter-config setup.cfg $(git diff --cached --name-only)\n\nSkip the hook with: git commit --no-verify\n"
)]
pub struct Cli {
    /// Staged files to check, relative to the repository root
    pub filenames: Vec<PathBuf>,

    /// Linter executable
    #[arg(long)]
    pub linter: Option<String>,

    /// Linter configuration file (relative paths resolve against the repository root)
    #[arg(long)]
    pub linter_config: Option<PathBuf>,

    /// When to color the report
    #[arg(long, value_enum)]
    pub color: Option<ColorArg>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Diagnostic log level (error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// `--color` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorMode::Auto,
            ColorArg::Always => ColorMode::Always,
            ColorArg::Never => ColorMode::Never,
        }
    }
}

impl Cli {
    /// Applies command-line overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut HookConfig) {
        if let Some(linter) = &self.linter {
            config.linter = linter.clone();
        }
        if let Some(path) = &self.linter_config {
            config.linter_config = path.clone();
        }
        if let Some(color) = self.color {
            config.color = color.into();
        }
    }
}

/// Runs the hook for the repository containing the current directory.
///
/// # Returns
///
/// The process exit code: 0 allows the commit, 1 blocks it.
///
/// # Errors
///
/// Returns an error if:
/// - Logging, the repository or the configuration cannot be set up
/// - git or the linter fails
/// - The report cannot be written
pub fn run(cli: &Cli) -> Result<i32> {
    logging::init_tracing(cli.log_level.as_deref())?;

    let cwd = std::env::current_dir().context("cannot read current directory")?;
    let git = GitDiffSource::discover(&cwd)?;
    let repo_root = git.repo_root().to_path_buf();
    debug!(root = %repo_root.display(), "resolved repository root");

    let mut config = HookConfig::load(&repo_root).context("failed to load configuration")?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    let linter = Flake8::from_config(&config, &repo_root);
    let hook = PreCommitHook::new(git, linter, repo_root);

    let mut stdout = StandardStream::stdout(terminal::color_choice(config.color, cli.no_color));
    let outcome = hook.run(&cli.filenames, &mut stdout)?;
    stdout.flush()?;

    Ok(outcome.exit_code())
}
