// Rust guideline compliant 2026-02-06

//! partial-flake8 pre-commit hook binary.

use clap::Parser;
use partial_flake8_cli::{run, terminal, Cli};
use partial_flake8_hooks::HookOutcome;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version go to stdout and succeed; usage errors block like any failure.
            let code = if err.use_stderr() {
                HookOutcome::FAILURE
            } else {
                HookOutcome::SUCCESS
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    let code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            terminal::print_error(&format!("{err:#}"));
            HookOutcome::FAILURE
        }
    };
    std::process::exit(code);
}
