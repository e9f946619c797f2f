// Rust guideline compliant 2026-02-06

//! Partial Flake8 CLI library.
//!
//! This library exposes the CLI modules for use in tests and the binary.

pub mod cli;
pub mod logging;
pub mod terminal;

pub use cli::{run, Cli};
pub use terminal::{color_choice, should_use_color};
