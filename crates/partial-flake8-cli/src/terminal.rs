// Rust guideline compliant 2026-02-06

//! Terminal utilities for the partial-flake8 CLI.
//!
//! This module decides on color support and prints status lines to stderr.

use partial_flake8_core::ColorMode;
use std::env;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Maps the configured color mode and the `--no-color` flag to a [`ColorChoice`].
///
/// `auto` only colors when [`should_use_color`] agrees.
pub fn color_choice(mode: ColorMode, no_color: bool) -> ColorChoice {
    resolve_color_choice(mode, no_color, should_use_color)
}

fn resolve_color_choice(mode: ColorMode, no_color: bool, detect: impl FnOnce() -> bool) -> ColorChoice {
    if no_color {
        return ColorChoice::Never;
    }
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto if detect() => ColorChoice::Auto,
        ColorMode::Auto => ColorChoice::Never,
    }
}

/// Prints a status message with a colored prefix to stderr.
///
/// # Arguments
/// * `prefix` - The prefix text
/// * `prefix_color` - The color for the prefix
/// * `message` - The message text
pub fn print_status(prefix: &str, prefix_color: Color, message: &str) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true));
    let _ = write!(stderr, "{}: ", prefix);
    let _ = stderr.reset();
    let _ = writeln!(stderr, "{}", message);
}

/// Prints an error message.
pub fn print_error(message: &str) {
    print_status("Error", Color::Red, message);
}
