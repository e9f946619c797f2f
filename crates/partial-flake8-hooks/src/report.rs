// Rust guideline compliant 2026-02-06

//! Human-readable hook report.
//!
//! Everything is written through [`WriteColor`], so the same code drives a
//! colored terminal and a plain capture buffer.

use partial_flake8_core::{FileVerdict, LintFinding, Result};
use std::io::Write;
use termcolor::{Color, ColorSpec, WriteColor};

/// Command that skips the hook.
pub const BYPASS_COMMAND: &str = "git commit --no-verify";

fn alert() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Red)).set_bg(Some(Color::Black));
    spec
}

fn fg(color: Color) -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(color));
    spec
}

fn write_colored(out: &mut dyn WriteColor, text: &str, spec: &ColorSpec) -> Result<()> {
    out.set_color(spec)?;
    write!(out, "{text}")?;
    out.reset()?;
    Ok(())
}

/// Writes the notice for a run with nothing to lint.
pub fn write_nothing_to_check(out: &mut dyn WriteColor) -> Result<()> {
    writeln!(out, "No files found that are worth checking\n")?;
    Ok(())
}

/// Writes the banner and findings of one file.
///
/// Files without significant findings produce no output.
pub fn write_verdict(out: &mut dyn WriteColor, verdict: &FileVerdict) -> Result<()> {
    if !verdict.is_blocking() {
        return Ok(());
    }

    let header = format!(
        "***** {} ERRORS in {} *****",
        verdict.findings.len(),
        verdict.file_path.display()
    );
    writeln!(out)?;
    write_colored(out, &header, &alert())?;
    writeln!(out, "\n")?;

    for finding in &verdict.findings {
        write_finding(out, finding)?;
    }

    writeln!(out)?;
    write_colored(out, &"*".repeat(header.chars().count()), &alert())?;
    writeln!(out, "\n")?;
    Ok(())
}

fn write_finding(out: &mut dyn WriteColor, finding: &LintFinding) -> Result<()> {
    write_colored(out, &finding.line_number.to_string(), &fg(Color::Green))?;
    write!(out, "\t")?;
    write_colored(out, &format!("[{}]", finding.code), &alert())?;
    write!(out, " in Column ")?;
    write_colored(out, &finding.column.to_string(), &fg(Color::Blue))?;
    writeln!(out, " - {}", finding.text)?;
    Ok(())
}

/// Writes the failure summary and the bypass instructions.
pub fn write_summary(out: &mut dyn WriteColor, total_findings: usize, files: usize) -> Result<()> {
    writeln!(
        out,
        "Sorry, your commit is aborted, because it contains {total_findings} errors in {files} files!\n"
    )?;
    writeln!(
        out,
        "If you are really in a rush and want to commit it anyways please go ahead and re-commit with: \n\n{BYPASS_COMMAND}\n\n"
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::{Ansi, NoColor};

    fn plain<F>(f: F) -> String
    where
        F: FnOnce(&mut dyn WriteColor) -> Result<()>,
    {
        let mut out = NoColor::new(Vec::new());
        f(&mut out).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn test_verdict_banner_and_lines() {
        let verdict = FileVerdict::new(
            "/repo/a.py",
            vec![LintFinding::new(20, 5, "F821", "undefined name 'foo'")],
        );
        let text = plain(|out| write_verdict(out, &verdict));
        let header = "***** 1 ERRORS in /repo/a.py *****";
        assert_eq!(
            text,
            format!(
                "\n{header}\n\n20\t[F821] in Column 5 - undefined name 'foo'\n\n{}\n\n",
                "*".repeat(header.len())
            )
        );
    }

    #[test]
    fn test_empty_verdict_prints_nothing() {
        let verdict = FileVerdict::new("/repo/a.py", Vec::new());
        assert_eq!(plain(|out| write_verdict(out, &verdict)), "");
    }

    #[test]
    fn test_summary_mentions_counts_and_bypass() {
        let text = plain(|out| write_summary(out, 3, 2));
        assert!(text.starts_with("Sorry, your commit is aborted, because it contains 3 errors in 2 files!"));
        assert!(text.contains(BYPASS_COMMAND));
    }

    #[test]
    fn test_colored_output_uses_ansi_escapes() {
        let verdict = FileVerdict::new("/repo/a.py", vec![LintFinding::new(1, 1, "E501", "too long")]);
        let mut out = Ansi::new(Vec::new());
        write_verdict(&mut out, &verdict).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert!(text.contains("\x1b["));
        assert!(text.contains("[E501]"));
    }
}
