// Rust guideline compliant 2026-02-12

//! Added line numbers of a staged diff.
//!
//! libgit2 does the hunk bookkeeping; this module only decides which
//! destination lines count as touched.

use git2::{Diff, DiffLine, Patch};
use partial_flake8_core::{ChangeSet, Error, Result};

/// Collects the added line numbers from unified diff text.
///
/// Only the first file section counts. Empty text gives an empty set.
///
/// # Errors
///
/// Returns [`Error::InvalidDiff`] if libgit2 cannot parse `text`.
///
/// # Examples
///
/// ```
/// use partial_flake8_hooks::patch::added_lines;
///
/// let diff = "diff --git a/app.py b/app.py\n--- a/app.py\n+++ b/app.py\n@@ -1,2 +1,3 @@\n import os\n+import sys\n print(os)\n";
/// let changes = added_lines(diff).unwrap();
/// assert_eq!(changes.iter().collect::<Vec<_>>(), vec![2]);
/// ```
pub fn added_lines(text: &str) -> Result<ChangeSet> {
    if text.trim().is_empty() {
        return Ok(ChangeSet::new());
    }
    let diff = Diff::from_buffer(text.as_bytes()).map_err(|e| Error::InvalidDiff(e.message().to_string()))?;
    first_file_additions(&diff).map_err(|e| Error::InvalidDiff(e.message().to_string()))
}

/// Collects the added line numbers of the first delta in `diff`.
///
/// A `+` line contributes its destination line number. A blank `+` line also
/// contributes the line after it, because diff tools anchor trailing blank
/// line edits to the preceding line. That extra line is only added while it
/// stays inside the hunk's destination range.
///
/// Binary deltas and diffs without deltas give an empty set.
pub(crate) fn first_file_additions(diff: &Diff<'_>) -> std::result::Result<ChangeSet, git2::Error> {
    let mut changes = ChangeSet::new();
    if diff.deltas().len() == 0 {
        return Ok(changes);
    }
    let Some(patch) = Patch::from_diff(diff, 0)? else {
        return Ok(changes);
    };

    for hunk_idx in 0..patch.num_hunks() {
        let (hunk, line_count) = patch.hunk(hunk_idx)?;
        let new_end = hunk.new_start().saturating_add(hunk.new_lines());
        for line_idx in 0..line_count {
            let line = patch.line_in_hunk(hunk_idx, line_idx)?;
            if line.origin() != '+' {
                continue;
            }
            let Some(current) = line.new_lineno() else {
                continue;
            };
            changes.insert(current);
            let next = current.saturating_add(1);
            if is_blank(&line) && next < new_end {
                changes.insert(next);
            }
        }
    }

    Ok(changes)
}

/// A line with nothing but its terminator (`\n` or `\r\n`).
fn is_blank(line: &DiffLine<'_>) -> bool {
    let content = line.content();
    let content = content.strip_suffix(b"\n").unwrap_or(content);
    let content = content.strip_suffix(b"\r").unwrap_or(content);
    content.is_empty()
}
