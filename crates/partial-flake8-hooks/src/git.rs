// Rust guideline compliant 2026-02-12

//! Staged diffs read through libgit2.

use crate::patch::first_file_additions;
use crate::sources::DiffSource;
use git2::{Diff, DiffOptions, Repository};
use partial_flake8_core::{ChangeSet, Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads staged changes from a git repository.
pub struct GitDiffSource {
    repo: Repository,
    workdir: PathBuf,
}

impl GitDiffSource {
    /// Opens the repository containing `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository is found or it has no work directory.
    pub fn discover(start: &Path) -> Result<Self> {
        let repo = Repository::discover(start)
            .map_err(|e| Error::git(format!("cannot open repository at {}: {}", start.display(), e.message())))?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| Error::git("repository has no work directory"))?;
        let workdir = canonical(workdir);
        Ok(Self { repo, workdir })
    }

    /// Absolute path of the repository's work directory.
    pub fn repo_root(&self) -> &Path {
        &self.workdir
    }

    /// Diffs the HEAD tree (or an empty tree before the first commit)
    /// against the index, restricted to `file`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path lies outside the repository or libgit2 fails.
    pub fn staged_diff(&self, file: &Path) -> Result<Diff<'_>> {
        let pathspec = self.pathspec(file)?;
        debug!(pathspec = %pathspec, "diffing index against HEAD");

        let head_tree = match self.repo.head() {
            Ok(head) => Some(head.peel_to_tree().map_err(git_error)?),
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch || e.code() == git2::ErrorCode::NotFound => None,
            Err(e) => return Err(git_error(e)),
        };

        let mut options = DiffOptions::new();
        options
            .pathspec(pathspec.as_str())
            .disable_pathspec_match(true)
            .context_lines(3);
        self.repo
            .diff_tree_to_index(head_tree.as_ref(), None, Some(&mut options))
            .map_err(git_error)
    }

    fn pathspec(&self, file: &Path) -> Result<String> {
        let absolute = if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.workdir.join(file)
        };
        let absolute = canonical(&absolute);
        let relative = absolute.strip_prefix(&self.workdir).map_err(|_| {
            Error::git(format!(
                "{} is outside the repository at {}",
                file.display(),
                self.workdir.display()
            ))
        })?;
        Ok(relative.to_string_lossy().replace('\\', "/"))
    }
}

impl DiffSource for GitDiffSource {
    fn changed_lines(&self, file: &Path) -> Result<ChangeSet> {
        let diff = self.staged_diff(file)?;
        let changes = first_file_additions(&diff).map_err(git_error)?;
        debug!(file = %file.display(), touched = changes.len(), "collected staged lines");
        Ok(changes)
    }
}

fn git_error(e: git2::Error) -> Error {
    Error::git(e.message().to_string())
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
