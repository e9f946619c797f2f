// Rust guideline compliant 2026-02-06

//! Error types for the partial-flake8 core library.

use std::fmt;
use thiserror::Error;

/// Result type alias for partial-flake8 operations.
pub type Result<T> = std::result::Result<T, Error>;

/// External process the hook depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    /// The version-control system holding the staged changes.
    Git,
    /// The external linter.
    Linter,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Git => write!(f, "git"),
            Self::Linter => write!(f, "linter"),
        }
    }
}

/// Error types for partial-flake8 operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A collaborator could not be run or reported a failure.
    #[error("{collaborator} unavailable: {reason}")]
    Unavailable {
        /// Which collaborator failed.
        collaborator: Collaborator,
        /// Human-readable cause.
        reason: String,
    },

    /// Unified diff text could not be interpreted.
    #[error("Invalid diff: {0}")]
    InvalidDiff(String),

    /// Configuration file or override is invalid.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Builds an [`Error::Unavailable`] for git.
    pub fn git(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            collaborator: Collaborator::Git,
            reason: reason.into(),
        }
    }

    /// Builds an [`Error::Unavailable`] for the linter.
    pub fn linter(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            collaborator: Collaborator::Linter,
            reason: reason.into(),
        }
    }

    /// Returns whether the error came from an external collaborator.
    pub fn is_collaborator_failure(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}
