// Rust guideline compliant 2026-02-06

//! Configuration management for partial-flake8.
//!
//! Only the collaborators are configurable. The cosmetic-code table and the
//! path exclusions are compiled into [`crate::policy`].

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the optional per-repository configuration.
pub const CONFIG_FILE_NAME: &str = ".partial-flake8.toml";

/// When to emit ANSI colors in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

impl std::str::FromStr for ColorMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => Err(Error::InvalidConfig(format!(
                "color must be auto, always, or never, got '{other}'"
            ))),
        }
    }
}

/// Configuration for the hook's collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookConfig {
    /// Linter executable name or path.
    #[serde(default = "default_linter")]
    pub linter: String,

    /// Linter configuration file, relative to the repository root unless absolute.
    #[serde(default = "default_linter_config")]
    pub linter_config: PathBuf,

    /// Report coloring.
    #[serde(default)]
    pub color: ColorMode,
}

fn default_linter() -> String {
    "flake8".to_string()
}

fn default_linter_config() -> PathBuf {
    ["jobmensa", "config", "flake8.cfg"].iter().collect()
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            linter: default_linter(),
            linter_config: default_linter_config(),
            color: ColorMode::default(),
        }
    }
}

impl HookConfig {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<repo_root>/.partial-flake8.toml`
    /// 3. Environment variables with `PARTIAL_FLAKE8_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - An environment override or the resulting values are invalid
    pub fn load(repo_root: &Path) -> Result<Self> {
        Self::load_with(repo_root, |key| std::env::var(key).ok())
    }

    /// Like [`HookConfig::load`], reading overrides through `lookup`.
    pub fn load_with(repo_root: &Path, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        let config_path = repo_root.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("{}: {}", config_path.display(), e)))?;
        }

        config.apply_overrides(lookup)?;
        config.validate()?;

        Ok(config)
    }

    /// Applies overrides.
    ///
    /// Supported keys:
    /// - `PARTIAL_FLAKE8_LINTER` - Linter executable
    /// - `PARTIAL_FLAKE8_LINTER_CONFIG` - Linter configuration file
    /// - `PARTIAL_FLAKE8_COLOR` - auto/always/never
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(val) = lookup("PARTIAL_FLAKE8_LINTER") {
            self.linter = val;
        }

        if let Some(val) = lookup("PARTIAL_FLAKE8_LINTER_CONFIG") {
            self.linter_config = PathBuf::from(val);
        }

        if let Some(val) = lookup("PARTIAL_FLAKE8_COLOR") {
            self.color = val.parse()?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if the linter name or the linter config path is empty.
    pub fn validate(&self) -> Result<()> {
        if self.linter.trim().is_empty() {
            return Err(Error::InvalidConfig("linter must not be empty".to_string()));
        }

        if self.linter_config.as_os_str().is_empty() {
            return Err(Error::InvalidConfig(
                "linter_config must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Resolves the linter configuration path against `repo_root`.
    pub fn linter_config_path(&self, repo_root: &Path) -> PathBuf {
        if self.linter_config.is_absolute() {
            self.linter_config.clone()
        } else {
            repo_root.join(&self.linter_config)
        }
    }
}
