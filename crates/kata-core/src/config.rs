//! Configuration loading and management
//!
//! # Hierarchy
//!
//! Configuration is loaded in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Global config: ~/.config/kata/config.toml
//! 3. Project config: .kata/config.toml
//! 4. Environment variables: `KATA_*`
//! 5. CLI flags (command-specific)
//!
//! A relative `check.suite` in a file is anchored to the project that file
//! belongs to: the parent of a `.kata/` directory, otherwise the file's own
//! directory. `KATA_SUITE` and `--suite` stay relative to the working
//! directory.
//!
//! # Example Config
//!
//! ```toml
//! output = "json"
//!
//! [check]
//! fail_fast = true
//! suite = "cases.toml"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::{Error, OutputFormat, Result};

/// Fully resolved configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub output: OutputFormat,
    pub check: CheckConfig,
}

/// Settings for `kata check`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckConfig {
    /// Stop the battery at the first failing case
    pub fail_fast: bool,
    /// Suite file to run instead of the built-in battery
    pub suite: Option<PathBuf>,
}

// ═══════════════════════════════════════════════════════════════════════════
// PARTIAL CONFIG - only keys present in a file override lower layers
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, Deserialize)]
struct PartialConfig {
    output: Option<OutputFormat>,
    check: Option<PartialCheckConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct PartialCheckConfig {
    fail_fast: Option<bool>,
    suite: Option<PathBuf>,
}

impl PartialConfig {
    fn anchor_suite(&mut self, file: &Path) {
        let Some(suite) = self.check.as_mut().and_then(|check| check.suite.as_mut()) else {
            return;
        };
        if suite.is_absolute() || suite.as_os_str().is_empty() {
            return;
        }
        if let Some(base) = config_base_dir(file) {
            *suite = base.join(&*suite);
        }
    }
}

impl Config {
    fn merge_partial(&mut self, partial: PartialConfig) {
        if let Some(output) = partial.output {
            self.output = output;
        }
        if let Some(check) = partial.check {
            self.check.merge_partial(check);
        }
    }

    /// Apply environment variable overrides
    ///
    /// # Errors
    ///
    /// Returns error if environment variable values are invalid
    fn apply_env_vars(&mut self) -> Result<()> {
        // KATA_OUTPUT
        if let Ok(value) = std::env::var("KATA_OUTPUT") {
            self.output = value.parse()?;
        }

        // KATA_FAIL_FAST
        if let Ok(value) = std::env::var("KATA_FAIL_FAST") {
            self.check.fail_fast = value.parse().map_err(|e| {
                Error::InvalidConfig(format!("Invalid KATA_FAIL_FAST value: {e}"))
            })?;
        }

        // KATA_SUITE
        if let Ok(value) = std::env::var("KATA_SUITE") {
            self.check.suite = Some(PathBuf::from(value));
        }

        Ok(())
    }

    /// Validate the resolved configuration
    ///
    /// # Errors
    ///
    /// Returns error if the suite path is empty
    pub fn validate(&self) -> Result<()> {
        if self
            .check
            .suite
            .as_ref()
            .is_some_and(|suite| suite.as_os_str().is_empty())
        {
            return Err(Error::InvalidConfig(
                "check.suite cannot be an empty path".to_string(),
            ));
        }
        Ok(())
    }
}

impl CheckConfig {
    fn merge_partial(&mut self, partial: PartialCheckConfig) {
        if let Some(fail_fast) = partial.fail_fast {
            self.fail_fast = fail_fast;
        }
        if let Some(suite) = partial.suite {
            self.suite = Some(suite);
        }
    }
}

/// Load configuration from all sources
///
/// # Errors
///
/// Returns error if:
/// - Config file is malformed TOML
/// - Config values fail validation
pub async fn load_config() -> Result<Config> {
    let global = global_config_path().ok();
    let project = project_config_path().ok();
    load_config_from(global.as_deref(), project.as_deref()).await
}

/// Load configuration from explicit global and project files, then apply
/// environment overrides. Missing files are skipped.
///
/// # Errors
///
/// Returns error if a present file is unreadable or malformed, or if an
/// environment override is invalid.
pub async fn load_config_from(global: Option<&Path>, project: Option<&Path>) -> Result<Config> {
    // 1. Start with built-in defaults
    let mut config = Config::default();

    // 2-3. Global, then project
    for path in [global, project].into_iter().flatten() {
        if let Some(mut partial) = load_partial_toml_file(path).await? {
            partial.anchor_suite(path);
            debug!(path = %path.display(), "merged config file");
            config.merge_partial(partial);
        }
    }

    // 4. Environment variable overrides
    config.apply_env_vars()?;

    config.validate()?;
    Ok(config)
}

// ═══════════════════════════════════════════════════════════════════════════
// HELPER FUNCTIONS
// ═══════════════════════════════════════════════════════════════════════════

/// Get path to project config file
///
/// # Errors
///
/// Returns error if current directory cannot be determined
fn project_config_path() -> Result<PathBuf> {
    std::env::current_dir()
        .map(|dir| dir.join(".kata/config.toml"))
        .map_err(|e| Error::IoError(format!("Failed to get current directory: {e}")))
}

/// Get path to global config file
fn global_config_path() -> Result<PathBuf> {
    directories::ProjectDirs::from("", "", "kata")
        .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
        .ok_or_else(|| Error::IoError("Failed to determine global config directory".to_string()))
}

/// Directory that relative paths in a config file are resolved against
fn config_base_dir(file: &Path) -> Option<&Path> {
    let dir = file.parent()?;
    if dir.file_name().is_some_and(|name| name == ".kata") {
        dir.parent()
    } else {
        Some(dir)
    }
}

/// Load a TOML file into a `PartialConfig`.
///
/// Returns `Ok(None)` when the file does not exist.
///
/// # Errors
///
/// Returns error if:
/// - File exists but cannot be read
/// - TOML is malformed
async fn load_partial_toml_file(path: &Path) -> Result<Option<PartialConfig>> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(Error::IoError(format!(
                "Failed to read config file {}: {e}",
                path.display()
            )))
        }
    };

    toml::from_str(&content)
        .map(Some)
        .map_err(|e| Error::ParseError(format!("Failed to parse config: {}: {e}", path.display())))
}
