//! Configuration for the command translation harness.
//!
//! Values come from built-in defaults, then an optional TOML file, then
//! environment variables using the `CMDMATRIX_` prefix. The file path may be
//! given through `CMDMATRIX_CONFIG`; otherwise `cmdmatrix.toml` in the
//! working directory is used when it exists.

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use cmdmatrix_lib::OR_DELIMITER;

/// Default command used to request help.
const DEFAULT_HELP_COMMAND: &str = "?";
/// Default text the help output must contain.
const DEFAULT_HELP_MARKER: &str = "Version";
/// Default tracing filter for harness logs.
const DEFAULT_LOG_FILTER: &str = "warn";
/// Prefix of environment variable overrides.
const ENV_PREFIX: &str = "CMDMATRIX_";
/// Environment variable naming the configuration file.
const CONFIG_PATH_VAR: &str = "CMDMATRIX_CONFIG";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("configuration file {} not found: {source}", .path.display())]
    Missing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A source could not be parsed or had the wrong shape.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(value: figment::Error) -> Self {
        Self::Invalid(Box::new(value))
    }
}

/// Runtime settings of a [`crate::Harness`].
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
pub struct HarnessConfig {
    /// Separator between equivalent spellings in an input pattern.
    #[serde(default = "default_or_delimiter")]
    pub or_delimiter: char,
    /// Command executed by the help check.
    #[serde(default = "default_help_command")]
    pub help_command: String,
    /// Fragment the help output must contain.
    #[serde(default = "default_help_marker")]
    pub help_marker: String,
    /// Stop at the first failing case instead of running them all.
    #[serde(default)]
    pub fail_fast: bool,
    /// `tracing` filter directive used by [`crate::logging::init_from_config`].
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

const fn default_or_delimiter() -> char {
    OR_DELIMITER
}

fn default_help_command() -> String {
    DEFAULT_HELP_COMMAND.to_owned()
}

fn default_help_marker() -> String {
    DEFAULT_HELP_MARKER.to_owned()
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            or_delimiter: default_or_delimiter(),
            help_command: default_help_command(),
            help_marker: default_help_marker(),
            fail_fast: false,
            log_filter: default_log_filter(),
        }
    }
}

impl HarnessConfig {
    /// File read by [`HarnessConfig::load`] when `CMDMATRIX_CONFIG` is unset.
    pub const DEFAULT_PATH: &'static str = "cmdmatrix.toml";

    /// Load defaults, the configuration file if present, and environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `CMDMATRIX_CONFIG` names a missing file or
    /// any source is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => {
                let path = Path::new(Self::DEFAULT_PATH);
                let figment = if path.exists() {
                    base().merge(Toml::file(path))
                } else {
                    base()
                };
                extract(figment)
            }
        }
    }

    /// Load the configuration from `path`, merging `CMDMATRIX_*`
    /// environment variables over file values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when `path` does not exist, or
    /// [`ConfigError::Invalid`] when it cannot be parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::Missing {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "Configuration file not found"),
            });
        }
        extract(base().merge(Toml::file(path)))
    }
}

fn base() -> Figment {
    Figment::from(Serialized::defaults(HarnessConfig::default()))
}

fn extract(figment: Figment) -> Result<HarnessConfig, ConfigError> {
    let figment = figment.merge(Env::prefixed(ENV_PREFIX).ignore(&["config"]).split("__"));
    Ok(figment.extract()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use tempfile::tempdir;

    use test_support::env_guard::EnvVarGuard;

    #[rstest]
    #[serial_test::serial]
    fn loads_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cmdmatrix.toml");
        fs::write(&path, "or_delimiter=','\nhelp_command='--help'\nfail_fast=true").unwrap();
        let _guard = EnvVarGuard::remove("CMDMATRIX_FAIL_FAST");
        let cfg = HarnessConfig::from_file(&path).unwrap();
        assert_eq!(cfg.or_delimiter, ',');
        assert_eq!(cfg.help_command, "--help");
        assert!(cfg.fail_fast);
        assert_eq!(cfg.help_marker, DEFAULT_HELP_MARKER);
    }

    #[rstest]
    #[serial_test::serial]
    fn error_when_missing_file() {
        let path = PathBuf::from("/nonexistent/cmdmatrix.toml");
        let res = HarnessConfig::from_file(&path);
        assert!(matches!(res, Err(ConfigError::Missing { .. })));
    }

    #[rstest]
    #[serial_test::serial]
    fn env_vars_override_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cmdmatrix.toml");
        fs::write(&path, "help_marker='Usage'").unwrap();
        let _guard = EnvVarGuard::set("CMDMATRIX_HELP_MARKER", "Version");
        let cfg = HarnessConfig::from_file(&path).unwrap();
        assert_eq!(cfg.help_marker, "Version");
    }

    #[rstest]
    #[serial_test::serial]
    fn error_with_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cmdmatrix.toml");
        fs::write(&path, "fail_fast=true this is not toml").unwrap();
        let res = HarnessConfig::from_file(&path);
        assert!(matches!(res, Err(ConfigError::Invalid(_))));
    }

    #[rstest]
    #[serial_test::serial]
    fn error_with_multi_character_delimiter() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cmdmatrix.toml");
        fs::write(&path, "or_delimiter='||'").unwrap();
        assert!(HarnessConfig::from_file(&path).is_err());
    }

    #[rstest]
    #[serial_test::serial]
    fn defaults_are_applied() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cmdmatrix.toml");
        fs::write(&path, "").unwrap();
        let cfg = HarnessConfig::from_file(&path).unwrap();
        assert_eq!(cfg, HarnessConfig::default());
        assert_eq!(cfg.or_delimiter, '|');
        assert_eq!(cfg.help_command, "?");
        assert_eq!(cfg.log_filter, DEFAULT_LOG_FILTER);
    }

    #[rstest]
    #[serial_test::serial]
    fn load_follows_config_variable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "help_command='help'").unwrap();
        let _guard = EnvVarGuard::set(CONFIG_PATH_VAR, path.to_str().unwrap());
        let cfg = HarnessConfig::load().unwrap();
        assert_eq!(cfg.help_command, "help");
    }

    #[rstest]
    #[serial_test::serial]
    fn load_errors_when_config_variable_names_missing_file() {
        let _guard = EnvVarGuard::set(CONFIG_PATH_VAR, "/nonexistent/custom.toml");
        assert!(HarnessConfig::load().is_err());
    }
}
