//! Argument groups declared in YAML files.
//!
//! ```yaml
//! required:
//!   - - pattern: "index check"
//!   - - pattern: ./idx
//!       output: [./idx]
//! optional:
//!   - - pattern: "-v|--verbose"
//!       output: [-verbose]
//!   - ~
//! ```
//!
//! A `~` group is treated as empty.

use std::fs;
use std::path::{Path, PathBuf};

use cmdmatrix_lib::ArgumentGroup;
use serde::Deserialize;
use thiserror::Error;

use crate::target::{CommandFixture, CommandTarget};

/// Errors raised while reading a fixture file.
#[derive(Debug, Error)]
pub enum FixtureFileError {
    #[error("failed to read fixture {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid fixture: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawGroups {
    #[serde(default)]
    required: Vec<Option<ArgumentGroup>>,
    #[serde(default)]
    optional: Vec<Option<ArgumentGroup>>,
}

/// Required and optional groups of one command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentGroups {
    pub required: Vec<ArgumentGroup>,
    pub optional: Vec<ArgumentGroup>,
}

impl ArgumentGroups {
    /// Parse groups from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureFileError::Parse`] for malformed YAML or unknown
    /// keys.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureFileError> {
        let raw: RawGroups = serde_yaml::from_str(yaml)?;
        Ok(Self {
            required: raw.required.into_iter().map(Option::unwrap_or_default).collect(),
            optional: raw.optional.into_iter().map(Option::unwrap_or_default).collect(),
        })
    }

    /// Read and parse a YAML fixture file.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureFileError::Read`] when the file cannot be read and
    /// [`FixtureFileError::Parse`] when it is malformed.
    pub fn from_path(path: &Path) -> Result<Self, FixtureFileError> {
        let text = fs::read_to_string(path).map_err(|source| FixtureFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text)
    }
}

/// A fixture whose groups were loaded from a file.
///
/// `factory` builds a fresh target for every executed command.
pub struct FileFixture<F> {
    groups: ArgumentGroups,
    factory: F,
}

impl<F> FileFixture<F> {
    pub const fn new(groups: ArgumentGroups, factory: F) -> Self {
        Self { groups, factory }
    }

    /// Load groups from `path` and pair them with `factory`.
    ///
    /// # Errors
    ///
    /// See [`ArgumentGroups::from_path`].
    pub fn load(path: &Path, factory: F) -> Result<Self, FixtureFileError> {
        Ok(Self::new(ArgumentGroups::from_path(path)?, factory))
    }

    pub const fn groups(&self) -> &ArgumentGroups {
        &self.groups
    }
}

impl<F, T> CommandFixture for FileFixture<F>
where
    F: Fn() -> T,
    T: CommandTarget,
{
    type Target = T;

    fn create_target(&self) -> T {
        (self.factory)()
    }

    fn required_groups(&self) -> Vec<ArgumentGroup> {
        self.groups.required.clone()
    }

    fn optional_groups(&self) -> Vec<ArgumentGroup> {
        self.groups.optional.clone()
    }
}
