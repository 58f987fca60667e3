//! Utility helpers for configuration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// File name used for temporary harness configuration.
pub const CONFIG_FILE_NAME: &str = "cmdmatrix.toml";

/// Write `contents` to [`CONFIG_FILE_NAME`] inside `tmp`.
///
/// # Panics
///
/// Panics if the file cannot be written.
#[expect(clippy::expect_used, reason = "simplify test setup")]
pub fn write_config(tmp: &TempDir, contents: &str) -> PathBuf {
    let path = tmp.path().join(CONFIG_FILE_NAME);
    fs::write(&path, contents).expect("write config file");
    path
}
