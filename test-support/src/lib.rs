//! Test support utilities.
//!
//! Shared by the unit, integration and behavioural tests of the workspace:
//! environment guards, log capture, temporary configuration files and a
//! recording command target.

pub mod env_guard;
pub mod logging;
pub mod recording;
pub mod util;

pub use recording::{RecordingFixture, RecordingTarget};

/// Write `contents` to `cmdmatrix.toml` inside `tmp` and return its path.
///
/// This is re-exported from [`util`] for convenience in tests.
///
/// # Examples
/// ```rust,ignore
/// use test_support::write_config;
///
/// let tmp = tempfile::tempdir().expect("tempdir");
/// let path = write_config(&tmp, "fail_fast = true");
/// assert!(path.ends_with("cmdmatrix.toml"));
/// ```
pub use util::write_config;
