//! Failures reported by the harness.

use thiserror::Error;

use crate::driver::CaseFailure;

/// A single mismatch between what a command produced and what it should
/// have produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertionFailure {
    /// The target finished without forwarding any arguments.
    #[error(
        "command `{command}` forwarded nothing, expected [{}]; console output was {console:?}",
        .expected.join(",")
    )]
    NotForwarded {
        command: String,
        expected: Vec<String>,
        console: String,
    },
    /// The forwarded array has the wrong number of tokens.
    #[error(
        "command `{command}` forwarded {} tokens, expected {}: expected [{}], actual [{}]",
        .actual.len(),
        .expected.len(),
        .expected.join(","),
        .actual.join(",")
    )]
    LengthMismatch {
        command: String,
        expected: Vec<String>,
        actual: Vec<String>,
    },
    /// The forwarded array differs at `index`.
    #[error(
        "command `{command}` differs at index {index}: expected [{}], actual [{}]",
        .expected.join(","),
        .actual.join(",")
    )]
    TokenMismatch {
        index: usize,
        command: String,
        expected: Vec<String>,
        actual: Vec<String>,
    },
    /// The console text lacks the expected fragment.
    #[error("command `{command}`: expected output was {expected:?}, actual console output was {console:?}")]
    ConsoleMismatch {
        command: String,
        expected: String,
        console: String,
    },
}

impl AssertionFailure {
    /// The command line that produced the failure.
    #[must_use]
    pub fn command(&self) -> &str {
        match self {
            Self::NotForwarded { command, .. }
            | Self::LengthMismatch { command, .. }
            | Self::TokenMismatch { command, .. }
            | Self::ConsoleMismatch { command, .. } => command,
        }
    }
}

/// Errors surfaced when running a whole fixture.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// One or more generated cases failed.
    #[error("{} of {total} generated cases failed:\n{}", .failures.len(), render(.failures))]
    Failures {
        total: usize,
        failures: Vec<CaseFailure>,
    },
    /// The help command did not print the expected marker.
    #[error("help check failed: {0}")]
    Help(#[source] AssertionFailure),
}

fn render(failures: &[CaseFailure]) -> String {
    itertools::join(failures.iter().map(|f| format!("  - {}", f.failure)), "\n")
}
