#![cfg_attr(docsrs, feature(doc_cfg))]

//! Harness for testing command-line translation.
//!
//! # Overview
//! A [`CommandFixture`] describes a command's syntax as required and
//! optional [`ArgumentGroup`]s together with a factory for the system under
//! test. [`Harness`] expands those groups into every valid command line,
//! runs each one on a fresh [`CommandTarget`], and compares what the target
//! forwarded with the concatenated expected outputs.
//!
//! This crate exposes:
//! - [`driver`]: case generation and assertions.
//! - [`config::HarnessConfig`]: delimiter, help check and failure policy,
//!   loaded from `cmdmatrix.toml` with `CMDMATRIX_*` overrides.
//! - [`resources`]: keyed text lookup for expected console fragments.
//! - [`fixture_file`]: argument groups declared in YAML.
//! - [`logging`]: `tracing` subscriber setup.
//!
//! # Examples
//! ```rust
//! use cmdmatrix::{CommandFixture, Execution, Harness};
//! use cmdmatrix_lib::{ArgumentDefinition, ArgumentGroup};
//!
//! struct Add;
//!
//! impl CommandFixture for Add {
//!     type Target = fn(&[String]) -> Execution;
//!
//!     fn create_target(&self) -> Self::Target {
//!         |tokens| {
//!             if tokens.iter().any(|t| t == "?") {
//!                 return Execution::console("add Version 1.0");
//!             }
//!             Execution::forwarded(tokens.iter().map(|t| match t.as_str() {
//!                 "--force" => "-f",
//!                 other => other,
//!             }))
//!         }
//!     }
//!
//!     fn required_groups(&self) -> Vec<ArgumentGroup> {
//!         vec![ArgumentGroup::new(vec![ArgumentDefinition::new("add", ["add"])])]
//!     }
//!
//!     fn optional_groups(&self) -> Vec<ArgumentGroup> {
//!         vec![ArgumentGroup::new(vec![ArgumentDefinition::new("-f|--force", ["-f"])])]
//!     }
//! }
//!
//! let harness = Harness::new(Add);
//! harness.run_all_valid_combinations().assert_passed();
//! harness.check_help().expect("help prints a version banner");
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod fixture_file;
pub mod logging;
pub mod resources;
pub mod target;

pub use cmdmatrix_lib::{
    ArgumentDefinition, ArgumentGroup, Expander, TestCase, option_value, option_values, tokenize,
};
pub use config::HarnessConfig;
pub use driver::{CaseFailure, CombinationReport, GeneratedCase, Harness};
pub use error::{AssertionFailure, HarnessError};
pub use target::{CommandFixture, CommandTarget, Execution};

/// Generate the standard tests for one or more fixtures.
///
/// Each `name => fixture` pair becomes a module holding two tests:
/// `all_valid_combinations` runs every generated case and `help` runs the
/// configured help command. Both build their harness with
/// [`Harness::from_env`], so `cmdmatrix.toml` and `CMDMATRIX_*` variables
/// apply. The fixture expression is evaluated in the generated module,
/// which glob-imports its parent.
///
/// ```rust,ignore
/// cmdmatrix::translation_tests! {
///     check_index => CheckIndexFixture,
///     upgrade => UpgradeFixture,
/// }
/// ```
#[macro_export]
macro_rules! translation_tests {
    ($($name:ident => $fixture:expr),+ $(,)?) => {
        $(
            mod $name {
                #[allow(unused_imports, reason = "fixture expressions may not need the parent scope")]
                use super::*;

                #[test]
                fn all_valid_combinations() {
                    match $crate::Harness::from_env($fixture) {
                        Ok(harness) => harness.run_all_valid_combinations().assert_passed(),
                        Err(err) => panic!("{err}"),
                    }
                }

                #[test]
                fn help() {
                    let result = $crate::Harness::from_env($fixture)
                        .map_err(|err| err.to_string())
                        .and_then(|harness| harness.check_help().map_err(|err| err.to_string()));
                    if let Err(err) = result {
                        panic!("{err}");
                    }
                }
            }
        )+
    };
}
