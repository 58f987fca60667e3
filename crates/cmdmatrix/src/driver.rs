//! Generates and runs command translation cases for a fixture.
//!
//! Required groups are expanded into their full cross product and each
//! combination is run on its own. Every required combination is then run
//! again together with every combination of optional arguments, including
//! the ones that leave optional slots out.

use cmdmatrix_lib::{Expander, TestCase, tokenize};
use itertools::Itertools;
use tracing::{debug, info, warn};

use crate::config::{ConfigError, HarnessConfig};
use crate::error::{AssertionFailure, HarnessError};
use crate::logging;
use crate::target::{CommandFixture, CommandTarget, Execution};

/// One command line generated from a fixture's argument groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCase {
    /// The command string fed to the target.
    pub command: String,
    /// The arguments the target should forward.
    pub expected: Vec<String>,
}

impl GeneratedCase {
    /// A case made of required arguments only.
    #[must_use]
    pub fn required(case: &TestCase) -> Self {
        Self {
            command: case.command_line(),
            expected: case.expected(),
        }
    }

    /// A required combination extended with optional arguments.
    ///
    /// Patterns already present among the required ones are not repeated.
    /// The expected output keeps every required output followed by every
    /// optional output.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdmatrix::GeneratedCase;
    /// use cmdmatrix_lib::{ArgumentDefinition, TestCase};
    ///
    /// let required = TestCase::new(vec![ArgumentDefinition::new("add", ["add"])]);
    /// let optional = TestCase::new(vec![ArgumentDefinition::new("--force", ["-f"])]);
    /// let case = GeneratedCase::combined(&required, &optional);
    /// assert_eq!(case.command, "add --force");
    /// assert_eq!(case.expected, ["add", "-f"]);
    /// ```
    #[must_use]
    pub fn combined(required: &TestCase, optional: &TestCase) -> Self {
        let command = required.patterns().chain(optional.patterns()).unique().join(" ");
        let mut expected = required.expected();
        expected.extend(optional.expected());
        Self { command, expected }
    }
}

/// A generated case together with the reason it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFailure {
    pub case: GeneratedCase,
    pub failure: AssertionFailure,
}

/// Outcome of running every generated case of a fixture.
#[derive(Debug, Default)]
pub struct CombinationReport {
    /// Number of cases actually executed.
    pub cases_run: usize,
    pub failures: Vec<CaseFailure>,
}

impl CombinationReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Convert the report into a `Result`, keeping every failure.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Failures`] when any case failed.
    pub fn into_result(self) -> Result<usize, HarnessError> {
        if self.failures.is_empty() {
            Ok(self.cases_run)
        } else {
            Err(HarnessError::Failures {
                total: self.cases_run,
                failures: self.failures,
            })
        }
    }

    /// Panic with a description of every failed case.
    ///
    /// # Panics
    ///
    /// Panics if any generated case failed.
    pub fn assert_passed(self) {
        if let Err(err) = self.into_result() {
            panic!("{err}");
        }
    }
}

/// Drives a [`CommandFixture`] through every valid argument combination.
#[derive(Debug)]
pub struct Harness<F> {
    fixture: F,
    config: HarnessConfig,
}

impl<F: CommandFixture> Harness<F> {
    /// Create a harness with the default configuration.
    pub fn new(fixture: F) -> Self {
        Self::with_config(fixture, HarnessConfig::default())
    }

    /// Create a harness configured by [`HarnessConfig::load`] and install
    /// a log subscriber using its `log_filter`.
    ///
    /// A subscriber installed earlier is left in place.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the configuration cannot be loaded.
    pub fn from_env(fixture: F) -> Result<Self, ConfigError> {
        let config = HarnessConfig::load()?;
        if logging::init_from_config(&config) {
            debug!(filter = %config.log_filter, "installed harness logging");
        }
        Ok(Self::with_config(fixture, config))
    }

    /// Create a harness with an explicit configuration.
    pub const fn with_config(fixture: F, config: HarnessConfig) -> Self {
        Self { fixture, config }
    }

    pub const fn fixture(&self) -> &F {
        &self.fixture
    }

    pub const fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Execute `command` on a fresh target.
    pub fn execute(&self, command: &str) -> Execution {
        let tokens = tokenize(command);
        self.fixture.create_target().execute(&tokens)
    }

    /// Run `command` and compare the forwarded arguments with `expected`.
    ///
    /// The length is compared first; token comparison only happens when the
    /// lengths agree.
    ///
    /// # Errors
    ///
    /// Returns the first [`AssertionFailure`] found.
    pub fn assert_command_translation(
        &self,
        command: &str,
        expected: &[String],
    ) -> Result<(), AssertionFailure> {
        let Execution { forwarded, console } = self.execute(command);
        let Some(actual) = forwarded else {
            return Err(AssertionFailure::NotForwarded {
                command: command.to_owned(),
                expected: expected.to_vec(),
                console,
            });
        };
        if actual.len() != expected.len() {
            return Err(AssertionFailure::LengthMismatch {
                command: command.to_owned(),
                expected: expected.to_vec(),
                actual,
            });
        }
        match expected.iter().zip(&actual).position(|(e, a)| e != a) {
            Some(index) => Err(AssertionFailure::TokenMismatch {
                index,
                command: command.to_owned(),
                expected: expected.to_vec(),
                actual,
            }),
            None => Ok(()),
        }
    }

    /// Run `command` and check that its console text contains `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionFailure::ConsoleMismatch`] when the fragment is
    /// missing.
    pub fn assert_console_output(&self, command: &str, expected: &str) -> Result<(), AssertionFailure> {
        let Execution { console, .. } = self.execute(command);
        if console.contains(expected) {
            Ok(())
        } else {
            Err(AssertionFailure::ConsoleMismatch {
                command: command.to_owned(),
                expected: expected.to_owned(),
                console,
            })
        }
    }

    /// Every command line the fixture's groups describe.
    ///
    /// Required-only cases come first, followed by each required case paired
    /// with each optional combination.
    pub fn generate_cases(&self) -> Vec<GeneratedCase> {
        let expander = Expander::new(self.config.or_delimiter);
        let required = expander.required_cases(&self.fixture.required_groups());
        let optional = expander.optional_cases(&self.fixture.optional_groups());

        let mut cases: Vec<GeneratedCase> = required.iter().map(GeneratedCase::required).collect();
        cases.extend(
            required
                .iter()
                .cartesian_product(&optional)
                .map(|(req, opt)| GeneratedCase::combined(req, opt)),
        );
        debug!(
            required = required.len(),
            optional = optional.len(),
            total = cases.len(),
            "generated command cases"
        );
        cases
    }

    /// Run every generated case, collecting failures.
    ///
    /// Stops after the first failure when `fail_fast` is configured.
    pub fn run_all_valid_combinations(&self) -> CombinationReport {
        let mut report = CombinationReport::default();
        for case in self.generate_cases() {
            report.cases_run += 1;
            debug!(command = %case.command, "running case");
            if let Err(failure) = self.assert_command_translation(&case.command, &case.expected) {
                warn!(command = %case.command, "{failure}");
                report.failures.push(CaseFailure { case, failure });
                if self.config.fail_fast {
                    break;
                }
            }
        }
        info!(
            cases = report.cases_run,
            failures = report.failures.len(),
            "command translation run finished"
        );
        report
    }

    /// Run the configured help command and look for the configured marker.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Help`] when the marker is missing.
    pub fn check_help(&self) -> Result<(), HarnessError> {
        self.assert_console_output(&self.config.help_command, &self.config.help_marker)
            .map_err(HarnessError::Help)
    }
}
