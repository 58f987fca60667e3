//! Shared types for the cmdmatrix project.
//!
//! This library defines the argument model used to describe a command's
//! syntax, together with the pure helpers that tokenize command strings and
//! expand argument groups into concrete test cases. The driver crate
//! (`cmdmatrix`) builds on these to exercise a system under test.

use serde::{Deserialize, Serialize};

pub mod expand;
pub mod tokenize;

pub use expand::Expander;
pub use tokenize::{option_value, option_values, tokenize};

/// Delimiter separating equivalent spellings inside one input pattern.
pub const OR_DELIMITER: char = '|';

/// One argument as typed by a user, paired with the tokens the system under
/// test should forward for it.
///
/// The pattern may encode several spellings (`"-v|--verbose"`); expansion
/// splits those into single-spelling definitions sharing the same output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentDefinition {
    #[serde(rename = "pattern")]
    input_pattern: String,
    #[serde(default)]
    output: Vec<String>,
}

impl ArgumentDefinition {
    /// Create a definition from an input pattern and its expected output.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdmatrix_lib::ArgumentDefinition;
    ///
    /// let arg = ArgumentDefinition::new("-f|--force", ["-f"]);
    /// assert_eq!(arg.input_pattern(), "-f|--force");
    /// assert_eq!(arg.output(), ["-f"]);
    /// ```
    pub fn new<P, I, S>(input_pattern: P, output: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input_pattern: input_pattern.into(),
            output: output.into_iter().map(Into::into).collect(),
        }
    }

    /// The text typed on the command line for this argument.
    #[must_use]
    pub fn input_pattern(&self) -> &str {
        &self.input_pattern
    }

    /// Tokens the system under test should forward for this argument.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Whether the pattern still holds more than one spelling.
    #[must_use]
    pub fn has_alternatives(&self, delimiter: char) -> bool {
        self.input_pattern.contains(delimiter)
    }
}

/// One syntactic slot of a command: the alternatives that may fill it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArgumentGroup(Vec<ArgumentDefinition>);

impl ArgumentGroup {
    /// Create a group from its alternatives.
    #[must_use]
    pub fn new(definitions: Vec<ArgumentDefinition>) -> Self {
        Self(definitions)
    }

    /// The alternatives, in declaration order.
    #[must_use]
    pub fn definitions(&self) -> &[ArgumentDefinition] {
        &self.0
    }

    /// Number of alternatives before OR expansion.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// An empty group contributes nothing to a cross product.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the alternatives.
    pub fn iter(&self) -> std::slice::Iter<'_, ArgumentDefinition> {
        self.0.iter()
    }
}

impl From<Vec<ArgumentDefinition>> for ArgumentGroup {
    fn from(value: Vec<ArgumentDefinition>) -> Self {
        Self(value)
    }
}

impl FromIterator<ArgumentDefinition> for ArgumentGroup {
    fn from_iter<T: IntoIterator<Item = ArgumentDefinition>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ArgumentGroup {
    type Item = &'a ArgumentDefinition;
    type IntoIter = std::slice::Iter<'a, ArgumentDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for ArgumentGroup {
    type Item = ArgumentDefinition;
    type IntoIter = std::vec::IntoIter<ArgumentDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// A fully resolved command line: one chosen definition per contributing
/// group, in group order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestCase(Vec<ArgumentDefinition>);

impl TestCase {
    /// A case choosing `arguments` in command-line order.
    #[must_use]
    pub fn new(arguments: Vec<ArgumentDefinition>) -> Self {
        Self(arguments)
    }

    /// The chosen arguments.
    #[must_use]
    pub fn arguments(&self) -> &[ArgumentDefinition] {
        &self.0
    }

    /// True for the case that omits every argument.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Input patterns in order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(ArgumentDefinition::input_pattern)
    }

    /// The command string: every pattern joined by a single space.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdmatrix_lib::{ArgumentDefinition, TestCase};
    ///
    /// let case = TestCase::new(vec![
    ///     ArgumentDefinition::new("add", ["add"]),
    ///     ArgumentDefinition::new("--force", ["-f"]),
    /// ]);
    /// assert_eq!(case.command_line(), "add --force");
    /// assert_eq!(case.expected(), ["add", "-f"]);
    /// ```
    #[must_use]
    pub fn command_line(&self) -> String {
        itertools::join(self.patterns(), " ")
    }

    /// Concatenation of every chosen definition's output.
    #[must_use]
    pub fn expected(&self) -> Vec<String> {
        self.0
            .iter()
            .flat_map(|arg| arg.output().iter().cloned())
            .collect()
    }
}

impl From<Vec<ArgumentDefinition>> for TestCase {
    fn from(value: Vec<ArgumentDefinition>) -> Self {
        Self(value)
    }
}
