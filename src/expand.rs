//! Expansion of argument groups into concrete test cases.
//!
//! A fixture declares each slot of a command as an [`ArgumentGroup`]. The
//! [`Expander`] first splits OR-patterns (`"-v|--verbose"`) into one
//! definition per spelling, then enumerates every combination of one choice
//! per group. Optional groups additionally offer the choice of leaving the
//! slot out.

use itertools::Itertools;

use crate::{ArgumentDefinition, ArgumentGroup, OR_DELIMITER, TestCase};

/// Splits alternatives and builds cross products of argument groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expander {
    delimiter: char,
}

impl Default for Expander {
    fn default() -> Self {
        Self::new(OR_DELIMITER)
    }
}

impl Expander {
    /// Create an expander splitting patterns on `delimiter`.
    #[must_use]
    pub const fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// Split `definition` into one definition per alternative spelling.
    ///
    /// Every piece receives a copy of the original output, so all spellings
    /// of one argument expect the same forwarded tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdmatrix_lib::{ArgumentDefinition, Expander};
    ///
    /// let expanded = Expander::default()
    ///     .expand_alternatives(&ArgumentDefinition::new("-a|--all|-x", ["ALL"]));
    /// let patterns: Vec<_> = expanded.iter().map(|a| a.input_pattern()).collect();
    /// assert_eq!(patterns, ["-a", "--all", "-x"]);
    /// assert!(expanded.iter().all(|a| a.output() == ["ALL"]));
    /// ```
    #[must_use]
    pub fn expand_alternatives(&self, definition: &ArgumentDefinition) -> Vec<ArgumentDefinition> {
        if !definition.has_alternatives(self.delimiter) {
            return vec![definition.clone()];
        }
        definition
            .input_pattern()
            .split(self.delimiter)
            .map(|option| ArgumentDefinition::new(option, definition.output().iter().cloned()))
            .collect()
    }

    /// Expand every definition of `group`, preserving order.
    #[must_use]
    pub fn expand_group(&self, group: &ArgumentGroup) -> ArgumentGroup {
        group
            .iter()
            .flat_map(|definition| self.expand_alternatives(definition))
            .collect()
    }

    /// Expand each group independently.
    #[must_use]
    pub fn expand_groups(&self, groups: &[ArgumentGroup]) -> Vec<ArgumentGroup> {
        groups.iter().map(|group| self.expand_group(group)).collect()
    }

    /// Every combination of one definition per group.
    ///
    /// Groups that expand to nothing are skipped. The first group varies
    /// slowest. With no contributing group the result is one empty case.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdmatrix_lib::{ArgumentDefinition, ArgumentGroup, Expander};
    ///
    /// let groups = [
    ///     ArgumentGroup::new(vec![ArgumentDefinition::new("a|b", ["A"])]),
    ///     ArgumentGroup::new(vec![ArgumentDefinition::new("x|y|z", ["X"])]),
    /// ];
    /// assert_eq!(Expander::default().required_cases(&groups).len(), 6);
    /// ```
    #[must_use]
    pub fn required_cases(&self, groups: &[ArgumentGroup]) -> Vec<TestCase> {
        let dimensions = self
            .expand_groups(groups)
            .into_iter()
            .filter(|group| !group.is_empty())
            .map(|group| group.into_iter().map(Some).collect())
            .collect();
        cross_product(dimensions)
    }

    /// Every combination of optional arguments, including leaving any
    /// group out.
    ///
    /// Each contributing group offers `1 + n` choices: omission first, then
    /// each expanded alternative.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdmatrix_lib::{ArgumentDefinition, ArgumentGroup, Expander};
    ///
    /// let groups = [ArgumentGroup::new(vec![ArgumentDefinition::new("-f|--force", ["-f"])])];
    /// let cases = Expander::default().optional_cases(&groups);
    /// let commands: Vec<_> = cases.iter().map(|c| c.command_line()).collect();
    /// assert_eq!(commands, ["", "-f", "--force"]);
    /// ```
    #[must_use]
    pub fn optional_cases(&self, groups: &[ArgumentGroup]) -> Vec<TestCase> {
        let dimensions = self
            .expand_groups(groups)
            .into_iter()
            .filter(|group| !group.is_empty())
            .map(|group| std::iter::once(None).chain(group.into_iter().map(Some)).collect())
            .collect();
        cross_product(dimensions)
    }
}

/// Cartesian product over choice lists; `None` marks an omitted slot.
fn cross_product(dimensions: Vec<Vec<Option<ArgumentDefinition>>>) -> Vec<TestCase> {
    if dimensions.is_empty() {
        return vec![TestCase::default()];
    }
    dimensions
        .into_iter()
        .multi_cartesian_product()
        .map(|choices| TestCase::new(choices.into_iter().flatten().collect()))
        .collect()
}
