//! The seams between the harness and the code it exercises.
//!
//! A [`CommandTarget`] is the system under test: it receives the tokens of
//! one command line and reports what it forwarded downstream together with
//! any console text it produced. A [`CommandFixture`] declares how to build
//! a fresh target and which argument groups describe its syntax.

use cmdmatrix_lib::ArgumentGroup;

/// Observable outcome of executing one command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Execution {
    /// Arguments handed to the downstream program, or `None` when the
    /// command never reached it (help, parse errors).
    pub forwarded: Option<Vec<String>>,
    /// Everything written to the console while executing.
    pub console: String,
}

impl Execution {
    /// An execution that forwarded `args` without console output.
    #[must_use]
    pub fn forwarded<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            forwarded: Some(args.into_iter().map(Into::into).collect()),
            console: String::new(),
        }
    }

    /// An execution that only wrote `text` to the console.
    #[must_use]
    pub fn console(text: impl Into<String>) -> Self {
        Self {
            forwarded: None,
            console: text.into(),
        }
    }
}

/// A command-line front end under test.
pub trait CommandTarget {
    /// Execute the already tokenized command line.
    fn execute(&mut self, tokens: &[String]) -> Execution;
}

impl<F> CommandTarget for F
where
    F: FnMut(&[String]) -> Execution,
{
    fn execute(&mut self, tokens: &[String]) -> Execution {
        self(tokens)
    }
}

/// Declares a target together with the syntax used to exercise it.
///
/// # Examples
///
/// ```
/// use cmdmatrix::{CommandFixture, Execution};
/// use cmdmatrix_lib::{ArgumentDefinition, ArgumentGroup};
///
/// struct Echo;
///
/// impl CommandFixture for Echo {
///     type Target = fn(&[String]) -> Execution;
///
///     fn create_target(&self) -> Self::Target {
///         |tokens| Execution::forwarded(tokens.iter().cloned())
///     }
///
///     fn required_groups(&self) -> Vec<ArgumentGroup> {
///         vec![ArgumentGroup::new(vec![ArgumentDefinition::new("add", ["add"])])]
///     }
///
///     fn optional_groups(&self) -> Vec<ArgumentGroup> {
///         Vec::new()
///     }
/// }
/// ```
pub trait CommandFixture {
    /// The system under test.
    type Target: CommandTarget;

    /// Build a fresh target; called once per executed command.
    fn create_target(&self) -> Self::Target;

    /// Slots that appear in every generated command.
    fn required_groups(&self) -> Vec<ArgumentGroup>;

    /// Slots that may be filled or left out.
    fn optional_groups(&self) -> Vec<ArgumentGroup>;
}
