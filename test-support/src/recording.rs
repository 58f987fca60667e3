//! A configurable stand-in for a command-line front end.
//!
//! [`RecordingTarget`] forwards the tokens it receives, replacing any token
//! registered as an alias with its canonical spelling. A help token prints a
//! version banner instead of forwarding. [`RecordingFixture`] pairs such a
//! target with argument groups so scenarios can be assembled step by step.

use std::collections::HashMap;

use cmdmatrix::{ArgumentDefinition, ArgumentGroup, CommandFixture, CommandTarget, Execution};

/// Name printed in the help banner.
pub const PROGRAM_NAME: &str = "recorder";
/// Version printed in the help banner.
pub const PROGRAM_VERSION: &str = "0.1.0";

/// Target forwarding tokens after canonicalising aliases.
#[derive(Debug, Clone)]
pub struct RecordingTarget {
    aliases: HashMap<String, String>,
    help_token: String,
}

impl Default for RecordingTarget {
    fn default() -> Self {
        Self {
            aliases: HashMap::new(),
            help_token: "?".to_owned(),
        }
    }
}

impl RecordingTarget {
    /// Forward `alias` as `canonical`.
    #[must_use]
    pub fn with_alias(mut self, alias: &str, canonical: &str) -> Self {
        self.aliases.insert(alias.to_owned(), canonical.to_owned());
        self
    }

    /// Treat `token` as the help request.
    #[must_use]
    pub fn with_help_token(mut self, token: &str) -> Self {
        token.clone_into(&mut self.help_token);
        self
    }

    fn canonical<'a>(&'a self, token: &'a str) -> &'a str {
        self.aliases.get(token).map_or(token, String::as_str)
    }
}

impl CommandTarget for RecordingTarget {
    fn execute(&mut self, tokens: &[String]) -> Execution {
        if tokens.iter().any(|t| *t == self.help_token) {
            return Execution::console(format!(
                "{PROGRAM_NAME} Version {PROGRAM_VERSION}\nUsage: {PROGRAM_NAME} [ARGS]...\n"
            ));
        }
        Execution::forwarded(tokens.iter().map(|t| self.canonical(t)))
    }
}

/// Fixture built from a [`RecordingTarget`] template and explicit groups.
#[derive(Debug, Clone, Default)]
pub struct RecordingFixture {
    target: RecordingTarget,
    required: Vec<ArgumentGroup>,
    optional: Vec<ArgumentGroup>,
}

impl RecordingFixture {
    /// Use `target` as the template cloned for every execution.
    #[must_use]
    pub fn with_target(mut self, target: RecordingTarget) -> Self {
        self.target = target;
        self
    }

    /// Append a required group holding a single definition.
    #[must_use]
    pub fn required(mut self, pattern: &str, output: &[&str]) -> Self {
        self.required.push(single(pattern, output));
        self
    }

    /// Append an optional group holding a single definition.
    #[must_use]
    pub fn optional(mut self, pattern: &str, output: &[&str]) -> Self {
        self.optional.push(single(pattern, output));
        self
    }

    /// Append a prepared required group.
    #[must_use]
    pub fn required_group(mut self, group: ArgumentGroup) -> Self {
        self.required.push(group);
        self
    }

    /// Append a prepared optional group.
    #[must_use]
    pub fn optional_group(mut self, group: ArgumentGroup) -> Self {
        self.optional.push(group);
        self
    }
}

fn single(pattern: &str, output: &[&str]) -> ArgumentGroup {
    ArgumentGroup::new(vec![ArgumentDefinition::new(pattern, output.iter().copied())])
}

impl CommandFixture for RecordingFixture {
    type Target = RecordingTarget;

    fn create_target(&self) -> RecordingTarget {
        self.target.clone()
    }

    fn required_groups(&self) -> Vec<ArgumentGroup> {
        self.required.clone()
    }

    fn optional_groups(&self) -> Vec<ArgumentGroup> {
        self.optional.clone()
    }
}
