//! Keyed text lookup for building expected console fragments.
//!
//! Fixtures that check localized help text look the text up by key rather
//! than hard-coding it. Templates use positional placeholders (`{0}`,
//! `{1}`, ...).

use std::collections::HashMap;

use thiserror::Error;

/// Errors raised while resolving resource strings.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No string is registered under the key.
    #[error("no resource named `{0}`")]
    Missing(String),
    /// A template referenced an argument that was not supplied.
    #[error("resource `{key}` references argument {{{index}}} but only {supplied} were supplied")]
    MissingArgument {
        key: String,
        index: usize,
        supplied: usize,
    },
    /// A placeholder was opened but never closed.
    #[error("resource `{key}` has an unterminated placeholder")]
    Malformed { key: String },
    /// The resource table could not be parsed.
    #[error("invalid resource table: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Source of resource strings.
pub trait ResourceProvider {
    /// The raw string registered under `key`.
    fn lookup(&self, key: &str) -> Option<&str>;
}

/// A resource table held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticResources {
    entries: HashMap<String, String>,
}

impl StaticResources {
    /// Build a table from a JSON object of string values.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Parse`] when `json` is not an object of
    /// strings.
    pub fn from_json(json: &str) -> Result<Self, ResourceError> {
        Ok(Self {
            entries: serde_json::from_str(json)?,
        })
    }

    /// Register `value` under `key`, replacing any previous value.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticResources {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ResourceProvider for StaticResources {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

/// Look up `key` without substitution.
///
/// # Errors
///
/// Returns [`ResourceError::Missing`] when the key is unknown.
pub fn resource<'a, P: ResourceProvider + ?Sized>(
    provider: &'a P,
    key: &str,
) -> Result<&'a str, ResourceError> {
    provider
        .lookup(key)
        .ok_or_else(|| ResourceError::Missing(key.to_owned()))
}

/// Look up `key` and substitute `{n}` placeholders with `args[n]`.
///
/// `{{` and `}}` produce literal braces.
///
/// # Errors
///
/// Returns [`ResourceError::Missing`] for an unknown key and
/// [`ResourceError::MissingArgument`] when a placeholder has no argument.
/// An unterminated `{` yields [`ResourceError::Malformed`].
///
/// # Examples
///
/// ```
/// use cmdmatrix::resources::{StaticResources, format_resource};
///
/// let table = StaticResources::default().with("Greeting", "{0} Version {1}");
/// let text = format_resource(&table, "Greeting", &["idxtool", "0.1.0"]).unwrap();
/// assert_eq!(text, "idxtool Version 0.1.0");
/// ```
pub fn format_resource<P, S>(provider: &P, key: &str, args: &[S]) -> Result<String, ResourceError>
where
    P: ResourceProvider + ?Sized,
    S: AsRef<str>,
{
    let template = resource(provider, key)?;
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let mut digits = String::new();
                let mut closed = false;
                for next in chars.by_ref() {
                    if next == '}' {
                        closed = true;
                        break;
                    }
                    digits.push(next);
                }
                if !closed {
                    return Err(ResourceError::Malformed {
                        key: key.to_owned(),
                    });
                }
                match digits.parse::<usize>() {
                    Ok(index) => {
                        let arg = args.get(index).ok_or_else(|| ResourceError::MissingArgument {
                            key: key.to_owned(),
                            index,
                            supplied: args.len(),
                        })?;
                        out.push_str(arg.as_ref());
                    }
                    Err(_) => {
                        out.push('{');
                        out.push_str(&digits);
                        out.push('}');
                    }
                }
            }
            other => out.push(other),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn table() -> StaticResources {
        [
            ("HelpBanner", "{0} Version {1}"),
            ("Plain", "Checks an index"),
            ("Braces", "{{literal}} {0}"),
        ]
        .into_iter()
        .collect()
    }

    #[rstest]
    #[case::substitutes("HelpBanner", &["idxtool", "1.2"], "idxtool Version 1.2")]
    #[case::no_placeholders("Plain", &[], "Checks an index")]
    #[case::escaped_braces("Braces", &["x"], "{literal} x")]
    fn formats_templates(#[case] key: &str, #[case] args: &[&str], #[case] expected: &str) {
        let text = format_resource(&table(), key, args).expect("format");
        assert_eq!(text, expected);
    }

    #[test]
    fn unknown_key_is_an_error() {
        let err = format_resource::<_, &str>(&table(), "Nope", &[]).expect_err("missing");
        assert!(matches!(err, ResourceError::Missing(ref key) if key == "Nope"));
    }

    #[test]
    fn missing_argument_is_an_error() {
        let err = format_resource(&table(), "HelpBanner", &["only-one"]).expect_err("missing arg");
        assert!(matches!(
            err,
            ResourceError::MissingArgument { index: 1, supplied: 1, .. }
        ));
    }

    #[rstest]
    #[case::unterminated_index("size {0")]
    #[case::unterminated_text("a {x b")]
    #[case::trailing_brace("open {")]
    fn unterminated_placeholder_is_rejected(#[case] template: &str) {
        let table = StaticResources::default().with("Broken", template);
        let err = format_resource(&table, "Broken", &["7"]).expect_err("malformed");
        assert!(matches!(err, ResourceError::Malformed { ref key } if key == "Broken"));
    }

    #[test]
    fn non_numeric_placeholder_is_kept() {
        let table = StaticResources::default().with("Named", "a {x} b");
        assert_eq!(
            format_resource::<_, &str>(&table, "Named", &[]).expect("format"),
            "a {x} b"
        );
    }

    #[test]
    fn loads_json_table() {
        let table = StaticResources::from_json(r#"{ "Plain": "text" }"#).expect("parse");
        assert_eq!(resource(&table, "Plain").expect("lookup"), "text");
    }

    #[test]
    fn rejects_non_string_values() {
        assert!(StaticResources::from_json(r#"{ "Plain": 1 }"#).is_err());
    }
}
