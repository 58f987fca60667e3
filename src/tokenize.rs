//! Splitting command strings into tokens and reading option values.
//!
//! Tokens are whitespace-separated; quoting and escapes are not recognised.

/// Split `input` on runs of whitespace, discarding empty tokens.
///
/// # Examples
///
/// ```
/// use cmdmatrix_lib::tokenize;
///
/// assert_eq!(tokenize("  index  check\t./idx \n"), ["index", "check", "./idx"]);
/// assert!(tokenize("   ").is_empty());
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_owned).collect()
}

/// Return the token following the first occurrence of `option`.
///
/// Returns `None` when the option is missing or is the last token.
///
/// # Examples
///
/// ```
/// use cmdmatrix_lib::option_value;
///
/// let tokens = ["check", "-s", "_0", "-s", "_1"];
/// assert_eq!(option_value(&tokens, "-s"), Some("_0"));
/// assert_eq!(option_value(&tokens, "-x"), None);
/// ```
pub fn option_value<'a, S: AsRef<str>>(tokens: &'a [S], option: &str) -> Option<&'a str> {
    tokens
        .iter()
        .map(AsRef::<str>::as_ref)
        .skip_while(|token| *token != option)
        .nth(1)
}

/// Return the value following every occurrence of `option`, in order.
///
/// An occurrence that is the last token records `None`. An occurrence
/// immediately followed by `option` again also records `None`, and the
/// following occurrence is then processed on its own.
///
/// # Examples
///
/// ```
/// use cmdmatrix_lib::option_values;
///
/// let tokens = ["--tag", "a", "--tag", "--tag", "b", "--tag"];
/// assert_eq!(
///     option_values(&tokens, "--tag"),
///     [Some("a"), None, Some("b"), None]
/// );
/// ```
pub fn option_values<'a, S: AsRef<str>>(tokens: &'a [S], option: &str) -> Vec<Option<&'a str>> {
    let mut values = Vec::new();
    let mut iter = tokens.iter().map(AsRef::<str>::as_ref).peekable();
    while let Some(token) = iter.next() {
        if token != option {
            continue;
        }
        match iter.peek() {
            Some(next) if *next != option => {
                values.push(Some(*next));
                iter.next();
            }
            _ => values.push(None),
        }
    }
    values
}
