//! Translation from parsed commands to downstream argument arrays.
//!
//! Each subcommand maps onto the flag conventions of the maintenance
//! program it drives: single-dash long names (`-verbose`), camel-cased
//! multi-word options, and repeated `-segment NAME` pairs.

use clap::{CommandFactory, Parser};
use thiserror::Error;
use tracing::debug;

use crate::{
    CheckArgs, Cli, Command, HELP_TOKEN, IndexCommand, ListSegmentsArgs, PROGRAM_NAME, UpgradeArgs,
    VERSION,
};

/// Why a command line was not forwarded.
#[derive(Debug, Error)]
pub enum Rejection {
    /// The user asked for help; the text is ready to print.
    #[error("{0}")]
    Help(String),
    /// Parsing failed, or clap handled `--help`/`--version` itself.
    #[error(transparent)]
    Usage(#[from] clap::Error),
}

/// Result of executing one command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Arguments handed to the downstream program.
    pub forwarded: Option<Vec<String>>,
    /// Text written to the console.
    pub console: String,
}

/// Parse `tokens` (without the program name).
///
/// # Errors
///
/// Returns [`Rejection::Help`] when any token is `?` and
/// [`Rejection::Usage`] when clap rejects the arguments.
pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Cli, Rejection> {
    if tokens.iter().any(|t| t.as_ref() == HELP_TOKEN) {
        return Err(Rejection::Help(help_text(tokens)));
    }
    let argv = std::iter::once(PROGRAM_NAME).chain(tokens.iter().map(AsRef::<str>::as_ref));
    Ok(Cli::try_parse_from(argv)?)
}

/// Execute one command line and report what it produced.
///
/// # Examples
///
/// ```
/// let outcome = idxtool::run(&["index", "check", "./idx", "--verbose"]);
/// assert_eq!(outcome.forwarded, Some(vec!["./idx".to_owned(), "-verbose".to_owned()]));
///
/// let help = idxtool::run(&["?"]);
/// assert!(help.forwarded.is_none());
/// assert!(help.console.contains("Version"));
/// ```
pub fn run<S: AsRef<str>>(tokens: &[S]) -> Outcome {
    match parse(tokens) {
        Ok(cli) => {
            let args = cli.command.to_args();
            debug!(?args, "forwarding translated arguments");
            Outcome {
                forwarded: Some(args),
                console: String::new(),
            }
        }
        Err(Rejection::Help(text)) => Outcome {
            forwarded: None,
            console: text,
        },
        Err(Rejection::Usage(err)) => {
            debug!(kind = ?err.kind(), "command line rejected");
            Outcome {
                forwarded: None,
                console: err.render().to_string(),
            }
        }
    }
}

/// Version banner followed by help for the deepest subcommand named before
/// the first unrecognised token.
fn help_text<S: AsRef<str>>(tokens: &[S]) -> String {
    let root = Cli::command();
    let mut current = &root;
    let mut path = vec![PROGRAM_NAME];
    for token in tokens.iter().map(AsRef::<str>::as_ref) {
        match current.find_subcommand(token) {
            Some(sub) => {
                path.push(token);
                current = sub;
            }
            None => break,
        }
    }
    let mut command = current.clone().bin_name(path.join(" "));
    format!(
        "{PROGRAM_NAME} Version {VERSION}\n\n{}",
        command.render_help()
    )
}

impl Command {
    /// The argument array forwarded downstream.
    #[must_use]
    pub fn to_args(&self) -> Vec<String> {
        match self {
            Self::Index(IndexCommand::Check(args)) => check_args(args),
            Self::Index(IndexCommand::Upgrade(args)) => upgrade_args(args),
            Self::Index(IndexCommand::ListSegments(args)) => list_segments_args(args),
        }
    }
}

fn check_args(args: &CheckArgs) -> Vec<String> {
    let mut out = vec![args.index_directory.clone()];
    if args.verbose {
        out.push("-verbose".to_owned());
    }
    if args.cross_check_term_vectors {
        out.push("-crossCheckTermVectors".to_owned());
    }
    for segment in &args.segments {
        out.push("-segment".to_owned());
        out.push(segment.clone());
    }
    out
}

fn upgrade_args(args: &UpgradeArgs) -> Vec<String> {
    let mut out = vec![args.index_directory.clone()];
    if args.delete_prior_commits {
        out.push("-delete-prior-commits".to_owned());
    }
    if args.verbose {
        out.push("-verbose".to_owned());
    }
    out
}

fn list_segments_args(args: &ListSegmentsArgs) -> Vec<String> {
    vec!["-l".to_owned(), args.index_directory.clone()]
}
