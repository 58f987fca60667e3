//! Library utilities for the `idxtool` CLI.
//!
//! `idxtool` is a thin front end: it parses a human-friendly command line
//! and forwards a flat argument array to the index maintenance program
//! behind each subcommand. [`run`] performs one such translation and
//! returns what was forwarded together with any console text.

use clap::{Args, Parser, Subcommand};

mod translate;

pub use translate::{Outcome, Rejection, parse, run};

/// Name shown in usage and in the version banner.
pub const PROGRAM_NAME: &str = "idxtool";
/// Version shown in the banner printed for `?`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Token requesting help at any position of the command line.
pub const HELP_TOKEN: &str = "?";

/// Command line arguments for `idxtool`.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "idxtool", version, about = "Maintenance utilities for search indexes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level command groups.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Index-level operations.
    #[command(subcommand)]
    Index(IndexCommand),
}

/// Operations on a single index directory.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum IndexCommand {
    /// Check an index for problems.
    Check(CheckArgs),
    /// Upgrade an index to the current format.
    Upgrade(UpgradeArgs),
    /// List the segments of an index.
    ListSegments(ListSegmentsArgs),
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct CheckArgs {
    /// Path to the index directory.
    pub index_directory: String,

    /// Print details for every segment.
    #[arg(short, long)]
    pub verbose: bool,

    /// Cross-check term vectors against postings.
    #[arg(short = 'c', long)]
    pub cross_check_term_vectors: bool,

    /// Only check the named segment. May be repeated.
    #[arg(short, long = "segment", value_name = "NAME")]
    pub segments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct UpgradeArgs {
    /// Path to the index directory.
    pub index_directory: String,

    /// Remove every commit point except the last.
    #[arg(short, long)]
    pub delete_prior_commits: bool,

    /// Report progress while upgrading.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct ListSegmentsArgs {
    /// Path to the index directory.
    pub index_directory: String,
}
