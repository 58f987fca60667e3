//! CLI front end for index maintenance.
//! Translates the command line and prints the forwarded argument array.

use std::io::{self, Write};

use anyhow::Context;
use idxtool::Rejection;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let tokens: Vec<String> = std::env::args().skip(1).collect();
    let mut stdout = io::stdout().lock();
    match idxtool::parse(&tokens) {
        Ok(cli) => {
            let args = cli.command.to_args();
            info!(count = args.len(), "translated command line");
            writeln!(stdout, "{}", args.join(" ")).context("failed to write arguments")?;
        }
        Err(Rejection::Help(text)) => {
            stdout
                .write_all(text.as_bytes())
                .context("failed to write help")?;
        }
        Err(Rejection::Usage(err)) => err.exit(),
    }
    Ok(())
}
