//! Logging utilities for harness runs.
//!
//! Installs a `tracing-subscriber` formatter for the driver's per-case
//! events. Only the first call installs a subscriber; later calls return
//! `false`.

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::HarnessConfig;

/// Install a subscriber writing to standard error, filtered by `RUST_LOG`.
///
/// Returns `false` when a global subscriber was already installed.
///
/// # Examples
///
/// ```rust,no_run
/// use cmdmatrix::logging::init;
///
/// init();
/// tracing::info!("Logging is initialized!");
/// ```
pub fn init() -> bool {
    init_with_writer(fmt::writer::BoxMakeWriter::new(std::io::stderr))
}

/// Install a subscriber using the filter from `config`.
///
/// `RUST_LOG` is not consulted, so the harness configuration decides which
/// events are shown.
pub fn init_from_config(config: &HarnessConfig) -> bool {
    install(
        EnvFilter::new(&config.log_filter),
        fmt::writer::BoxMakeWriter::new(std::io::stderr),
    )
}

/// Install a subscriber with a custom writer, filtered by `RUST_LOG`.
///
/// # Examples
///
/// ```rust,no_run
/// use cmdmatrix::logging::init_with_writer;
/// use tracing_subscriber::fmt;
///
/// init_with_writer(fmt::writer::BoxMakeWriter::new(std::io::stdout));
/// ```
pub fn init_with_writer<W>(writer: W) -> bool
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    install(EnvFilter::from_default_env(), writer)
}

fn install<W>(filter: EnvFilter, writer: W) -> bool
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .try_init()
        .is_ok()
}
