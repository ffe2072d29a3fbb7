//! Command line tasks that deploy the NFT contracts and mint tokens on a
//! Stylus-enabled chain.
//!
//! Every binary loads `.env`, installs a `tracing` subscriber with
//! [`init_tracing`] and reads its [`config`] from flags or environment
//! variables through [`parse_args`].
pub mod config;
pub mod deploy;
pub mod mint;

use std::ffi::OsString;

use clap::{error::ErrorKind, Parser};
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Verbosity comes from `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Parse the process arguments into `T`.
///
/// `--help` and `--version` print and exit successfully. Any other parse
/// failure is returned, so `main` reports it and exits with status 1.
///
/// # Errors
///
/// May fail if an argument is missing or malformed.
pub fn parse_args<T: Parser>() -> eyre::Result<T> {
    parse_args_from(std::env::args_os())
}

/// Parse `argv` into `T`, see [`parse_args`].
///
/// # Errors
///
/// May fail if an argument is missing or malformed.
pub fn parse_args_from<T, I, A>(argv: I) -> eyre::Result<T>
where
    T: Parser,
    I: IntoIterator<Item = A>,
    A: Into<OsString> + Clone,
{
    T::try_parse_from(argv).or_else(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => Err(eyre::Report::new(e)),
    })
}
