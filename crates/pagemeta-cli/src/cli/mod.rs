//! CLI for pagemeta.
//!
//! `run` is the whole pipeline and only returns a `Result`; `execute` maps it
//! to output streams and an exit status, and `run_from_args` binds those to
//! the real process.

mod payload;

use clap::error::ErrorKind;
use clap::Parser;
use pagemeta_core::{
    fetch_metadata, parse_target, FetchConfig, FetchError, PageMetadata, TargetUrlError,
};
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;
use thiserror::Error;

pub use payload::ErrorPayload;

/// Fetch a web page and print its title and meta description as JSON.
#[derive(Debug, Parser)]
#[command(name = "pagemeta", version)]
#[command(about = "Print a web page's title and meta description as JSON", long_about = None)]
pub struct Cli {
    /// Absolute http:// or https:// URL of the page.
    pub url: Option<String>,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Please provide a URL as an argument.")]
    MissingArgument,
    #[error(transparent)]
    InvalidUrl(#[from] TargetUrlError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("fetch task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Validates the URL, fetches the page on a blocking thread and extracts metadata.
pub async fn run(url: Option<String>, config: &FetchConfig) -> Result<PageMetadata, CliError> {
    let raw = url.ok_or(CliError::MissingArgument)?;
    let target = parse_target(&raw)?;
    tracing::info!("fetching metadata for url={}", target);

    let meta = tokio::task::spawn_blocking({
        let config = config.clone();
        move || fetch_metadata(&target, &config)
    })
    .await??;
    Ok(meta)
}

/// Exit status for success.
pub const EXIT_OK: u8 = 0;
/// Exit status for any failure (usage, invalid URL, fetch).
pub const EXIT_FAILURE: u8 = 1;

/// Process entry: real argv, stdout and stderr.
pub async fn run_from_args() -> ExitCode {
    let status = execute(
        std::env::args_os(),
        &FetchConfig::default(),
        &mut io::stdout(),
        &mut io::stderr(),
    )
    .await;
    ExitCode::from(status)
}

/// Parses `args`, runs, and writes either the metadata to `out` or an error
/// payload to `err`. Returns the process exit status.
pub async fn execute<I, T, O, E>(args: I, config: &FetchConfig, out: &mut O, err: &mut E) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write,
    E: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_ok() {
                        EXIT_OK
                    } else {
                        EXIT_FAILURE
                    }
                }
                _ => fail(ErrorPayload::usage(&e), err),
            };
        }
    };

    match run(cli.url, config).await {
        Ok(meta) => match meta.to_pretty_json() {
            Ok(json) => match writeln!(out, "{}", json) {
                Ok(()) => EXIT_OK,
                Err(e) => fail(
                    ErrorPayload::new("Failed to write metadata").with_details(e),
                    err,
                ),
            },
            Err(e) => fail(
                ErrorPayload::new("Failed to serialize metadata").with_details(e),
                err,
            ),
        },
        Err(e) => {
            tracing::warn!("pagemeta failed: {}", e);
            fail(ErrorPayload::from(&e), err)
        }
    }
}

fn fail<E: Write>(payload: ErrorPayload, err: &mut E) -> u8 {
    if let Err(e) = payload.write_to(err) {
        tracing::error!("failed to write error payload: {:#}", e);
    }
    EXIT_FAILURE
}

#[cfg(test)]
mod tests;
