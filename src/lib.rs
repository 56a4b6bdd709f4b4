//! Development tasks for the vinyl server.
//!
//! Four tasks, each a short sequence of steps that stops at the first
//! failure:
//!
//! - `start`: run the server.
//! - `proto`: regenerate gRPC code from the protobuf definitions.
//! - `race`: race-enabled tests, then drop generated code from the coverage profile.
//! - `mock`: run `mockery` in every package below `internal/`.
//!
//! External programs and the filesystem are reached only through the
//! traits in [`ports`], with explicit working directories.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod context;
pub mod coverage;
pub mod error;
pub mod layout;
pub mod ports;
pub mod walk;

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// `--help` and `--version` print to stdout and succeed without running a
/// task.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or the task fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return err.print().map_err(|e| e.to_string());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(cli.task)
}
