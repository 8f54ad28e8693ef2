//! Command-line interface for the neoscout close-approach explorer.
//!
//! Two subcommands are exposed: `inspect` looks up a single near-Earth
//! object by designation or name, and `query` streams the close approaches
//! matching a set of filters to stdout or to a CSV/JSON outfile. Dataset
//! paths can come from CLI flags, configuration files, or `NEOSCOUT_*`
//! environment variables.

#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod inspect;
mod output;
mod query;
#[cfg(test)]
mod tests;

pub use error::CliError;

pub(crate) const ARG_NEO_CSV: &str = "neo-csv";
pub(crate) const ARG_CAD_JSON: &str = "cad-json";

/// Default location of the NEO CSV catalog, relative to the working
/// directory.
pub(crate) const DEFAULT_NEO_CSV: &str = "data/neos.csv";
/// Default location of the close-approach JSON catalog.
pub(crate) const DEFAULT_CAD_JSON: &str = "data/cad.json";

/// Run the neoscout CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when argument parsing, configuration merging,
/// loading, or output writing fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Inspect(args) => inspect::run(args),
        Command::Query(args) => query::run(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "neoscout",
    about = "Explore near-Earth objects and their close approaches to Earth",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Inspect a single near-Earth object, by designation or by name.
    Inspect(inspect::InspectArgs),
    /// List close approaches matching a set of filter criteria.
    Query(query::QueryArgs),
}
