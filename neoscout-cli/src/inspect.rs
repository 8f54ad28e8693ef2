//! Inspect command: look up one NEO and optionally its approaches.

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use neoscout_data::load_database;

use crate::{ARG_CAD_JSON, ARG_NEO_CSV, CliError, DEFAULT_CAD_JSON, DEFAULT_NEO_CSV, output};

/// CLI arguments for the `inspect` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Look up a single near-Earth object by primary designation \
                 or by IAU name and print what the dataset knows about it. \
                 With --verbose, every close approach on record is listed \
                 as well.",
    about = "Inspect a single near-Earth object"
)]
#[ortho_config(prefix = "NEOSCOUT")]
pub(crate) struct InspectArgs {
    /// Path to the NEO CSV catalog.
    #[arg(long = ARG_NEO_CSV, value_name = "path")]
    #[serde(default)]
    pub(crate) neo_csv: Option<Utf8PathBuf>,
    /// Path to the close-approach JSON catalog.
    #[arg(long = ARG_CAD_JSON, value_name = "path")]
    #[serde(default)]
    pub(crate) cad_json: Option<Utf8PathBuf>,
    /// Primary designation to look up. Takes precedence over --name.
    #[arg(long, value_name = "designation")]
    #[serde(default)]
    pub(crate) pdes: Option<String>,
    /// IAU name to look up.
    #[arg(long, value_name = "name")]
    #[serde(default)]
    pub(crate) name: Option<String>,
    /// Also list every close approach of the matched object.
    #[arg(long)]
    #[serde(default)]
    pub(crate) verbose: bool,
}

impl InspectArgs {
    pub(crate) fn into_config(self) -> Result<InspectConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        InspectConfig::try_from(merged)
    }
}

/// The lookup key for an inspect run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InspectTarget {
    /// Exact primary-designation match.
    Designation(String),
    /// Exact IAU-name match.
    Name(String),
}

/// Resolved `inspect` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InspectConfig {
    pub(crate) neo_csv: Utf8PathBuf,
    pub(crate) cad_json: Utf8PathBuf,
    pub(crate) target: InspectTarget,
    pub(crate) verbose: bool,
}

impl TryFrom<InspectArgs> for InspectConfig {
    type Error = CliError;

    fn try_from(args: InspectArgs) -> Result<Self, Self::Error> {
        let target = match (args.pdes, args.name) {
            (Some(designation), _) => InspectTarget::Designation(designation),
            (None, Some(name)) => InspectTarget::Name(name),
            (None, None) => return Err(CliError::MissingInspectTarget),
        };
        Ok(Self {
            neo_csv: args.neo_csv.unwrap_or_else(|| DEFAULT_NEO_CSV.into()),
            cad_json: args.cad_json.unwrap_or_else(|| DEFAULT_CAD_JSON.into()),
            target,
            verbose: args.verbose,
        })
    }
}

pub(crate) fn run(args: InspectArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let db = load_database(&config.neo_csv, &config.cad_json)?;
    let neo = match &config.target {
        InspectTarget::Designation(designation) => db.get_neo_by_designation(designation),
        InspectTarget::Name(name) => db.get_neo_by_name(name),
    };
    match neo {
        Some(neo) => {
            println!("{neo}.");
            if config.verbose {
                for approach in db.approaches_of(neo) {
                    println!("- {}", output::describe(&db, approach));
                }
            }
        }
        // A miss is an answer, not a failure: report it and exit cleanly.
        None => println!("No matching NEO found in the dataset."),
    }
    Ok(())
}
