//! Query command: filtered listing of close approaches.

use camino::Utf8PathBuf;
use chrono::NaiveDate;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use neoscout_core::{CloseApproach, Filters, query};
use neoscout_data::load_database;

use crate::output::{self, OutputFormat};
use crate::{ARG_CAD_JSON, ARG_NEO_CSV, CliError, DEFAULT_CAD_JSON, DEFAULT_NEO_CSV};

/// Cap applied when printing to stdout without an explicit --limit.
const DEFAULT_STDOUT_LIMIT: usize = 10;

/// CLI arguments for the `query` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "List close approaches matching the supplied criteria, in \
                 dataset order. Results go to stdout (capped at ten unless \
                 --limit says otherwise) or, with --outfile, to a CSV or \
                 JSON file selected by extension.",
    about = "Query close approaches matching filter criteria"
)]
#[ortho_config(prefix = "NEOSCOUT")]
pub(crate) struct QueryArgs {
    /// Path to the NEO CSV catalog.
    #[arg(long = ARG_NEO_CSV, value_name = "path")]
    #[serde(default)]
    pub(crate) neo_csv: Option<Utf8PathBuf>,
    /// Path to the close-approach JSON catalog.
    #[arg(long = ARG_CAD_JSON, value_name = "path")]
    #[serde(default)]
    pub(crate) cad_json: Option<Utf8PathBuf>,
    /// Only approaches on exactly this day.
    #[arg(long, value_name = "YYYY-MM-DD")]
    #[serde(default)]
    pub(crate) date: Option<NaiveDate>,
    /// Only approaches on or after this day.
    #[arg(long, value_name = "YYYY-MM-DD")]
    #[serde(default)]
    pub(crate) start_date: Option<NaiveDate>,
    /// Only approaches on or before this day.
    #[arg(long, value_name = "YYYY-MM-DD")]
    #[serde(default)]
    pub(crate) end_date: Option<NaiveDate>,
    /// Only approaches at least this far away, in au.
    #[arg(long, value_name = "au")]
    #[serde(default)]
    pub(crate) min_distance: Option<f64>,
    /// Only approaches at most this far away, in au.
    #[arg(long, value_name = "au")]
    #[serde(default)]
    pub(crate) max_distance: Option<f64>,
    /// Only approaches at least this fast, in km/s.
    #[arg(long, value_name = "km/s")]
    #[serde(default)]
    pub(crate) min_velocity: Option<f64>,
    /// Only approaches at most this fast, in km/s.
    #[arg(long, value_name = "km/s")]
    #[serde(default)]
    pub(crate) max_velocity: Option<f64>,
    /// Only approaches of NEOs at least this large, in km.
    #[arg(long, value_name = "km")]
    #[serde(default)]
    pub(crate) min_diameter: Option<f64>,
    /// Only approaches of NEOs at most this large, in km.
    #[arg(long, value_name = "km")]
    #[serde(default)]
    pub(crate) max_diameter: Option<f64>,
    /// Only approaches of potentially hazardous NEOs.
    #[arg(long, conflicts_with = "not_hazardous")]
    #[serde(default)]
    pub(crate) hazardous: bool,
    /// Only approaches of NEOs that are not potentially hazardous.
    #[arg(long)]
    #[serde(default)]
    pub(crate) not_hazardous: bool,
    /// Maximum number of results; zero or negative means unlimited.
    #[arg(long, value_name = "n")]
    #[serde(default)]
    pub(crate) limit: Option<i64>,
    /// Write results to this file instead of stdout (.csv or .json).
    #[arg(long, value_name = "path")]
    #[serde(default)]
    pub(crate) outfile: Option<Utf8PathBuf>,
}

impl QueryArgs {
    pub(crate) fn into_config(self) -> Result<QueryConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        QueryConfig::try_from(merged)
    }
}

/// Resolved `query` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct QueryConfig {
    pub(crate) neo_csv: Utf8PathBuf,
    pub(crate) cad_json: Utf8PathBuf,
    pub(crate) filters: Filters,
    pub(crate) limit: Option<usize>,
    pub(crate) output: Option<(Utf8PathBuf, OutputFormat)>,
}

impl TryFrom<QueryArgs> for QueryConfig {
    type Error = CliError;

    fn try_from(args: QueryArgs) -> Result<Self, Self::Error> {
        let filters = filters_from(&args);
        let output = match args.outfile {
            Some(path) => {
                let format = output::output_format(&path)
                    .ok_or_else(|| CliError::UnsupportedOutfile { path: path.clone() })?;
                Some((path, format))
            }
            None => None,
        };
        let limit = effective_limit(args.limit, output.is_some());
        Ok(Self {
            neo_csv: args.neo_csv.unwrap_or_else(|| DEFAULT_NEO_CSV.into()),
            cad_json: args.cad_json.unwrap_or_else(|| DEFAULT_CAD_JSON.into()),
            filters,
            limit,
            output,
        })
    }
}

/// Translates the optional flags into filter criteria, one per supplied
/// option.
pub(crate) fn filters_from(args: &QueryArgs) -> Filters {
    let mut filters = Filters::new();
    if let Some(date) = args.date {
        filters = filters.with_date(date);
    }
    if let Some(date) = args.start_date {
        filters = filters.with_start_date(date);
    }
    if let Some(date) = args.end_date {
        filters = filters.with_end_date(date);
    }
    if let Some(au) = args.min_distance {
        filters = filters.with_min_distance(au);
    }
    if let Some(au) = args.max_distance {
        filters = filters.with_max_distance(au);
    }
    if let Some(km_s) = args.min_velocity {
        filters = filters.with_min_velocity(km_s);
    }
    if let Some(km_s) = args.max_velocity {
        filters = filters.with_max_velocity(km_s);
    }
    if let Some(km) = args.min_diameter {
        filters = filters.with_min_diameter(km);
    }
    if let Some(km) = args.max_diameter {
        filters = filters.with_max_diameter(km);
    }
    if args.hazardous {
        filters = filters.with_hazardous(true);
    } else if args.not_hazardous {
        filters = filters.with_hazardous(false);
    }
    filters
}

/// Resolves the result cap: explicit positive limits win, non-positive
/// limits disable the cap, and stdout output defaults to a small page.
pub(crate) fn effective_limit(limit: Option<i64>, writing_to_file: bool) -> Option<usize> {
    match limit {
        Some(n) if n > 0 => Some(usize::try_from(n).unwrap_or(usize::MAX)),
        Some(_) => None,
        None if writing_to_file => None,
        None => Some(DEFAULT_STDOUT_LIMIT),
    }
}

pub(crate) fn run(args: QueryArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let db = load_database(&config.neo_csv, &config.cad_json)?;
    let results: Vec<&CloseApproach> = query(&db, &config.filters, config.limit).collect();
    match &config.output {
        None => {
            for approach in &results {
                println!("{}", output::describe(&db, approach));
            }
        }
        Some((path, OutputFormat::Csv)) => output::write_csv(&db, &results, path)?,
        Some((path, OutputFormat::Json)) => output::write_json(&db, &results, path)?,
    }
    Ok(())
}
