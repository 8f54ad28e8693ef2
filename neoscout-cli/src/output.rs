//! Result rendering: stdout lines and the CSV/JSON outfile writers.
//!
//! Both writers emit one record per close approach with the linked NEO's
//! fields flattened in (CSV) or nested (JSON). Orphan approaches are
//! rendered with an empty name, an unknown diameter, and a false hazard
//! flag rather than being dropped.

use std::fs::File;
use std::io::BufWriter;

use camino::Utf8Path;
use serde::Serialize;

use neoscout_core::{CloseApproach, NearEarthObject, NeoDatabase};

use crate::CliError;

/// Writers selectable through the outfile extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    /// Flat rows with the CSV header the original datasets use downstream.
    Csv,
    /// An array of objects with the NEO nested under a `neo` key.
    Json,
}

/// Selects a writer from the outfile extension, case-sensitively.
pub(crate) fn output_format(path: &Utf8Path) -> Option<OutputFormat> {
    match path.extension() {
        Some("csv") => Some(OutputFormat::Csv),
        Some("json") => Some(OutputFormat::Json),
        _ => None,
    }
}

/// One close approach as a human-readable sentence, naming the linked NEO
/// when there is one.
pub(crate) fn describe(db: &NeoDatabase, approach: &CloseApproach) -> String {
    let label = db
        .neo_for(approach)
        .map_or_else(|| approach.designation.clone(), NearEarthObject::fullname);
    format!(
        "On {}, '{label}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
        approach.time_str(),
        approach.distance,
        approach.velocity
    )
}

const CSV_HEADER: [&str; 7] = [
    "datetime_utc",
    "distance_au",
    "velocity_km_s",
    "designation",
    "name",
    "diameter_km",
    "potentially_hazardous",
];

/// Writes the results as CSV rows under [`CSV_HEADER`].
pub(crate) fn write_csv(
    db: &NeoDatabase,
    results: &[&CloseApproach],
    path: &Utf8Path,
) -> Result<(), CliError> {
    let write_error = |source| CliError::WriteCsv {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(write_error)?;
    writer.write_record(CSV_HEADER).map_err(write_error)?;
    for approach in results {
        let neo = db.neo_for(approach);
        writer
            .write_record([
                approach.time_str(),
                approach.distance.to_string(),
                approach.velocity.to_string(),
                approach.designation.clone(),
                neo.and_then(|n| n.name.clone()).unwrap_or_default(),
                neo.map_or(f64::NAN, |n| n.diameter).to_string(),
                neo.is_some_and(|n| n.hazardous).to_string(),
            ])
            .map_err(write_error)?;
    }
    writer.flush().map_err(|source| CliError::CreateOutfile {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Serialize)]
struct NeoRecord<'a> {
    designation: &'a str,
    name: &'a str,
    diameter_km: f64,
    potentially_hazardous: bool,
}

#[derive(Serialize)]
struct ApproachRecord<'a> {
    datetime_utc: String,
    distance_au: f64,
    velocity_km_s: f64,
    neo: NeoRecord<'a>,
}

/// Writes the results as a JSON array with nested NEO objects. Unknown
/// diameters serialize as `null`.
pub(crate) fn write_json(
    db: &NeoDatabase,
    results: &[&CloseApproach],
    path: &Utf8Path,
) -> Result<(), CliError> {
    let records: Vec<ApproachRecord<'_>> = results
        .iter()
        .map(|approach| {
            let neo = db.neo_for(approach);
            ApproachRecord {
                datetime_utc: approach.time_str(),
                distance_au: approach.distance,
                velocity_km_s: approach.velocity,
                neo: NeoRecord {
                    designation: neo
                        .map_or(approach.designation.as_str(), |n| n.designation.as_str()),
                    name: neo.and_then(|n| n.name.as_deref()).unwrap_or_default(),
                    diameter_km: neo.map_or(f64::NAN, |n| n.diameter),
                    potentially_hazardous: neo.is_some_and(|n| n.hazardous),
                },
            }
        })
        .collect();

    let file = File::create(path).map_err(|source| CliError::CreateOutfile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), &records).map_err(|source| {
        CliError::SerializeResults {
            path: path.to_path_buf(),
            source,
        }
    })
}
