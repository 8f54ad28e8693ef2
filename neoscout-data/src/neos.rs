//! CSV loader for the near-Earth object catalog.
//!
//! The catalog is a wide CSV file; only the `pdes`, `name`, `diameter`, and
//! `pha` columns matter here and every other column is ignored. Optional
//! columns may be blank on any row.

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use thiserror::Error;

use neoscout_core::{NearEarthObject, NearEarthObjectError};

use crate::fs::open_utf8_file;

/// The catalog columns consumed by the loader.
#[derive(Debug, Deserialize)]
struct NeoRow {
    pdes: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    diameter: String,
    #[serde(default)]
    pha: String,
}

/// Errors returned by [`load_neos`].
#[derive(Debug, Error)]
pub enum NeoLoadError {
    /// The CSV file could not be opened.
    #[error("failed to open NEO catalog at {path}")]
    Open {
        /// Path of the catalog file.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// A CSV record could not be read or deserialized.
    #[error("failed to read NEO catalog at {path}")]
    Parse {
        /// Path of the catalog file.
        path: Utf8PathBuf,
        /// Underlying CSV failure, including the record position.
        #[source]
        source: csv::Error,
    },
    /// A record's required fields could not be coerced into an entity.
    #[error("invalid NEO record {row} in {path}")]
    Record {
        /// Path of the catalog file.
        path: Utf8PathBuf,
        /// One-based data-record number, excluding the header.
        row: usize,
        /// Underlying construction failure.
        #[source]
        source: NearEarthObjectError,
    },
}

/// Reads the NEO catalog into entities, preserving file order.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use neoscout_data::load_neos;
///
/// # fn main() -> Result<(), neoscout_data::NeoLoadError> {
/// let neos = load_neos(Utf8Path::new("data/neos.csv"))?;
/// println!("{} NEOs", neos.len());
/// # Ok(())
/// # }
/// ```
///
/// # Errors
/// Returns a [`NeoLoadError`] when the file cannot be opened or decoded, or
/// when a record has an empty designation.
pub fn load_neos(path: &Utf8Path) -> Result<Vec<NearEarthObject>, NeoLoadError> {
    let file = open_utf8_file(path).map_err(|source| NeoLoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);
    let mut neos = Vec::new();
    for (index, record) in reader.deserialize::<NeoRow>().enumerate() {
        let record = record.map_err(|source| NeoLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let neo = NearEarthObject::from_raw(&record.pdes, &record.name, &record.diameter, &record.pha)
            .map_err(|source| NeoLoadError::Record {
                path: path.to_path_buf(),
                row: index + 1,
                source,
            })?;
        neos.push(neo);
    }
    Ok(neos)
}
