//! JSON loader for the close-approach catalog.
//!
//! The catalog is a column-oriented JSON document: a `fields` array naming
//! the columns and a `data` array of rows, each row an array of values in
//! field order. Rows are zipped against the field names and only the
//! `des`, `cd`, `dist`, and `v_rel` columns are consumed.

use std::borrow::Cow;

use camino::{Utf8Path, Utf8PathBuf};
use log::warn;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use neoscout_core::{CloseApproach, CloseApproachError};

use crate::fs::open_utf8_file;

/// Top-level shape of the close-approach catalog file.
#[derive(Debug, Deserialize)]
struct ApproachFile {
    fields: Vec<String>,
    #[serde(default)]
    data: Vec<Vec<Value>>,
}

/// Errors returned by [`load_approaches`].
#[derive(Debug, Error)]
pub enum ApproachLoadError {
    /// The JSON file could not be opened.
    #[error("failed to open close-approach catalog at {path}")]
    Open {
        /// Path of the catalog file.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The JSON document could not be decoded.
    #[error("failed to decode close-approach catalog at {path}")]
    Decode {
        /// Path of the catalog file.
        path: Utf8PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },
    /// The `fields` array is missing a required column.
    #[error("close-approach catalog at {path} has no {column:?} column")]
    MissingColumn {
        /// Path of the catalog file.
        path: Utf8PathBuf,
        /// Name of the absent column.
        column: &'static str,
    },
    /// An entry's required fields could not be coerced into an entity.
    #[error("invalid close-approach entry {entry} in {path}")]
    Record {
        /// Path of the catalog file.
        path: Utf8PathBuf,
        /// Zero-based position of the entry in the `data` array.
        entry: usize,
        /// Underlying construction failure.
        #[source]
        source: CloseApproachError,
    },
}

/// Reads the close-approach catalog into entities, preserving file order.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use neoscout_data::load_approaches;
///
/// # fn main() -> Result<(), neoscout_data::ApproachLoadError> {
/// let approaches = load_approaches(Utf8Path::new("data/cad.json"))?;
/// println!("{} close approaches", approaches.len());
/// # Ok(())
/// # }
/// ```
///
/// # Errors
/// Returns an [`ApproachLoadError`] when the file cannot be opened or
/// decoded, when a required column is absent, or when an entry's required
/// fields cannot be parsed.
pub fn load_approaches(path: &Utf8Path) -> Result<Vec<CloseApproach>, ApproachLoadError> {
    let file = open_utf8_file(path).map_err(|source| ApproachLoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ApproachFile =
        serde_json::from_reader(std::io::BufReader::new(file)).map_err(|source| {
            ApproachLoadError::Decode {
                path: path.to_path_buf(),
                source,
            }
        })?;

    let column = |name: &'static str| {
        parsed
            .fields
            .iter()
            .position(|field| field == name)
            .ok_or_else(|| ApproachLoadError::MissingColumn {
                path: path.to_path_buf(),
                column: name,
            })
    };
    let des = column("des")?;
    let cd = column("cd")?;
    let dist = column("dist")?;
    let v_rel = column("v_rel")?;

    let mut approaches = Vec::with_capacity(parsed.data.len());
    for (entry, row) in parsed.data.iter().enumerate() {
        if row.len() != parsed.fields.len() {
            warn!(
                "close-approach entry {entry} has {} values for {} fields",
                row.len(),
                parsed.fields.len()
            );
        }
        let approach = CloseApproach::from_raw(&cell(row, des), &cell(row, cd), &cell(row, dist), &cell(row, v_rel))
            .map_err(|source| ApproachLoadError::Record {
                path: path.to_path_buf(),
                entry,
                source,
            })?;
        approaches.push(approach);
    }
    Ok(approaches)
}

/// Renders one cell of a row as text. Missing cells and non-scalar values
/// become the empty string, which the entity constructors reject when the
/// field is required.
fn cell(row: &[Value], index: usize) -> Cow<'_, str> {
    match row.get(index) {
        Some(Value::String(text)) => Cow::Borrowed(text.as_str()),
        Some(Value::Number(number)) => Cow::Owned(number.to_string()),
        _ => Cow::Borrowed(""),
    }
}
