//! Flat-file loaders for the neoscout close-approach engine.
//!
//! Two catalogs feed the engine: a CSV file of near-Earth objects and a
//! JSON file of close approaches. The loaders here turn those files into
//! [`neoscout_core`] entities and hand them to the
//! [`NeoDatabase`](neoscout_core::NeoDatabase) for indexing and linking.
//!
//! Error policy: a file that cannot be opened or decoded, or a record whose
//! required fields cannot be coerced, aborts the load with an error naming
//! the path and the offending row or entry. Recoverable oddities (a JSON
//! row with the wrong arity) are logged and tolerated as far as possible.

#![forbid(unsafe_code)]

use camino::Utf8Path;
use thiserror::Error;

use neoscout_core::NeoDatabase;

mod approaches;
mod fs;
mod neos;

pub use approaches::{ApproachLoadError, load_approaches};
pub use neos::{NeoLoadError, load_neos};

/// Errors returned by [`load_database`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// Loading the NEO CSV catalog failed.
    #[error(transparent)]
    Neo(#[from] NeoLoadError),
    /// Loading the close-approach JSON catalog failed.
    #[error(transparent)]
    Approach(#[from] ApproachLoadError),
}

/// Loads both catalogs and builds the linked, indexed database.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use neoscout_data::load_database;
///
/// # fn main() -> Result<(), neoscout_data::LoadError> {
/// let db = load_database(
///     Utf8Path::new("data/neos.csv"),
///     Utf8Path::new("data/cad.json"),
/// )?;
/// println!("{} NEOs loaded", db.neos().len());
/// # Ok(())
/// # }
/// ```
///
/// # Errors
/// Returns a [`LoadError`] when either catalog cannot be read.
pub fn load_database(neo_path: &Utf8Path, cad_path: &Utf8Path) -> Result<NeoDatabase, LoadError> {
    let neos = load_neos(neo_path)?;
    let approaches = load_approaches(cad_path)?;
    log::debug!(
        "loaded {} NEOs and {} close approaches",
        neos.len(),
        approaches.len()
    );
    Ok(NeoDatabase::new(neos, approaches))
}
