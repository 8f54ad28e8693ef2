//! The query facade: filtered, capped iteration over close approaches.

use crate::{CloseApproach, Filters, NeoDatabase};

/// Streams the close approaches matching `filters`, in load order, yielding
/// at most `limit` results.
///
/// A `limit` of `None` or `Some(0)` means "no cap". The iterator is lazy:
/// once the cap is reached no further approaches are examined, and nothing
/// is materialised unless the caller collects. Re-invoking the function
/// rescans from the start. Zero matches yield an empty iterator, never an
/// error.
///
/// # Examples
/// ```
/// use neoscout_core::{CloseApproach, Filters, NearEarthObject, NeoDatabase, query};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let db = NeoDatabase::new(
///     vec![NearEarthObject::from_raw("433", "Eros", "16.84", "N")?],
///     vec![
///         CloseApproach::from_raw("433", "1900-12-27 01:30", "0.0114", "14.2")?,
///         CloseApproach::from_raw("433", "1907-01-15 03:41", "0.4186", "20.3")?,
///     ],
/// );
/// let filters = Filters::new().with_max_distance(0.025);
/// let nearest: Vec<_> = query(&db, &filters, Some(1)).collect();
/// assert_eq!(nearest.len(), 1);
/// assert!(nearest.iter().all(|approach| approach.distance <= 0.025));
/// # Ok(())
/// # }
/// ```
pub fn query<'a>(
    database: &'a NeoDatabase,
    filters: &'a Filters,
    limit: Option<usize>,
) -> Box<dyn Iterator<Item = &'a CloseApproach> + 'a> {
    let matching = database
        .approaches()
        .iter()
        .filter(move |approach| filters.matches(approach, database.neo_for(approach)));
    match limit {
        Some(cap) if cap > 0 => Box::new(matching.take(cap)),
        _ => Box::new(matching),
    }
}
