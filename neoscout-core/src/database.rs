//! The in-memory database joining the two catalogs.
//!
//! [`NeoDatabase`] is the sole owner of both entity collections. The two
//! directions of the NEO/approach association are stored as indices into
//! those collections rather than as owning pointers, which keeps ownership
//! unambiguous and the whole structure safely shareable between readers.

use std::collections::HashMap;

use crate::{CloseApproach, NearEarthObject};

/// An indexed, linked snapshot of the NEO and close-approach catalogs.
///
/// Construction builds a designation index and a name index over the NEOs
/// and performs a single linking pass over the approaches: one index probe
/// per approach, never a scan of the NEO list. After construction the
/// database is read-only; lookups may be issued freely from any number of
/// readers.
///
/// # Examples
/// ```
/// use neoscout_core::{CloseApproach, NearEarthObject, NeoDatabase};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let neos = vec![NearEarthObject::from_raw("433", "Eros", "16.84", "N")?];
/// let approaches = vec![CloseApproach::from_raw("433", "1900-12-27 01:30", "0.0114", "14.2")?];
/// let db = NeoDatabase::new(neos, approaches);
///
/// let eros = db.get_neo_by_designation("433").expect("Eros is loaded");
/// assert_eq!(db.approaches_of(eros).count(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct NeoDatabase {
    neos: Vec<NearEarthObject>,
    approaches: Vec<CloseApproach>,
    by_designation: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl NeoDatabase {
    /// Builds the database from the two entity collections, preserving load
    /// order, and links each approach to its NEO.
    ///
    /// Approaches whose designation matches no loaded NEO stay unlinked;
    /// that is valid data, not an error. Should the input contain duplicate
    /// designations or names, the first occurrence wins in the indices.
    #[must_use]
    pub fn new(mut neos: Vec<NearEarthObject>, mut approaches: Vec<CloseApproach>) -> Self {
        let mut by_designation = HashMap::with_capacity(neos.len());
        let mut by_name = HashMap::new();
        for (index, neo) in neos.iter().enumerate() {
            by_designation
                .entry(neo.designation.clone())
                .or_insert(index);
            if let Some(name) = neo.name.as_ref().filter(|name| !name.is_empty()) {
                by_name.entry(name.clone()).or_insert(index);
            }
        }

        for (index, approach) in approaches.iter_mut().enumerate() {
            let Some(&neo_index) = by_designation.get(&approach.designation) else {
                continue;
            };
            approach.neo = Some(neo_index);
            if let Some(neo) = neos.get_mut(neo_index) {
                neo.approaches.push(index);
            }
        }

        Self {
            neos,
            approaches,
            by_designation,
            by_name,
        }
    }

    /// Finds the NEO with exactly this designation.
    ///
    /// The match is case-sensitive with no normalisation. Unknown
    /// designations return `None`, never an error.
    #[must_use]
    pub fn get_neo_by_designation(&self, designation: &str) -> Option<&NearEarthObject> {
        self.by_designation
            .get(designation)
            .and_then(|&index| self.neos.get(index))
    }

    /// Finds the NEO with exactly this IAU name.
    ///
    /// The match is case-sensitive. Unnamed NEOs are never returned, even
    /// when queried with an empty string. Unknown names return `None`,
    /// never an error.
    #[must_use]
    pub fn get_neo_by_name(&self, name: &str) -> Option<&NearEarthObject> {
        self.by_name
            .get(name)
            .and_then(|&index| self.neos.get(index))
    }

    /// All loaded NEOs, in load order.
    #[must_use]
    pub fn neos(&self) -> &[NearEarthObject] {
        &self.neos
    }

    /// All loaded close approaches, in load order.
    #[must_use]
    pub fn approaches(&self) -> &[CloseApproach] {
        &self.approaches
    }

    /// Resolves an approach's back-reference to its owning NEO.
    ///
    /// Returns `None` for orphan approaches whose designation matched no
    /// loaded NEO.
    #[must_use]
    pub fn neo_for(&self, approach: &CloseApproach) -> Option<&NearEarthObject> {
        approach.neo_index().and_then(|index| self.neos.get(index))
    }

    /// Iterates an NEO's close approaches in load order.
    pub fn approaches_of<'a>(
        &'a self,
        neo: &'a NearEarthObject,
    ) -> impl Iterator<Item = &'a CloseApproach> + 'a {
        neo.approach_indices()
            .iter()
            .filter_map(move |&index| self.approaches.get(index))
    }
}
