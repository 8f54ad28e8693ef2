//! Test-only sample dataset used by unit and integration tests.
//!
//! The sample mirrors the shape of the real catalogs in miniature: a named
//! NEO with several approaches, a hazardous named NEO, unnamed objects with
//! unknown diameters, and one orphan approach whose designation matches no
//! loaded NEO.

use crate::{CloseApproach, NearEarthObject, NeoDatabase};

/// A small NEO catalog in load order.
///
/// # Panics
/// Panics if the hard-coded sample rows are malformed; they are fixed at
/// compile time.
#[must_use]
pub fn sample_neos() -> Vec<NearEarthObject> {
    [
        ("433", "Eros", "16.84", "N"),
        ("2101", "Adonis", "0.60", "Y"),
        ("2010 PK9", "", "", "Y"),
        ("2020 AY1", "", "", "N"),
    ]
    .into_iter()
    .map(|(designation, name, diameter, hazardous)| {
        NearEarthObject::from_raw(designation, name, diameter, hazardous)
            .expect("sample NEO rows are well-formed")
    })
    .collect()
}

/// A small close-approach catalog in load order. The final entry is an
/// orphan: designation `"9999"` matches no NEO in [`sample_neos`].
///
/// # Panics
/// Panics if the hard-coded sample rows are malformed; they are fixed at
/// compile time.
#[must_use]
pub fn sample_approaches() -> Vec<CloseApproach> {
    [
        ("433", "1900-12-27 01:30", "0.0114", "14.2"),
        ("2101", "2006-02-08 05:40", "0.3413", "24.5"),
        ("433", "1907-01-15 03:41", "0.4186", "20.3"),
        ("2010 PK9", "2015-07-17 22:51", "0.1126", "18.9"),
        ("9999", "2020-01-01 00:00", "0.0500", "10.0"),
    ]
    .into_iter()
    .map(|(designation, time, distance, velocity)| {
        CloseApproach::from_raw(designation, time, distance, velocity)
            .expect("sample approach rows are well-formed")
    })
    .collect()
}

/// A linked database over [`sample_neos`] and [`sample_approaches`].
#[must_use]
pub fn sample_database() -> NeoDatabase {
    NeoDatabase::new(sample_neos(), sample_approaches())
}
