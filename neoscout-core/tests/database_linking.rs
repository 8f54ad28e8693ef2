//! Behaviour tests for database construction, indexing, and linking.

use rstest::{fixture, rstest};

use neoscout_core::{CloseApproach, NearEarthObject, NeoDatabase};

#[fixture]
fn database() -> NeoDatabase {
    let neos = [
        ("433", "Eros", "16.84", "N"),
        ("2101", "Adonis", "0.60", "Y"),
        ("2010 PK9", "", "", "Y"),
    ]
    .into_iter()
    .map(|(designation, name, diameter, hazardous)| {
        NearEarthObject::from_raw(designation, name, diameter, hazardous).expect("valid NEO row")
    })
    .collect();
    let approaches = [
        ("433", "1900-12-27 01:30", "0.0114", "14.2"),
        ("2101", "2006-02-08 05:40", "0.3413", "24.5"),
        ("433", "1907-01-15 03:41", "0.4186", "20.3"),
        ("9999", "2020-01-01 00:00", "0.0500", "10.0"),
    ]
    .into_iter()
    .map(|(designation, time, distance, velocity)| {
        CloseApproach::from_raw(designation, time, distance, velocity).expect("valid approach row")
    })
    .collect();
    NeoDatabase::new(neos, approaches)
}

#[rstest]
fn worked_example_links_eros_both_ways(database: NeoDatabase) {
    let eros = database
        .get_neo_by_designation("433")
        .expect("Eros is loaded");
    assert_eq!(eros.name.as_deref(), Some("Eros"));

    let linked: Vec<_> = database.approaches_of(eros).collect();
    assert_eq!(linked.len(), 2);
    let first = linked.first().expect("Eros has approaches");
    assert_eq!(first.time_str(), "1900-12-27 01:30");
    assert_eq!(
        database.neo_for(first).map(|neo| neo.name.as_deref()),
        Some(Some("Eros"))
    );
}

#[rstest]
fn linked_approaches_keep_load_order(database: NeoDatabase) {
    let eros = database
        .get_neo_by_designation("433")
        .expect("Eros is loaded");
    let times: Vec<_> = database
        .approaches_of(eros)
        .map(CloseApproach::time_str)
        .collect();
    assert_eq!(times, ["1900-12-27 01:30", "1907-01-15 03:41"]);
}

#[rstest]
fn every_matching_approach_is_linked_exactly_once(database: NeoDatabase) {
    for approach in database.approaches() {
        match database.neo_for(approach) {
            Some(neo) => {
                assert_eq!(neo.designation, approach.designation);
                let occurrences = database
                    .approaches_of(neo)
                    .filter(|linked| std::ptr::eq(*linked, approach))
                    .count();
                assert_eq!(occurrences, 1);
            }
            None => assert_eq!(approach.designation, "9999"),
        }
    }
}

#[rstest]
fn orphan_approaches_appear_in_no_neo(database: NeoDatabase) {
    for neo in database.neos() {
        assert!(database.approaches_of(neo).all(|a| a.designation != "9999"));
    }
}

#[rstest]
#[case("433", true)]
#[case("2101", true)]
#[case("9999", false)]
#[case("eros", false)]
#[case("", false)]
fn designation_lookup_is_exact(
    database: NeoDatabase,
    #[case] designation: &str,
    #[case] found: bool,
) {
    assert_eq!(
        database.get_neo_by_designation(designation).is_some(),
        found
    );
}

#[rstest]
#[case("Eros", Some("433"))]
#[case("Adonis", Some("2101"))]
#[case("eros", None)]
#[case("Halley", None)]
#[case("", None)]
fn name_lookup_is_exact_and_skips_unnamed(
    database: NeoDatabase,
    #[case] name: &str,
    #[case] expected: Option<&str>,
) {
    assert_eq!(
        database
            .get_neo_by_name(name)
            .map(|neo| neo.designation.as_str()),
        expected
    );
}

#[rstest]
fn unnamed_neos_are_still_reachable_by_designation(database: NeoDatabase) {
    let unnamed = database
        .get_neo_by_designation("2010 PK9")
        .expect("unnamed NEO is loaded");
    assert!(unnamed.name.is_none());
    assert!(unnamed.hazardous);
}
