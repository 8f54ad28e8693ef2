//! Behaviour tests for the query facade over a linked database.

use chrono::NaiveDate;
use rstest::{fixture, rstest};

use neoscout_core::{CloseApproach, Filters, NearEarthObject, NeoDatabase, query};

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
        ("2010 PK9", "2015-07-17 22:51", "0.1126", "18.9"),
        ("9999", "2020-01-01 00:00", "0.0500", "10.0"),
    ]
    .into_iter()
    .map(|(designation, time, distance, velocity)| {
        CloseApproach::from_raw(designation, time, distance, velocity).expect("valid approach row")
    })
    .collect();
    NeoDatabase::new(neos, approaches)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

#[rstest]
fn no_filters_and_no_cap_yields_everything_in_load_order(database: NeoDatabase) {
    let filters = Filters::new();
    let all: Vec<_> = query(&database, &filters, None).collect();
    assert_eq!(all.len(), database.approaches().len());
    for (result, loaded) in all.iter().zip(database.approaches()) {
        assert!(std::ptr::eq(*result, loaded));
    }
}

#[rstest]
fn limit_caps_the_result_count(database: NeoDatabase) {
    let filters = Filters::new().with_max_distance(0.025);
    let nearest: Vec<_> = query(&database, &filters, Some(1)).collect();
    assert_eq!(nearest.len(), 1);
    assert!(nearest.iter().all(|approach| approach.distance <= 0.025));
}

#[rstest]
#[case(None)]
#[case(Some(0))]
fn absent_or_zero_limit_means_no_cap(database: NeoDatabase, #[case] limit: Option<usize>) {
    let filters = Filters::new();
    assert_eq!(
        query(&database, &filters, limit).count(),
        database.approaches().len()
    );
}

#[rstest]
fn hazardous_filter_returns_only_linked_hazardous_neos(database: NeoDatabase) {
    let filters = Filters::new().with_hazardous(true);
    let results: Vec<_> = query(&database, &filters, None).collect();
    assert!(!results.is_empty());
    for approach in results {
        let neo = database
            .neo_for(approach)
            .expect("hazardous results are linked");
        assert!(neo.hazardous);
    }
}

#[rstest]
fn date_window_selects_the_expected_approaches(database: NeoDatabase) {
    let filters = Filters::new()
        .with_start_date(date(1900, 1, 1))
        .with_end_date(date(1910, 12, 31));
    let designations: Vec<_> = query(&database, &filters, None)
        .map(|approach| approach.designation.as_str())
        .collect();
    assert_eq!(designations, ["433", "433"]);
}

#[rstest]
fn exact_date_matches_any_time_of_day(database: NeoDatabase) {
    let filters = Filters::new().with_date(date(2015, 7, 17));
    let results: Vec<_> = query(&database, &filters, None).collect();
    assert_eq!(results.len(), 1);
    assert_eq!(
        results.first().map(|a| a.designation.as_str()),
        Some("2010 PK9")
    );
}

#[rstest]
fn diameter_bounds_exclude_orphans_and_unknown_sizes(database: NeoDatabase) {
    let filters = Filters::new().with_min_diameter(0.0);
    let designations: Vec<_> = query(&database, &filters, None)
        .map(|approach| approach.designation.as_str())
        .collect();
    // 2010 PK9 has an unknown diameter and 9999 is an orphan; both fail.
    assert_eq!(designations, ["433", "2101", "433"]);
}

#[rstest]
fn unsatisfiable_filters_yield_an_empty_sequence(database: NeoDatabase) {
    let filters = Filters::new().with_min_distance(10.0);
    assert_eq!(query(&database, &filters, None).count(), 0);
}

#[rstest]
fn rescanning_restarts_from_the_beginning(database: NeoDatabase) {
    let filters = Filters::new().with_hazardous(true);
    let first: Vec<_> = query(&database, &filters, Some(1)).collect();
    let second: Vec<_> = query(&database, &filters, Some(1)).collect();
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert!(std::ptr::eq(
        *first.first().expect("one result"),
        *second.first().expect("one result")
    ));
}

#[rstest]
fn compound_filters_apply_every_criterion(database: NeoDatabase) {
    let filters = Filters::new()
        .with_hazardous(true)
        .with_max_distance(0.2)
        .with_min_velocity(15.0);
    let designations: Vec<_> = query(&database, &filters, None)
        .map(|approach| approach.designation.as_str())
        .collect();
    assert_eq!(designations, ["2010 PK9"]);
}
