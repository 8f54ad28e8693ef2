//! Focused unit tests covering CLI configuration resolution.

use super::*;

use camino::Utf8PathBuf;
use chrono::NaiveDate;
use rstest::rstest;

use neoscout_core::Criterion;

use crate::inspect::{InspectArgs, InspectConfig, InspectTarget};
use crate::output::{OutputFormat, output_format};
use crate::query::{QueryArgs, QueryConfig, effective_limit, filters_from};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

#[rstest]
fn no_flags_build_an_empty_filter_set() {
    let filters = filters_from(&QueryArgs::default());
    assert!(filters.is_empty());
}

#[rstest]
fn each_flag_maps_to_its_criterion() {
    let args = QueryArgs {
        date: Some(date(2020, 1, 1)),
        start_date: Some(date(2020, 1, 1)),
        end_date: Some(date(2020, 12, 31)),
        min_distance: Some(0.01),
        max_distance: Some(0.5),
        min_velocity: Some(10.0),
        max_velocity: Some(30.0),
        min_diameter: Some(0.1),
        max_diameter: Some(20.0),
        hazardous: true,
        ..QueryArgs::default()
    };
    let filters = filters_from(&args);
    assert_eq!(
        filters.criteria(),
        &[
            Criterion::Date(date(2020, 1, 1)),
            Criterion::StartDate(date(2020, 1, 1)),
            Criterion::EndDate(date(2020, 12, 31)),
            Criterion::DistanceMin(0.01),
            Criterion::DistanceMax(0.5),
            Criterion::VelocityMin(10.0),
            Criterion::VelocityMax(30.0),
            Criterion::DiameterMin(0.1),
            Criterion::DiameterMax(20.0),
            Criterion::Hazardous(true),
        ]
    );
}

#[rstest]
fn not_hazardous_maps_to_a_false_criterion() {
    let args = QueryArgs {
        not_hazardous: true,
        ..QueryArgs::default()
    };
    assert_eq!(
        filters_from(&args).criteria(),
        &[Criterion::Hazardous(false)]
    );
}

#[rstest]
#[case(Some(5), false, Some(5))]
#[case(Some(5), true, Some(5))]
#[case(Some(0), false, None)]
#[case(Some(-3), false, None)]
#[case(None, true, None)]
#[case(None, false, Some(10))]
fn limit_resolution_follows_the_output_target(
    #[case] limit: Option<i64>,
    #[case] writing_to_file: bool,
    #[case] expected: Option<usize>,
) {
    assert_eq!(effective_limit(limit, writing_to_file), expected);
}

#[rstest]
#[case("results.csv", Some(OutputFormat::Csv))]
#[case("results.json", Some(OutputFormat::Json))]
#[case("results.txt", None)]
#[case("results", None)]
fn outfile_extension_selects_the_writer(
    #[case] file_name: &str,
    #[case] expected: Option<OutputFormat>,
) {
    assert_eq!(output_format(&Utf8PathBuf::from(file_name)), expected);
}

#[rstest]
fn unsupported_outfile_extension_is_rejected() {
    let args = QueryArgs {
        outfile: Some(Utf8PathBuf::from("results.txt")),
        ..QueryArgs::default()
    };
    let err = QueryConfig::try_from(args).expect_err("extension should be rejected");
    match err {
        CliError::UnsupportedOutfile { path } => {
            assert_eq!(path, Utf8PathBuf::from("results.txt"));
        }
        other => panic!("expected UnsupportedOutfile, found {other:?}"),
    }
}

#[rstest]
fn query_config_falls_back_to_the_default_dataset_paths() {
    let config = QueryConfig::try_from(QueryArgs::default()).expect("valid default args");
    assert_eq!(config.neo_csv, Utf8PathBuf::from(DEFAULT_NEO_CSV));
    assert_eq!(config.cad_json, Utf8PathBuf::from(DEFAULT_CAD_JSON));
    assert!(config.output.is_none());
    assert_eq!(config.limit, Some(10));
}

#[rstest]
fn inspect_without_a_target_errors() {
    let err = InspectConfig::try_from(InspectArgs::default()).expect_err("target is required");
    assert!(matches!(err, CliError::MissingInspectTarget));
}

#[rstest]
fn inspect_prefers_the_designation_over_the_name() {
    let args = InspectArgs {
        pdes: Some("433".to_owned()),
        name: Some("Eros".to_owned()),
        ..InspectArgs::default()
    };
    let config = InspectConfig::try_from(args).expect("valid args");
    assert_eq!(config.target, InspectTarget::Designation("433".to_owned()));
}

#[rstest]
fn inspect_falls_back_to_the_name_target() {
    let args = InspectArgs {
        name: Some("Eros".to_owned()),
        verbose: true,
        ..InspectArgs::default()
    };
    let config = InspectConfig::try_from(args).expect("valid args");
    assert_eq!(config.target, InspectTarget::Name("Eros".to_owned()));
    assert!(config.verbose);
}
