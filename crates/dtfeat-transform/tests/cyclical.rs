//! Tests for the cyclical encoder.

use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::DataFrame;

use dtfeat_model::{CycleType, CyclicOptions, CyclicTransform, FeatureError};
use dtfeat_transform::CyclicalFeatures;
use dtfeat_transform::extractor::FeatureExtractor;
use dtfeat_transform::frame::{FeatureInput, normalize_input};

const EPSILON: f64 = 1e-9;

fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

fn frame_of(values: Vec<NaiveDateTime>) -> DataFrame {
    normalize_input(FeatureInput::from(values), "datetime").unwrap()
}

fn f64_at(df: &DataFrame, column: &str, row: usize) -> f64 {
    df.column(column)
        .unwrap()
        .as_materialized_series()
        .f64()
        .unwrap()
        .get(row)
        .unwrap()
}

#[test]
fn second_of_day_matches_reference_values() {
    // 12:30:15 is second 45015 of the day.
    let df = frame_of(vec![dt(2023, 1, 1, 12, 30, 15)]);
    let encoder = CyclicalFeatures::from_names("datetime", &["sin", "cos"], &["second_of_day"])
        .unwrap();
    let features = encoder.extract(&df).unwrap();

    let phase = std::f64::consts::TAU * 45_015.0 / 86_400.0;
    assert!((f64_at(&features, "sin_second_of_day", 0) - phase.sin()).abs() < EPSILON);
    assert!((f64_at(&features, "cos_second_of_day", 0) - phase.cos()).abs() < EPSILON);
    // Fixed expectations for the same instant.
    assert!((f64_at(&features, "sin_second_of_day", 0) - (-0.131_607_612_9)).abs() < 1e-9);
    assert!((f64_at(&features, "cos_second_of_day", 0) - (-0.991_301_889_5)).abs() < 1e-9);
}

#[test]
fn midnight_sits_at_the_cycle_boundary() {
    let df = frame_of(vec![dt(2023, 1, 1, 0, 0, 0)]);
    let encoder = CyclicalFeatures::default();
    let features = encoder.extract(&df).unwrap();

    assert!(f64_at(&features, "sin_second_of_day", 0).abs() < EPSILON);
    assert!((f64_at(&features, "cos_second_of_day", 0) - 1.0).abs() < EPSILON);
    assert!(f64_at(&features, "sin_minute_of_day", 0).abs() < EPSILON);
    assert!((f64_at(&features, "cos_minute_of_day", 0) - 1.0).abs() < EPSILON);
}

#[test]
fn quarter_cycle_reaches_sine_peak() {
    // 06:00:00 is a quarter of the daily cycle: sin = 1, cos = 0.
    let df = frame_of(vec![dt(2023, 1, 1, 6, 0, 0)]);
    let encoder = CyclicalFeatures::from_names("datetime", &["sin", "cos"], &["second_of_day"])
        .unwrap();
    let features = encoder.extract(&df).unwrap();

    assert!((f64_at(&features, "sin_second_of_day", 0) - 1.0).abs() < EPSILON);
    assert!(f64_at(&features, "cos_second_of_day", 0).abs() < EPSILON);
}

#[test]
fn columns_follow_transform_major_order() {
    let df = frame_of(vec![dt(2023, 1, 1, 0, 0, 0)]);
    let options = CyclicOptions::new(
        vec![CyclicTransform::Sin, CyclicTransform::Cos],
        vec![CycleType::SecondOfDay, CycleType::MinuteOfDay, CycleType::HourOfDay],
    )
    .unwrap();
    let features = CyclicalFeatures::new("datetime", options)
        .extract(&df)
        .unwrap();

    let names: Vec<&str> = features
        .get_column_names()
        .iter()
        .map(|name| name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "sin_second_of_day",
            "sin_minute_of_day",
            "sin_hour_of_day",
            "cos_second_of_day",
            "cos_minute_of_day",
            "cos_hour_of_day",
        ]
    );
}

#[test]
fn empty_input_keeps_full_schema() {
    let df = frame_of(Vec::new());
    let features = CyclicalFeatures::default().extract(&df).unwrap();
    assert_eq!(features.height(), 0);
    assert_eq!(features.width(), 4);
}

#[test]
fn unknown_cycle_type_fails_before_extraction() {
    let err = CyclicalFeatures::from_names("datetime", &["sin"], &["invalid_cycle"]).unwrap_err();
    assert!(matches!(err, FeatureError::UnknownCycleType { .. }));
    let message = err.to_string();
    assert!(message.contains("invalid_cycle"));
    assert!(message.contains("second_of_day"));
}

#[test]
fn unknown_transform_fails_before_extraction() {
    let err = CyclicalFeatures::from_names("datetime", &["tanh"], &["second_of_day"]).unwrap_err();
    assert!(matches!(err, FeatureError::UnknownTransform { .. }));
}

#[test]
fn custom_timestamp_column_is_honored() {
    let values = vec![dt(2023, 1, 1, 3, 0, 0)];
    let df = normalize_input(FeatureInput::from(values), "custom_date").unwrap();
    let encoder = CyclicalFeatures::from_names("custom_date", &["sin", "cos"], &["hour_of_day"])
        .unwrap();
    let features = encoder.extract(&df).unwrap();
    assert!(features.column("sin_hour_of_day").is_ok());
    assert!(features.column("cos_hour_of_day").is_ok());
}

#[test]
fn every_output_lies_within_unit_interval() {
    let values: Vec<NaiveDateTime> = (0..24).map(|h| dt(2023, 5, 17, h, 13, 42)).collect();
    let df = frame_of(values);
    let options = CyclicOptions::new(
        CyclicTransform::ALL.to_vec(),
        CycleType::ALL.to_vec(),
    )
    .unwrap();
    let features = CyclicalFeatures::new("datetime", options)
        .extract(&df)
        .unwrap();

    for column in features.get_columns() {
        let ca = column.as_materialized_series().f64().unwrap();
        for value in ca.into_no_null_iter() {
            assert!((-1.0..=1.0).contains(&value), "{column:?}: {value}");
        }
    }
}
