//! Tests for the simple field-projection extractors.

use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::DataFrame;

use dtfeat_transform::extractor::FeatureExtractor;
use dtfeat_transform::frame::{FeatureInput, normalize_input};
use dtfeat_transform::{BusinessFeatures, CalendarFeatures, ClockFeatures, SeasonFeatures};

fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

fn frame_of(values: Vec<NaiveDateTime>) -> DataFrame {
    normalize_input(FeatureInput::from(values), "datetime").unwrap()
}

fn i32_at(df: &DataFrame, column: &str, row: usize) -> i32 {
    df.column(column)
        .unwrap()
        .as_materialized_series()
        .i32()
        .unwrap()
        .get(row)
        .unwrap()
}

fn u32_at(df: &DataFrame, column: &str, row: usize) -> u32 {
    df.column(column)
        .unwrap()
        .as_materialized_series()
        .u32()
        .unwrap()
        .get(row)
        .unwrap()
}

fn bool_at(df: &DataFrame, column: &str, row: usize) -> bool {
    df.column(column)
        .unwrap()
        .as_materialized_series()
        .bool()
        .unwrap()
        .get(row)
        .unwrap()
}

fn str_at(df: &DataFrame, column: &str, row: usize) -> String {
    df.column(column)
        .unwrap()
        .as_materialized_series()
        .str()
        .unwrap()
        .get(row)
        .unwrap()
        .to_string()
}

#[test]
fn calendar_fields_for_new_years_day() {
    // 2023-01-01 is a Sunday in ISO week 52 of 2022.
    let df = frame_of(vec![dt(2023, 1, 1, 12, 30, 15)]);
    let features = CalendarFeatures::default().extract(&df).unwrap();

    assert_eq!(i32_at(&features, "year", 0), 2023);
    assert_eq!(u32_at(&features, "month", 0), 1);
    assert_eq!(u32_at(&features, "day", 0), 1);
    assert_eq!(u32_at(&features, "day_of_week", 0), 6);
    assert_eq!(u32_at(&features, "day_of_year", 0), 1);
    assert_eq!(u32_at(&features, "week_of_year", 0), 52);
    assert_eq!(u32_at(&features, "quarter", 0), 1);
}

#[test]
fn calendar_column_order_is_fixed() {
    let df = frame_of(vec![dt(2023, 1, 1, 0, 0, 0)]);
    let features = CalendarFeatures::default().extract(&df).unwrap();
    let names: Vec<&str> = features
        .get_column_names()
        .iter()
        .map(|name| name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "year",
            "month",
            "day",
            "day_of_week",
            "day_of_year",
            "week_of_year",
            "quarter",
        ]
    );
}

#[test]
fn calendar_quarters_cover_the_year() {
    let df = frame_of(vec![
        dt(2023, 2, 1, 0, 0, 0),
        dt(2023, 4, 1, 0, 0, 0),
        dt(2023, 9, 30, 0, 0, 0),
        dt(2023, 12, 31, 0, 0, 0),
    ]);
    let features = CalendarFeatures::default().extract(&df).unwrap();
    assert_eq!(u32_at(&features, "quarter", 0), 1);
    assert_eq!(u32_at(&features, "quarter", 1), 2);
    assert_eq!(u32_at(&features, "quarter", 2), 3);
    assert_eq!(u32_at(&features, "quarter", 3), 4);
}

#[test]
fn clock_fields_for_known_time() {
    let df = frame_of(vec![dt(2023, 1, 1, 12, 30, 15)]);
    let features = ClockFeatures::default().extract(&df).unwrap();

    assert_eq!(u32_at(&features, "hour", 0), 12);
    assert_eq!(u32_at(&features, "minute", 0), 30);
    assert_eq!(u32_at(&features, "second", 0), 15);
}

#[test]
fn business_flags_for_friday_month_end() {
    // 2023-06-30 is a Friday and the last day of June.
    let df = frame_of(vec![dt(2023, 6, 30, 9, 0, 0)]);
    let features = BusinessFeatures::default().extract(&df).unwrap();

    assert!(!bool_at(&features, "is_weekend", 0));
    assert!(bool_at(&features, "is_month_end", 0));
    assert!(!bool_at(&features, "is_year_end", 0));
}

#[test]
fn business_flags_for_year_end() {
    // 2023-12-31 is a Sunday.
    let df = frame_of(vec![dt(2023, 12, 31, 23, 59, 59)]);
    let features = BusinessFeatures::default().extract(&df).unwrap();

    assert!(bool_at(&features, "is_weekend", 0));
    assert!(bool_at(&features, "is_month_end", 0));
    assert!(bool_at(&features, "is_year_end", 0));
}

#[test]
fn weekend_flag_tracks_day_of_week() {
    // Saturday, Sunday, Monday.
    let df = frame_of(vec![
        dt(2023, 7, 1, 0, 0, 0),
        dt(2023, 7, 2, 0, 0, 0),
        dt(2023, 7, 3, 0, 0, 0),
    ]);
    let features = BusinessFeatures::default().extract(&df).unwrap();
    assert!(bool_at(&features, "is_weekend", 0));
    assert!(bool_at(&features, "is_weekend", 1));
    assert!(!bool_at(&features, "is_weekend", 2));
}

#[test]
fn season_labels_follow_month_mapping() {
    let df = frame_of(vec![
        dt(2023, 1, 15, 0, 0, 0),
        dt(2023, 4, 15, 0, 0, 0),
        dt(2023, 6, 30, 0, 0, 0),
        dt(2023, 10, 15, 0, 0, 0),
        dt(2023, 12, 31, 0, 0, 0),
    ]);
    let features = SeasonFeatures::default().extract(&df).unwrap();
    assert_eq!(str_at(&features, "season", 0), "Winter");
    assert_eq!(str_at(&features, "season", 1), "Spring");
    assert_eq!(str_at(&features, "season", 2), "Summer");
    assert_eq!(str_at(&features, "season", 3), "Fall");
    assert_eq!(str_at(&features, "season", 4), "Winter");
}

#[test]
fn empty_input_keeps_full_schema() {
    let df = frame_of(Vec::new());

    let calendar = CalendarFeatures::default().extract(&df).unwrap();
    assert_eq!(calendar.height(), 0);
    assert_eq!(calendar.width(), 7);

    let clock = ClockFeatures::default().extract(&df).unwrap();
    assert_eq!(clock.height(), 0);
    assert_eq!(clock.width(), 3);

    let business = BusinessFeatures::default().extract(&df).unwrap();
    assert_eq!(business.height(), 0);
    assert_eq!(business.width(), 3);

    let season = SeasonFeatures::default().extract(&df).unwrap();
    assert_eq!(season.height(), 0);
    assert_eq!(season.width(), 1);
}

#[test]
fn custom_timestamp_column_is_honored() {
    let values = vec![dt(2023, 3, 14, 1, 59, 26)];
    let df = normalize_input(FeatureInput::from(values), "observed_at").unwrap();
    let features = ClockFeatures::new("observed_at").extract(&df).unwrap();
    assert_eq!(u32_at(&features, "hour", 0), 1);
}
