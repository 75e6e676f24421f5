//! Command implementations for the `dtfeat` binary.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use polars::prelude::{
    AnyValue, CsvParseOptions, CsvReadOptions, CsvWriter, DataFrame, SerReader, SerWriter,
};
use tracing::info;

use dtfeat_model::{CyclicOptions, FeatureCategory};
use dtfeat_transform::DatetimeFeatureExtractor;

use crate::cli::ExtractArgs;

pub fn run_extract(args: &ExtractArgs) -> Result<()> {
    let df = read_input(&args.input)?;
    let extractor = build_extractor(args)?;
    info!(rows = df.height(), input = %args.input.display(), "extracting features");

    let mut features = extractor.extract(df)?;
    info!(
        rows = features.height(),
        columns = features.width(),
        "extraction complete"
    );

    match &args.output {
        Some(path) => {
            write_output(&mut features, path)?;
            println!(
                "Wrote {} rows x {} columns to {}",
                features.height(),
                features.width(),
                path.display()
            );
        }
        None => print_preview(&features, args.limit),
    }
    Ok(())
}

pub fn run_categories() -> Result<()> {
    let default_cyclic = CyclicOptions::default();
    let mut table = Table::new();
    table.set_header(vec!["Category", "Columns"]);
    apply_table_style(&mut table);
    for category in FeatureCategory::ALL {
        table.add_row(vec![
            category.as_str().to_string(),
            category_columns(category, &default_cyclic),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Build the pipeline from CLI arguments, validating every vocabulary name
/// before the input is read into it.
pub fn build_extractor(args: &ExtractArgs) -> Result<DatetimeFeatureExtractor> {
    let mut builder =
        DatetimeFeatureExtractor::builder().timestamp_column(args.timestamp_column.clone());
    if let Some(features) = &args.features {
        builder = builder.features(features.iter().map(String::as_str));
    }
    if args.transforms.is_some() || args.cycle_types.is_some() {
        let defaults = CyclicOptions::default();
        let transforms = match &args.transforms {
            Some(names) => names.clone(),
            None => defaults
                .transforms
                .iter()
                .map(|t| t.as_str().to_string())
                .collect(),
        };
        let cycle_types = match &args.cycle_types {
            Some(names) => names.clone(),
            None => defaults
                .cycle_types
                .iter()
                .map(|c| c.as_str().to_string())
                .collect(),
        };
        builder = builder.cyclic_options(CyclicOptions::from_names(&transforms, &cycle_types)?);
    }
    Ok(builder.build()?)
}

fn read_input(path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_try_parse_dates(true))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("Failed to open CSV: {}", path.display()))?
        .finish()
        .with_context(|| format!("Failed to read CSV: {}", path.display()))?;
    Ok(df)
}

fn write_output(features: &mut DataFrame, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    CsvWriter::new(file)
        .include_header(true)
        .finish(features)
        .with_context(|| format!("Failed to write CSV: {}", path.display()))?;
    Ok(())
}

fn print_preview(features: &DataFrame, limit: usize) {
    let mut table = Table::new();
    table.set_header(
        features
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);

    let shown = features.height().min(limit);
    for row in 0..shown {
        let cells: Vec<String> = features
            .get_columns()
            .iter()
            .map(|column| {
                let value = column
                    .as_materialized_series()
                    .get(row)
                    .unwrap_or(AnyValue::Null);
                format!("{value}")
            })
            .collect();
        table.add_row(cells);
    }
    println!("{table}");
    println!("Showing {shown} of {} rows", features.height());
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn category_columns(category: FeatureCategory, cyclic: &CyclicOptions) -> String {
    match category {
        FeatureCategory::Calendar => {
            "year, month, day, day_of_week, day_of_year, week_of_year, quarter".to_string()
        }
        FeatureCategory::Clock => "hour, minute, second".to_string(),
        FeatureCategory::Cyclical => cyclic.feature_names().join(", "),
        FeatureCategory::Business => "is_weekend, is_month_end, is_year_end".to_string(),
        FeatureCategory::Season => "season".to_string(),
    }
}
