//! Type-safe vocabularies for datetime feature extraction.
//!
//! Every string-keyed concept in the configuration surface (feature
//! categories, cycle types, cyclic transforms, seasons) is a closed enum
//! here. Parsing from strings is case-insensitive and exhaustive: an unknown
//! name fails with an error that names the value and lists the valid set,
//! before any row is processed.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FeatureError;

/// Base time-unit constants and the cycle periods derived from them.
///
/// Process-wide read-only data; every cycle period below is a product of
/// these units.
pub mod period {
    pub const SECONDS_PER_MINUTE: u32 = 60;
    pub const MINUTES_PER_HOUR: u32 = 60;
    pub const HOURS_PER_DAY: u32 = 24;

    pub const SECONDS_PER_HOUR: u32 = SECONDS_PER_MINUTE * MINUTES_PER_HOUR;
    pub const SECONDS_PER_DAY: u32 = SECONDS_PER_HOUR * HOURS_PER_DAY;
    pub const MINUTES_PER_DAY: u32 = MINUTES_PER_HOUR * HOURS_PER_DAY;
}

fn join_names<T: Copy + Into<&'static str>>(all: &[T]) -> String {
    all.iter()
        .map(|item| (*item).into())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The closed set of extractor identifiers the orchestrator composes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureCategory {
    /// Calendar fields: year, month, day, day_of_week, day_of_year,
    /// week_of_year, quarter.
    Calendar,
    /// Time-of-day fields: hour, minute, second.
    Clock,
    /// Trigonometric encodings of periodic time positions.
    Cyclical,
    /// Business-calendar flags: is_weekend, is_month_end, is_year_end.
    Business,
    /// Categorical season label derived from the month.
    Season,
}

impl FeatureCategory {
    /// All categories in canonical order; also the default selection.
    pub const ALL: [FeatureCategory; 5] = [
        FeatureCategory::Calendar,
        FeatureCategory::Clock,
        FeatureCategory::Cyclical,
        FeatureCategory::Business,
        FeatureCategory::Season,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureCategory::Calendar => "calendar",
            FeatureCategory::Clock => "clock",
            FeatureCategory::Cyclical => "cyclical",
            FeatureCategory::Business => "business",
            FeatureCategory::Season => "season",
        }
    }
}

impl From<FeatureCategory> for &'static str {
    fn from(category: FeatureCategory) -> Self {
        category.as_str()
    }
}

impl fmt::Display for FeatureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FeatureCategory {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "calendar" => Ok(FeatureCategory::Calendar),
            "clock" => Ok(FeatureCategory::Clock),
            "cyclical" => Ok(FeatureCategory::Cyclical),
            "business" => Ok(FeatureCategory::Business),
            "season" => Ok(FeatureCategory::Season),
            _ => Err(FeatureError::UnknownFeatureCategory {
                value: s.to_string(),
                expected: join_names(&Self::ALL),
            }),
        }
    }
}

/// A named periodic unit of time with a fixed integer period length.
///
/// The period normalizes a timestamp's position within the cycle to a phase
/// angle in `[0, 2π)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleType {
    SecondOfMinute,
    SecondOfHour,
    SecondOfDay,
    MinuteOfDay,
    HourOfDay,
}

impl CycleType {
    pub const ALL: [CycleType; 5] = [
        CycleType::SecondOfMinute,
        CycleType::SecondOfHour,
        CycleType::SecondOfDay,
        CycleType::MinuteOfDay,
        CycleType::HourOfDay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CycleType::SecondOfMinute => "second_of_minute",
            CycleType::SecondOfHour => "second_of_hour",
            CycleType::SecondOfDay => "second_of_day",
            CycleType::MinuteOfDay => "minute_of_day",
            CycleType::HourOfDay => "hour_of_day",
        }
    }

    /// Period length in the cycle's own unit.
    pub fn period(&self) -> u32 {
        match self {
            CycleType::SecondOfMinute => period::SECONDS_PER_MINUTE,
            CycleType::SecondOfHour => period::SECONDS_PER_HOUR,
            CycleType::SecondOfDay => period::SECONDS_PER_DAY,
            CycleType::MinuteOfDay => period::MINUTES_PER_DAY,
            CycleType::HourOfDay => period::HOURS_PER_DAY,
        }
    }

    /// Integer position of `t` within this cycle.
    ///
    /// Always satisfies `position < period` since the components come from a
    /// valid clock time.
    pub fn position(&self, t: NaiveDateTime) -> u32 {
        match self {
            CycleType::SecondOfMinute => t.second(),
            CycleType::SecondOfHour => t.minute() * period::SECONDS_PER_MINUTE + t.second(),
            CycleType::SecondOfDay => {
                t.hour() * period::SECONDS_PER_HOUR
                    + t.minute() * period::SECONDS_PER_MINUTE
                    + t.second()
            }
            CycleType::MinuteOfDay => t.hour() * period::MINUTES_PER_HOUR + t.minute(),
            CycleType::HourOfDay => t.hour(),
        }
    }
}

impl From<CycleType> for &'static str {
    fn from(cycle: CycleType) -> Self {
        cycle.as_str()
    }
}

impl fmt::Display for CycleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CycleType {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "second_of_minute" => Ok(CycleType::SecondOfMinute),
            "second_of_hour" => Ok(CycleType::SecondOfHour),
            "second_of_day" => Ok(CycleType::SecondOfDay),
            "minute_of_day" => Ok(CycleType::MinuteOfDay),
            "hour_of_day" => Ok(CycleType::HourOfDay),
            _ => Err(FeatureError::UnknownCycleType {
                value: s.to_string(),
                expected: join_names(&Self::ALL),
            }),
        }
    }
}

/// A periodic function applied to a phase angle in radians.
///
/// Dispatch is a closed match; transform names are resolved to a variant at
/// configuration time, never looked up dynamically per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclicTransform {
    Sin,
    Cos,
}

impl CyclicTransform {
    pub const ALL: [CyclicTransform; 2] = [CyclicTransform::Sin, CyclicTransform::Cos];

    pub fn as_str(&self) -> &'static str {
        match self {
            CyclicTransform::Sin => "sin",
            CyclicTransform::Cos => "cos",
        }
    }

    /// Apply the transform to a phase angle in radians.
    pub fn apply(&self, phase: f64) -> f64 {
        match self {
            CyclicTransform::Sin => phase.sin(),
            CyclicTransform::Cos => phase.cos(),
        }
    }
}

impl From<CyclicTransform> for &'static str {
    fn from(transform: CyclicTransform) -> Self {
        transform.as_str()
    }
}

impl fmt::Display for CyclicTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CyclicTransform {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sin" => Ok(CyclicTransform::Sin),
            "cos" => Ok(CyclicTransform::Cos),
            _ => Err(FeatureError::UnknownTransform {
                value: s.to_string(),
                expected: join_names(&Self::ALL),
            }),
        }
    }
}

/// Meteorological season bucketing by month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// Fixed mapping: Dec–Feb Winter, Mar–May Spring, Jun–Aug Summer,
    /// Sep–Nov Fall. `month` is 1-based as chrono reports it.
    pub fn from_month(month: u32) -> Season {
        match month {
            12 | 1 | 2 => Season::Winter,
            3 | 4 | 5 => Season::Spring,
            6 | 7 | 8 => Season::Summer,
            _ => Season::Fall,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A feature-category selection, accepted either as the enum itself or as a
/// string name.
///
/// Any accepted representation is normalized to a [`FeatureCategory`] by
/// [`FeatureSelection::resolve`] before use; unknown names are rejected
/// there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureSelection {
    Category(FeatureCategory),
    Name(String),
}

impl FeatureSelection {
    pub fn resolve(&self) -> Result<FeatureCategory, FeatureError> {
        match self {
            FeatureSelection::Category(category) => Ok(*category),
            FeatureSelection::Name(name) => name.parse(),
        }
    }
}

impl From<FeatureCategory> for FeatureSelection {
    fn from(category: FeatureCategory) -> Self {
        FeatureSelection::Category(category)
    }
}

impl From<&str> for FeatureSelection {
    fn from(name: &str) -> Self {
        FeatureSelection::Name(name.to_string())
    }
}

impl From<String> for FeatureSelection {
    fn from(name: String) -> Self {
        FeatureSelection::Name(name)
    }
}
