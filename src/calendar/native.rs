//! Native shapes of the supported calendar backends.
//!
//! These mirror what the host's calendar modules hand out; adapters
//! translate them into [`super::CalendarDate`].

use serde::{Deserialize, Serialize};

use super::{DisplayStrings, Interval};

/// Conversion and arithmetic surface every backend exposes, in its own
/// date shape `D`.
pub trait CalendarBackend<D>: Send + Sync {
    fn timestamp(&self) -> i64;

    fn timestamp_to_date(&self, timestamp: i64) -> Option<D>;

    fn date_to_timestamp(&self, date: &D) -> Option<i64>;

    fn timestamp_plus_interval(&self, timestamp: i64, interval: &Interval) -> Option<i64>;
}

/// Backend reporting 0-based month/day and the season as an icon name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub weekday: Option<String>,
    pub season_icon: String,
    pub display: DisplayStrings,
}

/// Backend reporting 1-based month/day and the season as a numeric index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub weekday: Option<String>,
    pub season: u8,
    pub display: DisplayStrings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedSeason {
    pub name: String,
    pub index: u8,
}

/// Backend reporting 1-based `dayOfMonth` and a nested season object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestedDate {
    pub year: i32,
    pub month: u32,
    pub day_of_month: u32,
    pub hour: u32,
    pub minute: u32,
    pub weekday: Option<String>,
    pub season: Option<NestedSeason>,
    pub display: DisplayStrings,
}
