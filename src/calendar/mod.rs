//! Calendar abstraction: one normalized date model over several native
//! calendar backends.
//!
//! The engine only ever sees [`CalendarDate`] values produced by a
//! [`CalendarAdapter`]. Each adapter wraps one native backend shape and
//! is picked once by the [`CalendarManager`].

pub mod adapters;
pub mod manager;
pub mod native;
pub mod reference;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Season;

pub use adapters::{IconSeasonAdapter, IndexedSeasonAdapter, NestedSeasonAdapter};
pub use manager::{BackendCandidate, BackendKind, CalendarHost, CalendarManager, ModuleStatus};

/// Human-readable strings the backend renders for a date.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayStrings {
    pub date: String,
    pub time: String,
}

/// Normalized date. Month and day are 1-based regardless of backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub season: Season,
    pub weekday: Option<String>,
    pub display: DisplayStrings,
}

impl CalendarDate {
    /// Same calendar day, ignoring time of day.
    pub fn same_day(&self, other: &CalendarDate) -> bool {
        self.year == other.year && self.month == other.month && self.day == other.day
    }
}

/// Offset applied by [`CalendarAdapter::plus_interval`]. Zero fields are
/// no-ops; negative fields move backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Interval {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
}

impl Interval {
    pub fn days(day: i64) -> Self {
        Interval {
            day,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("the calendar backend cannot represent {year}-{month}-{day} {hour:02}:{minute:02}")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    },
    #[error("timestamp {0} is outside the calendar's range")]
    OutOfRange(i64),
    #[error("no calendar backend is active; forecasts and dated weather need one")]
    NoCalendar,
    #[error("several calendar backends are active ({}); enable only one", .0.join(", "))]
    MultipleCalendars(Vec<String>),
}

/// Normalized view of a calendar backend.
pub trait CalendarAdapter: Send + Sync {
    /// Identifier of the wrapped backend.
    fn backend_id(&self) -> &str;

    fn current_timestamp(&self) -> i64;

    fn to_date(&self, timestamp: i64) -> Option<CalendarDate>;

    fn to_timestamp(&self, date: &CalendarDate) -> Result<i64, CalendarError>;

    fn plus_interval(&self, timestamp: i64, interval: &Interval) -> Result<i64, CalendarError>;

    fn today(&self) -> Option<CalendarDate> {
        self.to_date(self.current_timestamp())
    }

    /// Timestamp of 00:00 on the day of `date`. Forecast keys always use this.
    fn day_timestamp(&self, date: &CalendarDate) -> Result<i64, CalendarError> {
        let ts = self.to_timestamp(date)?;
        self.plus_interval(
            ts,
            &Interval {
                hour: -(date.hour as i64),
                minute: -(date.minute as i64),
                ..Default::default()
            },
        )
    }
}
