//! Proleptic Gregorian calendar speaking all three native backend shapes.
//!
//! Used by the command line host and by tests. Timestamps are Unix seconds
//! read as UTC; seasons are meteorological (March-May is spring).

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime, TimeDelta, Timelike};

use super::manager::{BackendKind, CalendarHost, ModuleStatus};
use super::native::{CalendarBackend, IconDate, IndexedDate, NestedDate, NestedSeason};
use super::{DisplayStrings, Interval};
use crate::model::Season;

/// Timestamp of a UTC wall-clock time, `None` if the date does not exist.
pub fn utc_timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<i64> {
    NaiveDate::from_ymd_opt(year, month, day)?
        .and_hms_opt(hour, minute, 0)
        .map(|dt| dt.and_utc().timestamp())
}

fn naive(timestamp: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(timestamp, 0).map(|dt| dt.naive_utc())
}

fn season_for_month(month: u32) -> Season {
    match month {
        3..=5 => Season::Spring,
        6..=8 => Season::Summer,
        9..=11 => Season::Fall,
        _ => Season::Winter,
    }
}

struct Parts {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    season: Season,
    weekday: String,
    display: DisplayStrings,
}

fn parts(timestamp: i64) -> Option<Parts> {
    let dt = naive(timestamp)?;
    Some(Parts {
        year: dt.year(),
        month: dt.month(),
        day: dt.day(),
        hour: dt.hour(),
        minute: dt.minute(),
        season: season_for_month(dt.month()),
        weekday: dt.format("%A").to_string(),
        display: DisplayStrings {
            date: dt.format("%B %-d, %Y").to_string(),
            time: dt.format("%H:%M").to_string(),
        },
    })
}

fn shift(timestamp: i64, interval: &Interval) -> Option<i64> {
    let dt = naive(timestamp)?;
    let months = interval.year.checked_mul(12)?.checked_add(interval.month)?;
    let dt = if months >= 0 {
        dt.checked_add_months(Months::new(u32::try_from(months).ok()?))?
    } else {
        dt.checked_sub_months(Months::new(u32::try_from(-months).ok()?))?
    };
    let delta = TimeDelta::try_days(interval.day)?
        .checked_add(&TimeDelta::try_hours(interval.hour)?)?
        .checked_add(&TimeDelta::try_minutes(interval.minute)?)?;
    dt.checked_add_signed(delta).map(|d| d.and_utc().timestamp())
}

/// A settable clock over the Gregorian calendar.
#[derive(Debug)]
pub struct ReferenceCalendar {
    now: AtomicI64,
}

impl ReferenceCalendar {
    pub fn new(now: i64) -> Self {
        ReferenceCalendar {
            now: AtomicI64::new(now),
        }
    }

    pub fn set_now(&self, timestamp: i64) {
        self.now.store(timestamp, Ordering::SeqCst);
    }

    /// Move the clock; returns the new time, or `None` if out of range.
    pub fn advance(&self, interval: &Interval) -> Option<i64> {
        let next = shift(self.now.load(Ordering::SeqCst), interval)?;
        self.set_now(next);
        Some(next)
    }
}

impl CalendarBackend<IconDate> for ReferenceCalendar {
    fn timestamp(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }

    fn timestamp_to_date(&self, timestamp: i64) -> Option<IconDate> {
        let p = parts(timestamp)?;
        Some(IconDate {
            year: p.year,
            month: p.month - 1,
            day: p.day - 1,
            hour: p.hour,
            minute: p.minute,
            weekday: Some(p.weekday),
            season_icon: p.season.name().to_string(),
            display: p.display,
        })
    }

    fn date_to_timestamp(&self, date: &IconDate) -> Option<i64> {
        utc_timestamp(date.year, date.month + 1, date.day + 1, date.hour, date.minute)
    }

    fn timestamp_plus_interval(&self, timestamp: i64, interval: &Interval) -> Option<i64> {
        shift(timestamp, interval)
    }
}

impl CalendarBackend<IndexedDate> for ReferenceCalendar {
    fn timestamp(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }

    fn timestamp_to_date(&self, timestamp: i64) -> Option<IndexedDate> {
        let p = parts(timestamp)?;
        Some(IndexedDate {
            year: p.year,
            month: p.month,
            day: p.day,
            hour: p.hour,
            minute: p.minute,
            weekday: Some(p.weekday),
            season: p.season.index() as u8,
            display: p.display,
        })
    }

    fn date_to_timestamp(&self, date: &IndexedDate) -> Option<i64> {
        utc_timestamp(date.year, date.month, date.day, date.hour, date.minute)
    }

    fn timestamp_plus_interval(&self, timestamp: i64, interval: &Interval) -> Option<i64> {
        shift(timestamp, interval)
    }
}

impl CalendarBackend<NestedDate> for ReferenceCalendar {
    fn timestamp(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }

    fn timestamp_to_date(&self, timestamp: i64) -> Option<NestedDate> {
        let p = parts(timestamp)?;
        let name = match p.season {
            Season::Fall => "Autumn",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Winter => "Winter",
        };
        Some(NestedDate {
            year: p.year,
            month: p.month,
            day_of_month: p.day,
            hour: p.hour,
            minute: p.minute,
            weekday: Some(p.weekday),
            season: Some(NestedSeason {
                name: name.to_string(),
                index: p.season.index() as u8,
            }),
            display: p.display,
        })
    }

    fn date_to_timestamp(&self, date: &NestedDate) -> Option<i64> {
        utc_timestamp(date.year, date.month, date.day_of_month, date.hour, date.minute)
    }

    fn timestamp_plus_interval(&self, timestamp: i64, interval: &Interval) -> Option<i64> {
        shift(timestamp, interval)
    }
}

/// Host exposing one reference calendar as every module id it is told about.
pub struct ReferenceHost {
    calendar: Arc<ReferenceCalendar>,
    modules: Vec<(String, BackendKind, String)>,
}

impl ReferenceHost {
    pub fn new(calendar: Arc<ReferenceCalendar>) -> Self {
        ReferenceHost {
            calendar,
            modules: Vec::new(),
        }
    }

    /// Register an active module with the given id, native shape and version.
    pub fn with_module(mut self, id: &str, kind: BackendKind, version: &str) -> Self {
        self.modules
            .push((id.to_string(), kind, version.to_string()));
        self
    }

    fn kind_of(&self, id: &str) -> Option<BackendKind> {
        self.modules
            .iter()
            .find(|(m, _, _)| m == id)
            .map(|(_, kind, _)| *kind)
    }
}

impl CalendarHost for ReferenceHost {
    fn module(&self, id: &str) -> Option<ModuleStatus> {
        self.modules
            .iter()
            .find(|(m, _, _)| m == id)
            .map(|(_, _, version)| ModuleStatus {
                active: true,
                version: version.clone(),
            })
    }

    fn icon_backend(&self, id: &str) -> Option<Arc<dyn CalendarBackend<IconDate>>> {
        match self.kind_of(id)? {
            BackendKind::Icon => Some(self.calendar.clone()),
            _ => None,
        }
    }

    fn indexed_backend(&self, id: &str) -> Option<Arc<dyn CalendarBackend<IndexedDate>>> {
        match self.kind_of(id)? {
            BackendKind::Indexed => Some(self.calendar.clone()),
            _ => None,
        }
    }

    fn nested_backend(&self, id: &str) -> Option<Arc<dyn CalendarBackend<NestedDate>>> {
        match self.kind_of(id)? {
            BackendKind::Nested => Some(self.calendar.clone()),
            _ => None,
        }
    }
}
