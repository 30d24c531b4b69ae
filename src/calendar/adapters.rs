use std::sync::Arc;

use tracing::warn;

use super::native::{CalendarBackend, IconDate, IndexedDate, NestedDate, NestedSeason};
use super::{CalendarAdapter, CalendarDate, CalendarError, Interval};
use crate::model::Season;

fn invalid(date: &CalendarDate) -> CalendarError {
    CalendarError::InvalidDate {
        year: date.year,
        month: date.month,
        day: date.day,
        hour: date.hour,
        minute: date.minute,
    }
}

fn season_from_name(name: &str) -> Option<Season> {
    match name.trim().to_ascii_lowercase().as_str() {
        "spring" => Some(Season::Spring),
        "summer" => Some(Season::Summer),
        "fall" | "autumn" => Some(Season::Fall),
        "winter" => Some(Season::Winter),
        _ => None,
    }
}

fn shift<D>(
    backend: &dyn CalendarBackend<D>,
    timestamp: i64,
    interval: &Interval,
) -> Result<i64, CalendarError> {
    backend
        .timestamp_plus_interval(timestamp, interval)
        .ok_or(CalendarError::OutOfRange(timestamp))
}

// === Icon season ===

/// Adapter for backends that name the season by its icon.
pub struct IconSeasonAdapter {
    id: String,
    backend: Arc<dyn CalendarBackend<IconDate>>,
}

impl IconSeasonAdapter {
    pub fn new(id: impl Into<String>, backend: Arc<dyn CalendarBackend<IconDate>>) -> Self {
        IconSeasonAdapter {
            id: id.into(),
            backend,
        }
    }

    fn season(icon: &str) -> Season {
        season_from_name(icon).unwrap_or_else(|| {
            warn!(icon, "Unrecognized season icon, assuming spring");
            Season::Spring
        })
    }

    fn icon(season: Season) -> &'static str {
        season.name()
    }
}

impl CalendarAdapter for IconSeasonAdapter {
    fn backend_id(&self) -> &str {
        &self.id
    }

    fn current_timestamp(&self) -> i64 {
        self.backend.timestamp()
    }

    fn to_date(&self, timestamp: i64) -> Option<CalendarDate> {
        let native = self.backend.timestamp_to_date(timestamp)?;
        Some(CalendarDate {
            year: native.year,
            month: native.month + 1,
            day: native.day + 1,
            hour: native.hour,
            minute: native.minute,
            season: Self::season(&native.season_icon),
            weekday: native.weekday,
            display: native.display,
        })
    }

    fn to_timestamp(&self, date: &CalendarDate) -> Result<i64, CalendarError> {
        let native = IconDate {
            year: date.year,
            month: date.month.checked_sub(1).ok_or_else(|| invalid(date))?,
            day: date.day.checked_sub(1).ok_or_else(|| invalid(date))?,
            hour: date.hour,
            minute: date.minute,
            weekday: date.weekday.clone(),
            season_icon: Self::icon(date.season).to_string(),
            display: date.display.clone(),
        };
        self.backend
            .date_to_timestamp(&native)
            .ok_or_else(|| invalid(date))
    }

    fn plus_interval(&self, timestamp: i64, interval: &Interval) -> Result<i64, CalendarError> {
        shift(&*self.backend, timestamp, interval)
    }
}

// === Indexed season ===

/// Adapter for backends that report the season as a 0-based index
/// (0 = spring .. 3 = winter).
pub struct IndexedSeasonAdapter {
    id: String,
    backend: Arc<dyn CalendarBackend<IndexedDate>>,
}

impl IndexedSeasonAdapter {
    pub fn new(id: impl Into<String>, backend: Arc<dyn CalendarBackend<IndexedDate>>) -> Self {
        IndexedSeasonAdapter {
            id: id.into(),
            backend,
        }
    }

    fn season(index: u8) -> Season {
        Season::from_index(index as usize).unwrap_or_else(|| {
            warn!(index, "Season index out of range, assuming spring");
            Season::Spring
        })
    }
}

impl CalendarAdapter for IndexedSeasonAdapter {
    fn backend_id(&self) -> &str {
        &self.id
    }

    fn current_timestamp(&self) -> i64 {
        self.backend.timestamp()
    }

    fn to_date(&self, timestamp: i64) -> Option<CalendarDate> {
        let native = self.backend.timestamp_to_date(timestamp)?;
        Some(CalendarDate {
            year: native.year,
            month: native.month,
            day: native.day,
            hour: native.hour,
            minute: native.minute,
            season: Self::season(native.season),
            weekday: native.weekday,
            display: native.display,
        })
    }

    fn to_timestamp(&self, date: &CalendarDate) -> Result<i64, CalendarError> {
        let native = IndexedDate {
            year: date.year,
            month: date.month,
            day: date.day,
            hour: date.hour,
            minute: date.minute,
            weekday: date.weekday.clone(),
            season: date.season.index() as u8,
            display: date.display.clone(),
        };
        self.backend
            .date_to_timestamp(&native)
            .ok_or_else(|| invalid(date))
    }

    fn plus_interval(&self, timestamp: i64, interval: &Interval) -> Result<i64, CalendarError> {
        shift(&*self.backend, timestamp, interval)
    }
}

// === Nested season ===

/// Adapter for backends with a `dayOfMonth` field and a nested season object.
pub struct NestedSeasonAdapter {
    id: String,
    backend: Arc<dyn CalendarBackend<NestedDate>>,
}

impl NestedSeasonAdapter {
    pub fn new(id: impl Into<String>, backend: Arc<dyn CalendarBackend<NestedDate>>) -> Self {
        NestedSeasonAdapter {
            id: id.into(),
            backend,
        }
    }

    /// Prefer the season name; fall back to its index.
    fn season(season: Option<&NestedSeason>) -> Season {
        let resolved = season.and_then(|s| {
            season_from_name(&s.name).or_else(|| Season::from_index(s.index as usize))
        });
        resolved.unwrap_or_else(|| {
            warn!(season = ?season, "Unrecognized season object, assuming spring");
            Season::Spring
        })
    }
}

impl CalendarAdapter for NestedSeasonAdapter {
    fn backend_id(&self) -> &str {
        &self.id
    }

    fn current_timestamp(&self) -> i64 {
        self.backend.timestamp()
    }

    fn to_date(&self, timestamp: i64) -> Option<CalendarDate> {
        let native = self.backend.timestamp_to_date(timestamp)?;
        Some(CalendarDate {
            year: native.year,
            month: native.month,
            day: native.day_of_month,
            hour: native.hour,
            minute: native.minute,
            season: Self::season(native.season.as_ref()),
            weekday: native.weekday,
            display: native.display,
        })
    }

    fn to_timestamp(&self, date: &CalendarDate) -> Result<i64, CalendarError> {
        let native = NestedDate {
            year: date.year,
            month: date.month,
            day_of_month: date.day,
            hour: date.hour,
            minute: date.minute,
            weekday: date.weekday.clone(),
            season: Some(NestedSeason {
                name: date.season.name().to_string(),
                index: date.season.index() as u8,
            }),
            display: date.display.clone(),
        };
        self.backend
            .date_to_timestamp(&native)
            .ok_or_else(|| invalid(date))
    }

    fn plus_interval(&self, timestamp: i64, interval: &Interval) -> Result<i64, CalendarError> {
        shift(&*self.backend, timestamp, interval)
    }
}
