//! Day-by-day weather: snapshots, the seasonal random walk, and the
//! rolling forecast window.

pub mod forecast;
pub mod generator;
pub mod message;
pub mod sampler;
pub mod session;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::{CalendarDate, CalendarError};
use crate::model::{Climate, HexCell, Humidity, ModelError, Season};
use crate::persistence::StoreError;

pub use forecast::ForecastCache;
pub use generator::{GenerateMode, WeatherGenerator, WeatherSource};
pub use message::{forecast_message, format_temperature, weather_message};
pub use sampler::DirectionSampler;
pub use session::{DateChange, EffectTrigger, LogEffects, LogNotifier, Notifier, WeatherSession};

/// One day's resolved weather. Replaced, never edited, when the day changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub date: Option<CalendarDate>,
    pub season: Season,
    pub humidity: Humidity,
    pub climate: Climate,
    pub hex_flower_cell: Option<HexCell>,
    pub temperature: Option<i32>,
    /// Set by manual overrides; the next walk step reseeds instead of
    /// continuing from this cell.
    pub manual_only: bool,
}

impl WeatherSnapshot {
    /// The same weather observed at a different time of day.
    pub fn with_date(&self, date: CalendarDate) -> WeatherSnapshot {
        WeatherSnapshot {
            date: Some(date),
            ..self.clone()
        }
    }

    /// Cell the walk may continue from in `season`, if any.
    pub fn walk_origin(&self, season: Season) -> Option<HexCell> {
        if self.manual_only || self.season != season {
            return None;
        }
        self.hex_flower_cell
    }
}

/// A precomputed future day, keyed by the midnight timestamp of its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    pub timestamp: i64,
    pub climate: Climate,
    pub humidity: Humidity,
    pub hex_flower_cell: HexCell,
}

/// Largest temperature deviation allowed around `base`: `max(2, ceil(4% of base))`.
pub fn jitter_bound(base: i32) -> i32 {
    let scaled = (i64::from(base.max(0)) * 4 + 99) / 100;
    (scaled as i32).max(2)
}

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("no weather for cell {cell} in {climate}/{humidity}")]
    InvalidParameters {
        climate: Climate,
        humidity: Humidity,
        cell: HexCell,
    },
    #[error("no calendar backend is active; forecasts and dated weather need one")]
    NoCalendar,
    #[error("settings store: {0}")]
    Store(#[from] StoreError),
    #[error("calendar: {0}")]
    Calendar(CalendarError),
    #[error("weather model: {0}")]
    Model(ModelError),
}

impl From<CalendarError> for WeatherError {
    fn from(e: CalendarError) -> Self {
        match e {
            CalendarError::NoCalendar => WeatherError::NoCalendar,
            other => WeatherError::Calendar(other),
        }
    }
}

impl From<ModelError> for WeatherError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::InvalidParameters {
                climate,
                humidity,
                cell,
            } => WeatherError::InvalidParameters {
                climate,
                humidity,
                cell,
            },
            other => WeatherError::Model(other),
        }
    }
}
