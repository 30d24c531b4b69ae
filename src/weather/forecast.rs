use std::collections::BTreeMap;

use tracing::{info, warn};

use super::{Forecast, WeatherError, WeatherSnapshot};
use crate::calendar::{CalendarAdapter, CalendarDate, CalendarError, Interval};
use crate::model::WeatherModel;
use crate::persistence::{SettingsStore, get_as, keys, set_as};

/// Rolling window of precomputed days, keyed by midnight timestamp.
#[derive(Debug, Clone)]
pub struct ForecastCache {
    entries: BTreeMap<i64, Forecast>,
    days: u32,
}

impl ForecastCache {
    pub fn new(days: u32) -> Self {
        ForecastCache {
            entries: BTreeMap::new(),
            days,
        }
    }

    /// Restore the persisted window, if any.
    pub fn load(store: &impl SettingsStore, days: u32) -> Self {
        ForecastCache {
            entries: get_as(store, keys::FORECASTS).unwrap_or_default(),
            days,
        }
    }

    pub fn get(&self, timestamp: i64) -> Option<&Forecast> {
        self.entries.get(&timestamp)
    }

    pub fn entries(&self) -> &BTreeMap<i64, Forecast> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rebuild or top up the window after `today_ts` and persist it.
    ///
    /// Full mode replaces the whole map with days `1..=days`, each chained
    /// from the previous day's result. Extend mode drops entries at or
    /// before `today_ts`, fills missing or unusable days from the nearest
    /// earlier day, and appends day `days + 1` when nothing was missing.
    /// `roll` produces the weather for a date given the day before it.
    #[allow(clippy::too_many_arguments)]
    pub async fn generate_forecast<S, F>(
        &mut self,
        today_ts: i64,
        today_weather: &WeatherSnapshot,
        extend_only: bool,
        calendar: &dyn CalendarAdapter,
        store: &S,
        model: &WeatherModel,
        mut roll: F,
    ) -> Result<&BTreeMap<i64, Forecast>, WeatherError>
    where
        S: SettingsStore,
        F: FnMut(&WeatherSnapshot, CalendarDate) -> WeatherSnapshot,
    {
        let mut previous = today_weather.clone();
        let mut written = 0usize;

        if extend_only {
            let before = self.entries.len();
            self.entries = self.entries.split_off(&today_ts.saturating_add(1));
            let pruned = before - self.entries.len();

            let mut missing = 0usize;
            for k in 1..=i64::from(self.days) {
                let (key, date) = day_after(calendar, today_ts, k)?;
                let cached = self
                    .entries
                    .get(&key)
                    .filter(|f| usable(model, f))
                    .copied();
                match cached {
                    Some(f) => previous = from_forecast(&f, date),
                    None => {
                        missing += 1;
                        let next = roll(&previous, date);
                        written += self.store_day(model, key, &next);
                        previous = next;
                    }
                }
            }

            if missing == 0 {
                let (key, date) = day_after(calendar, today_ts, i64::from(self.days) + 1)?;
                if !self.entries.contains_key(&key) {
                    let next = roll(&previous, date);
                    written += self.store_day(model, key, &next);
                }
            }

            info!(
                today = today_ts,
                pruned,
                written,
                total = self.entries.len(),
                "Forecast extended"
            );
        } else {
            self.entries.clear();
            for k in 1..=i64::from(self.days) {
                let (key, date) = day_after(calendar, today_ts, k)?;
                let next = roll(&previous, date);
                written += self.store_day(model, key, &next);
                previous = next;
            }
            info!(today = today_ts, written, "Forecast regenerated");
        }

        set_as(store, keys::FORECASTS, &self.entries).await?;
        Ok(&self.entries)
    }

    /// Insert `weather` under `key` if its cell checks out. Returns 1 if stored.
    fn store_day(&mut self, model: &WeatherModel, key: i64, weather: &WeatherSnapshot) -> usize {
        let Some(cell) = weather.hex_flower_cell else {
            warn!(timestamp = key, "Forecast day produced no cell, leaving it empty");
            return 0;
        };
        if let Err(e) = model.validate_weather_parameters(weather.climate, weather.humidity, cell) {
            warn!(timestamp = key, error = %e, "Discarding invalid forecast day");
            return 0;
        }
        self.entries.insert(
            key,
            Forecast {
                timestamp: key,
                climate: weather.climate,
                humidity: weather.humidity,
                hex_flower_cell: cell,
            },
        );
        1
    }
}

/// Midnight key and date of the day `k` days after `today_ts`.
fn day_after(
    calendar: &dyn CalendarAdapter,
    today_ts: i64,
    k: i64,
) -> Result<(i64, CalendarDate), WeatherError> {
    let ts = calendar.plus_interval(today_ts, &Interval::days(k))?;
    let date = calendar
        .to_date(ts)
        .ok_or(CalendarError::OutOfRange(ts))?;
    let key = calendar.day_timestamp(&date)?;
    Ok((key, date))
}

/// A cached day is kept while its own climate/humidity/cell still check out.
fn usable(model: &WeatherModel, forecast: &Forecast) -> bool {
    model
        .validate_weather_parameters(forecast.climate, forecast.humidity, forecast.hex_flower_cell)
        .is_ok()
}

fn from_forecast(forecast: &Forecast, date: CalendarDate) -> WeatherSnapshot {
    WeatherSnapshot {
        season: date.season,
        date: Some(date),
        humidity: forecast.humidity,
        climate: forecast.climate,
        hex_flower_cell: Some(forecast.hex_flower_cell),
        temperature: None,
        manual_only: false,
    }
}
