use std::sync::Arc;

use tracing::{debug, info};

use super::{
    GenerateMode, WeatherError, WeatherGenerator, WeatherSnapshot, WeatherSource,
    forecast_message, weather_message,
};
use crate::calendar::{CalendarAdapter, CalendarDate, CalendarError, Interval};
use crate::config::weather::WeatherConfig;
use crate::model::{Climate, HexCell, Humidity, Season, WeatherEffect};
use crate::persistence::{SettingsStore, get_as, keys, set_as};

/// Delivers weather text to players.
pub trait Notifier: Send + Sync {
    fn post(&self, message: &str);
}

/// Plays whatever the host associates with an effect id.
pub trait EffectTrigger: Send + Sync {
    fn trigger(&self, effect: WeatherEffect);
}

/// Notifier that writes to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn post(&self, message: &str) {
        info!(message, "Weather report");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogEffects;

impl EffectTrigger for LogEffects {
    fn trigger(&self, effect: WeatherEffect) {
        debug!(effect = effect.id(), "Weather effect");
    }
}

/// How the host calendar moved between two observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateChange {
    /// Same calendar day; only the time of day changed.
    SameDay,
    /// Exactly one day forward.
    NextDay,
    /// Any other jump, forward or back.
    Jump,
}

impl DateChange {
    pub fn classify(
        calendar: &dyn CalendarAdapter,
        previous: &CalendarDate,
        current: &CalendarDate,
    ) -> Result<DateChange, CalendarError> {
        if previous.same_day(current) {
            return Ok(DateChange::SameDay);
        }
        let previous_day = calendar.day_timestamp(previous)?;
        let next_day = calendar.plus_interval(previous_day, &Interval::days(1))?;
        if calendar.day_timestamp(current)? == next_day {
            Ok(DateChange::NextDay)
        } else {
            Ok(DateChange::Jump)
        }
    }
}

/// Ties the generator to host events: date changes, condition changes and
/// manual overrides, with persistence and notification after each.
pub struct WeatherSession<S: SettingsStore> {
    generator: WeatherGenerator<S>,
    notifier: Arc<dyn Notifier>,
    effects: Arc<dyn EffectTrigger>,
    climate: Climate,
    humidity: Humidity,
    season: Season,
    use_celsius: bool,
    current: Option<WeatherSnapshot>,
}

impl<S: SettingsStore> WeatherSession<S> {
    /// Restore selections and the last snapshot from the generator's store,
    /// falling back to `config`.
    pub fn new(
        generator: WeatherGenerator<S>,
        notifier: Arc<dyn Notifier>,
        effects: Arc<dyn EffectTrigger>,
        config: &WeatherConfig,
    ) -> Self {
        let store = generator.store();
        let climate = get_as(store, keys::CLIMATE).unwrap_or(config.climate);
        let humidity = get_as(store, keys::HUMIDITY).unwrap_or(config.humidity);
        let season = get_as(store, keys::SEASON).unwrap_or(config.season);
        let current = get_as(store, keys::LAST_WEATHER);
        WeatherSession {
            generator,
            notifier,
            effects,
            climate,
            humidity,
            season,
            use_celsius: config.use_celsius,
            current,
        }
    }

    pub fn generator(&self) -> &WeatherGenerator<S> {
        &self.generator
    }

    pub fn current(&self) -> Option<&WeatherSnapshot> {
        self.current.as_ref()
    }

    pub fn climate(&self) -> Climate {
        self.climate
    }

    pub fn humidity(&self) -> Humidity {
        self.humidity
    }

    pub fn season(&self) -> Season {
        self.season
    }

    fn today(&self) -> Option<CalendarDate> {
        self.generator.calendar().and_then(|c| c.today())
    }

    /// React to the host calendar reaching `today`.
    pub async fn on_date_changed(
        &mut self,
        today: CalendarDate,
    ) -> Result<WeatherSnapshot, WeatherError> {
        let previous = self.current.as_ref().and_then(|c| c.date.clone());
        let change = match (&previous, self.generator.calendar()) {
            (Some(previous), Some(calendar)) => {
                DateChange::classify(calendar.as_ref(), previous, &today)?
            }
            (Some(_), None) => return Err(WeatherError::NoCalendar),
            (None, _) => DateChange::Jump,
        };
        debug!(?change, date = %today.display.date, "Calendar date changed");

        self.season = today.season;
        if let (DateChange::SameDay, Some(current)) = (change, &self.current) {
            let carried = current.with_date(today);
            set_as(self.generator.store(), keys::LAST_WEATHER, &carried).await?;
            self.current = Some(carried.clone());
            return Ok(carried);
        }

        let yesterday = self.current.clone();
        match change {
            DateChange::NextDay => {
                let mode = GenerateMode {
                    single_day_advance: true,
                    ..GenerateMode::default()
                };
                let (snapshot, source) = self
                    .generator
                    .generate_with_source(
                        self.climate,
                        self.humidity,
                        today.season,
                        Some(today.clone()),
                        yesterday.as_ref(),
                        mode,
                    )
                    .await?;
                if source == WeatherSource::Forecast {
                    self.generator
                        .refresh_forecast(&today, &snapshot, true)
                        .await?;
                }
                self.publish(snapshot).await
            }
            DateChange::SameDay | DateChange::Jump => {
                let snapshot = self
                    .generator
                    .generate(
                        self.climate,
                        self.humidity,
                        today.season,
                        Some(today),
                        yesterday.as_ref(),
                        GenerateMode::default(),
                    )
                    .await?;
                self.publish(snapshot).await
            }
        }
    }

    /// Re-roll today, ignoring any forecast for it, and rebuild the window.
    pub async fn regenerate(&mut self) -> Result<WeatherSnapshot, WeatherError> {
        let today = self.today();
        if let Some(date) = &today {
            self.season = date.season;
        }
        let yesterday = self.current.clone();
        let snapshot = self
            .generator
            .generate(
                self.climate,
                self.humidity,
                self.season,
                today,
                yesterday.as_ref(),
                GenerateMode {
                    force_regenerate: true,
                    ..GenerateMode::default()
                },
            )
            .await?;
        self.publish(snapshot).await
    }

    /// Change the climate/humidity selection and re-roll today for it.
    pub async fn set_conditions(
        &mut self,
        climate: Climate,
        humidity: Humidity,
    ) -> Result<WeatherSnapshot, WeatherError> {
        self.climate = climate;
        self.humidity = humidity;
        let store = self.generator.store();
        set_as(store, keys::CLIMATE, &climate).await?;
        set_as(store, keys::HUMIDITY, &humidity).await?;
        info!(%climate, %humidity, "Weather conditions changed");
        self.regenerate().await
    }

    /// Apply manual option `option_index`. `Ok(None)` if there is no such option.
    pub async fn apply_manual(
        &mut self,
        option_index: usize,
        temperature: i32,
    ) -> Result<Option<WeatherSnapshot>, WeatherError> {
        let today = self.today();
        let Some(snapshot) = self.generator.create_manual(
            today,
            self.season,
            self.climate,
            self.humidity,
            temperature,
            option_index,
        ) else {
            debug!(option_index, "No manual option at that index");
            return Ok(None);
        };
        self.publish(snapshot).await.map(Some)
    }

    pub async fn apply_specific(&mut self, cell: HexCell) -> Result<WeatherSnapshot, WeatherError> {
        let today = self.today();
        let snapshot = self.generator.create_specific_weather(
            today,
            self.season,
            self.climate,
            self.humidity,
            cell,
        )?;
        self.publish(snapshot).await
    }

    /// Text for the cached forecast window.
    pub fn forecast_report(&self) -> Result<String, WeatherError> {
        let calendar = self.generator.calendar().ok_or(WeatherError::NoCalendar)?;
        Ok(forecast_message(
            self.generator.forecasts(),
            calendar.as_ref(),
            self.generator.model(),
            self.use_celsius,
        ))
    }

    async fn publish(&mut self, snapshot: WeatherSnapshot) -> Result<WeatherSnapshot, WeatherError> {
        let store = self.generator.store();
        set_as(store, keys::LAST_WEATHER, &snapshot).await?;
        set_as(store, keys::SEASON, &snapshot.season).await?;

        let model = self.generator.model();
        self.notifier
            .post(&weather_message(&snapshot, model, self.use_celsius, None));
        if let Some(effect) = snapshot
            .hex_flower_cell
            .and_then(|cell| model.effect(snapshot.climate, snapshot.humidity, cell))
        {
            self.effects.trigger(effect);
        }
        info!(
            cell = ?snapshot.hex_flower_cell,
            temperature = ?snapshot.temperature,
            manual = snapshot.manual_only,
            "Weather updated"
        );
        self.current = Some(snapshot.clone());
        Ok(snapshot)
    }
}
