use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::{DirectionSampler, ForecastCache, WeatherError, WeatherSnapshot, jitter_bound};
use crate::calendar::{CalendarAdapter, CalendarDate};
use crate::config::weather::WeatherConfig;
use crate::model::{
    Climate, Direction, HexCell, Humidity, ManualOption, Season, WeatherModel, manual_options,
};
use crate::persistence::SettingsStore;

/// Flags for [`WeatherGenerator::generate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateMode {
    /// The call computes a forecast day; never trigger forecast work.
    pub for_forecast: bool,
    /// Ignore a cached forecast for today.
    pub force_regenerate: bool,
    /// The calendar moved forward exactly one day; only extend the window.
    pub single_day_advance: bool,
}

/// Where a generated day's cell came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherSource {
    Forecast,
    Walk,
    FreshStart,
}

/// One walk step from `yesterday`. `None` when the adjacency sentinel is hit.
pub fn transition(
    model: &WeatherModel,
    season: Season,
    yesterday: HexCell,
    direction: Direction,
) -> Option<HexCell> {
    model.next_cell(season, yesterday, direction)
}

/// RNG for a configured seed; 0 draws from OS entropy.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    if seed == 0 {
        ChaCha8Rng::from_entropy()
    } else {
        ChaCha8Rng::seed_from_u64(seed)
    }
}

/// Random walk and temperature resolution; knows nothing about calendars.
#[derive(Debug, Clone)]
struct Walker {
    model: Arc<WeatherModel>,
    sampler: DirectionSampler,
    rng: ChaCha8Rng,
}

impl Walker {
    fn fresh_start(&mut self, season: Season) -> Option<HexCell> {
        self.model
            .starting_cells(season)
            .choose(&mut self.rng)
            .copied()
    }

    fn roll(
        &mut self,
        climate: Climate,
        humidity: Humidity,
        season: Season,
        today: Option<CalendarDate>,
        yesterday: Option<&WeatherSnapshot>,
    ) -> (WeatherSnapshot, WeatherSource) {
        let origin = yesterday.and_then(|y| y.walk_origin(season));

        let (cell, source) = match origin {
            Some(from) => {
                let direction = self.sampler.sample(season, &mut self.rng);
                match transition(&self.model, season, from, direction) {
                    Some(next) => (Some(next), WeatherSource::Walk),
                    None => {
                        debug!(%season, cell = %from, ?direction, "Walk hit a dead end, starting fresh");
                        (self.fresh_start(season), WeatherSource::FreshStart)
                    }
                }
            }
            None => (self.fresh_start(season), WeatherSource::FreshStart),
        };

        let snapshot = self.resolve(climate, humidity, season, today, cell, false);
        (snapshot, source)
    }

    fn jitter(&mut self, base: i32) -> i32 {
        let bound = jitter_bound(base);
        base.saturating_add(self.rng.gen_range(-bound..=bound))
    }

    fn resolve(
        &mut self,
        climate: Climate,
        humidity: Humidity,
        season: Season,
        today: Option<CalendarDate>,
        cell: Option<HexCell>,
        manual_only: bool,
    ) -> WeatherSnapshot {
        let temperature = cell
            .and_then(|c| self.model.temperature(climate, humidity, c))
            .map(|base| self.jitter(base));
        WeatherSnapshot {
            date: today,
            season,
            humidity,
            climate,
            hex_flower_cell: cell,
            temperature,
            manual_only,
        }
    }
}

/// Produces each day's weather and keeps the forecast window in step.
pub struct WeatherGenerator<S: SettingsStore> {
    model: Arc<WeatherModel>,
    walker: Walker,
    calendar: Option<Arc<dyn CalendarAdapter>>,
    store: Arc<S>,
    forecasts: ForecastCache,
    forecasts_enabled: bool,
}

impl<S: SettingsStore> WeatherGenerator<S> {
    /// Build a generator; the forecast window is restored from `store`.
    pub fn new(
        model: Arc<WeatherModel>,
        sampler: DirectionSampler,
        rng: ChaCha8Rng,
        calendar: Option<Arc<dyn CalendarAdapter>>,
        store: Arc<S>,
        config: &WeatherConfig,
    ) -> Self {
        let forecasts = ForecastCache::load(&*store, config.forecast_days);
        WeatherGenerator {
            walker: Walker {
                model: Arc::clone(&model),
                sampler,
                rng,
            },
            model,
            calendar,
            store,
            forecasts,
            forecasts_enabled: config.forecasts_enabled,
        }
    }

    pub fn model(&self) -> &WeatherModel {
        &self.model
    }

    pub fn calendar(&self) -> Option<&Arc<dyn CalendarAdapter>> {
        self.calendar.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn forecasts(&self) -> &ForecastCache {
        &self.forecasts
    }

    pub fn forecasts_enabled(&self) -> bool {
        self.forecasts_enabled
    }

    fn require_calendar(&self) -> Result<Arc<dyn CalendarAdapter>, WeatherError> {
        self.calendar.clone().ok_or(WeatherError::NoCalendar)
    }

    /// Walk one day without consulting or updating the forecast window.
    pub fn roll(
        &mut self,
        climate: Climate,
        humidity: Humidity,
        season: Season,
        today: Option<CalendarDate>,
        yesterday: Option<&WeatherSnapshot>,
    ) -> WeatherSnapshot {
        self.walker
            .roll(climate, humidity, season, today, yesterday)
            .0
    }

    /// Weather for `today`: a cached forecast when one fits, otherwise a
    /// walk step from `yesterday`. Unless `mode.for_forecast` is set, the
    /// forecast window is then extended or regenerated.
    pub async fn generate(
        &mut self,
        climate: Climate,
        humidity: Humidity,
        season: Season,
        today: Option<CalendarDate>,
        yesterday: Option<&WeatherSnapshot>,
        mode: GenerateMode,
    ) -> Result<WeatherSnapshot, WeatherError> {
        self.generate_with_source(climate, humidity, season, today, yesterday, mode)
            .await
            .map(|(snapshot, _)| snapshot)
    }

    /// Like [`WeatherGenerator::generate`], also reporting where the cell came from.
    pub async fn generate_with_source(
        &mut self,
        climate: Climate,
        humidity: Humidity,
        season: Season,
        today: Option<CalendarDate>,
        yesterday: Option<&WeatherSnapshot>,
        mode: GenerateMode,
    ) -> Result<(WeatherSnapshot, WeatherSource), WeatherError> {
        let dated = match (&today, self.forecasts_enabled) {
            (Some(date), true) => {
                let calendar = self.require_calendar()?;
                let midnight = calendar.day_timestamp(date)?;
                Some((calendar, midnight))
            }
            _ => None,
        };

        let cached = match &dated {
            Some((_, midnight)) if !mode.force_regenerate => self.forecasts.get(*midnight).copied(),
            _ => None,
        };

        let mut stale_forecast = false;
        if let Some(forecast) = cached {
            if forecast.climate == climate && forecast.humidity == humidity {
                self.model
                    .validate_weather_parameters(climate, humidity, forecast.hex_flower_cell)?;
                debug!(timestamp = forecast.timestamp, cell = %forecast.hex_flower_cell, "Weather served from forecast");
                let snapshot = self.walker.resolve(
                    climate,
                    humidity,
                    season,
                    today,
                    Some(forecast.hex_flower_cell),
                    false,
                );
                return Ok((snapshot, WeatherSource::Forecast));
            }
            debug!(
                timestamp = forecast.timestamp,
                forecast_climate = %forecast.climate,
                forecast_humidity = %forecast.humidity,
                "Forecast made for other conditions, starting fresh"
            );
            stale_forecast = true;
        }

        let origin = if stale_forecast { None } else { yesterday };
        let (snapshot, source) = self
            .walker
            .roll(climate, humidity, season, today, origin);

        if let (false, Some((calendar, midnight))) = (mode.for_forecast, dated) {
            let walker = &mut self.walker;
            self.forecasts
                .generate_forecast(
                    midnight,
                    &snapshot,
                    mode.single_day_advance,
                    calendar.as_ref(),
                    &*self.store,
                    &self.model,
                    |previous, date| forecast_day(walker, previous, date),
                )
                .await?;
        }

        Ok((snapshot, source))
    }

    /// Extend or rebuild the window after `today` without generating today.
    pub async fn refresh_forecast(
        &mut self,
        today: &CalendarDate,
        weather: &WeatherSnapshot,
        extend_only: bool,
    ) -> Result<(), WeatherError> {
        if !self.forecasts_enabled {
            debug!("Forecasts disabled, nothing to refresh");
            return Ok(());
        }
        let calendar = self.require_calendar()?;
        let midnight = calendar.day_timestamp(today)?;
        let walker = &mut self.walker;
        self.forecasts
            .generate_forecast(
                midnight,
                weather,
                extend_only,
                calendar.as_ref(),
                &*self.store,
                &self.model,
                |previous, date| forecast_day(walker, previous, date),
            )
            .await?;
        Ok(())
    }

    pub fn manual_options(
        &self,
        season: Season,
        climate: Climate,
        humidity: Humidity,
    ) -> Vec<ManualOption> {
        manual_options(&self.model, season, climate, humidity)
    }

    /// Force one of the curated manual options. `None` when `option_index`
    /// is out of range. The temperature is jittered around `temperature`.
    pub fn create_manual(
        &mut self,
        today: Option<CalendarDate>,
        season: Season,
        climate: Climate,
        humidity: Humidity,
        temperature: i32,
        option_index: usize,
    ) -> Option<WeatherSnapshot> {
        let option = self
            .manual_options(season, climate, humidity)
            .into_iter()
            .nth(option_index)?;
        let temperature = self.walker.jitter(temperature);
        Some(WeatherSnapshot {
            date: today,
            season,
            humidity: option.humidity,
            climate: option.climate,
            hex_flower_cell: Some(option.cell),
            temperature: Some(temperature),
            manual_only: option.valid,
        })
    }

    /// Force a specific cell. Always breaks the walk.
    pub fn create_specific_weather(
        &mut self,
        today: Option<CalendarDate>,
        season: Season,
        climate: Climate,
        humidity: Humidity,
        cell: HexCell,
    ) -> Result<WeatherSnapshot, WeatherError> {
        self.model
            .validate_weather_parameters(climate, humidity, cell)?;
        Ok(self
            .walker
            .resolve(climate, humidity, season, today, Some(cell), true))
    }
}

fn forecast_day(walker: &mut Walker, previous: &WeatherSnapshot, date: CalendarDate) -> WeatherSnapshot {
    let season = date.season;
    walker
        .roll(previous.climate, previous.humidity, season, Some(date), Some(previous))
        .0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::reference::{ReferenceCalendar, utc_timestamp};
    use crate::calendar::{IndexedSeasonAdapter, Interval};
    use crate::model::CELL_COUNT;
    use crate::persistence::MemoryStore;
    use proptest::prelude::*;

    const DAY: i64 = 86_400;

    fn adapter() -> Arc<dyn CalendarAdapter> {
        Arc::new(IndexedSeasonAdapter::new(
            "reference",
            Arc::new(ReferenceCalendar::new(0)),
        ))
    }

    fn generator_with(
        sampler: DirectionSampler,
        calendar: Option<Arc<dyn CalendarAdapter>>,
        config: WeatherConfig,
    ) -> WeatherGenerator<MemoryStore> {
        WeatherGenerator::new(
            Arc::new(WeatherModel::new().unwrap()),
            sampler,
            seeded_rng(42),
            calendar,
            Arc::new(MemoryStore::new()),
            &config,
        )
    }

    fn generator() -> WeatherGenerator<MemoryStore> {
        generator_with(DirectionSampler::new(), Some(adapter()), WeatherConfig::default())
    }

    fn offline() -> WeatherGenerator<MemoryStore> {
        let config = WeatherConfig {
            forecasts_enabled: false,
            ..WeatherConfig::default()
        };
        generator_with(DirectionSampler::new(), None, config)
    }

    fn date(ts: i64) -> CalendarDate {
        adapter().to_date(ts).unwrap()
    }

    fn snapshot(season: Season, cell: u8) -> WeatherSnapshot {
        WeatherSnapshot {
            date: None,
            season,
            humidity: Humidity::Modest,
            climate: Climate::Temperate,
            hex_flower_cell: Some(HexCell(cell)),
            temperature: None,
            manual_only: false,
        }
    }

    #[test]
    fn stay_keeps_yesterdays_cell() {
        let model = WeatherModel::new().unwrap();
        assert_eq!(
            transition(&model, Season::Spring, HexCell(17), Direction::Stay),
            Some(HexCell(17))
        );
    }

    #[test]
    fn always_stay_sampler_keeps_the_cell() {
        let mut weights = [[0.0; 7]; 4];
        for row in &mut weights {
            row[0] = 1.0;
        }
        let sampler = DirectionSampler::with_weights(weights).unwrap();
        let mut generator = generator_with(sampler, None, WeatherConfig::default());
        let yesterday = snapshot(Season::Spring, 17);
        let today = generator.roll(
            Climate::Temperate,
            Humidity::Modest,
            Season::Spring,
            None,
            Some(&yesterday),
        );
        assert_eq!(today.hex_flower_cell, Some(HexCell(17)));
        assert!(!today.manual_only);
    }

    #[tokio::test]
    async fn season_change_restarts_from_the_new_season() {
        let mut generator = offline();
        let yesterday = snapshot(Season::Winter, 4);
        for _ in 0..50 {
            let today = generator
                .generate(
                    Climate::Temperate,
                    Humidity::Modest,
                    Season::Spring,
                    None,
                    Some(&yesterday),
                    GenerateMode::default(),
                )
                .await
                .unwrap();
            let cell = today.hex_flower_cell.unwrap();
            assert!(generator.model().starting_cells(Season::Spring).contains(&cell));
        }
    }

    #[tokio::test]
    async fn manual_yesterday_restarts_the_walk() {
        let mut generator = offline();
        let mut yesterday = snapshot(Season::Summer, 30);
        yesterday.manual_only = true;
        let today = generator
            .generate(
                Climate::Hot,
                Humidity::Barren,
                Season::Summer,
                None,
                Some(&yesterday),
                GenerateMode::default(),
            )
            .await
            .unwrap();
        let cell = today.hex_flower_cell.unwrap();
        assert!(generator.model().starting_cells(Season::Summer).contains(&cell));
    }

    #[tokio::test]
    async fn dead_end_origin_falls_back_to_a_seasonal_start() {
        let mut generator = offline();
        // Cell 15 is winter-only, so every spring transition from it is the sentinel.
        let yesterday = snapshot(Season::Spring, 15);
        for _ in 0..50 {
            let (today, source) = generator
                .generate_with_source(
                    Climate::Temperate,
                    Humidity::Modest,
                    Season::Spring,
                    None,
                    Some(&yesterday),
                    GenerateMode::default(),
                )
                .await
                .unwrap();
            assert_eq!(source, WeatherSource::FreshStart);
            let cell = today.hex_flower_cell.unwrap();
            assert!(generator.model().starting_cells(Season::Spring).contains(&cell));
        }
    }

    #[test]
    fn walk_stays_inside_the_season_region() {
        let mut generator = offline();
        for season in Season::ALL {
            let mut day = generator.roll(Climate::Cold, Humidity::Verdant, season, None, None);
            for _ in 0..200 {
                let cell = day.hex_flower_cell.unwrap();
                assert!(generator.model().is_in_season(cell, season));
                day = generator.roll(Climate::Cold, Humidity::Verdant, season, None, Some(&day));
            }
        }
    }

    #[test]
    fn out_of_range_manual_option_is_empty() {
        let mut generator = generator();
        let result = generator.create_manual(
            None,
            Season::Spring,
            Climate::Temperate,
            Humidity::Modest,
            75,
            999,
        );
        assert!(result.is_none());
    }

    #[test]
    fn manual_option_jitters_around_the_requested_temperature() {
        let mut generator = generator();
        let options =
            generator.manual_options(Season::Spring, Climate::Temperate, Humidity::Modest);
        for (i, option) in options.iter().enumerate() {
            let snapshot = generator
                .create_manual(None, Season::Spring, Climate::Temperate, Humidity::Modest, 75, i)
                .unwrap();
            let t = snapshot.temperature.unwrap();
            assert!((72..=78).contains(&t), "{t}");
            assert_eq!(snapshot.hex_flower_cell, Some(option.cell));
            assert_eq!(snapshot.manual_only, option.valid);
            assert_eq!((snapshot.climate, snapshot.humidity), (option.climate, option.humidity));
        }
    }

    #[tokio::test]
    async fn native_manual_option_reseeds_the_next_day() {
        let mut generator = offline();
        let options =
            generator.manual_options(Season::Spring, Climate::Temperate, Humidity::Modest);
        let index = options.iter().position(|o| o.valid).unwrap();
        let manual = generator
            .create_manual(None, Season::Spring, Climate::Temperate, Humidity::Modest, 75, index)
            .unwrap();
        assert!(manual.manual_only);

        let (_, source) = generator
            .generate_with_source(
                Climate::Temperate,
                Humidity::Modest,
                Season::Spring,
                None,
                Some(&manual),
                GenerateMode::default(),
            )
            .await
            .unwrap();
        assert_eq!(source, WeatherSource::FreshStart);
    }

    #[test]
    fn manual_temperature_saturates_at_the_extremes() {
        let mut generator = offline();
        let cases = [
            (i32::MAX, i32::MAX - jitter_bound(i32::MAX), i32::MAX),
            (i32::MIN, i32::MIN, i32::MIN + 2),
        ];
        for (base, lo, hi) in cases {
            let snapshot = generator
                .create_manual(None, Season::Spring, Climate::Temperate, Humidity::Modest, base, 0)
                .unwrap();
            let t = snapshot.temperature.unwrap();
            assert!((lo..=hi).contains(&t), "{t}");
        }
    }

    #[test]
    fn specific_weather_is_manual_and_validated() {
        let mut generator = generator();
        let snapshot = generator
            .create_specific_weather(None, Season::Fall, Climate::Hot, Humidity::Verdant, HexCell(12))
            .unwrap();
        assert!(snapshot.manual_only);
        assert_eq!(snapshot.hex_flower_cell, Some(HexCell(12)));

        let err = generator
            .create_specific_weather(None, Season::Fall, Climate::Hot, Humidity::Verdant, HexCell(37))
            .unwrap_err();
        assert!(matches!(err, WeatherError::InvalidParameters { .. }));
    }

    #[tokio::test]
    async fn dated_generation_without_calendar_fails() {
        let mut generator = generator_with(DirectionSampler::new(), None, WeatherConfig::default());
        let today = date(utc_timestamp(2024, 4, 1, 9, 0).unwrap());
        let err = generator
            .generate(
                Climate::Temperate,
                Humidity::Modest,
                Season::Spring,
                Some(today),
                None,
                GenerateMode::default(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, WeatherError::NoCalendar));
    }

    #[tokio::test]
    async fn generation_fills_the_forecast_window() {
        let mut generator = generator();
        let ts = utc_timestamp(2024, 4, 1, 9, 0).unwrap();
        let midnight = utc_timestamp(2024, 4, 1, 0, 0).unwrap();
        generator
            .generate(
                Climate::Temperate,
                Humidity::Modest,
                Season::Spring,
                Some(date(ts)),
                None,
                GenerateMode::default(),
            )
            .await
            .unwrap();
        let keys: Vec<i64> = generator.forecasts().entries().keys().copied().collect();
        assert_eq!(keys, (1..=7).map(|k| midnight + k * DAY).collect::<Vec<_>>());
        assert!(generator.store().get(crate::persistence::keys::FORECASTS).is_some());
    }

    #[tokio::test]
    async fn next_day_is_served_from_the_forecast() {
        let mut generator = generator();
        let calendar = adapter();
        let ts = utc_timestamp(2024, 4, 1, 9, 0).unwrap();
        let first = generator
            .generate(
                Climate::Temperate,
                Humidity::Modest,
                Season::Spring,
                Some(date(ts)),
                None,
                GenerateMode::default(),
            )
            .await
            .unwrap();
        let tomorrow_ts = calendar.plus_interval(ts, &Interval::days(1)).unwrap();
        let tomorrow_key = utc_timestamp(2024, 4, 2, 0, 0).unwrap();
        let expected = generator.forecasts().get(tomorrow_key).copied().unwrap();
        let window = generator.forecasts().entries().clone();

        let (second, source) = generator
            .generate_with_source(
                Climate::Temperate,
                Humidity::Modest,
                Season::Spring,
                Some(date(tomorrow_ts)),
                Some(&first),
                GenerateMode {
                    single_day_advance: true,
                    ..GenerateMode::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(source, WeatherSource::Forecast);
        assert_eq!(second.hex_flower_cell, Some(expected.hex_flower_cell));
        assert_eq!(generator.forecasts().entries(), &window);
    }

    #[tokio::test]
    async fn forecast_for_other_conditions_is_not_reused() {
        let mut generator = generator();
        let ts = utc_timestamp(2024, 4, 1, 9, 0).unwrap();
        generator
            .generate(
                Climate::Temperate,
                Humidity::Modest,
                Season::Spring,
                Some(date(ts)),
                None,
                GenerateMode::default(),
            )
            .await
            .unwrap();
        let tomorrow = date(ts + DAY);
        let (snapshot, source) = generator
            .generate_with_source(
                Climate::Hot,
                Humidity::Barren,
                Season::Spring,
                Some(tomorrow),
                None,
                GenerateMode::default(),
            )
            .await
            .unwrap();
        assert_eq!(source, WeatherSource::FreshStart);
        assert_eq!(snapshot.climate, Climate::Hot);
        assert!(
            generator
                .forecasts()
                .entries()
                .values()
                .all(|f| f.climate == Climate::Hot)
        );
    }

    #[tokio::test]
    async fn force_regenerate_skips_the_forecast() {
        let mut generator = generator();
        let ts = utc_timestamp(2024, 4, 1, 9, 0).unwrap();
        let first = generator
            .generate(
                Climate::Temperate,
                Humidity::Modest,
                Season::Spring,
                Some(date(ts)),
                None,
                GenerateMode::default(),
            )
            .await
            .unwrap();
        let (_, source) = generator
            .generate_with_source(
                Climate::Temperate,
                Humidity::Modest,
                Season::Spring,
                Some(date(ts + DAY)),
                Some(&first),
                GenerateMode {
                    force_regenerate: true,
                    ..GenerateMode::default()
                },
            )
            .await
            .unwrap();
        assert_ne!(source, WeatherSource::Forecast);
    }

    #[tokio::test]
    async fn forecast_calls_do_not_touch_the_window() {
        let mut generator = generator();
        let ts = utc_timestamp(2024, 4, 1, 9, 0).unwrap();
        generator
            .generate(
                Climate::Temperate,
                Humidity::Modest,
                Season::Spring,
                Some(date(ts)),
                None,
                GenerateMode {
                    for_forecast: true,
                    ..GenerateMode::default()
                },
            )
            .await
            .unwrap();
        assert!(generator.forecasts().is_empty());
    }

    proptest! {
        #[test]
        fn rolled_weather_is_valid_and_within_jitter(
            seed in 1u64..u64::MAX,
            c in 0usize..3,
            h in 0usize..3,
            s in 0usize..4,
            start in 0u8..CELL_COUNT as u8,
        ) {
            let climate = Climate::ALL[c];
            let humidity = Humidity::ALL[h];
            let season = Season::ALL[s];
            let model = Arc::new(WeatherModel::new().unwrap());
            let mut generator = WeatherGenerator::new(
                Arc::clone(&model),
                DirectionSampler::new(),
                seeded_rng(seed),
                None,
                Arc::new(MemoryStore::new()),
                &WeatherConfig { forecasts_enabled: false, ..WeatherConfig::default() },
            );
            let yesterday = WeatherSnapshot {
                climate,
                humidity,
                ..snapshot(season, start)
            };
            let today = generator.roll(climate, humidity, season, None, Some(&yesterday));
            let cell = today.hex_flower_cell.unwrap();
            prop_assert!(model.validate_weather_parameters(climate, humidity, cell).is_ok());
            prop_assert!(model.is_in_season(cell, season));
            let base = model.temperature(climate, humidity, cell).unwrap();
            let t = today.temperature.unwrap();
            prop_assert!((t - base).abs() <= jitter_bound(base));
        }
    }
}
