use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use crate::calendar::reference::{ReferenceCalendar, ReferenceHost, utc_timestamp};
use crate::calendar::{CalendarAdapter, CalendarDate, CalendarManager, Interval};
use crate::config::weather::WeatherConfig;
use crate::model::{CELL_COUNT, Climate, HexCell, Humidity, Season, WeatherModel, layout};
use crate::persistence::JsonFileStore;
use crate::weather::generator::seeded_rng;
use crate::weather::{
    DirectionSampler, LogEffects, LogNotifier, WeatherGenerator, WeatherSession, WeatherSnapshot,
    format_temperature, weather_message,
};

/// A session wired to the settings file and a reference calendar clock.
pub struct Runtime {
    pub session: WeatherSession<JsonFileStore>,
    pub clock: Arc<ReferenceCalendar>,
    pub calendar: Arc<dyn CalendarAdapter>,
    pub use_celsius: bool,
}

impl Runtime {
    /// Open the store and detect the calendar. The reference clock starts at
    /// the last recorded weather date, or now.
    pub async fn open(config: &WeatherConfig) -> Result<Self, String> {
        let model = Arc::new(
            WeatherModel::new().map_err(|e| format!("Weather tables are malformed: {}", e))?,
        );
        let store = Arc::new(
            JsonFileStore::open(&config.store_path)
                .await
                .map_err(|e| format!("Cannot open settings store: {}", e))?,
        );

        let clock = Arc::new(ReferenceCalendar::new(chrono::Utc::now().timestamp()));
        let mut host = ReferenceHost::new(Arc::clone(&clock));
        if let Some(first) = config.calendar_backends.first() {
            host = host.with_module(&first.id, first.kind, &first.min_version);
        }
        let calendar = CalendarManager::detect(&host, &config.calendar_backends)
            .require()
            .map_err(|e| e.to_string())?;

        let generator = WeatherGenerator::new(
            model,
            DirectionSampler::new(),
            seeded_rng(config.seed),
            Some(Arc::clone(&calendar)),
            store,
            config,
        );
        let session = WeatherSession::new(
            generator,
            Arc::new(LogNotifier),
            Arc::new(LogEffects),
            config,
        );

        if let Some(date) = session.current().and_then(|s| s.date.as_ref()) {
            let ts = calendar.to_timestamp(date).map_err(|e| e.to_string())?;
            clock.set_now(ts);
        }

        Ok(Runtime {
            session,
            clock,
            calendar,
            use_celsius: config.use_celsius,
        })
    }

    fn today(&self) -> Result<CalendarDate, String> {
        self.calendar
            .today()
            .ok_or_else(|| "Reference clock is outside the calendar's range".to_string())
    }

    fn print(&self, snapshot: &WeatherSnapshot) {
        let date = snapshot
            .date
            .as_ref()
            .map(|d| format!("{} {}", d.display.date, d.display.time))
            .unwrap_or_else(|| "(undated)".to_string());
        let cell = snapshot
            .hex_flower_cell
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{} [{} {}/{}, cell {}{}]",
            date,
            snapshot.season,
            snapshot.climate,
            snapshot.humidity,
            cell,
            if snapshot.manual_only { ", manual" } else { "" }
        );
        println!(
            "  {}",
            weather_message(snapshot, self.session.generator().model(), self.use_celsius, None)
        );
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| format!("Invalid date '{}': {}. Example: --date 2024-04-01", raw, e))
}

/// Print every cell's table values for one climate/humidity pair.
pub fn cells(climate: Climate, humidity: Humidity, season: Option<Season>) -> Result<(), String> {
    let model = WeatherModel::new().map_err(|e| format!("Weather tables are malformed: {}", e))?;
    let starts = season.map(|s| model.starting_cells(s).to_vec()).unwrap_or_default();

    println!("{} / {}", climate, humidity);
    println!(
        "{:>4} {:>8} {:>6} {:<12} {:<32}",
        "Cell", "Region", "Temp", "Effect", "Description"
    );
    println!("{}", "-".repeat(66));
    for i in 0..CELL_COUNT as u8 {
        let cell = HexCell(i);
        if let Some(s) = season {
            if !model.is_in_season(cell, s) {
                continue;
            }
        }
        let region = layout::season_region(cell)
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        let temperature = model
            .temperature(climate, humidity, cell)
            .map(|t| format_temperature(t, false))
            .unwrap_or_default();
        let effect = model
            .effect(climate, humidity, cell)
            .map(|e| e.id())
            .unwrap_or("-");
        let description = model.description(climate, humidity, cell).unwrap_or("?");
        let marker = if starts.contains(&cell) { "*" } else { "" };
        println!(
            "{:>4} {:>8} {:>6} {:<12} {}{}",
            i, region, temperature, effect, description, marker
        );
    }
    if season.is_some() {
        println!("\n* starting cell");
    }
    Ok(())
}

/// Move the clock to `date` at `hour` and react as the host would.
pub async fn roll(config: &WeatherConfig, date: &str, hour: u32) -> Result<(), String> {
    let mut rt = Runtime::open(config).await?;
    let day = parse_date(date)?;
    let ts = utc_timestamp(day.year(), day.month(), day.day(), hour, 0)
        .ok_or_else(|| format!("Invalid time {}:00. Example: --hour 9", hour))?;
    rt.clock.set_now(ts);
    let today = rt.today()?;
    let snapshot = rt
        .session
        .on_date_changed(today)
        .await
        .map_err(|e| e.to_string())?;
    rt.print(&snapshot);
    Ok(())
}

/// Step the clock one day at a time, generating each day.
pub async fn advance(config: &WeatherConfig, days: u32) -> Result<(), String> {
    let mut rt = Runtime::open(config).await?;
    if rt.session.current().is_none() {
        let today = rt.today()?;
        let snapshot = rt
            .session
            .on_date_changed(today)
            .await
            .map_err(|e| e.to_string())?;
        rt.print(&snapshot);
    }
    for _ in 0..days {
        rt.clock
            .advance(&Interval::days(1))
            .ok_or_else(|| "Reference clock overflowed".to_string())?;
        let today = rt.today()?;
        let snapshot = rt
            .session
            .on_date_changed(today)
            .await
            .map_err(|e| e.to_string())?;
        rt.print(&snapshot);
    }
    Ok(())
}

/// Show the forecast window. Re-rolls today first when asked or when the
/// window is empty.
pub async fn forecast(config: &WeatherConfig, regenerate: bool) -> Result<(), String> {
    let mut rt = Runtime::open(config).await?;
    if !config.forecasts_enabled {
        return Err("Forecasts are disabled. Example: forecasts_enabled = true".to_string());
    }
    if regenerate || rt.session.generator().forecasts().is_empty() {
        let snapshot = rt.session.regenerate().await.map_err(|e| e.to_string())?;
        rt.print(&snapshot);
    }
    let report = rt.session.forecast_report().map_err(|e| e.to_string())?;
    println!("{}", report);
    Ok(())
}

/// List manual options, or apply one.
pub async fn manual(
    config: &WeatherConfig,
    list: bool,
    option: Option<usize>,
    temperature: Option<i32>,
) -> Result<(), String> {
    let mut rt = Runtime::open(config).await?;
    let options = rt.session.generator().manual_options(
        rt.session.season(),
        rt.session.climate(),
        rt.session.humidity(),
    );

    if list || option.is_none() {
        println!(
            "Manual weather for {} {}/{}:",
            rt.session.season(),
            rt.session.climate(),
            rt.session.humidity()
        );
        for (i, o) in options.iter().enumerate() {
            let borrowed = if o.valid {
                String::new()
            } else {
                format!(" (from {}/{} cell {})", o.climate, o.humidity, o.cell)
            };
            println!("{:>3}  {}{}", i, o.label, borrowed);
        }
        return Ok(());
    }

    let index = option.unwrap_or_default();
    let temperature = match temperature {
        Some(t) => t,
        None => options
            .get(index)
            .and_then(|o| rt.session.generator().model().temperature(o.climate, o.humidity, o.cell))
            .unwrap_or_default(),
    };
    match rt
        .session
        .apply_manual(index, temperature)
        .await
        .map_err(|e| e.to_string())?
    {
        Some(snapshot) => {
            rt.print(&snapshot);
            Ok(())
        }
        None => Err(format!(
            "No manual option {}; {} are available (see --list)",
            index,
            options.len()
        )),
    }
}

/// Force a specific cell for today.
pub async fn specific(config: &WeatherConfig, cell: u8) -> Result<(), String> {
    let mut rt = Runtime::open(config).await?;
    let snapshot = rt
        .session
        .apply_specific(HexCell(cell))
        .await
        .map_err(|e| e.to_string())?;
    rt.print(&snapshot);
    Ok(())
}

/// Change the climate/humidity selection and re-roll today.
pub async fn conditions(
    config: &WeatherConfig,
    climate: Climate,
    humidity: Humidity,
) -> Result<(), String> {
    let mut rt = Runtime::open(config).await?;
    let snapshot = rt
        .session
        .set_conditions(climate, humidity)
        .await
        .map_err(|e| e.to_string())?;
    rt.print(&snapshot);
    Ok(())
}
