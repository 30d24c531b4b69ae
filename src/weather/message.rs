//! Text payloads for the notification collaborator.

use super::{ForecastCache, WeatherSnapshot};
use crate::calendar::CalendarAdapter;
use crate::model::WeatherModel;

/// Render a table temperature (Fahrenheit) in the display unit.
pub fn format_temperature(fahrenheit: i32, use_celsius: bool) -> String {
    if use_celsius {
        let celsius = (f64::from(fahrenheit) - 32.0) * 5.0 / 9.0;
        format!("{}°C", celsius.round() as i32)
    } else {
        format!("{}°F", fahrenheit)
    }
}

/// "72°F - Partly cloudy", followed by `custom` on its own line.
pub fn weather_message(
    snapshot: &WeatherSnapshot,
    model: &WeatherModel,
    use_celsius: bool,
    custom: Option<&str>,
) -> String {
    let temperature = snapshot
        .temperature
        .map(|t| format_temperature(t, use_celsius))
        .unwrap_or_else(|| "--".to_string());
    let description = snapshot
        .hex_flower_cell
        .and_then(|cell| model.description(snapshot.climate, snapshot.humidity, cell))
        .unwrap_or("Unknown weather");

    let mut message = format!("{} - {}", temperature, description);
    if let Some(text) = custom.map(str::trim).filter(|t| !t.is_empty()) {
        message.push('\n');
        message.push_str(text);
    }
    message
}

/// One line per cached day, in date order, using the table temperature.
pub fn forecast_message(
    forecasts: &ForecastCache,
    calendar: &dyn CalendarAdapter,
    model: &WeatherModel,
    use_celsius: bool,
) -> String {
    if forecasts.is_empty() {
        return "No forecast available".to_string();
    }
    let mut lines = vec!["Forecast".to_string()];
    for (timestamp, forecast) in forecasts.entries() {
        let day = calendar
            .to_date(*timestamp)
            .map(|d| {
                if d.display.date.is_empty() {
                    format!("{}-{:02}-{:02}", d.year, d.month, d.day)
                } else {
                    d.display.date
                }
            })
            .unwrap_or_else(|| timestamp.to_string());
        let cell = forecast.hex_flower_cell;
        let temperature = model
            .temperature(forecast.climate, forecast.humidity, cell)
            .map(|t| format_temperature(t, use_celsius))
            .unwrap_or_else(|| "--".to_string());
        let description = model
            .description(forecast.climate, forecast.humidity, cell)
            .unwrap_or("Unknown weather");
        lines.push(format!("{}: {} - {}", day, temperature, description));
    }
    lines.join("\n")
}
