use serde::Deserialize;
use std::path::Path;

use crate::calendar::BackendCandidate;
use crate::calendar::manager::parse_version;
use crate::model::{Climate, Humidity, Season};

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    #[serde(default = "default_forecasts_enabled")]
    pub forecasts_enabled: bool,
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u32,
    #[serde(default)]
    pub use_celsius: bool,
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "default_store_path")]
    pub store_path: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_climate")]
    pub climate: Climate,
    #[serde(default = "default_humidity")]
    pub humidity: Humidity,
    #[serde(default = "default_season")]
    pub season: Season,
    #[serde(default = "BackendCandidate::defaults")]
    pub calendar_backends: Vec<BackendCandidate>,
}

fn default_forecasts_enabled() -> bool {
    true
}
fn default_forecast_days() -> u32 {
    7
}
fn default_store_path() -> String {
    "./hexweather.json".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_climate() -> Climate {
    Climate::Temperate
}
fn default_humidity() -> Humidity {
    Humidity::Modest
}
fn default_season() -> Season {
    Season::Spring
}

impl Default for WeatherConfig {
    fn default() -> Self {
        WeatherConfig {
            forecasts_enabled: default_forecasts_enabled(),
            forecast_days: default_forecast_days(),
            use_celsius: false,
            seed: 0,
            store_path: default_store_path(),
            log_level: default_log_level(),
            climate: default_climate(),
            humidity: default_humidity(),
            season: default_season(),
            calendar_backends: BackendCandidate::defaults(),
        }
    }
}

impl WeatherConfig {
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
        Self::from_toml_str(&content, path)
    }

    /// Like [`WeatherConfig::from_file`], but a missing file yields the defaults.
    pub fn from_file_or_default(path: &Path) -> Result<Self, String> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str, source_path: &Path) -> Result<Self, String> {
        let config: WeatherConfig =
            toml::from_str(content).map_err(|e| format!("{}: {}", source_path.display(), e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        let mut errors = Vec::new();

        if !(1..=14).contains(&self.forecast_days) {
            errors.push(format!(
                "forecast_days must be 1-14, got {}. Example: forecast_days = 7",
                self.forecast_days
            ));
        }

        if self.store_path.trim().is_empty() {
            errors.push(
                "store_path must not be empty. Example: store_path = \"./hexweather.json\""
                    .to_string(),
            );
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            errors.push(format!(
                "log_level must be one of {:?}, got '{}'. Example: log_level = \"info\"",
                valid_levels, self.log_level
            ));
        }

        for (i, backend) in self.calendar_backends.iter().enumerate() {
            if backend.id.trim().is_empty() {
                errors.push(format!(
                    "calendar_backends[{}].id must not be empty. Example: id = \"calendaria\"",
                    i
                ));
            }
            if parse_version(&backend.min_version).is_none() {
                errors.push(format!(
                    "calendar_backends[{}].min_version must be a version, got '{}'. Example: min_version = \"0.7.0\"",
                    i, backend.min_version
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::BackendKind;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn test_path() -> PathBuf {
        PathBuf::from("test-hexweather.toml")
    }

    #[test]
    fn valid_config_loads_all_fields() {
        let toml = r#"
            forecasts_enabled = false
            forecast_days = 10
            use_celsius = true
            seed = 42
            store_path = "./data/weather.json"
            log_level = "debug"
            climate = "hot"
            humidity = "barren"
            season = "winter"

            [[calendar_backends]]
            id = "my-calendar"
            min_version = "1.2"
            kind = "nested"
        "#;
        let config = WeatherConfig::from_toml_str(toml, &test_path()).unwrap();
        assert!(!config.forecasts_enabled);
        assert_eq!(config.forecast_days, 10);
        assert!(config.use_celsius);
        assert_eq!(config.seed, 42);
        assert_eq!(config.store_path, "./data/weather.json");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.climate, Climate::Hot);
        assert_eq!(config.humidity, Humidity::Barren);
        assert_eq!(config.season, Season::Winter);
        assert_eq!(config.calendar_backends.len(), 1);
        assert_eq!(config.calendar_backends[0].kind, BackendKind::Nested);
    }

    #[test]
    fn defaults_applied_for_empty_config() {
        let config = WeatherConfig::from_toml_str("", &test_path()).unwrap();
        assert!(config.forecasts_enabled);
        assert_eq!(config.forecast_days, 7);
        assert!(!config.use_celsius);
        assert_eq!(config.seed, 0);
        assert_eq!(config.store_path, "./hexweather.json");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.climate, Climate::Temperate);
        assert_eq!(config.humidity, Humidity::Modest);
        assert_eq!(config.season, Season::Spring);
        assert_eq!(config.calendar_backends, BackendCandidate::defaults());
    }

    #[test]
    fn invalid_forecast_days_rejected() {
        let err = WeatherConfig::from_toml_str("forecast_days = 0", &test_path()).unwrap_err();
        assert!(err.contains("forecast_days"));
        assert!(err.contains("1-14"));
    }

    #[test]
    fn invalid_log_level_rejected() {
        let err =
            WeatherConfig::from_toml_str(r#"log_level = "verbose""#, &test_path()).unwrap_err();
        assert!(err.contains("log_level"));
    }

    #[test]
    fn unknown_climate_rejected() {
        let err = WeatherConfig::from_toml_str(r#"climate = "arctic""#, &test_path()).unwrap_err();
        assert!(err.contains("test-hexweather.toml"));
    }

    #[test]
    fn bad_backend_version_rejected() {
        let toml = r#"
            [[calendar_backends]]
            id = ""
            min_version = "soon"
            kind = "icon"
        "#;
        let err = WeatherConfig::from_toml_str(toml, &test_path()).unwrap_err();
        assert!(err.contains("calendar_backends[0].id"));
        assert!(err.contains("calendar_backends[0].min_version"));
    }

    #[test]
    fn multiple_errors_reported_together() {
        let toml = "forecast_days = 30\nstore_path = \"\"\nlog_level = \"loud\"";
        let err = WeatherConfig::from_toml_str(toml, &test_path()).unwrap_err();
        assert!(err.contains("forecast_days"));
        assert!(err.contains("store_path"));
        assert!(err.contains("log_level"));
    }

    #[test]
    fn from_file_loads_valid_config() {
        let mut tmp = NamedTempFile::new().unwrap();
        use std::io::Write;
        writeln!(tmp, "forecast_days = 3").unwrap();
        let config = WeatherConfig::from_file(tmp.path()).unwrap();
        assert_eq!(config.forecast_days, 3);
    }

    #[test]
    fn from_file_missing_file_error() {
        let err = WeatherConfig::from_file(Path::new("/nonexistent/hexweather.toml")).unwrap_err();
        assert!(err.contains("Cannot read"));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config =
            WeatherConfig::from_file_or_default(Path::new("/nonexistent/hexweather.toml")).unwrap();
        assert_eq!(config.forecast_days, 7);
    }
}
