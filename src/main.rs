use clap::{Parser, Subcommand};
use std::path::Path;
use tracing_subscriber::EnvFilter;

use hexweather::cli::commands;
use hexweather::config::weather::WeatherConfig;
use hexweather::model::{Climate, Humidity, Season};

#[derive(Parser)]
#[command(name = "hexweather")]
#[command(about = "Hex-flower weather and rolling forecasts for a campaign calendar")]
#[command(version)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "hexweather.toml")]
    config: String,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the weather table for a climate/humidity pair
    Cells {
        #[arg(long, default_value = "temperate")]
        climate: Climate,

        #[arg(long, default_value = "modest")]
        humidity: Humidity,

        /// Only show cells in this season's region
        #[arg(long)]
        season: Option<Season>,
    },

    /// Set the calendar to a date and generate its weather
    Roll {
        /// Date as YYYY-MM-DD
        #[arg(short, long)]
        date: String,

        /// Hour of day (0-23)
        #[arg(long, default_value_t = 8)]
        hour: u32,
    },

    /// Advance the calendar day by day
    Advance {
        #[arg(short, long, default_value_t = 1)]
        days: u32,
    },

    /// Show the cached forecast
    Forecast {
        /// Re-roll today and rebuild the forecast window
        #[arg(long)]
        regenerate: bool,
    },

    /// List or apply manual weather options
    Manual {
        #[arg(long)]
        list: bool,

        /// Index of the option to apply
        #[arg(short, long)]
        option: Option<usize>,

        /// Temperature in °F; defaults to the source cell's
        #[arg(short, long, allow_hyphen_values = true)]
        temperature: Option<i32>,
    },

    /// Force a specific hex-flower cell for today
    Specific {
        #[arg(long)]
        cell: u8,
    },

    /// Change the climate and humidity selection
    Conditions {
        climate: Climate,
        humidity: Humidity,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match WeatherConfig::from_file_or_default(Path::new(&cli.config)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let logs = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if cli.json_logs {
        logs.json().init();
    } else {
        logs.init();
    }

    let result = match cli.command {
        Commands::Cells {
            climate,
            humidity,
            season,
        } => commands::cells(climate, humidity, season),
        Commands::Roll { date, hour } => commands::roll(&config, &date, hour).await,
        Commands::Advance { days } => commands::advance(&config, days).await,
        Commands::Forecast { regenerate } => commands::forecast(&config, regenerate).await,
        Commands::Manual {
            list,
            option,
            temperature,
        } => commands::manual(&config, list, option, temperature).await,
        Commands::Specific { cell } => commands::specific(&config, cell).await,
        Commands::Conditions { climate, humidity } => {
            commands::conditions(&config, climate, humidity).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
