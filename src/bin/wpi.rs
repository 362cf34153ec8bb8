//! Prints the Weather Pleasantness Index of a saved forecast.
//!
//! Usage:
//! ```bash
//! # Score Thursday to Saturday of a forecast saved as JSON
//! wpi --forecast lisbon.json --config weatherPleasantness.yaml \
//!     --location Lisbon --from thu --to sat
//!
//! # Score the days the forecast can cover from now on, over the evening hours only
//! wpi --forecast lisbon.json --config weatherPleasantness.yaml --upcoming --hours 15-21
//! ```

use chrono::{DateTime, Utc, Weekday};
use clap::Parser;
use log::info;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use weather_pleasantness::{
    process_forecast, ForecastReport, ForecastResponse, HourWindow, PleasantnessConfig,
    PleasantnessError, WeekdayRange,
};

#[derive(Parser)]
#[command(
    name = "wpi",
    about = "Weather Pleasantness Index for a saved 3-hour forecast"
)]
struct Cli {
    /// Forecast response saved as JSON
    #[arg(long)]
    forecast: PathBuf,

    /// YAML file mapping weather conditions to a 0-10 score
    #[arg(long)]
    config: PathBuf,

    /// Location name shown in the report header
    #[arg(long)]
    location: Option<String>,

    /// First day of the range (e.g. thu)
    #[arg(long, default_value = "thu", conflicts_with = "upcoming")]
    from: Weekday,

    /// Last day of the range, inclusive (e.g. sat)
    #[arg(long, default_value = "sat", conflicts_with = "upcoming")]
    to: Weekday,

    /// Use the days the forecast covers from now on instead of --from/--to
    #[arg(long)]
    upcoming: bool,

    /// Daytime hours (UTC) that count towards a day, inclusive
    #[arg(long, default_value = "9-21")]
    hours: HourWindow,
}

impl Cli {
    fn weekdays(&self, now: DateTime<Utc>) -> WeekdayRange {
        if self.upcoming {
            WeekdayRange::upcoming(now)
        } else {
            WeekdayRange::new(self.from, self.to)
        }
    }
}

fn build_report(cli: &Cli, now: DateTime<Utc>) -> Result<ForecastReport, PleasantnessError> {
    let config = PleasantnessConfig::load(&cli.config)?;
    let samples = ForecastResponse::load(&cli.forecast)?.into_samples()?;
    info!("Loaded {} forecast samples", samples.len());

    Ok(process_forecast()
        .samples(&samples)
        .config(&config)
        .weekdays(cli.weekdays(now))
        .hours(cli.hours)
        .call()?)
}

/// The error message followed by each of its causes.
fn error_chain(error: &dyn Error) -> Vec<String> {
    let mut lines = vec![format!("Error: {}", error)];
    let mut source = error.source();
    while let Some(cause) = source {
        lines.push(format!("  caused by: {}", cause));
        source = cause.source();
    }
    lines
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match build_report(&cli, Utc::now()) {
        Ok(report) => {
            let location = cli.location.as_deref().unwrap_or("forecast");
            println!("Weather Pleasantness Index (WPI) for {}:", location);
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            for line in error_chain(&e) {
                eprintln!("{}", line);
            }
            ExitCode::FAILURE
        }
    }
}
