mod aggregation;
mod bucketing;
mod config;
mod error;
mod forecast;
mod report;
mod scoring;
mod types;

pub use error::PleasantnessError;

pub use aggregation::daily::{aggregate, DailySummary};
pub use aggregation::error::AggregationError;
pub use aggregation::weekly::summarize;
pub use bucketing::bucket_by_weekday;
pub use config::error::ConfigError;
pub use config::pleasantness_config::{PleasantnessConfig, UNKNOWN_CONDITION_SCORE};
pub use forecast::error::ForecastError;
pub use forecast::response::{
    ConditionReadings, ForecastEntry, ForecastResponse, MainReadings, WindReadings,
};
pub use report::{process_forecast, ForecastReport};
pub use scoring::{
    score, score_sample, temperature_score, wind_score, CONDITION_WEIGHT, TEMPERATURE_WEIGHT,
    WIND_WEIGHT,
};

pub use types::hour_window::{HourWindow, HourWindowError};
pub use types::into_utc_trait::IntoUtcDateTime;
pub use types::weather_sample::{InvalidSampleError, WeatherSample};
pub use types::weekday_range::WeekdayRange;
