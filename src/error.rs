use crate::aggregation::error::AggregationError;
use crate::config::error::ConfigError;
use crate::forecast::error::ForecastError;
use crate::types::hour_window::HourWindowError;
use crate::types::weather_sample::InvalidSampleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PleasantnessError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error(transparent)]
    Aggregation(#[from] AggregationError),

    #[error(transparent)]
    InvalidSample(#[from] InvalidSampleError),

    #[error(transparent)]
    HourWindow(#[from] HourWindowError),
}
