use crate::types::weather_sample::InvalidSampleError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Failed to read forecast file '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse forecast JSON")]
    JsonParse(#[from] serde_json::Error),

    #[error("Forecast entry at {timestamp} has no weather condition")]
    MissingCondition { timestamp: i64 },

    #[error("Invalid forecast entry at {timestamp}")]
    InvalidEntry {
        timestamp: i64,
        #[source]
        source: InvalidSampleError,
    },
}
