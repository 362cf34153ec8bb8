//! Decoding of a saved 3-hour forecast response into [`WeatherSample`]s.
//!
//! The expected document has the shape of the OpenWeatherMap 5 day / 3 hour
//! forecast (metric units):
//!
//! ```json
//! {"list": [{"dt": 1715853600,
//!            "main": {"temp": 22.0},
//!            "wind": {"speed": 2.0},
//!            "weather": [{"main": "Clear", "description": "clear sky", "icon": "01d"}]}]}
//! ```
//!
//! Fields not listed above are ignored.

use crate::forecast::error::ForecastError;
use crate::types::weather_sample::WeatherSample;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Epoch seconds.
    pub dt: i64,
    pub main: MainReadings,
    pub wind: WindReadings,
    #[serde(default)]
    pub weather: Vec<ConditionReadings>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindReadings {
    pub speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionReadings {
    pub main: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl ForecastResponse {
    /// # Errors
    ///
    /// Returns [`ForecastError::JsonParse`] if `json` is not a forecast document.
    pub fn from_json(json: &str) -> Result<Self, ForecastError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a forecast document saved to disk.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::Read`] if the file cannot be read and
    /// [`ForecastError::JsonParse`] if it is not a forecast document.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ForecastError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ForecastError::Read(path.to_path_buf(), e))?;
        let response = Self::from_json(&contents)?;
        debug!(
            "Read {} forecast entries from {}",
            response.list.len(),
            path.display()
        );
        Ok(response)
    }

    /// Converts every entry into a validated sample, keeping forecast order.
    ///
    /// # Errors
    ///
    /// Fails on the first entry that cannot become a [`WeatherSample`].
    pub fn into_samples(self) -> Result<Vec<WeatherSample>, ForecastError> {
        self.list.into_iter().map(WeatherSample::try_from).collect()
    }
}

impl TryFrom<ForecastEntry> for WeatherSample {
    type Error = ForecastError;

    fn try_from(entry: ForecastEntry) -> Result<Self, Self::Error> {
        let timestamp = entry.dt;
        let condition = entry
            .weather
            .into_iter()
            .next()
            .ok_or(ForecastError::MissingCondition { timestamp })?;
        let sample =
            WeatherSample::from_unix(timestamp, entry.main.temp, entry.wind.speed, condition.main)
                .map_err(|source| ForecastError::InvalidEntry { timestamp, source })?;
        Ok(match condition.icon {
            Some(icon) => sample.with_icon(icon),
            None => sample,
        })
    }
}
