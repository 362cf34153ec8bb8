//! A single forecast data point, as consumed by the scoring pipeline.

use crate::types::into_utc_trait::IntoUtcDateTime;
use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use thiserror::Error;

/// Reasons a [`WeatherSample`] could not be constructed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidSampleError {
    #[error("Weather condition must not be empty")]
    EmptyCondition,

    #[error("Timestamp {0} is outside the representable date range")]
    TimestampOutOfRange(i64),

    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },
}

/// One forecast data point (typically one 3-hour forecast segment).
///
/// The weekday and hour of a sample are always read in UTC, so every stage
/// of the pipeline buckets samples consistently.
///
/// Samples built with [`WeatherSample::new`] or [`WeatherSample::from_unix`]
/// have a non-empty condition and finite readings. The fields are public, so
/// a sample assembled field by field carries no such guarantee.
///
/// # Examples
///
/// ```
/// use weather_pleasantness::WeatherSample;
/// use chrono::Weekday;
///
/// // 2024-05-16 10:00:00 UTC, a Thursday
/// let sample = WeatherSample::from_unix(1_715_853_600, 22.0, 2.0, "Clear").unwrap();
/// assert_eq!(sample.weekday(), Weekday::Thu);
/// assert_eq!(sample.hour(), 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSample {
    pub datetime: DateTime<Utc>,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Metres per second.
    pub wind_speed: f64,
    /// Short categorical condition, e.g. "Clear" or "Rain".
    pub condition: String,
    /// Forecast icon code, e.g. "01d". Not every source provides one.
    pub icon: Option<String>,
}

impl WeatherSample {
    /// Creates a validated sample from an epoch-seconds timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSampleError`] when the condition is empty, the
    /// temperature or wind speed is not finite, or the timestamp cannot be
    /// represented.
    pub fn from_unix(
        timestamp: i64,
        temperature: f64,
        wind_speed: f64,
        condition: impl Into<String>,
    ) -> Result<Self, InvalidSampleError> {
        let datetime = DateTime::from_timestamp(timestamp, 0)
            .ok_or(InvalidSampleError::TimestampOutOfRange(timestamp))?;
        Self::new(datetime, temperature, wind_speed, condition)
    }

    /// Creates a validated sample. Datetimes with an offset are converted to
    /// UTC; naive datetimes are taken as UTC.
    ///
    /// # Errors
    ///
    /// See [`WeatherSample::from_unix`].
    pub fn new(
        datetime: impl IntoUtcDateTime,
        temperature: f64,
        wind_speed: f64,
        condition: impl Into<String>,
    ) -> Result<Self, InvalidSampleError> {
        let condition = condition.into();
        if condition.is_empty() {
            return Err(InvalidSampleError::EmptyCondition);
        }
        if !temperature.is_finite() {
            return Err(InvalidSampleError::NonFinite {
                field: "temperature",
                value: temperature,
            });
        }
        if !wind_speed.is_finite() {
            return Err(InvalidSampleError::NonFinite {
                field: "wind_speed",
                value: wind_speed,
            });
        }
        Ok(Self {
            datetime: datetime.into_utc(),
            temperature,
            wind_speed,
            condition,
            icon: None,
        })
    }

    /// Attaches a forecast icon code.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn timestamp(&self) -> i64 {
        self.datetime.timestamp()
    }

    pub fn weekday(&self) -> Weekday {
        self.datetime.weekday()
    }

    pub fn hour(&self) -> u32 {
        self.datetime.hour()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_weekday_and_hour_are_read_in_utc() {
        let dt = Utc.with_ymd_and_hms(2024, 5, 18, 21, 0, 0).unwrap();
        let sample = WeatherSample::new(dt, 15.0, 3.0, "Clouds").unwrap();
        assert_eq!(sample.weekday(), Weekday::Sat);
        assert_eq!(sample.hour(), 21);
        assert_eq!(sample.timestamp(), dt.timestamp());
    }

    #[test]
    fn test_offset_datetime_is_stored_in_utc() {
        // Friday 01:00 at UTC+3 is Thursday 22:00 UTC
        let offset = chrono::FixedOffset::east_opt(3 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2024, 5, 17, 1, 0, 0).unwrap();
        let sample = WeatherSample::new(local, 15.0, 3.0, "Clear").unwrap();
        assert_eq!(sample.weekday(), Weekday::Thu);
        assert_eq!(sample.hour(), 22);
    }

    #[test]
    fn test_rejects_empty_condition() {
        let result = WeatherSample::from_unix(0, 10.0, 1.0, "");
        assert_eq!(result, Err(InvalidSampleError::EmptyCondition));
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let temp = WeatherSample::from_unix(0, f64::NAN, 1.0, "Clear");
        assert!(matches!(
            temp,
            Err(InvalidSampleError::NonFinite {
                field: "temperature",
                ..
            })
        ));

        let wind = WeatherSample::from_unix(0, 10.0, f64::INFINITY, "Clear");
        assert!(matches!(
            wind,
            Err(InvalidSampleError::NonFinite {
                field: "wind_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_unrepresentable_timestamp() {
        let result = WeatherSample::from_unix(i64::MAX, 10.0, 1.0, "Clear");
        assert_eq!(
            result,
            Err(InvalidSampleError::TimestampOutOfRange(i64::MAX))
        );
    }

    #[test]
    fn test_with_icon() {
        let sample = WeatherSample::from_unix(0, 10.0, 1.0, "Clear")
            .unwrap()
            .with_icon("01n");
        assert_eq!(sample.icon.as_deref(), Some("01n"));
    }
}
