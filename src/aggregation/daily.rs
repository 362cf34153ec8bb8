//! Reduces one weekday's samples into a [`DailySummary`].

use crate::aggregation::error::AggregationError;
use crate::config::pleasantness_config::PleasantnessConfig;
use crate::scoring::score_sample;
use crate::types::weather_sample::WeatherSample;
use chrono::Weekday;
use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};

const MS_TO_KMH: f64 = 3.6;

/// Weather summary of a single weekday.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub weekday: Weekday,
    /// Mean temperature over the day's samples, °C.
    pub average_temperature: f64,
    /// Mean wind speed over the day's samples, m/s.
    pub average_wind: f64,
    /// The condition seen most often that day. Ties go to the condition seen first.
    pub common_condition: String,
    /// Mean of the per-sample pleasantness scores.
    pub pleasantness_index: f64,
    /// Daytime icon code of the sample closest to midday.
    pub icon: Option<String>,
}

impl DailySummary {
    pub fn average_wind_kmh(&self) -> f64 {
        self.average_wind * MS_TO_KMH
    }
}

impl Display for DailySummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Avg Temp: {:.2}°C, Weather: {}, Wind: {:.2}km/h, WPI: {:.2}",
            self.weekday,
            self.average_temperature,
            self.common_condition,
            self.average_wind_kmh(),
            self.pleasantness_index
        )
    }
}

/// Aggregates the samples of one day.
///
/// Each sample is scored on its own and the scores are averaged; the index is
/// not the score of the averaged weather. The weekday is taken from the first
/// sample, so callers pass samples of a single day (see [`crate::bucket_by_weekday`]).
///
/// # Errors
///
/// Returns [`AggregationError::EmptyBucket`] when `samples` is empty.
///
/// # Examples
///
/// ```
/// use weather_pleasantness::{aggregate, PleasantnessConfig, WeatherSample};
///
/// let config: PleasantnessConfig = [("Clear", 9.0), ("Rain", 3.0)].into_iter().collect();
/// let samples = vec![
///     WeatherSample::from_unix(1_715_853_600, 22.0, 2.0, "Clear").unwrap(),
///     WeatherSample::from_unix(1_715_868_000, 24.0, 1.0, "Clear").unwrap(),
///     WeatherSample::from_unix(1_715_889_600, 18.0, 5.0, "Rain").unwrap(),
/// ];
/// let summary = aggregate(&samples, &config).unwrap();
/// assert_eq!(summary.common_condition, "Clear");
/// assert!((summary.average_temperature - 64.0 / 3.0).abs() < 1e-9);
/// ```
pub fn aggregate<'a>(
    samples: impl IntoIterator<Item = &'a WeatherSample>,
    config: &PleasantnessConfig,
) -> Result<DailySummary, AggregationError> {
    let mut samples = samples.into_iter();
    let first = samples.next().ok_or(AggregationError::EmptyBucket)?;

    let mut count = 0usize;
    let mut temperature_sum = 0.0;
    let mut wind_sum = 0.0;
    let mut score_sum = 0.0;
    let mut condition_counts: HashMap<&str, usize> = HashMap::new();
    let mut common_condition = first.condition.as_str();
    let mut common_count = 0usize;
    let mut midday_icon = first.icon.as_deref();

    for (i, sample) in std::iter::once(first).chain(samples).enumerate() {
        count += 1;
        temperature_sum += sample.temperature;
        wind_sum += sample.wind_speed;
        score_sum += score_sample(sample, config);

        let seen = condition_counts.entry(sample.condition.as_str()).or_insert(0);
        *seen += 1;
        if *seen > common_count {
            common_count = *seen;
            common_condition = sample.condition.as_str();
        }

        // Second segment of a 09:00-21:00 day of 3-hourly data
        if i == 1 {
            midday_icon = sample.icon.as_deref();
        }
    }

    let count = count as f64;
    Ok(DailySummary {
        weekday: first.weekday(),
        average_temperature: temperature_sum / count,
        average_wind: wind_sum / count,
        common_condition: common_condition.to_string(),
        pleasantness_index: score_sum / count,
        icon: midday_icon.map(daytime_icon),
    })
}

/// Swaps a night icon code ("01n") for its day variant ("01d").
fn daytime_icon(icon: &str) -> String {
    icon.replacen('n', "d", 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::score;
    use chrono::{TimeZone, Utc};

    const EPSILON: f64 = 1e-9;

    fn thursday(hour: u32, temperature: f64, wind: f64, condition: &str) -> WeatherSample {
        let datetime = Utc.with_ymd_and_hms(2024, 5, 16, hour, 0, 0).unwrap();
        WeatherSample::new(datetime, temperature, wind, condition).unwrap()
    }

    fn config() -> PleasantnessConfig {
        [("Clear", 9.0), ("Rain", 3.0)].into_iter().collect()
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let samples: Vec<WeatherSample> = Vec::new();
        assert_eq!(
            aggregate(&samples, &config()),
            Err(AggregationError::EmptyBucket)
        );
    }

    #[test]
    fn test_averages_and_per_sample_scoring() {
        let samples = vec![
            thursday(10, 22.0, 2.0, "Clear"),
            thursday(14, 24.0, 1.0, "Clear"),
            thursday(20, 18.0, 5.0, "Rain"),
        ];
        let summary = aggregate(&samples, &config()).unwrap();

        assert_eq!(summary.weekday, Weekday::Thu);
        assert!((summary.average_temperature - 21.333333333333332).abs() < EPSILON);
        assert!((summary.average_wind - 8.0 / 3.0).abs() < EPSILON);
        assert_eq!(summary.common_condition, "Clear");

        let expected = (score(22.0, 2.0, "Clear", &config())
            + score(24.0, 1.0, "Clear", &config())
            + score(18.0, 5.0, "Rain", &config()))
            / 3.0;
        assert!((summary.pleasantness_index - expected).abs() < EPSILON);
        assert!((summary.pleasantness_index - 7.67793880837359).abs() < 1e-9);
    }

    #[test]
    fn test_index_is_not_score_of_averages() {
        // 0°C and 30°C average to 15°C but score 0 and 10 on temperature
        let samples = vec![
            thursday(9, 0.0, 0.0, "Clear"),
            thursday(12, 30.0, 0.0, "Clear"),
        ];
        let summary = aggregate(&samples, &config()).unwrap();
        let of_averages = score(15.0, 0.0, "Clear", &config());
        assert!((summary.pleasantness_index - of_averages).abs() > 0.1);
    }

    #[test]
    fn test_tie_goes_to_first_condition_to_reach_count() {
        let samples = vec![
            thursday(9, 15.0, 2.0, "Clear"),
            thursday(12, 15.0, 2.0, "Clear"),
            thursday(15, 15.0, 2.0, "Rain"),
            thursday(18, 15.0, 2.0, "Rain"),
        ];
        let summary = aggregate(&samples, &config()).unwrap();
        assert_eq!(summary.common_condition, "Clear");

        let samples = vec![
            thursday(9, 15.0, 2.0, "Rain"),
            thursday(12, 15.0, 2.0, "Clear"),
            thursday(15, 15.0, 2.0, "Rain"),
        ];
        let summary = aggregate(&samples, &config()).unwrap();
        assert_eq!(summary.common_condition, "Rain");
    }

    #[test]
    fn test_midday_icon_is_taken_from_second_sample() {
        let samples = vec![
            thursday(9, 15.0, 2.0, "Clear").with_icon("01d"),
            thursday(12, 15.0, 2.0, "Clouds").with_icon("03n"),
            thursday(15, 15.0, 2.0, "Rain").with_icon("10d"),
        ];
        let summary = aggregate(&samples, &config()).unwrap();
        assert_eq!(summary.icon.as_deref(), Some("03d"));

        let single = vec![thursday(21, 15.0, 2.0, "Clear").with_icon("01n")];
        let summary = aggregate(&single, &config()).unwrap();
        assert_eq!(summary.icon.as_deref(), Some("01d"));

        let no_icon = vec![thursday(21, 15.0, 2.0, "Clear")];
        assert_eq!(aggregate(&no_icon, &config()).unwrap().icon, None);
    }

    #[test]
    fn test_display_matches_report_line() {
        let samples = vec![thursday(12, 20.0, 2.5, "Clear")];
        let summary = aggregate(&samples, &config()).unwrap();
        assert_eq!(
            summary.to_string(),
            format!(
                "Thu: Avg Temp: 20.00°C, Weather: Clear, Wind: 9.00km/h, WPI: {:.2}",
                summary.pleasantness_index
            )
        );
    }
}
