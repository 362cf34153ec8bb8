//! Runs the full pipeline over a forecast: bucket by day, aggregate each day,
//! then summarize the days into one index.

use crate::aggregation::daily::{aggregate, DailySummary};
use crate::aggregation::error::AggregationError;
use crate::aggregation::weekly::summarize;
use crate::bucketing::bucket_by_weekday;
use crate::config::pleasantness_config::PleasantnessConfig;
use crate::types::hour_window::HourWindow;
use crate::types::weather_sample::WeatherSample;
use crate::types::weekday_range::WeekdayRange;
use bon::builder;
use chrono::Weekday;
use log::info;
use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Per-day summaries and the overall index for one forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastReport {
    pub weekdays: WeekdayRange,
    pub hours: HourWindow,
    /// One entry per weekday that had at least one qualifying sample.
    pub daily: HashMap<Weekday, DailySummary>,
    /// Mean of the daily indices, `None` when no day qualified.
    pub overall: Option<f64>,
}

impl ForecastReport {
    /// The overall index, or why there is none.
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError::NoQualifyingDaysInRange`] when no sample fell
    /// inside the weekday range and hour window.
    pub fn overall_index(&self) -> Result<f64, AggregationError> {
        self.overall
            .ok_or(AggregationError::NoQualifyingDaysInRange(self.weekdays))
    }

    /// Daily summaries in the weekday range's order, e.g. Fri, Sat, Sun, Mon for `Fri..Mon`.
    pub fn ordered(&self) -> Vec<&DailySummary> {
        let mut days: Vec<&DailySummary> = self.daily.values().collect();
        days.sort_by_key(|day| self.weekdays.position(day.weekday));
        days
    }
}

impl Display for ForecastReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for day in self.ordered() {
            writeln!(f, "{}", day)?;
        }
        match self.overall {
            Some(index) => write!(f, "Overall WPI ({}): {:.2}", self.weekdays, index),
            None => write!(
                f,
                "Overall WPI ({}): n/a, no forecast between {}",
                self.weekdays, self.hours
            ),
        }
    }
}

/// Scores a forecast for the days in `weekdays`.
///
/// Only samples inside `weekdays` and `hours` (default 09:00-21:00 UTC) count.
///
/// # Errors
///
/// Propagates [`AggregationError`] from aggregating a day. Buckets handed to
/// the aggregator are never empty, so in practice this succeeds.
///
/// # Examples
///
/// ```
/// use weather_pleasantness::{process_forecast, PleasantnessConfig, WeatherSample, WeekdayRange};
/// use chrono::Weekday;
///
/// let config: PleasantnessConfig = [("Clear", 9.0), ("Rain", 3.0)].into_iter().collect();
/// let samples = vec![
///     WeatherSample::from_unix(1_715_853_600, 22.0, 2.0, "Clear").unwrap(),
///     WeatherSample::from_unix(1_715_868_000, 24.0, 1.0, "Clear").unwrap(),
///     WeatherSample::from_unix(1_715_889_600, 18.0, 5.0, "Rain").unwrap(),
/// ];
///
/// let report = process_forecast()
///     .samples(&samples)
///     .config(&config)
///     .weekdays(WeekdayRange::new(Weekday::Thu, Weekday::Sat))
///     .call()
///     .unwrap();
///
/// assert_eq!(report.daily.len(), 1);
/// assert_eq!(report.daily[&Weekday::Thu].common_condition, "Clear");
/// assert!(report.overall.is_some());
/// ```
#[builder]
pub fn process_forecast(
    samples: &[WeatherSample],
    config: &PleasantnessConfig,
    weekdays: WeekdayRange,
    #[builder(default)] hours: HourWindow,
) -> Result<ForecastReport, AggregationError> {
    let buckets = bucket_by_weekday(samples, weekdays, hours);

    let mut daily = HashMap::with_capacity(buckets.len());
    for (day, bucket) in buckets {
        daily.insert(day, aggregate(bucket, config)?);
    }

    let overall = match summarize(&daily) {
        Ok(index) => Some(index),
        Err(AggregationError::NoQualifyingDays) => None,
        Err(e) => return Err(e),
    };
    info!(
        "Scored {} of {} days in {}, overall index {:?}",
        daily.len(),
        weekdays.day_count(),
        weekdays,
        overall
    );

    Ok(ForecastReport {
        weekdays,
        hours,
        daily,
        overall,
    })
}
