use crate::types::hour_window::HourWindow;
use crate::types::weather_sample::WeatherSample;
use crate::types::weekday_range::WeekdayRange;
use chrono::Weekday;
use log::debug;
use std::collections::HashMap;

/// Groups samples by weekday, keeping only those inside `weekdays` and `hours`.
///
/// Weekday and hour are read in UTC. Within each weekday the samples keep
/// their input order. Weekdays without a qualifying sample have no entry.
///
/// # Examples
///
/// ```
/// use weather_pleasantness::{bucket_by_weekday, HourWindow, WeatherSample, WeekdayRange};
/// use chrono::Weekday;
///
/// let samples = vec![
///     // Thursday 10:00 UTC
///     WeatherSample::from_unix(1_715_853_600, 22.0, 2.0, "Clear").unwrap(),
///     // Thursday 00:00 UTC, outside the daytime window
///     WeatherSample::from_unix(1_715_817_600, 12.0, 1.0, "Clear").unwrap(),
/// ];
/// let buckets = bucket_by_weekday(
///     &samples,
///     WeekdayRange::new(Weekday::Thu, Weekday::Sat),
///     HourWindow::default(),
/// );
/// assert_eq!(buckets[&Weekday::Thu].len(), 1);
/// ```
pub fn bucket_by_weekday<'a>(
    samples: impl IntoIterator<Item = &'a WeatherSample>,
    weekdays: WeekdayRange,
    hours: HourWindow,
) -> HashMap<Weekday, Vec<&'a WeatherSample>> {
    let mut buckets: HashMap<Weekday, Vec<&'a WeatherSample>> = HashMap::new();
    let mut dropped = 0usize;
    for sample in samples {
        let day = sample.weekday();
        if weekdays.contains(day) && hours.contains(sample.hour()) {
            buckets.entry(day).or_default().push(sample);
        } else {
            dropped += 1;
        }
    }
    debug!(
        "Bucketed samples into {} days for {} between {}, dropped {}",
        buckets.len(),
        weekdays,
        hours,
        dropped
    );
    buckets
}
