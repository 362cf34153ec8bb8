//! Inclusive spans of weekdays, such as the Thursday to Saturday of a weekend trip.

use crate::types::into_utc_trait::IntoUtcDateTime;
use chrono::{Datelike, Timelike, Weekday};
use std::fmt;
use std::fmt::{Display, Formatter};

/// Hour (UTC) from which the last day of a forecast becomes available.
const FULL_FORECAST_HOUR: u32 = 13;

/// An inclusive range of weekdays.
///
/// The range walks forward from `start` to `end` and wraps past Sunday, so
/// `Fri..Mon` covers Friday, Saturday, Sunday and Monday. When `start == end`
/// the range holds a single day.
///
/// # Examples
///
/// ```
/// use weather_pleasantness::WeekdayRange;
/// use chrono::Weekday;
///
/// let weekend = WeekdayRange::new(Weekday::Thu, Weekday::Sat);
/// assert!(weekend.contains(Weekday::Fri));
/// assert!(!weekend.contains(Weekday::Sun));
///
/// let long_weekend = WeekdayRange::new(Weekday::Fri, Weekday::Mon);
/// assert!(long_weekend.contains(Weekday::Sun));
/// assert_eq!(long_weekend.to_string(), "Fri-Mon");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekdayRange {
    pub start: Weekday,
    pub end: Weekday,
}

impl WeekdayRange {
    pub fn new(start: Weekday, end: Weekday) -> Self {
        Self { start, end }
    }

    /// Number of days in the range, between 1 and 7.
    pub fn day_count(&self) -> u32 {
        offset_from(self.start, self.end) + 1
    }

    pub fn contains(&self, day: Weekday) -> bool {
        offset_from(self.start, day) < self.day_count()
    }

    /// Days in walk order, starting at `start`.
    pub fn days(&self) -> Vec<Weekday> {
        let mut days = Vec::with_capacity(self.day_count() as usize);
        let mut day = self.start;
        for _ in 0..self.day_count() {
            days.push(day);
            day = day.succ();
        }
        days
    }

    /// Position of `day` within the walk order, or `None` when outside the range.
    pub fn position(&self, day: Weekday) -> Option<usize> {
        self.contains(day).then_some(offset_from(self.start, day) as usize)
    }

    /// The range a forecast fetched at `now` can cover.
    ///
    /// The range starts the day after `now`. Before 13:00 UTC it spans four
    /// days; from 13:00 on the fifth day of the forecast is complete and the
    /// range spans five.
    ///
    /// # Examples
    ///
    /// ```
    /// use weather_pleasantness::WeekdayRange;
    /// use chrono::{TimeZone, Utc, Weekday};
    ///
    /// // Wednesday morning
    /// let morning = Utc.with_ymd_and_hms(2024, 5, 15, 9, 0, 0).unwrap();
    /// assert_eq!(
    ///     WeekdayRange::upcoming(morning),
    ///     WeekdayRange::new(Weekday::Thu, Weekday::Sun)
    /// );
    ///
    /// // Wednesday afternoon
    /// let afternoon = Utc.with_ymd_and_hms(2024, 5, 15, 14, 0, 0).unwrap();
    /// assert_eq!(
    ///     WeekdayRange::upcoming(afternoon),
    ///     WeekdayRange::new(Weekday::Thu, Weekday::Mon)
    /// );
    /// ```
    pub fn upcoming(now: impl IntoUtcDateTime) -> Self {
        let now = now.into_utc();
        let start = now.weekday().succ();
        let extra_days = if now.hour() < FULL_FORECAST_HOUR { 3 } else { 4 };
        let mut end = start;
        for _ in 0..extra_days {
            end = end.succ();
        }
        Self { start, end }
    }
}

fn offset_from(start: Weekday, day: Weekday) -> u32 {
    (day.num_days_from_monday() + 7 - start.num_days_from_monday()) % 7
}

impl Display for WeekdayRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
