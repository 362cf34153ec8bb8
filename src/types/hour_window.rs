use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HourWindowError {
    #[error("Hour {0} is not a valid hour of the day (0-23)")]
    InvalidHour(u32),

    #[error("Window start {start} is after window end {end}")]
    Inverted { start: u32, end: u32 },

    #[error("Could not parse hour window '{0}', expected START-END such as 9-21")]
    Parse(String),
}

/// Inclusive hour-of-day bounds (UTC) a sample must fall in to count towards a day.
///
/// Defaults to 9 through 21, the daytime hours of a 3-hourly forecast.
///
/// # Examples
///
/// ```
/// use weather_pleasantness::HourWindow;
///
/// let daytime = HourWindow::default();
/// assert!(daytime.contains(9));
/// assert!(daytime.contains(21));
/// assert!(!daytime.contains(6));
///
/// let evening: HourWindow = "18-23".parse().unwrap();
/// assert_eq!(evening, HourWindow::new(18, 23).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HourWindow {
    start: u32,
    end: u32,
}

impl HourWindow {
    /// # Errors
    ///
    /// Returns [`HourWindowError`] if either hour is above 23 or `start > end`.
    pub fn new(start: u32, end: u32) -> Result<Self, HourWindowError> {
        for hour in [start, end] {
            if hour > 23 {
                return Err(HourWindowError::InvalidHour(hour));
            }
        }
        if start > end {
            return Err(HourWindowError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn contains(&self, hour: u32) -> bool {
        (self.start..=self.end).contains(&hour)
    }
}

impl Default for HourWindow {
    fn default() -> Self {
        Self { start: 9, end: 21 }
    }
}

impl FromStr for HourWindow {
    type Err = HourWindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| HourWindowError::Parse(s.to_string()))?;
        let start = start
            .trim()
            .parse()
            .map_err(|_| HourWindowError::Parse(s.to_string()))?;
        let end = end
            .trim()
            .parse()
            .map_err(|_| HourWindowError::Parse(s.to_string()))?;
        Self::new(start, end)
    }
}

impl Display for HourWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00-{:02}:00", self.start, self.end)
    }
}
