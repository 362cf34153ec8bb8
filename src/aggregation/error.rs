use crate::types::weekday_range::WeekdayRange;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AggregationError {
    #[error("Cannot aggregate a day without weather samples")]
    EmptyBucket,

    #[error("No qualifying days to summarize")]
    NoQualifyingDays,

    #[error("No qualifying days in {0}")]
    NoQualifyingDaysInRange(WeekdayRange),
}
