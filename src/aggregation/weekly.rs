use crate::aggregation::daily::DailySummary;
use crate::aggregation::error::AggregationError;
use chrono::Weekday;
use std::collections::HashMap;

/// Mean pleasantness index over all days in `daily`.
///
/// # Errors
///
/// Returns [`AggregationError::NoQualifyingDays`] when `daily` is empty; the
/// index is undefined without data rather than zero.
pub fn summarize(daily: &HashMap<Weekday, DailySummary>) -> Result<f64, AggregationError> {
    if daily.is_empty() {
        return Err(AggregationError::NoQualifyingDays);
    }
    let total: f64 = daily.values().map(|day| day.pleasantness_index).sum();
    Ok(total / daily.len() as f64)
}
