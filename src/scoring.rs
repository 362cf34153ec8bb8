//! The Weather Pleasantness Index (WPI) of a single forecast sample.
//!
//! Temperature, wind and condition are each mapped to a sub-score of roughly
//! 0 to 10 and blended with fixed weights (temperature 3, wind 1, condition 2).

use crate::config::pleasantness_config::PleasantnessConfig;
use crate::types::weather_sample::WeatherSample;

pub const TEMPERATURE_WEIGHT: f64 = 3.0;
pub const WIND_WEIGHT: f64 = 1.0;
pub const CONDITION_WEIGHT: f64 = 2.0;

/// Temperature (°C) at which the temperature sub-score reaches 7.
const GOOD_TEMPERATURE: f64 = 20.0;
const SCORE_AT_GOOD_TEMPERATURE: f64 = 7.0;
/// Above this temperature (°C) the sub-score is 10.
const PERFECT_TEMPERATURE: f64 = 23.0;
/// Wind speed (m/s) at and above which the wind sub-score is 0.
const WORST_WIND: f64 = 13.8;

/// Temperature sub-score.
///
/// 0 at or below freezing, then a single linear ramp of slope 0.35 per °C up to
/// and including 23°C (8.05 at 23°C), then 10 for anything warmer.
pub fn temperature_score(temperature: f64) -> f64 {
    let slope = SCORE_AT_GOOD_TEMPERATURE / GOOD_TEMPERATURE;
    if temperature <= 0.0 {
        0.0
    } else if temperature > PERFECT_TEMPERATURE {
        10.0
    } else {
        slope * temperature
    }
}

/// Wind sub-score: 10 in still air, falling linearly to 0 at 13.8 m/s.
pub fn wind_score(wind_speed: f64) -> f64 {
    if wind_speed >= WORST_WIND {
        0.0
    } else {
        10.0 - wind_speed * 10.0 / WORST_WIND
    }
}

/// Weighted blend of the three sub-scores.
///
/// Unknown conditions contribute 0. The result is not clamped, so a config
/// with scores outside 0-10 can push it out of range.
///
/// # Examples
///
/// ```
/// use weather_pleasantness::{score, PleasantnessConfig};
///
/// let config: PleasantnessConfig = [("Clear", 10.0)].into_iter().collect();
///
/// // Freezing and calm, condition not configured: only wind contributes
/// let cold = score(0.0, 0.0, "Fog", &config);
/// assert!((cold - 10.0 / 6.0).abs() < 1e-9);
///
/// let perfect = score(25.0, 0.0, "Clear", &config);
/// assert!((perfect - 10.0).abs() < 1e-9);
/// ```
pub fn score(
    temperature: f64,
    wind_speed: f64,
    condition: &str,
    config: &PleasantnessConfig,
) -> f64 {
    let weighted = TEMPERATURE_WEIGHT * temperature_score(temperature)
        + WIND_WEIGHT * wind_score(wind_speed)
        + CONDITION_WEIGHT * config.condition_score(condition);
    weighted / (TEMPERATURE_WEIGHT + WIND_WEIGHT + CONDITION_WEIGHT)
}

/// [`score`] applied to a sample's temperature, wind speed and condition.
pub fn score_sample(sample: &WeatherSample, config: &PleasantnessConfig) -> f64 {
    score(
        sample.temperature,
        sample.wind_speed,
        &sample.condition,
        config,
    )
}
