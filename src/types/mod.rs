pub mod hour_window;
pub mod into_utc_trait;
pub mod weather_sample;
pub mod weekday_range;
