use chrono::{TimeZone, Utc, Weekday};
use weather_pleasantness::{
    process_forecast, PleasantnessConfig, PleasantnessError, WeatherSample, WeekdayRange,
};

fn main() -> Result<(), PleasantnessError> {
    let config = PleasantnessConfig::from_yaml_str(
        "conditions:\n  Clear: 10\n  Clouds: 7\n  Drizzle: 4\n  Rain: 2\n  Thunderstorm: 0\n",
    )?;

    // Thursday 16 May 2024, 09:00 UTC onwards, every 3 hours
    let start = Utc.with_ymd_and_hms(2024, 5, 16, 9, 0, 0).unwrap();
    let readings = [
        (21.0, 3.1, "Clear"),
        (23.5, 2.4, "Clear"),
        (24.2, 4.0, "Clouds"),
        (19.8, 5.2, "Rain"),
        (17.0, 6.0, "Rain"),
        (14.1, 7.3, "Clouds"),
        (15.5, 4.4, "Clouds"),
        (18.9, 3.3, "Clear"),
        (22.4, 2.0, "Clear"),
        (20.1, 2.8, "Drizzle"),
    ];
    let samples = readings
        .iter()
        .enumerate()
        .map(|(i, (temperature, wind, condition))| {
            let datetime = start + chrono::Duration::hours(3 * i as i64);
            WeatherSample::new(datetime, *temperature, *wind, *condition)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let report = process_forecast()
        .samples(&samples)
        .config(&config)
        .weekdays(WeekdayRange::new(Weekday::Thu, Weekday::Sat))
        .call()?;

    println!("{}", report);
    Ok(())
}
