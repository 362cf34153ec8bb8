use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// A point in time the pipeline can read in UTC.
///
/// Timezone-naive datetimes are taken to already be UTC.
pub trait IntoUtcDateTime {
    fn into_utc(self) -> DateTime<Utc>;
}

impl IntoUtcDateTime for NaiveDateTime {
    fn into_utc(self) -> DateTime<Utc> {
        self.and_utc()
    }
}

impl<Tz: TimeZone> IntoUtcDateTime for DateTime<Tz> {
    fn into_utc(self) -> DateTime<Utc> {
        self.with_timezone(&Utc)
    }
}
