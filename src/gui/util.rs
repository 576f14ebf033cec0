//! Small pure helper functions used by the GUI.
//! - no UI widgets or state mutation

use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;

/// Two-decimal BRL label. Ex: 25.5 -> 'R$ 25.50'
pub(crate) fn fmt_brl(value: f64) -> String {
    format!("R$ {value:.2}")
}

/// Time of day in the kiosk's local timezone, 'HH:MM:SS'.
pub(crate) fn fmt_time_of_day(ts: &DateTime<Utc>) -> String {
    fmt_time_in(ts, &Local)
}

pub(crate) fn fmt_time_in<Tz>(ts: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    ts.with_timezone(tz).format("%H:%M:%S").to_string()
}

/// `lastPulseTime` is epoch millis; None if out of range.
pub(crate) fn pulse_time(ms: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms)
}
