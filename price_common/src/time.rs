//! Timestamp conversion helpers.
//!
//! Both the exchange-reported update time and the capture time are rendered with the
//! same fixed pattern, in local wall-clock time.
use chrono::{Local, NaiveDateTime, TimeZone};

/// Pattern used for every timestamp written or printed.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Convert Unix seconds to wall-clock time in `tz`.
///
/// Returns `None` when the value is outside chrono's representable range.
pub fn datetime_in<Tz: TimeZone>(unix_secs: i64, tz: &Tz) -> Option<NaiveDateTime> {
    tz.timestamp_opt(unix_secs, 0)
        .earliest()
        .map(|dt| dt.naive_local())
}

/// Convert Unix seconds to the runtime's local wall-clock time.
pub fn local_datetime(unix_secs: i64) -> Option<NaiveDateTime> {
    datetime_in(unix_secs, &Local)
}

/// Current local wall-clock time, used as the capture timestamp.
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Render `dt` with [`TIMESTAMP_FORMAT`].
pub fn format_timestamp(dt: &NaiveDateTime) -> String {
    dt.format(TIMESTAMP_FORMAT).to_string()
}
