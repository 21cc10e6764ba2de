//! GPS time conversion
//!
//! GPS time counts SI seconds since 1980-01-06T00:00:00Z and does not skip
//! leap seconds, so converting from UTC adds every leap second inserted since
//! the GPS epoch.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

/// Unix timestamp of the GPS epoch (1980-01-06T00:00:00Z)
pub const GPS_EPOCH_UNIX: i64 = 315_964_800;

/// UTC dates at whose midnight a leap second had just been inserted
const LEAP_SECONDS: [(i32, u32, u32); 18] = [
    (1981, 7, 1),
    (1982, 7, 1),
    (1983, 7, 1),
    (1985, 7, 1),
    (1988, 1, 1),
    (1990, 1, 1),
    (1991, 1, 1),
    (1992, 7, 1),
    (1993, 7, 1),
    (1994, 7, 1),
    (1996, 1, 1),
    (1997, 7, 1),
    (1999, 1, 1),
    (2006, 1, 1),
    (2009, 1, 1),
    (2012, 7, 1),
    (2015, 7, 1),
    (2017, 1, 1),
];

/// Errors from time parsing and conversion
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeError {
    /// Input could not be interpreted as a time
    #[error("Cannot parse {0:?} as a GPS time or UTC date")]
    Parse(String),

    /// GPS value outside what a calendar date can represent
    #[error("GPS time {0} is out of range")]
    OutOfRange(f64),
}

fn leap_unix_times() -> impl Iterator<Item = i64> {
    LEAP_SECONDS.iter().filter_map(|&(y, m, d)| {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0)
            .single()
            .map(|dt| dt.timestamp())
    })
}

/// Convert a UTC instant to GPS seconds
pub fn from_datetime(dt: DateTime<Utc>) -> f64 {
    let unix = dt.timestamp();
    let leaps = leap_unix_times().filter(|&t| t <= unix).count() as i64;
    let whole = unix - GPS_EPOCH_UNIX + leaps;
    whole as f64 + f64::from(dt.timestamp_subsec_nanos()) * 1e-9
}

/// Convert GPS seconds to a UTC instant
pub fn to_datetime(gps: f64) -> Result<DateTime<Utc>, TimeError> {
    if !gps.is_finite() {
        return Err(TimeError::OutOfRange(gps));
    }

    // GPS time of each insertion: its unix time shifted by the leaps so far
    let leaps = leap_unix_times()
        .enumerate()
        .filter(|&(i, t)| ((t - GPS_EPOCH_UNIX) + i as i64 + 1) as f64 <= gps)
        .count() as i64;

    let secs = gps.floor();
    let nanos = ((gps - secs) * 1e9).round().min(999_999_999.0) as u32;
    let unix = secs as i64 + GPS_EPOCH_UNIX - leaps;

    DateTime::from_timestamp(unix, nanos).ok_or(TimeError::OutOfRange(gps))
}

/// Current time in GPS seconds
pub fn now() -> f64 {
    from_datetime(Utc::now())
}

/// Interpret a string as a GPS time
///
/// Accepts a plain number of GPS seconds, `now`, an RFC 3339 timestamp, or a
/// UTC date as `YYYY-MM-DD HH:MM:SS` / `YYYY-MM-DD`.
pub fn to_gps(input: &str) -> Result<f64, TimeError> {
    let s = input.trim();

    if let Ok(value) = s.parse::<f64>() {
        if value.is_finite() {
            return Ok(value);
        }
        return Err(TimeError::Parse(input.to_string()));
    }

    if s.eq_ignore_ascii_case("now") {
        return Ok(now());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(from_datetime(dt.with_timezone(&Utc)));
    }

    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(from_datetime(Utc.from_utc_datetime(&naive)));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(from_datetime(Utc.from_utc_datetime(&midnight)));
        }
    }

    Err(TimeError::Parse(input.to_string()))
}
