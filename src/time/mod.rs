//! Time codec for timing tags: day-of-year instants and hh:mm:ss durations.

pub mod calendar;
pub mod parse;

pub use parse::{parse_absolute, parse_duration};

use crate::error::TimeFormatError;
use std::fmt;
use std::str::FromStr;

pub(crate) const MS_PER_SECOND: i64 = 1_000;
pub(crate) const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub(crate) const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub(crate) const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// An absolute UTC instant, millisecond resolution.
///
/// Stored as milliseconds since `1970-001T00:00:00.000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(i64);

impl Instant {
    pub fn from_epoch_millis(ms: i64) -> Self {
        Self(ms)
    }

    pub fn epoch_millis(self) -> i64 {
        self.0
    }
}

/// A signed span of time, millisecond resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(i64);

impl Duration {
    pub fn from_millis(ms: i64) -> Self {
        Self(ms)
    }

    pub fn millis(self) -> i64 {
        self.0
    }
}

/// Canonical `YYYY-DDDThh:mm:ss.sss` text.
pub fn format_absolute(instant: Instant) -> String {
    let days = instant.0.div_euclid(MS_PER_DAY);
    let ms_of_day = instant.0.rem_euclid(MS_PER_DAY);
    let (year, doy) = calendar::year_and_day_of_year(days);
    format!("{:04}-{:03}T{}", year, doy, clock(ms_of_day))
}

/// Canonical `hh:mm:ss.sss` text; negative spans get a leading `-`.
pub fn format_duration(duration: Duration) -> String {
    let sign = if duration.0 < 0 { "-" } else { "" };
    format!("{}{}", sign, clock(duration.0.unsigned_abs() as i64))
}

fn clock(ms: i64) -> String {
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        ms / MS_PER_HOUR,
        (ms % MS_PER_HOUR) / MS_PER_MINUTE,
        (ms % MS_PER_MINUTE) / MS_PER_SECOND,
        ms % MS_PER_SECOND
    )
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_absolute(*self))
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_duration(*self))
    }
}

impl FromStr for Instant {
    type Err = TimeFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_absolute(s)
    }
}

impl FromStr for Duration {
    type Err = TimeFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_duration(s)
    }
}
