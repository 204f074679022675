use crate::error::{TimeFormatError, TimeNotation};
use crate::time::calendar::{days_before_year, days_in_year};
use crate::time::{Duration, Instant, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};
use regex::{Captures, Regex};
use std::sync::LazyLock;

// 1) year 2) day-of-year 3) hour 4) minute 5) second 6) optional fraction.
// A trailing `Z` is accepted because SeqJSON producers append it.
static DOY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{3})T(\d{2}):(\d{2}):(\d{2})(?:\.(\d{1,3}))?Z?$")
        .expect("day-of-year pattern compiles")
});

// 1) sign 2) hours (two to six digits) 3) minute 4) second 5) optional fraction.
static HMS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-)?(\d{2,6}):(\d{2}):(\d{2})(?:\.(\d{1,3}))?$")
        .expect("hh:mm:ss pattern compiles")
});

/// Parse `YYYY-DDDThh:mm:ss[.sss][Z]` into an [`Instant`].
pub fn parse_absolute(text: &str) -> Result<Instant, TimeFormatError> {
    let fail = |reason: &str| TimeFormatError::new(TimeNotation::Absolute, text, reason);

    let caps = DOY_RE
        .captures(text.trim())
        .ok_or_else(|| fail("expected YYYY-DDDThh:mm:ss.sss"))?;

    let year = field(&caps, 1);
    let doy = field(&caps, 2);
    if doy < 1 || doy > days_in_year(year) {
        return Err(fail(&format!("day {} is outside year {}", doy, year)));
    }
    let ms_of_day = clock_millis(&caps, 3).map_err(|reason| fail(&reason))?;
    if ms_of_day >= MS_PER_DAY {
        return Err(fail("hour must be below 24"));
    }

    let days = days_before_year(year) + doy - 1;
    Ok(Instant::from_epoch_millis(days * MS_PER_DAY + ms_of_day))
}

/// Parse `[-]hh:mm:ss[.sss]` into a [`Duration`].
pub fn parse_duration(text: &str) -> Result<Duration, TimeFormatError> {
    let fail = |reason: &str| TimeFormatError::new(TimeNotation::Duration, text, reason);

    let caps = HMS_RE
        .captures(text.trim())
        .ok_or_else(|| fail("expected hh:mm:ss.sss"))?;

    let ms = clock_millis(&caps, 2).map_err(|reason| fail(&reason))?;
    let negative = caps.get(1).is_some();
    if negative && ms == 0 {
        return Err(fail("a zero duration cannot be negative"));
    }
    Ok(Duration::from_millis(if negative { -ms } else { ms }))
}

/// Read `hh, mm, ss[, fraction]` starting at capture group `first`.
fn clock_millis(caps: &Captures<'_>, first: usize) -> Result<i64, String> {
    let hour = field(caps, first);
    let minute = field(caps, first + 1);
    let second = field(caps, first + 2);
    if minute >= 60 {
        return Err(format!("minute {} must be below 60", minute));
    }
    if second >= 60 {
        return Err(format!("second {} must be below 60", second));
    }
    let millis = match caps.get(first + 3) {
        // ".5" means 500 ms: right-pad to three digits.
        Some(m) => format!("{:0<3}", m.as_str()).parse::<i64>().unwrap_or(0),
        None => 0,
    };
    Ok(hour * MS_PER_HOUR + minute * MS_PER_MINUTE + second * MS_PER_SECOND + millis)
}

// Groups are short digit runs by construction, so the parse cannot overflow.
fn field(caps: &Captures<'_>, idx: usize) -> i64 {
    caps.get(idx)
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .unwrap_or(0)
}
