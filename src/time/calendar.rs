//! Proleptic Gregorian day arithmetic (days relative to 1970-01-01).

pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_year(year: i64) -> i64 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Days from 1970-01-01 to January 1st of `year`.
pub fn days_before_year(year: i64) -> i64 {
    // Shift to a March-based year so the leap day is the last day of the cycle.
    let y = year - 1;
    let era = y.div_euclid(400);
    let yoe = y.rem_euclid(400);
    // Day of era for March 1st of year y, plus the 306 days from March 1 to Jan 1.
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + 306;
    era * 146_097 + doe - 719_468
}

/// Split a day count into `(year, day_of_year)` with day 1 being January 1st.
pub fn year_and_day_of_year(days: i64) -> (i64, i64) {
    // Estimate, then correct by at most one year either way.
    let mut year = 1970 + days.div_euclid(365);
    while days_before_year(year) > days {
        year -= 1;
    }
    while days_before_year(year + 1) <= days {
        year += 1;
    }
    (year, days - days_before_year(year) + 1)
}
