//! Julian Date and Julian Day Number conversions (proleptic Gregorian).
//!
//! Meeus, *Astronomical Algorithms* 2nd ed., chapter 7.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Julian Date of J2000.0 (2000-01-01T12:00:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in a day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Calendar date (with fractional day) to Julian Date.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day_frac + b
        - 1524.5
}

/// Julian Date to calendar `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

/// Integer Julian Day Number of a calendar date (the JD at that date's noon).
pub fn julian_day_number(date: NaiveDate) -> i64 {
    let y = date.year() as i64;
    let m = date.month() as i64;
    let d = date.day() as i64;
    let a = (14 - m) / 12;
    let y = y + 4800 - a;
    let m = m + 12 * a - 3;
    d + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        - 32_045
}

/// Naive date-time (interpreted in whatever time scale the caller uses) to JD.
pub fn naive_to_jd(dt: NaiveDateTime) -> f64 {
    let secs = dt.num_seconds_from_midnight() as f64 + dt.nanosecond() as f64 * 1e-9;
    julian_day_number(dt.date()) as f64 - 0.5 + secs / SECONDS_PER_DAY
}

/// JD back to a naive date-time, rounded to the nearest second.
pub fn jd_to_naive(jd: f64) -> Option<NaiveDateTime> {
    let shifted = jd + 0.5;
    let jdn = shifted.floor() as i64;
    let mut secs = ((shifted - jdn as f64) * SECONDS_PER_DAY).round() as i64;
    let mut day = jdn;
    if secs >= SECONDS_PER_DAY as i64 {
        secs -= SECONDS_PER_DAY as i64;
        day += 1;
    }
    // JDN 1721426 is 0001-01-01, CE day 1.
    let date = NaiveDate::from_num_days_from_ce_opt(i32::try_from(day - 1_721_425).ok()?)?;
    date.and_hms_opt(0, 0, 0)
        .map(|midnight| midnight + chrono::Duration::seconds(secs))
}

/// Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
