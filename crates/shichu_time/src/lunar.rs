//! Japanese lunisolar (旧暦) dates.
//!
//! Months begin on the JST day of the new moon. The month containing the
//! winter solstice is month 11; a solstice-to-solstice span of 13 lunations
//! has a leap month, the first month that contains no principal term (中気).
//!
//! New moons use the mean lunation series with the periodic terms of Meeus,
//! *Astronomical Algorithms* 2nd ed., chapter 49 (planetary arguments
//! omitted, under a minute of error).

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::delta_t::delta_t_days;
use crate::error::TimeError;
use crate::julian::{calendar_to_jd, julian_day_number};
use crate::solar_term::SolarTermTable;
use crate::sun::find_longitude_crossing;

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_861;

/// JST offset as a fraction of a day.
const JST_DAY_FRACTION: f64 = 9.0 / 24.0;

/// A date in the Japanese lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub is_leap_month: bool,
}

/// JDE (TT) of the new moon with lunation number `k` (k = 0 at 2000-01-06).
pub fn new_moon_jde(k: i64) -> f64 {
    let k = k as f64;
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let jde = 2_451_550.097_66 + SYNODIC_MONTH_DAYS * k + 0.000_154_37 * t2 - 0.000_000_150 * t3
        + 0.000_000_000_73 * t4;

    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;
    let m = (2.5534 + 29.105_356_70 * k - 0.000_001_4 * t2 - 0.000_000_11 * t3).to_radians();
    let mp = (201.5643 + 385.816_935_28 * k + 0.010_758_2 * t2 + 0.000_012_38 * t3
        - 0.000_000_058 * t4)
        .to_radians();
    let f = (160.7108 + 390.670_502_84 * k - 0.001_611_8 * t2 - 0.000_002_27 * t3
        + 0.000_000_011 * t4)
        .to_radians();
    let om = (124.7746 - 1.563_755_88 * k + 0.002_067_2 * t2 + 0.000_002_15 * t3).to_radians();

    let corr = -0.407_20 * mp.sin() + 0.172_41 * e * m.sin() + 0.016_08 * (2.0 * mp).sin()
        + 0.010_39 * (2.0 * f).sin()
        + 0.007_39 * e * (mp - m).sin()
        - 0.005_14 * e * (mp + m).sin()
        + 0.002_08 * e * e * (2.0 * m).sin()
        - 0.001_11 * (mp - 2.0 * f).sin()
        - 0.000_57 * (mp + 2.0 * f).sin()
        + 0.000_56 * e * (2.0 * mp + m).sin()
        - 0.000_42 * (3.0 * mp).sin()
        + 0.000_42 * e * (m + 2.0 * f).sin()
        + 0.000_38 * e * (m - 2.0 * f).sin()
        - 0.000_24 * e * (2.0 * mp - m).sin()
        - 0.000_17 * om.sin()
        - 0.000_07 * (mp + 2.0 * m).sin()
        + 0.000_04 * (2.0 * mp - 2.0 * f).sin()
        + 0.000_04 * (3.0 * m).sin()
        + 0.000_03 * (mp + m - 2.0 * f).sin()
        + 0.000_03 * (2.0 * mp + 2.0 * f).sin()
        - 0.000_03 * (mp + m + 2.0 * f).sin()
        + 0.000_03 * (mp - m + 2.0 * f).sin()
        - 0.000_02 * (mp - m - 2.0 * f).sin()
        - 0.000_02 * (3.0 * mp + m).sin()
        + 0.000_02 * (4.0 * mp).sin();
    jde + corr
}

/// UT Julian Date of new moon `k`.
pub fn new_moon_ut(k: i64) -> f64 {
    let jde = new_moon_jde(k);
    jde - delta_t_days(jde)
}

/// JST calendar day (as a Julian Day Number) containing a UT Julian Date.
pub fn jst_day(jd_ut: f64) -> i64 {
    (jd_ut + 0.5 + JST_DAY_FRACTION).floor() as i64
}

fn new_moon_day(k: i64) -> i64 {
    jst_day(new_moon_ut(k))
}

/// Lunation number of the last new moon falling on or before a JST day.
fn lunation_on_or_before(jdn: i64) -> i64 {
    let mut k = ((jdn as f64 - 2_451_550.1) / SYNODIC_MONTH_DAYS).floor() as i64;
    while new_moon_day(k) > jdn {
        k -= 1;
    }
    while new_moon_day(k + 1) <= jdn {
        k += 1;
    }
    k
}

/// JST day of the winter solstice of a Gregorian year.
fn winter_solstice_day(year: i32) -> i64 {
    let guess = calendar_to_jd(year, 12, 22.0);
    jst_day(find_longitude_crossing(270.0, guess))
}

/// JST days of every principal term (中気) in the given Gregorian years.
fn principal_term_days(years: std::ops::RangeInclusive<i32>) -> Result<Vec<i64>, TimeError> {
    let mut days = Vec::with_capacity(36);
    for year in years {
        let table = SolarTermTable::for_year(year)?;
        days.extend(
            table
                .terms
                .iter()
                .filter(|t| !t.term.is_sekki())
                .map(|t| jst_day(t.jd_ut)),
        );
    }
    Ok(days)
}

/// Convert a Gregorian date (interpreted as a JST day) to a lunisolar date.
pub fn lunar_date(date: NaiveDate) -> Result<LunarDate, TimeError> {
    let jdn = julian_day_number(date);
    let gy = date.year();
    let anchor_year = if jdn >= winter_solstice_day(gy) {
        gy
    } else {
        gy - 1
    };

    let k_start = lunation_on_or_before(winter_solstice_day(anchor_year));
    let k_end = lunation_on_or_before(winter_solstice_day(anchor_year + 1));
    let has_leap = k_end - k_start == 13;
    let principal = if has_leap {
        principal_term_days(anchor_year..=anchor_year + 1)?
    } else {
        Vec::new()
    };

    let mut month = 11u32;
    let mut year = anchor_year;
    let mut leap_used = false;
    for k in k_start..k_end {
        let start = new_moon_day(k);
        let end = new_moon_day(k + 1);
        let mut is_leap = false;
        if k > k_start {
            let lacks_principal =
                has_leap && !leap_used && !principal.iter().any(|&d| start <= d && d < end);
            if lacks_principal {
                is_leap = true;
                leap_used = true;
            } else {
                month = if month == 12 { 1 } else { month + 1 };
                if month == 1 {
                    year = anchor_year + 1;
                }
            }
        }
        if start <= jdn && jdn < end {
            return Ok(LunarDate {
                year,
                month,
                day: (jdn - start + 1) as u32,
                is_leap_month: is_leap,
            });
        }
    }
    Err(TimeError::InvalidDateRange(format!(
        "no lunar month contains {date}"
    )))
}
