//! Daylight-saving rules.
//!
//! Two independent paths:
//! - modern rule tables per region ([`DstRegion`]), consulted by [`is_dst`];
//! - the Japanese summer time of 1948–1951, a fixed date-ranged table
//!   consulted by [`is_japanese_historical_dst`] only.
//!
//! All transition times are stored in local standard time. A wall time is in
//! DST when `start <= wall < end + save`.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use serde::Serialize;

use crate::error::TimeError;
use crate::zone::{zone_info, zone_offset_minutes};

/// Saving applied by every rule in the tables.
pub const DST_SAVE_MINUTES: i64 = 60;

/// How the transition day within a month is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayRule {
    LastSunday,
    /// n-th Sunday (1-based).
    NthSunday(u8),
    Fixed(u8),
}

/// When a transition happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionClock {
    /// Minutes after local standard midnight.
    LocalStandard(u16),
    /// Minutes after UTC midnight (EU convention).
    Utc(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub month: u8,
    pub day: DayRule,
    pub clock: TransitionClock,
}

/// A rule in force for seasons starting in `from_year..=to_year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DstRule {
    pub from_year: i32,
    pub to_year: i32,
    pub start: Transition,
    pub end: Transition,
}

/// Regions with a modern DST rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DstRegion {
    UnitedStates,
    Europe,
    Australia,
    NewZealand,
    Russia,
}

const fn at(month: u8, day: DayRule, clock: TransitionClock) -> Transition {
    Transition { month, day, clock }
}

const fn rule(from_year: i32, to_year: i32, start: Transition, end: Transition) -> DstRule {
    DstRule {
        from_year,
        to_year,
        start,
        end,
    }
}

use DayRule::{LastSunday, NthSunday};
use TransitionClock::{LocalStandard, Utc};

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------

// US end times are 02:00 daylight = 01:00 standard.
const US_RULES: &[DstRule] = &[
    rule(
        1967,
        1973,
        at(4, LastSunday, LocalStandard(120)),
        at(10, LastSunday, LocalStandard(60)),
    ),
    rule(
        1976,
        1986,
        at(4, LastSunday, LocalStandard(120)),
        at(10, LastSunday, LocalStandard(60)),
    ),
    rule(
        1987,
        2006,
        at(4, NthSunday(1), LocalStandard(120)),
        at(10, LastSunday, LocalStandard(60)),
    ),
    rule(
        2007,
        i32::MAX,
        at(3, NthSunday(2), LocalStandard(120)),
        at(11, NthSunday(1), LocalStandard(60)),
    ),
];

const EU_RULES: &[DstRule] = &[
    rule(
        1981,
        1995,
        at(3, LastSunday, Utc(60)),
        at(9, LastSunday, Utc(60)),
    ),
    rule(
        1996,
        i32::MAX,
        at(3, LastSunday, Utc(60)),
        at(10, LastSunday, Utc(60)),
    ),
];

// Southern hemisphere: the season starting in year Y ends in Y+1.
const AU_RULES: &[DstRule] = &[
    rule(
        2001,
        2007,
        at(10, LastSunday, LocalStandard(120)),
        at(3, LastSunday, LocalStandard(120)),
    ),
    rule(
        2008,
        i32::MAX,
        at(10, NthSunday(1), LocalStandard(120)),
        at(4, NthSunday(1), LocalStandard(120)),
    ),
];

const NZ_RULES: &[DstRule] = &[
    rule(
        1990,
        2006,
        at(10, NthSunday(1), LocalStandard(120)),
        at(3, NthSunday(3), LocalStandard(120)),
    ),
    rule(
        2007,
        i32::MAX,
        at(9, LastSunday, LocalStandard(120)),
        at(4, NthSunday(1), LocalStandard(120)),
    ),
];

const RU_RULES: &[DstRule] = &[rule(
    1996,
    2010,
    at(3, LastSunday, LocalStandard(120)),
    at(10, LastSunday, LocalStandard(120)),
)];

impl DstRegion {
    pub const fn rules(self) -> &'static [DstRule] {
        match self {
            DstRegion::UnitedStates => US_RULES,
            DstRegion::Europe => EU_RULES,
            DstRegion::Australia => AU_RULES,
            DstRegion::NewZealand => NZ_RULES,
            DstRegion::Russia => RU_RULES,
        }
    }

    /// The rule governing the season that starts in `year`, if any.
    pub fn rule_for(self, year: i32) -> Option<&'static DstRule> {
        self.rules()
            .iter()
            .find(|r| (r.from_year..=r.to_year).contains(&year))
    }
}

fn nth_sunday(year: i32, month: u32, n: u8) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, Weekday::Sun, n)
}

fn last_sunday(year: i32, month: u32) -> Option<NaiveDate> {
    let first_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let last = first_next.pred_opt()?;
    let back = last.weekday().num_days_from_sunday() as i64;
    Some(last - Duration::days(back))
}

impl Transition {
    /// Transition instant in local standard time.
    fn local_standard(&self, year: i32, std_offset_minutes: i32) -> Option<NaiveDateTime> {
        let month = self.month as u32;
        let date = match self.day {
            DayRule::LastSunday => last_sunday(year, month)?,
            DayRule::NthSunday(n) => nth_sunday(year, month, n)?,
            DayRule::Fixed(d) => NaiveDate::from_ymd_opt(year, month, d as u32)?,
        };
        let midnight = date.and_hms_opt(0, 0, 0)?;
        Some(match self.clock {
            TransitionClock::LocalStandard(m) => midnight + Duration::minutes(m as i64),
            TransitionClock::Utc(m) => {
                midnight + Duration::minutes(m as i64 + std_offset_minutes as i64)
            }
        })
    }
}

impl DstRule {
    /// `[start, end)` of the season starting in `year`, as wall-clock times.
    pub fn season_wall(
        &self,
        year: i32,
        std_offset_minutes: i32,
    ) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let end_year = if self.end.month < self.start.month {
            year + 1
        } else {
            year
        };
        let start = self.start.local_standard(year, std_offset_minutes)?;
        let end = self.end.local_standard(end_year, std_offset_minutes)?;
        Some((start, end + Duration::minutes(DST_SAVE_MINUTES)))
    }
}

/// Whether a wall time in `zone_id` falls inside a modern DST season.
///
/// Zones without a rule table (including `Asia/Tokyo`) are never in DST here;
/// Japanese summer time is handled by [`is_japanese_historical_dst`].
pub fn is_dst(wall: NaiveDateTime, zone_id: &str) -> Result<bool, TimeError> {
    let std_offset = zone_offset_minutes(wall, zone_id)?;
    let Some(region) = zone_info(zone_id).and_then(|z| z.dst) else {
        return Ok(false);
    };
    let year = wall.year();
    for season_year in [year, year - 1] {
        let Some(rule) = region.rule_for(season_year) else {
            continue;
        };
        if let Some((start, end)) = rule.season_wall(season_year, std_offset) {
            if start <= wall && wall < end {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

// ---------------------------------------------------------------------------
// Japanese summer time (サマータイム) 1948–1951
// ---------------------------------------------------------------------------

/// One season of the Japanese summer time, in JST standard time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoricalDstPeriod {
    pub start: (i32, u32, u32),
    pub end: (i32, u32, u32),
}

/// Seasons from the 1948 summer-time law until its repeal in 1952.
pub const JAPANESE_HISTORICAL_DST: &[HistoricalDstPeriod] = &[
    HistoricalDstPeriod {
        start: (1948, 5, 2),
        end: (1948, 9, 12),
    },
    HistoricalDstPeriod {
        start: (1949, 4, 3),
        end: (1949, 9, 11),
    },
    HistoricalDstPeriod {
        start: (1950, 5, 7),
        end: (1950, 9, 10),
    },
    HistoricalDstPeriod {
        start: (1951, 5, 6),
        end: (1951, 9, 9),
    },
];

fn midnight(ymd: (i32, u32, u32)) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2)?.and_hms_opt(0, 0, 0)
}

/// Whether a Japanese wall time falls inside the 1948–1951 summer time.
pub fn is_japanese_historical_dst(wall: NaiveDateTime) -> bool {
    JAPANESE_HISTORICAL_DST.iter().any(|p| {
        match (midnight(p.start), midnight(p.end)) {
            (Some(start), Some(end)) => {
                start <= wall && wall < end + Duration::minutes(DST_SAVE_MINUTES)
            }
            _ => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn sunday_helpers() {
        assert_eq!(last_sunday(2024, 3), NaiveDate::from_ymd_opt(2024, 3, 31));
        assert_eq!(last_sunday(2024, 10), NaiveDate::from_ymd_opt(2024, 10, 27));
        assert_eq!(nth_sunday(2024, 3, 2), NaiveDate::from_ymd_opt(2024, 3, 10));
        assert_eq!(nth_sunday(2024, 11, 1), NaiveDate::from_ymd_opt(2024, 11, 3));
    }

    #[test]
    fn new_york_2024() {
        assert!(!is_dst(wall(2024, 3, 10, 1, 59), "America/New_York").unwrap());
        assert!(is_dst(wall(2024, 3, 10, 2, 0), "America/New_York").unwrap());
        assert!(is_dst(wall(2024, 7, 4, 12, 0), "America/New_York").unwrap());
        assert!(is_dst(wall(2024, 11, 3, 1, 59), "America/New_York").unwrap());
        assert!(!is_dst(wall(2024, 11, 3, 2, 0), "America/New_York").unwrap());
        assert!(!is_dst(wall(2024, 12, 25, 12, 0), "America/New_York").unwrap());
    }

    #[test]
    fn new_york_1980s_rule() {
        // 1986: last Sunday of April (27th).
        assert!(!is_dst(wall(1986, 4, 20, 12, 0), "America/New_York").unwrap());
        assert!(is_dst(wall(1986, 5, 26, 12, 0), "America/New_York").unwrap());
    }

    #[test]
    fn paris_summer_and_winter() {
        assert!(is_dst(wall(2024, 7, 1, 12, 0), "Europe/Paris").unwrap());
        assert!(!is_dst(wall(2024, 1, 15, 12, 0), "Europe/Paris").unwrap());
        // 2024-03-31 01:00 UTC = 02:00 CET.
        assert!(!is_dst(wall(2024, 3, 31, 1, 59), "Europe/Paris").unwrap());
        assert!(is_dst(wall(2024, 3, 31, 2, 0), "Europe/Paris").unwrap());
    }

    #[test]
    fn sydney_wraps_year_end() {
        assert!(is_dst(wall(2024, 1, 15, 12, 0), "Australia/Sydney").unwrap());
        assert!(!is_dst(wall(2024, 7, 15, 12, 0), "Australia/Sydney").unwrap());
        assert!(is_dst(wall(2024, 12, 15, 12, 0), "Australia/Sydney").unwrap());
    }

    #[test]
    fn tokyo_has_no_modern_dst() {
        assert!(!is_dst(wall(1948, 6, 1, 12, 0), "Asia/Tokyo").unwrap());
        assert!(!is_dst(wall(2024, 7, 1, 12, 0), "Asia/Tokyo").unwrap());
    }

    #[test]
    fn moscow_dst_ended_2010() {
        assert!(is_dst(wall(2005, 7, 1, 12, 0), "Europe/Moscow").unwrap());
        assert!(!is_dst(wall(2015, 7, 1, 12, 0), "Europe/Moscow").unwrap());
    }

    #[test]
    fn unknown_zone_errors() {
        assert!(is_dst(wall(2024, 7, 1, 12, 0), "Nowhere/Here").is_err());
    }

    #[test]
    fn japanese_historical_window() {
        assert!(is_japanese_historical_dst(wall(1948, 6, 1, 12, 0)));
        assert!(is_japanese_historical_dst(wall(1948, 5, 2, 0, 0)));
        assert!(!is_japanese_historical_dst(wall(1948, 5, 1, 23, 59)));
        assert!(is_japanese_historical_dst(wall(1948, 9, 12, 0, 59)));
        assert!(!is_japanese_historical_dst(wall(1948, 9, 12, 1, 0)));
        assert!(!is_japanese_historical_dst(wall(1952, 7, 1, 12, 0)));
        assert!(!is_japanese_historical_dst(wall(1948, 12, 1, 12, 0)));
    }
}
