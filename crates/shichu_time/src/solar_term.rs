//! The 24 solar terms (二十四節気) and per-year term tables.
//!
//! Each term is the instant the Sun's apparent longitude reaches a multiple of
//! 15 deg. The twelve "sekki" (節) terms at odd multiples of 15 deg from 小寒
//! open the solar months that anchor the year and month pillars; the year
//! itself turns at 立春 (315 deg).
//!
//! Tables are computed per Gregorian year and looked up by interval
//! containment, so the pillar calculator never hard-codes term dates.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_naive, naive_to_jd};
use crate::sun::find_longitude_crossing;

/// First and last Gregorian years with solar-term tables.
pub const FIRST_TABLE_YEAR: i32 = 1898;
pub const LAST_TABLE_YEAR: i32 = 2102;

/// Mean spacing between consecutive terms in days.
const MEAN_TERM_SPACING_DAYS: f64 = 365.242_189 / 24.0;

/// The 24 solar terms in Gregorian-year order (小寒 first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[allow(missing_docs)]
pub enum SolarTerm {
    Shokan,
    Daikan,
    Risshun,
    Usui,
    Keichitsu,
    Shunbun,
    Seimei,
    Kokuu,
    Rikka,
    Shoman,
    Boshu,
    Geshi,
    Shosho,
    Taisho,
    Risshu,
    Shosho2,
    Hakuro,
    Shubun,
    Kanro,
    Soko,
    Ritto,
    Shosetsu,
    Taisetsu,
    Toji,
}

/// All 24 terms in Gregorian-year order.
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::Shokan,
    SolarTerm::Daikan,
    SolarTerm::Risshun,
    SolarTerm::Usui,
    SolarTerm::Keichitsu,
    SolarTerm::Shunbun,
    SolarTerm::Seimei,
    SolarTerm::Kokuu,
    SolarTerm::Rikka,
    SolarTerm::Shoman,
    SolarTerm::Boshu,
    SolarTerm::Geshi,
    SolarTerm::Shosho,
    SolarTerm::Taisho,
    SolarTerm::Risshu,
    SolarTerm::Shosho2,
    SolarTerm::Hakuro,
    SolarTerm::Shubun,
    SolarTerm::Kanro,
    SolarTerm::Soko,
    SolarTerm::Ritto,
    SolarTerm::Shosetsu,
    SolarTerm::Taisetsu,
    SolarTerm::Toji,
];

const KANJI: [&str; 24] = [
    "小寒", "大寒", "立春", "雨水", "啓蟄", "春分", "清明", "穀雨", "立夏", "小満", "芒種", "夏至",
    "小暑", "大暑", "立秋", "処暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至",
];

impl SolarTerm {
    /// 0-based index (小寒=0 .. 冬至=23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Term from its 0-based index (wrapping).
    pub const fn from_index(i: u8) -> Self {
        ALL_SOLAR_TERMS[(i % 24) as usize]
    }

    /// Kanji name.
    pub const fn kanji(self) -> &'static str {
        KANJI[self as usize]
    }

    /// Apparent solar longitude of the term in degrees.
    pub fn longitude_deg(self) -> f64 {
        (285.0 + 15.0 * self.index() as f64).rem_euclid(360.0)
    }

    /// Whether this term opens a solar month (節 rather than 中気).
    pub const fn is_sekki(self) -> bool {
        self.index() % 2 == 0
    }

    /// Solar month opened by this sekki: 0 = the 寅 month (立春) .. 11 = the 丑 month (小寒).
    pub const fn solar_month_index(self) -> Option<u8> {
        if self.is_sekki() {
            Some((self.index() / 2 + 11) % 12)
        } else {
            None
        }
    }
}

/// One computed term instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarTermInstant {
    pub term: SolarTerm,
    /// Julian Date (UT).
    pub jd_ut: f64,
    /// The instant in UTC, rounded to the second.
    pub utc: NaiveDateTime,
}

impl SolarTermInstant {
    /// The instant shifted into a frame `offset_seconds` ahead of UTC.
    pub fn in_frame(&self, offset_seconds: i64) -> NaiveDateTime {
        self.utc + chrono::Duration::seconds(offset_seconds)
    }
}

/// All 24 terms of one Gregorian year.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarTermTable {
    pub year: i32,
    pub terms: Vec<SolarTermInstant>,
}

impl SolarTermTable {
    /// Compute the table for a Gregorian year.
    pub fn for_year(year: i32) -> Result<Self, TimeError> {
        if !(FIRST_TABLE_YEAR..=LAST_TABLE_YEAR).contains(&year) {
            return Err(TimeError::InvalidDateRange(format!(
                "solar terms available for {FIRST_TABLE_YEAR}..={LAST_TABLE_YEAR}, got {year}"
            )));
        }
        // 小寒 falls on Jan 5-7.
        let first_guess = calendar_to_jd(year, 1, 6.0);
        let mut terms = Vec::with_capacity(24);
        for term in ALL_SOLAR_TERMS {
            let guess = first_guess + term.index() as f64 * MEAN_TERM_SPACING_DAYS;
            let jd_ut = find_longitude_crossing(term.longitude_deg(), guess);
            let utc = jd_to_naive(jd_ut).ok_or_else(|| {
                TimeError::InvalidDateRange(format!("solar term {} of {year}", term.kanji()))
            })?;
            terms.push(SolarTermInstant { term, jd_ut, utc });
        }
        Ok(Self { year, terms })
    }

    /// The instant of a given term in this year.
    pub fn instant(&self, term: SolarTerm) -> &SolarTermInstant {
        &self.terms[term.index() as usize]
    }

    /// The latest term at or before `utc` within this year's table.
    pub fn term_at(&self, utc: NaiveDateTime) -> Option<&SolarTermInstant> {
        self.terms.iter().take_while(|t| t.utc <= utc).last()
    }

    /// The year's twelve sekki in order.
    pub fn sekki(&self) -> impl Iterator<Item = &SolarTermInstant> {
        self.terms.iter().filter(|t| t.term.is_sekki())
    }
}

/// The solar month (between two consecutive sekki) containing an instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarMonth {
    /// Sekki that opened the month.
    pub start: SolarTermInstant,
    /// Sekki that closes the month.
    pub end: SolarTermInstant,
    /// 0 = 寅 month .. 11 = 丑 month.
    pub month_index: u8,
    /// Cyclical (立春-based) year the month belongs to.
    pub solar_year: i32,
}

/// Locate the solar month containing a UTC instant.
pub fn solar_month_at(utc: NaiveDateTime) -> Result<SolarMonth, TimeError> {
    let year = chrono::Datelike::year(&utc.date());
    let mut boundaries: Vec<SolarTermInstant> = Vec::with_capacity(14);
    let prev = SolarTermTable::for_year(year - 1)?;
    boundaries.push(*prev.instant(SolarTerm::Taisetsu));
    let this = SolarTermTable::for_year(year)?;
    boundaries.extend(this.sekki().copied());
    let next = SolarTermTable::for_year(year + 1)?;
    boundaries.push(*next.instant(SolarTerm::Shokan));

    let pos = boundaries
        .windows(2)
        .position(|w| w[0].utc <= utc && utc < w[1].utc)
        .ok_or_else(|| TimeError::InvalidDateRange(format!("no solar month contains {utc}")))?;
    let start = boundaries[pos];
    let end = boundaries[pos + 1];
    let month_index = start.term.solar_month_index().unwrap_or(0);

    // Months opened before 立春 of this Gregorian year belong to the previous cyclical year.
    let risshun = this.instant(SolarTerm::Risshun).utc;
    let solar_year = if utc < risshun { year - 1 } else { year };
    Ok(SolarMonth {
        start,
        end,
        month_index,
        solar_year,
    })
}

/// Apparent solar longitude at a UTC naive date-time.
pub fn solar_longitude_at(utc: NaiveDateTime) -> f64 {
    crate::sun::apparent_longitude_at_ut(naive_to_jd(utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn term_longitudes() {
        assert_eq!(SolarTerm::Shokan.longitude_deg(), 285.0);
        assert_eq!(SolarTerm::Risshun.longitude_deg(), 315.0);
        assert_eq!(SolarTerm::Shunbun.longitude_deg(), 0.0);
        assert_eq!(SolarTerm::Toji.longitude_deg(), 270.0);
    }

    #[test]
    fn sekki_month_indices() {
        assert_eq!(SolarTerm::Risshun.solar_month_index(), Some(0));
        assert_eq!(SolarTerm::Rikka.solar_month_index(), Some(3));
        assert_eq!(SolarTerm::Taisetsu.solar_month_index(), Some(10));
        assert_eq!(SolarTerm::Shokan.solar_month_index(), Some(11));
        assert_eq!(SolarTerm::Daikan.solar_month_index(), None);
    }

    #[test]
    fn table_is_chronological() {
        let table = SolarTermTable::for_year(1986).unwrap();
        assert_eq!(table.terms.len(), 24);
        for w in table.terms.windows(2) {
            assert!(w[0].utc < w[1].utc);
        }
        assert!(table.terms.iter().all(|t| chrono::Datelike::year(&t.utc) == 1986));
    }

    #[test]
    fn risshun_1986_date() {
        // 立春 1986: Feb 4 ~ 11:08 JST = 02:08 UTC.
        let table = SolarTermTable::for_year(1986).unwrap();
        let t = table.instant(SolarTerm::Risshun).utc;
        let expected = utc(1986, 2, 4, 2, 8);
        assert!((t - expected).num_minutes().abs() < 30, "got {t}");
    }

    #[test]
    fn out_of_range_year() {
        assert!(SolarTermTable::for_year(1800).is_err());
    }

    #[test]
    fn may_26_1986_is_snake_month() {
        let m = solar_month_at(utc(1986, 5, 25, 20, 18)).unwrap();
        assert_eq!(m.start.term, SolarTerm::Rikka);
        assert_eq!(m.end.term, SolarTerm::Boshu);
        assert_eq!(m.month_index, 3);
        assert_eq!(m.solar_year, 1986);
    }

    #[test]
    fn january_belongs_to_previous_solar_year() {
        let m = solar_month_at(utc(1987, 1, 20, 0, 0)).unwrap();
        assert_eq!(m.start.term, SolarTerm::Shokan);
        assert_eq!(m.month_index, 11);
        assert_eq!(m.solar_year, 1986);
    }

    #[test]
    fn late_december_is_rat_month() {
        let m = solar_month_at(utc(1986, 12, 31, 12, 0)).unwrap();
        assert_eq!(m.start.term, SolarTerm::Taisetsu);
        assert_eq!(m.end.term, SolarTerm::Shokan);
        assert_eq!(m.month_index, 10);
    }
}
