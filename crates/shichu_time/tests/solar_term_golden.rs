//! Golden-value tests for solar terms and lunar dates against published
//! almanac values (National Astronomical Observatory of Japan, 暦要項).

use chrono::{NaiveDate, NaiveDateTime};
use shichu_time::{SolarTerm, SolarTermTable, lunar_date, solar_month_at};

fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn assert_near(term: SolarTerm, year: i32, expected: NaiveDateTime) {
    let table = SolarTermTable::for_year(year).unwrap();
    let got = table.instant(term).utc;
    let off = (got - expected).num_minutes().abs();
    assert!(off < 30, "{} {year}: got {got}, expected {expected}", term.kanji());
}

#[test]
fn terms_2024() {
    // 立春 17:27 JST, 春分 12:06 JST, 夏至 05:51 JST, 冬至 18:21 JST.
    assert_near(SolarTerm::Risshun, 2024, utc(2024, 2, 4, 8, 27));
    assert_near(SolarTerm::Shunbun, 2024, utc(2024, 3, 20, 3, 6));
    assert_near(SolarTerm::Geshi, 2024, utc(2024, 6, 20, 20, 51));
    assert_near(SolarTerm::Toji, 2024, utc(2024, 12, 21, 9, 21));
}

#[test]
fn winter_solstice_2000() {
    // 2000-12-21 22:37 JST.
    assert_near(SolarTerm::Toji, 2000, utc(2000, 12, 21, 13, 37));
}

#[test]
fn every_year_has_ordered_terms() {
    for year in (1900..=2100).step_by(7) {
        let table = SolarTermTable::for_year(year).unwrap();
        for pair in table.terms.windows(2) {
            let gap = (pair[1].utc - pair[0].utc).num_hours();
            assert!((14 * 24..=16 * 24).contains(&gap), "{year}: gap {gap} h");
        }
    }
}

#[test]
fn term_at_interval_lookup() {
    let table = SolarTermTable::for_year(2024).unwrap();
    let risshun = table.instant(SolarTerm::Risshun).utc;
    assert_eq!(table.term_at(risshun).unwrap().term, SolarTerm::Risshun);
    let just_before = risshun - chrono::Duration::seconds(1);
    assert_eq!(table.term_at(just_before).unwrap().term, SolarTerm::Daikan);
    assert!(table.term_at(utc(2024, 1, 1, 0, 0)).is_none());
}

#[test]
fn risshun_flips_solar_year() {
    let table = SolarTermTable::for_year(2024).unwrap();
    let risshun = table.instant(SolarTerm::Risshun).utc;
    let before = solar_month_at(risshun - chrono::Duration::minutes(1)).unwrap();
    let after = solar_month_at(risshun + chrono::Duration::minutes(1)).unwrap();
    assert_eq!((before.solar_year, before.month_index), (2023, 11));
    assert_eq!((after.solar_year, after.month_index), (2024, 0));
}

#[test]
fn lunar_reference_dates() {
    let d = |y, m, dd| NaiveDate::from_ymd_opt(y, m, dd).unwrap();
    let l = lunar_date(d(2000, 1, 1)).unwrap();
    assert_eq!((l.year, l.month, l.day, l.is_leap_month), (1999, 11, 25, false));
    let l = lunar_date(d(2024, 2, 10)).unwrap();
    assert_eq!((l.year, l.month, l.day), (2024, 1, 1));
}
