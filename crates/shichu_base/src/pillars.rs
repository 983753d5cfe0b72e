//! Year, month, day and hour pillars from an adjusted birth time.
//!
//! - Day: `(JDN + 49) mod 60`; JDN 2451545 (2000-01-01) is 戊午.
//! - Year: `(solar_year − 4)`; the cyclical year turns at 立春.
//! - Month: the solar month between consecutive 節, stem from the year stem
//!   (甲己 → 丙寅, 乙庚 → 戊寅, 丙辛 → 庚寅, 丁壬 → 壬寅, 戊癸 → 甲寅).
//! - Hour: two-hour blocks from 23:00 (子), stem from the day stem
//!   (甲己 → 甲子, 乙庚 → 丙子, ...). The 23:00 block takes the next day's
//!   子 stem; the day pillar itself does not change before midnight.
//!
//! Solar terms are compared in UTC, which is equivalent to mapping them into
//! the adjusted frame with its UTC offset.

use chrono::NaiveDate;
use serde::Serialize;
use shichu_time::{AdjustedDateTime, SolarMonth, julian_day_number, solar_month_at};

use crate::branch::EarthlyBranch;
use crate::error::SajuError;
use crate::pillar::{FourPillars, Pillar};
use crate::rules::RuleBook;
use crate::stem::HeavenlyStem;

/// Offset added to the JDN to land on the 60-cycle.
pub const DAY_CYCLE_OFFSET: i64 = 49;

/// Raw pillars with the solar month they were derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarCalculation {
    pub pillars: FourPillars,
    pub solar_month: SolarMonth,
}

/// Day pillar position in the 60-cycle.
pub fn day_cycle_index(date: NaiveDate) -> u8 {
    (julian_day_number(date) + DAY_CYCLE_OFFSET).rem_euclid(60) as u8
}

/// Year pillar position in the 60-cycle for a cyclical (立春-based) year.
pub fn year_cycle_index(solar_year: i32) -> u8 {
    (solar_year - 4).rem_euclid(60) as u8
}

/// Month stem for a year stem and a solar month (0 = 寅 month).
pub fn month_stem(year_stem: HeavenlyStem, month_index: u8) -> HeavenlyStem {
    let first = (year_stem.index() % 5) * 2 + 2;
    HeavenlyStem::from_index(first + month_index % 12)
}

/// Month branch for a solar month (0 = 寅 month).
pub fn month_branch(month_index: u8) -> EarthlyBranch {
    EarthlyBranch::from_index(month_index % 12 + 2)
}

/// Hour block (0 = 子 .. 11 = 亥) of a clock hour.
pub fn hour_block(hour: u32) -> u8 {
    (((hour + 1) / 2) % 12) as u8
}

/// Hour stem from the day stem that owns the block.
pub fn hour_stem(day_stem: HeavenlyStem, block: u8) -> HeavenlyStem {
    HeavenlyStem::from_index((day_stem.index() % 5) * 2 + block % 12)
}

/// Compute the raw pillars (no combinations) and the containing solar month.
pub fn compute_pillars(
    adjusted: &AdjustedDateTime,
    rules: &RuleBook,
) -> Result<PillarCalculation, SajuError> {
    let solar_month = solar_month_at(adjusted.utc())?;

    let year = Pillar::from_cycle_index(year_cycle_index(solar_month.solar_year), rules);
    let month = Pillar::new(
        month_stem(year.stem, solar_month.month_index),
        month_branch(solar_month.month_index),
        rules,
    );

    let day_index = day_cycle_index(adjusted.date());
    let day = Pillar::from_cycle_index(day_index, rules);

    let block = hour_block(adjusted.hour);
    let stem_day = if adjusted.hour >= 23 {
        HeavenlyStem::from_index(day_index + 1)
    } else {
        day.stem
    };
    let hour = Pillar::new(hour_stem(stem_day, block), EarthlyBranch::from_index(block), rules);

    let pillars = FourPillars {
        year,
        month,
        day,
        hour,
    };
    tracing::debug!(
        year = %pillars.year.label(),
        month = %pillars.month.label(),
        day = %pillars.day.label(),
        hour = %pillars.hour.label(),
        "pillars computed"
    );
    Ok(PillarCalculation {
        pillars,
        solar_month,
    })
}

/// Raw pillars only.
pub fn calculate_four_pillars(
    adjusted: &AdjustedDateTime,
    rules: &RuleBook,
) -> Result<FourPillars, SajuError> {
    compute_pillars(adjusted, rules).map(|c| c.pillars)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_cycle_reference_dates() {
        assert_eq!(day_cycle_index(date(2000, 1, 1)), 54);
        assert_eq!(day_cycle_index(date(1986, 5, 26)), 6);
        assert_eq!(day_cycle_index(date(2000, 1, 2)), 55);
    }

    #[test]
    fn year_cycle() {
        // 1984 甲子, 1986 丙寅.
        assert_eq!(year_cycle_index(1984), 0);
        assert_eq!(year_cycle_index(1986), 2);
        assert_eq!(year_cycle_index(2024), 40);
    }

    #[test]
    fn month_stems_by_year_stem() {
        use HeavenlyStem::*;
        assert_eq!(month_stem(Kinoe, 0), Hinoe);
        assert_eq!(month_stem(Tsuchinoto, 0), Hinoe);
        assert_eq!(month_stem(Kinoto, 0), Tsuchinoe);
        assert_eq!(month_stem(Hinoe, 0), Kanoe);
        assert_eq!(month_stem(Hinoto, 0), Mizunoe);
        assert_eq!(month_stem(Tsuchinoe, 0), Kinoe);
        // 丙 year, 巳 month (index 3) is 癸巳.
        assert_eq!(month_stem(Hinoe, 3), Mizunoto);
        assert_eq!(month_branch(3), EarthlyBranch::Mi);
        assert_eq!(month_branch(10), EarthlyBranch::Ne);
        assert_eq!(month_branch(11), EarthlyBranch::Ushi);
    }

    #[test]
    fn hour_blocks() {
        assert_eq!(hour_block(23), 0);
        assert_eq!(hour_block(0), 0);
        assert_eq!(hour_block(1), 1);
        assert_eq!(hour_block(5), 3);
        assert_eq!(hour_block(22), 11);
    }

    #[test]
    fn hour_stems_by_day_stem() {
        use HeavenlyStem::*;
        assert_eq!(hour_stem(Kinoe, 0), Kinoe);
        assert_eq!(hour_stem(Kanoe, 0), Hinoe);
        assert_eq!(hour_stem(Kanoe, 3), Tsuchinoto);
        assert_eq!(hour_stem(Mizunoto, 0), Mizunoe);
    }
}
