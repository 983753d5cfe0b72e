//! Major fortune cycles (大運).
//!
//! Direction: a yang year stem runs forward for a male chart and a yin year
//! stem runs forward for a female chart; the other two cases run backward.
//! The first cycle starts at `days / 3` years, where `days` is the distance
//! from birth to the next 節 (forward) or back to the previous 節 (backward).
//! Each cycle is ten years and steps one position along the 60-cycle from
//! the month pillar.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shichu_time::{AdjustedDateTime, SolarMonth};

use crate::pillar::{FourPillars, Pillar};
use crate::rules::RuleBook;

/// Number of cycles reported.
pub const MAJOR_FORTUNE_CYCLES: usize = 10;
/// Years per cycle.
pub const CYCLE_YEARS: u32 = 10;
/// Days of distance to the adjacent 節 that count as one year of age.
pub const DAYS_PER_YEAR_OF_AGE: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "male" | "男" => Ok(Self::Male),
            "f" | "female" | "女" => Ok(Self::Female),
            other => Err(format!("unknown gender '{other}' (expected M or F)")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FortuneDirection {
    Forward,
    Backward,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MajorFortuneCycle {
    pub start_age: u32,
    pub end_age: u32,
    pub pillar: Pillar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MajorFortunes {
    pub direction: FortuneDirection,
    /// Age at which the first cycle begins.
    pub start_age: u32,
    /// Unrounded `days / 3`.
    pub start_age_exact: f64,
    pub cycles: Vec<MajorFortuneCycle>,
}

/// Direction of the cycles for a year stem polarity and gender.
pub fn fortune_direction(year_is_yang: bool, gender: Gender) -> FortuneDirection {
    match (year_is_yang, gender) {
        (true, Gender::Male) | (false, Gender::Female) => FortuneDirection::Forward,
        _ => FortuneDirection::Backward,
    }
}

/// Compute the major fortune cycles of a chart.
pub fn major_fortunes(
    pillars: &FourPillars,
    gender: Gender,
    adjusted: &AdjustedDateTime,
    solar_month: &SolarMonth,
    rules: &RuleBook,
) -> MajorFortunes {
    let direction = fortune_direction(pillars.year.base_stem().yin_yang().is_yang(), gender);

    let birth = adjusted.utc();
    let span = match direction {
        FortuneDirection::Forward => solar_month.end.utc - birth,
        FortuneDirection::Backward => birth - solar_month.start.utc,
    };
    let days = span.num_seconds().max(0) as f64 / 86_400.0;
    let start_age_exact = (days / DAYS_PER_YEAR_OF_AGE * 10.0).round() / 10.0;
    let start_age = (start_age_exact.round() as u32).max(1);

    let step: i32 = match direction {
        FortuneDirection::Forward => 1,
        FortuneDirection::Backward => -1,
    };
    let month_index = pillars.month.cycle_index() as i32;
    let cycles = (1..=MAJOR_FORTUNE_CYCLES as i32)
        .map(|i| {
            let index = (month_index + step * i).rem_euclid(60) as u8;
            let from = start_age + CYCLE_YEARS * (i as u32 - 1);
            MajorFortuneCycle {
                start_age: from,
                end_age: from + CYCLE_YEARS - 1,
                pillar: Pillar::from_cycle_index(index, rules),
            }
        })
        .collect();

    tracing::debug!(?direction, start_age, "major fortunes computed");
    MajorFortunes {
        direction,
        start_age,
        start_age_exact,
        cycles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_table() {
        assert_eq!(fortune_direction(true, Gender::Male), FortuneDirection::Forward);
        assert_eq!(fortune_direction(false, Gender::Female), FortuneDirection::Forward);
        assert_eq!(fortune_direction(true, Gender::Female), FortuneDirection::Backward);
        assert_eq!(fortune_direction(false, Gender::Male), FortuneDirection::Backward);
    }

    #[test]
    fn gender_parsing() {
        assert_eq!("M".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!("female".parse::<Gender>(), Ok(Gender::Female));
        assert!("x".parse::<Gender>().is_err());
    }
}
