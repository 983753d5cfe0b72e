//! Twelve fortunes (十二運): the Day Master's life stage in each branch.
//!
//! Each stem is born (長生) in a fixed branch. Yang stems advance through the
//! stages with the branch cycle, yin stems retreat against it.

use serde::Serialize;

use crate::branch::EarthlyBranch;
use crate::pillar::FourPillars;
use crate::stem::HeavenlyStem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TwelveFortune {
    Chousei,
    Mokuyoku,
    Kantai,
    Kenroku,
    Teiou,
    Sui,
    Byou,
    Shi,
    Bo,
    Zetsu,
    Tai,
    You,
}

pub const ALL_TWELVE_FORTUNES: [TwelveFortune; 12] = [
    TwelveFortune::Chousei,
    TwelveFortune::Mokuyoku,
    TwelveFortune::Kantai,
    TwelveFortune::Kenroku,
    TwelveFortune::Teiou,
    TwelveFortune::Sui,
    TwelveFortune::Byou,
    TwelveFortune::Shi,
    TwelveFortune::Bo,
    TwelveFortune::Zetsu,
    TwelveFortune::Tai,
    TwelveFortune::You,
];

const KANJI: [&str; 12] = [
    "長生", "沐浴", "冠帯", "建禄", "帝旺", "衰", "病", "死", "墓", "絶", "胎", "養",
];

/// Branch index of 長生 per stem index.
const BIRTH_BRANCH: [u8; 10] = [11, 6, 2, 9, 2, 9, 5, 0, 8, 3];

impl TwelveFortune {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn kanji(self) -> &'static str {
        KANJI[self as usize]
    }
}

impl std::fmt::Display for TwelveFortune {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kanji())
    }
}

/// Stage of `stem` in `branch`.
pub const fn twelve_fortune(stem: HeavenlyStem, branch: EarthlyBranch) -> TwelveFortune {
    let birth = BIRTH_BRANCH[stem.index() as usize] as i32;
    let b = branch.index() as i32;
    let step = if stem.yin_yang().is_yang() {
        b - birth
    } else {
        birth - b
    };
    ALL_TWELVE_FORTUNES[step.rem_euclid(12) as usize]
}

/// Twelve fortunes of the Day Master over the four branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TwelveFortunes {
    pub year: TwelveFortune,
    pub month: TwelveFortune,
    pub day: TwelveFortune,
    pub hour: TwelveFortune,
}

/// Stages are read from the day stem before any combination.
pub fn twelve_fortunes(pillars: &FourPillars) -> TwelveFortunes {
    let dm = pillars.day.base_stem();
    TwelveFortunes {
        year: twelve_fortune(dm, pillars.year.branch),
        month: twelve_fortune(dm, pillars.month.branch),
        day: twelve_fortune(dm, pillars.day.branch),
        hour: twelve_fortune(dm, pillars.hour.branch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::EarthlyBranch as B;
    use crate::stem::HeavenlyStem as S;

    #[test]
    fn birth_and_peak_branches() {
        assert_eq!(twelve_fortune(S::Kinoe, B::I), TwelveFortune::Chousei);
        assert_eq!(twelve_fortune(S::Kinoe, B::Tora), TwelveFortune::Kenroku);
        assert_eq!(twelve_fortune(S::Kinoe, B::U), TwelveFortune::Teiou);
        assert_eq!(twelve_fortune(S::Kinoto, B::Uma), TwelveFortune::Chousei);
        assert_eq!(twelve_fortune(S::Kinoto, B::U), TwelveFortune::Kenroku);
        assert_eq!(twelve_fortune(S::Kinoto, B::Tora), TwelveFortune::Teiou);
        assert_eq!(twelve_fortune(S::Kanoe, B::Saru), TwelveFortune::Kenroku);
        assert_eq!(twelve_fortune(S::Mizunoto, B::Ne), TwelveFortune::Kenroku);
    }

    #[test]
    fn every_stage_once_per_stem() {
        for s in crate::stem::ALL_STEMS {
            let mut seen = [false; 12];
            for b in crate::branch::ALL_BRANCHES {
                seen[twelve_fortune(s, b).index() as usize] = true;
            }
            assert!(seen.iter().all(|&x| x), "{s}");
        }
    }

    #[test]
    fn kanoe_day_in_fixture() {
        // 庚 over 寅 巳 午 卯.
        assert_eq!(twelve_fortune(S::Kanoe, B::Tora), TwelveFortune::Zetsu);
        assert_eq!(twelve_fortune(S::Kanoe, B::Mi), TwelveFortune::Chousei);
        assert_eq!(twelve_fortune(S::Kanoe, B::Uma), TwelveFortune::Mokuyoku);
        assert_eq!(twelve_fortune(S::Kanoe, B::U), TwelveFortune::Tai);
    }
}
