//! Twelve spirit killers (十二神殺), keyed on the year branch's triad.
//!
//! The cycle starts at the triad's 劫殺 branch and advances one killer per
//! branch.

use serde::Serialize;

use crate::branch::{EarthlyBranch, Triad};
use crate::pillar::FourPillars;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpiritKiller {
    Kousatsu,
    Saisatsu,
    Tensatsu,
    Chisatsu,
    Nensatsu,
    Gessatsu,
    Boushinsatsu,
    Shouseisatsu,
    Hanansatsu,
    Ekibasatsu,
    Rikugaisatsu,
    Kagaisatsu,
}

pub const ALL_SPIRIT_KILLERS: [SpiritKiller; 12] = [
    SpiritKiller::Kousatsu,
    SpiritKiller::Saisatsu,
    SpiritKiller::Tensatsu,
    SpiritKiller::Chisatsu,
    SpiritKiller::Nensatsu,
    SpiritKiller::Gessatsu,
    SpiritKiller::Boushinsatsu,
    SpiritKiller::Shouseisatsu,
    SpiritKiller::Hanansatsu,
    SpiritKiller::Ekibasatsu,
    SpiritKiller::Rikugaisatsu,
    SpiritKiller::Kagaisatsu,
];

const KANJI: [&str; 12] = [
    "劫殺", "災殺", "天殺", "地殺", "年殺", "月殺", "亡身殺", "将星殺", "攀鞍殺", "駅馬殺",
    "六害殺", "華蓋殺",
];

impl SpiritKiller {
    pub const fn kanji(self) -> &'static str {
        KANJI[self as usize]
    }
}

impl std::fmt::Display for SpiritKiller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kanji())
    }
}

/// The 劫殺 branch of a triad.
pub const fn kousatsu_branch(triad: Triad) -> EarthlyBranch {
    match triad {
        Triad::Water => EarthlyBranch::Mi,
        Triad::Metal => EarthlyBranch::Tora,
        Triad::Wood => EarthlyBranch::Saru,
        Triad::Fire => EarthlyBranch::I,
    }
}

/// Spirit killer of `branch` for a chart whose year branch is `year_branch`.
pub const fn spirit_killer(year_branch: EarthlyBranch, branch: EarthlyBranch) -> SpiritKiller {
    let start = kousatsu_branch(year_branch.triad()).index() as i32;
    ALL_SPIRIT_KILLERS[(branch.index() as i32 - start).rem_euclid(12) as usize]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpiritKillers {
    pub year: SpiritKiller,
    pub month: SpiritKiller,
    pub day: SpiritKiller,
    pub hour: SpiritKiller,
}

pub fn spirit_killers(pillars: &FourPillars) -> SpiritKillers {
    let yb = pillars.year.branch;
    SpiritKillers {
        year: spirit_killer(yb, pillars.year.branch),
        month: spirit_killer(yb, pillars.month.branch),
        day: spirit_killer(yb, pillars.day.branch),
        hour: spirit_killer(yb, pillars.hour.branch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::EarthlyBranch as B;

    #[test]
    fn water_triad_landmarks() {
        // 申子辰: 将星 子, 駅馬 寅, 華蓋 辰, 年殺 酉.
        for yb in [B::Saru, B::Ne, B::Tatsu] {
            assert_eq!(spirit_killer(yb, B::Mi), SpiritKiller::Kousatsu);
            assert_eq!(spirit_killer(yb, B::Ne), SpiritKiller::Shouseisatsu);
            assert_eq!(spirit_killer(yb, B::Tora), SpiritKiller::Ekibasatsu);
            assert_eq!(spirit_killer(yb, B::Tatsu), SpiritKiller::Kagaisatsu);
            assert_eq!(spirit_killer(yb, B::Tori), SpiritKiller::Nensatsu);
        }
    }

    #[test]
    fn fire_triad_year() {
        // 寅 year: 劫殺 亥, so 寅 itself is 地殺 and 午 is 将星.
        assert_eq!(spirit_killer(B::Tora, B::I), SpiritKiller::Kousatsu);
        assert_eq!(spirit_killer(B::Tora, B::Tora), SpiritKiller::Chisatsu);
        assert_eq!(spirit_killer(B::Tora, B::Uma), SpiritKiller::Shouseisatsu);
        assert_eq!(spirit_killer(B::Tora, B::Saru), SpiritKiller::Ekibasatsu);
    }
}
