//! The twelve earthly branches (十二支) and their hidden stems (蔵干).

use serde::{Deserialize, Serialize};

use crate::element::{Element, YinYang};
use crate::stem::HeavenlyStem;

/// The twelve earthly branches, named by their Japanese readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum EarthlyBranch {
    Ne,
    Ushi,
    Tora,
    U,
    Tatsu,
    Mi,
    Uma,
    Hitsuji,
    Saru,
    Tori,
    Inu,
    I,
}

/// All twelve branches in cycle order (0 = 子, 11 = 亥).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Ne,
    EarthlyBranch::Ushi,
    EarthlyBranch::Tora,
    EarthlyBranch::U,
    EarthlyBranch::Tatsu,
    EarthlyBranch::Mi,
    EarthlyBranch::Uma,
    EarthlyBranch::Hitsuji,
    EarthlyBranch::Saru,
    EarthlyBranch::Tori,
    EarthlyBranch::Inu,
    EarthlyBranch::I,
];

const KANJI: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const ELEMENTS: [Element; 12] = [
    Element::Water,
    Element::Earth,
    Element::Wood,
    Element::Wood,
    Element::Earth,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Earth,
    Element::Water,
];

/// Three-branch groups (三合) used by the spirit-killer cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Triad {
    /// 申子辰
    Water,
    /// 巳酉丑
    Metal,
    /// 寅午戌
    Fire,
    /// 亥卯未
    Wood,
}

impl EarthlyBranch {
    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch from its index (wrapping).
    pub const fn from_index(i: u8) -> Self {
        ALL_BRANCHES[(i % 12) as usize]
    }

    pub const fn kanji(self) -> &'static str {
        KANJI[self as usize]
    }

    pub fn from_kanji(s: &str) -> Option<Self> {
        KANJI.iter().position(|k| *k == s).map(|i| ALL_BRANCHES[i])
    }

    pub const fn natural_element(self) -> Element {
        ELEMENTS[self as usize]
    }

    pub const fn yin_yang(self) -> YinYang {
        if self.index() % 2 == 0 {
            YinYang::Yang
        } else {
            YinYang::Yin
        }
    }

    /// Branch `n` steps further along the cycle (negative steps go back).
    pub const fn offset(self, n: i32) -> Self {
        Self::from_index((self.index() as i32 + n).rem_euclid(12) as u8)
    }

    pub const fn triad(self) -> Triad {
        match self.index() % 4 {
            0 => Triad::Water,
            1 => Triad::Metal,
            2 => Triad::Fire,
            _ => Triad::Wood,
        }
    }
}

impl std::fmt::Display for EarthlyBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kanji())
    }
}

// ---------------------------------------------------------------------------
// Hidden stems
// ---------------------------------------------------------------------------

use HeavenlyStem::{
    Hinoe, Hinoto, Kanoe, Kanoto, Kinoe, Kinoto, Mizunoe, Mizunoto, Tsuchinoe, Tsuchinoto,
};

/// Hidden stems per branch, primary (本気) first.
pub const STANDARD_HIDDEN_STEMS: [&[HeavenlyStem]; 12] = [
    &[Mizunoto],
    &[Tsuchinoto, Mizunoto, Kanoto],
    &[Kinoe, Hinoe, Tsuchinoe],
    &[Kinoto],
    &[Tsuchinoe, Kinoto, Mizunoto],
    &[Hinoe, Kanoe, Tsuchinoe],
    &[Hinoto, Tsuchinoto],
    &[Tsuchinoto, Hinoto, Kinoto],
    &[Kanoe, Mizunoe, Tsuchinoe],
    &[Kanoto],
    &[Tsuchinoe, Kanoto, Hinoto],
    &[Mizunoe, Kinoe],
];
