//! The ten heavenly stems (十干).
//!
//! Stems alternate yang/yin within each element, in generation order:
//! 甲乙 Wood, 丙丁 Fire, 戊己 Earth, 庚辛 Metal, 壬癸 Water.

use serde::{Deserialize, Serialize};

use crate::element::{Element, YinYang};

/// The ten heavenly stems, named by their Japanese readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum HeavenlyStem {
    Kinoe,
    Kinoto,
    Hinoe,
    Hinoto,
    Tsuchinoe,
    Tsuchinoto,
    Kanoe,
    Kanoto,
    Mizunoe,
    Mizunoto,
}

/// All ten stems in cycle order (0 = 甲, 9 = 癸).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Kinoe,
    HeavenlyStem::Kinoto,
    HeavenlyStem::Hinoe,
    HeavenlyStem::Hinoto,
    HeavenlyStem::Tsuchinoe,
    HeavenlyStem::Tsuchinoto,
    HeavenlyStem::Kanoe,
    HeavenlyStem::Kanoto,
    HeavenlyStem::Mizunoe,
    HeavenlyStem::Mizunoto,
];

const KANJI: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

impl HeavenlyStem {
    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem from its index (wrapping).
    pub const fn from_index(i: u8) -> Self {
        ALL_STEMS[(i % 10) as usize]
    }

    pub const fn kanji(self) -> &'static str {
        KANJI[self as usize]
    }

    /// Parse a single kanji.
    pub fn from_kanji(s: &str) -> Option<Self> {
        KANJI.iter().position(|k| *k == s).map(|i| ALL_STEMS[i])
    }

    /// Natural element of the stem.
    pub const fn natural_element(self) -> Element {
        Element::from_index(self.index() / 2)
    }

    pub const fn yin_yang(self) -> YinYang {
        if self.index() % 2 == 0 {
            YinYang::Yang
        } else {
            YinYang::Yin
        }
    }

    /// The stem of a given element and polarity.
    pub const fn of(element: Element, yin_yang: YinYang) -> Self {
        let offset = match yin_yang {
            YinYang::Yang => 0,
            YinYang::Yin => 1,
        };
        Self::from_index(element.index() * 2 + offset)
    }

    /// Stem `n` steps further along the cycle (negative steps go back).
    pub const fn offset(self, n: i32) -> Self {
        Self::from_index((self.index() as i32 + n).rem_euclid(10) as u8)
    }
}

impl std::fmt::Display for HeavenlyStem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kanji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elements_and_polarity() {
        assert_eq!(HeavenlyStem::Kinoe.natural_element(), Element::Wood);
        assert_eq!(HeavenlyStem::Kanoe.natural_element(), Element::Metal);
        assert_eq!(HeavenlyStem::Mizunoto.natural_element(), Element::Water);
        assert!(HeavenlyStem::Hinoe.yin_yang().is_yang());
        assert!(!HeavenlyStem::Tsuchinoto.yin_yang().is_yang());
    }

    #[test]
    fn of_inverts_element_and_polarity() {
        for s in ALL_STEMS {
            assert_eq!(HeavenlyStem::of(s.natural_element(), s.yin_yang()), s);
        }
    }

    #[test]
    fn kanji_roundtrip_and_offset() {
        assert_eq!(HeavenlyStem::from_kanji("庚"), Some(HeavenlyStem::Kanoe));
        assert_eq!(HeavenlyStem::from_kanji("子"), None);
        assert_eq!(HeavenlyStem::Mizunoto.offset(1), HeavenlyStem::Kinoe);
        assert_eq!(HeavenlyStem::Kinoe.offset(-1), HeavenlyStem::Mizunoto);
    }
}
