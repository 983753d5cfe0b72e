//! Pillar and four-pillar value types and the sexagenary (六十干支) cycle.

use serde::Serialize;

use crate::branch::EarthlyBranch;
use crate::element::Element;
use crate::rules::RuleBook;
use crate::stem::HeavenlyStem;

/// Position of a pillar in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// Positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn kanji(self) -> &'static str {
        match self {
            Self::Year => "年柱",
            Self::Month => "月柱",
            Self::Day => "日柱",
            Self::Hour => "時柱",
        }
    }
}

/// One stem/branch pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pillar {
    /// Effective stem after combinations.
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
    /// Hidden stems of the branch, primary first.
    pub hidden_stems: Vec<HeavenlyStem>,
    /// Stem before a stem combination changed it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_stem: Option<HeavenlyStem>,
    /// Element of the stem combination this pillar took part in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combined_element: Option<Element>,
    /// Element enhanced by a branch combination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhanced_element: Option<Element>,
}

impl Pillar {
    /// A raw pillar with hidden stems looked up from the rules.
    pub fn new(stem: HeavenlyStem, branch: EarthlyBranch, rules: &RuleBook) -> Self {
        Self {
            stem,
            branch,
            hidden_stems: rules.hidden_stems(branch).to_vec(),
            original_stem: None,
            combined_element: None,
            enhanced_element: None,
        }
    }

    /// A raw pillar from its position in the 60-cycle (0 = 甲子).
    pub fn from_cycle_index(index: u8, rules: &RuleBook) -> Self {
        let i = index % 60;
        Self::new(HeavenlyStem::from_index(i), EarthlyBranch::from_index(i), rules)
    }

    /// The stem before any combination.
    pub fn base_stem(&self) -> HeavenlyStem {
        self.original_stem.unwrap_or(self.stem)
    }

    /// Position of the base stem/branch in the 60-cycle.
    pub fn cycle_index(&self) -> u8 {
        sexagenary_index(self.base_stem(), self.branch)
    }

    /// Two-character label, e.g. `庚午`.
    pub fn label(&self) -> String {
        format!("{}{}", self.stem.kanji(), self.branch.kanji())
    }
}

/// The four pillars in chart order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    pub fn get(&self, position: PillarPosition) -> &Pillar {
        match position {
            PillarPosition::Year => &self.year,
            PillarPosition::Month => &self.month,
            PillarPosition::Day => &self.day,
            PillarPosition::Hour => &self.hour,
        }
    }

    pub fn get_mut(&mut self, position: PillarPosition) -> &mut Pillar {
        match position {
            PillarPosition::Year => &mut self.year,
            PillarPosition::Month => &mut self.month,
            PillarPosition::Day => &mut self.day,
            PillarPosition::Hour => &mut self.hour,
        }
    }

    /// Pillars in chart order.
    pub fn iter(&self) -> impl Iterator<Item = (PillarPosition, &Pillar)> {
        ALL_POSITIONS.into_iter().map(move |p| (p, self.get(p)))
    }

    /// The Day Master (effective day stem).
    pub fn day_master(&self) -> HeavenlyStem {
        self.day.stem
    }
}

/// Index in the 60-cycle of a stem/branch pair of matching parity.
///
/// Pairs of mismatched parity do not occur in the cycle; the stem's index
/// modulo 10 is honoured and the branch picks the matching cycle entry.
pub fn sexagenary_index(stem: HeavenlyStem, branch: EarthlyBranch) -> u8 {
    let s = stem.index() as i32;
    let b = branch.index() as i32;
    // Solve i ≡ s (mod 10), i ≡ b (mod 12).
    ((6 * s - 5 * b).rem_euclid(60)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_index_roundtrip() {
        let rules = RuleBook::standard();
        for i in 0..60 {
            let p = Pillar::from_cycle_index(i, rules);
            assert_eq!(p.cycle_index(), i);
        }
    }

    #[test]
    fn known_labels() {
        let rules = RuleBook::standard();
        assert_eq!(Pillar::from_cycle_index(0, rules).label(), "甲子");
        assert_eq!(Pillar::from_cycle_index(6, rules).label(), "庚午");
        assert_eq!(Pillar::from_cycle_index(54, rules).label(), "戊午");
        assert_eq!(Pillar::from_cycle_index(59, rules).label(), "癸亥");
    }

    #[test]
    fn hidden_stems_attached() {
        let p = Pillar::new(HeavenlyStem::Kanoe, EarthlyBranch::Uma, RuleBook::standard());
        assert_eq!(
            p.hidden_stems,
            vec![HeavenlyStem::Hinoto, HeavenlyStem::Tsuchinoto]
        );
    }
}
