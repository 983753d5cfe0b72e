//! Ten gods (通変星): each stem's relation to the Day Master.
//!
//! The category is the pair (element relation, polarity):
//!
//! | relation  | same polarity | different |
//! |-----------|---------------|-----------|
//! | same      | 比肩          | 劫財      |
//! | output    | 食神          | 傷官      |
//! | wealth    | 偏財          | 正財      |
//! | officer   | 偏官          | 正官      |
//! | resource  | 偏印          | 印綬      |
//!
//! A branch takes the ten god of its primary hidden stem.

use serde::Serialize;

use crate::element::Element;
use crate::error::SajuError;
use crate::pillar::{FourPillars, Pillar, PillarPosition};
use crate::rules::RuleBook;
use crate::stem::HeavenlyStem;

/// Element relation of a target to the Day Master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Relation {
    /// Same element.
    Same,
    /// Generated by the Day Master.
    Output,
    /// Controlled by the Day Master.
    Wealth,
    /// Controls the Day Master.
    Officer,
    /// Generates the Day Master.
    Resource,
}

pub const ALL_RELATIONS: [Relation; 5] = [
    Relation::Same,
    Relation::Output,
    Relation::Wealth,
    Relation::Officer,
    Relation::Resource,
];

impl Relation {
    /// Relation of `target` as seen from `day_master`.
    pub const fn between(day_master: Element, target: Element) -> Self {
        match day_master.distance_to(target) {
            0 => Self::Same,
            1 => Self::Output,
            2 => Self::Wealth,
            3 => Self::Officer,
            _ => Self::Resource,
        }
    }

    /// The element standing in this relation to `day_master`.
    pub const fn element_for(self, day_master: Element) -> Element {
        match self {
            Self::Same => day_master,
            Self::Output => day_master.generates(),
            Self::Wealth => day_master.controls(),
            Self::Officer => day_master.controlled_by(),
            Self::Resource => day_master.generated_by(),
        }
    }

    /// Whether the relation strengthens the Day Master.
    pub const fn is_supportive(self) -> bool {
        matches!(self, Self::Same | Self::Resource)
    }
}

/// The ten gods, named by their Japanese readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TenGod {
    Hiken,
    Gouzai,
    Shokujin,
    Shoukan,
    Henzai,
    Seizai,
    Henkan,
    Seikan,
    Henin,
    Inju,
}

pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Hiken,
    TenGod::Gouzai,
    TenGod::Shokujin,
    TenGod::Shoukan,
    TenGod::Henzai,
    TenGod::Seizai,
    TenGod::Henkan,
    TenGod::Seikan,
    TenGod::Henin,
    TenGod::Inju,
];

impl TenGod {
    pub const fn kanji(self) -> &'static str {
        match self {
            Self::Hiken => "比肩",
            Self::Gouzai => "劫財",
            Self::Shokujin => "食神",
            Self::Shoukan => "傷官",
            Self::Henzai => "偏財",
            Self::Seizai => "正財",
            Self::Henkan => "偏官",
            Self::Seikan => "正官",
            Self::Henin => "偏印",
            Self::Inju => "印綬",
        }
    }

    pub const fn from_parts(relation: Relation, same_polarity: bool) -> Self {
        match (relation, same_polarity) {
            (Relation::Same, true) => Self::Hiken,
            (Relation::Same, false) => Self::Gouzai,
            (Relation::Output, true) => Self::Shokujin,
            (Relation::Output, false) => Self::Shoukan,
            (Relation::Wealth, true) => Self::Henzai,
            (Relation::Wealth, false) => Self::Seizai,
            (Relation::Officer, true) => Self::Henkan,
            (Relation::Officer, false) => Self::Seikan,
            (Relation::Resource, true) => Self::Henin,
            (Relation::Resource, false) => Self::Inju,
        }
    }

    pub const fn relation(self) -> Relation {
        match self {
            Self::Hiken | Self::Gouzai => Relation::Same,
            Self::Shokujin | Self::Shoukan => Relation::Output,
            Self::Henzai | Self::Seizai => Relation::Wealth,
            Self::Henkan | Self::Seikan => Relation::Officer,
            Self::Henin | Self::Inju => Relation::Resource,
        }
    }

    /// The representative ten god of a relation (比肩, 食神, 正財, 正官, 印綬).
    pub const fn canonical(relation: Relation) -> Self {
        match relation {
            Relation::Same => Self::Hiken,
            Relation::Output => Self::Shokujin,
            Relation::Wealth => Self::Seizai,
            Relation::Officer => Self::Seikan,
            Relation::Resource => Self::Inju,
        }
    }

    /// The element this ten god denotes for a Day Master element.
    pub const fn element_for(self, day_master: Element) -> Element {
        self.relation().element_for(day_master)
    }
}

impl std::fmt::Display for TenGod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kanji())
    }
}

/// Ten god of `target` relative to `day_master`.
pub fn classify(
    day_master: HeavenlyStem,
    target: HeavenlyStem,
    rules: &RuleBook,
) -> Result<TenGod, SajuError> {
    let dm = rules.stem_element(day_master)?;
    let t = rules.stem_element(target)?;
    Ok(TenGod::from_parts(
        Relation::between(dm, t),
        day_master.yin_yang() == target.yin_yang(),
    ))
}

/// Ten gods of one pillar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarTenGods {
    /// `None` for the day stem (the Day Master itself).
    pub stem: Option<TenGod>,
    pub branch: TenGod,
    pub hidden_stems: Vec<TenGod>,
}

/// Ten gods for every pillar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenGodMap {
    pub year: PillarTenGods,
    pub month: PillarTenGods,
    pub day: PillarTenGods,
    pub hour: PillarTenGods,
}

impl TenGodMap {
    pub fn get(&self, position: PillarPosition) -> &PillarTenGods {
        match position {
            PillarPosition::Year => &self.year,
            PillarPosition::Month => &self.month,
            PillarPosition::Day => &self.day,
            PillarPosition::Hour => &self.hour,
        }
    }

    /// Visible stem ten gods (day excluded) in chart order.
    pub fn visible(&self) -> impl Iterator<Item = TenGod> + '_ {
        [&self.year, &self.month, &self.day, &self.hour]
            .into_iter()
            .filter_map(|p| p.stem)
    }

    /// Branch ten gods in chart order.
    pub fn branches(&self) -> impl Iterator<Item = TenGod> + '_ {
        [&self.year, &self.month, &self.day, &self.hour]
            .into_iter()
            .map(|p| p.branch)
    }
}

fn pillar_ten_gods(
    day_master: HeavenlyStem,
    pillar: &Pillar,
    is_day: bool,
    rules: &RuleBook,
) -> Result<PillarTenGods, SajuError> {
    let stem = if is_day {
        None
    } else {
        Some(classify(day_master, pillar.stem, rules)?)
    };
    let hidden_stems = pillar
        .hidden_stems
        .iter()
        .map(|&h| classify(day_master, h, rules))
        .collect::<Result<Vec<_>, _>>()?;
    let branch = match hidden_stems.first() {
        Some(&primary) => primary,
        None => classify(day_master, rules.primary_hidden_stem(pillar.branch)?, rules)?,
    };
    Ok(PillarTenGods {
        stem,
        branch,
        hidden_stems,
    })
}

/// Classify every stem and branch of a (resolved) chart.
pub fn classify_ten_gods(pillars: &FourPillars, rules: &RuleBook) -> Result<TenGodMap, SajuError> {
    let dm = pillars.day_master();
    Ok(TenGodMap {
        year: pillar_ten_gods(dm, &pillars.year, false, rules)?,
        month: pillar_ten_gods(dm, &pillars.month, false, rules)?,
        day: pillar_ten_gods(dm, &pillars.day, true, rules)?,
        hour: pillar_ten_gods(dm, &pillars.hour, false, rules)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::{ALL_STEMS, HeavenlyStem as S};

    #[test]
    fn kanoe_day_master_table() {
        let r = RuleBook::standard();
        let dm = S::Kanoe;
        let expect = [
            (S::Kanoe, TenGod::Hiken),
            (S::Kanoto, TenGod::Gouzai),
            (S::Mizunoe, TenGod::Shokujin),
            (S::Mizunoto, TenGod::Shoukan),
            (S::Kinoe, TenGod::Henzai),
            (S::Kinoto, TenGod::Seizai),
            (S::Hinoe, TenGod::Henkan),
            (S::Hinoto, TenGod::Seikan),
            (S::Tsuchinoe, TenGod::Henin),
            (S::Tsuchinoto, TenGod::Inju),
        ];
        for (t, god) in expect {
            assert_eq!(classify(dm, t, r).unwrap(), god, "{t}");
        }
    }

    #[test]
    fn each_day_master_sees_all_ten() {
        let r = RuleBook::standard();
        for dm in ALL_STEMS {
            let mut gods: Vec<TenGod> = ALL_STEMS.iter().map(|&t| classify(dm, t, r).unwrap()).collect();
            gods.sort();
            assert_eq!(gods, ALL_TEN_GODS.to_vec());
        }
    }

    #[test]
    fn parts_roundtrip() {
        for g in ALL_TEN_GODS {
            let same = matches!(
                g,
                TenGod::Hiken | TenGod::Shokujin | TenGod::Henzai | TenGod::Henkan | TenGod::Henin
            );
            assert_eq!(TenGod::from_parts(g.relation(), same), g);
        }
    }

    #[test]
    fn relation_element_inverse() {
        for dm in crate::element::ALL_ELEMENTS {
            for rel in ALL_RELATIONS {
                assert_eq!(Relation::between(dm, rel.element_for(dm)), rel);
            }
        }
    }
}
