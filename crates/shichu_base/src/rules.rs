//! Injectable rule tables.
//!
//! Every lookup the chart stages perform goes through a [`RuleBook`]. The
//! standard book is built once and shared; tests and callers can build their
//! own to swap a table without touching the stages.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::branch::{EarthlyBranch, STANDARD_HIDDEN_STEMS};
use crate::element::Element;
use crate::error::SajuError;
use crate::stem::{ALL_STEMS, HeavenlyStem};
use crate::strength::StrengthThresholds;

/// A stem pair (干合) and the element it transforms into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StemCombination {
    pub pair: (HeavenlyStem, HeavenlyStem),
    pub element: Element,
}

/// A branch pair (支合) and the element it enhances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BranchCombination {
    pub pair: (EarthlyBranch, EarthlyBranch),
    pub element: Element,
}

/// Element-profile weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileWeights {
    /// Weight of each visible stem.
    pub visible_stem: f64,
    /// Total hidden-stem weight per branch: year, month, day, hour.
    pub branch_totals: [f64; 4],
    /// Split of a branch total across 1, 2 or 3 hidden stems.
    pub split_one: [f64; 1],
    pub split_two: [f64; 2],
    pub split_three: [f64; 3],
    /// Bonus per combined (支合) branch to its enhanced element.
    pub enhanced_bonus: f64,
}

impl Default for ProfileWeights {
    fn default() -> Self {
        Self {
            visible_stem: 10.0,
            branch_totals: [8.0, 15.0, 12.0, 8.0],
            split_one: [1.0],
            split_two: [0.7, 0.3],
            split_three: [0.6, 0.3, 0.1],
            enhanced_bonus: 2.0,
        }
    }
}

impl ProfileWeights {
    /// Split factors for a branch with `n` hidden stems.
    pub fn split(&self, n: usize) -> &[f64] {
        match n {
            1 => &self.split_one,
            2 => &self.split_two,
            _ => &self.split_three,
        }
    }
}

/// The complete set of tables used by a calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleBook {
    /// Element of each stem, by stem index. `None` marks a missing entry.
    pub stem_elements: [Option<Element>; 10],
    /// Hidden stems per branch index, primary first.
    pub hidden_stems: [Vec<HeavenlyStem>; 12],
    pub stem_combinations: Vec<StemCombination>,
    pub branch_combinations: Vec<BranchCombination>,
    pub weights: ProfileWeights,
    pub thresholds: StrengthThresholds,
}

use EarthlyBranch as B;
use HeavenlyStem as S;

impl Default for RuleBook {
    fn default() -> Self {
        Self {
            stem_elements: ALL_STEMS.map(|s| Some(s.natural_element())),
            hidden_stems: STANDARD_HIDDEN_STEMS.map(|stems| stems.to_vec()),
            stem_combinations: vec![
                stem_pair(S::Kinoe, S::Tsuchinoto, Element::Earth),
                stem_pair(S::Kinoto, S::Kanoe, Element::Metal),
                stem_pair(S::Hinoe, S::Kanoto, Element::Water),
                stem_pair(S::Hinoto, S::Mizunoe, Element::Wood),
                stem_pair(S::Tsuchinoe, S::Mizunoto, Element::Fire),
            ],
            branch_combinations: vec![
                branch_pair(B::Ne, B::Ushi, Element::Earth),
                branch_pair(B::Tora, B::I, Element::Wood),
                branch_pair(B::U, B::Inu, Element::Fire),
                branch_pair(B::Tatsu, B::Tori, Element::Metal),
                branch_pair(B::Mi, B::Saru, Element::Water),
                branch_pair(B::Uma, B::Hitsuji, Element::Earth),
            ],
            weights: ProfileWeights::default(),
            thresholds: StrengthThresholds::default(),
        }
    }
}

fn stem_pair(a: HeavenlyStem, b: HeavenlyStem, element: Element) -> StemCombination {
    StemCombination {
        pair: (a, b),
        element,
    }
}

fn branch_pair(a: EarthlyBranch, b: EarthlyBranch, element: Element) -> BranchCombination {
    BranchCombination {
        pair: (a, b),
        element,
    }
}

static STANDARD: LazyLock<RuleBook> = LazyLock::new(RuleBook::default);

impl RuleBook {
    /// The shared standard tables.
    pub fn standard() -> &'static RuleBook {
        &STANDARD
    }

    /// Standard tables with custom strength thresholds.
    pub fn with_thresholds(thresholds: StrengthThresholds) -> Self {
        Self {
            thresholds,
            ..Self::default()
        }
    }

    /// Element of a stem.
    pub fn stem_element(&self, stem: HeavenlyStem) -> Result<Element, SajuError> {
        self.stem_elements[stem.index() as usize].ok_or_else(|| {
            SajuError::IncompleteRuleMatch(format!("no element for stem {}", stem.kanji()))
        })
    }

    /// Element of a hidden stem, defaulting to earth when the table has no entry.
    pub fn hidden_stem_element(&self, stem: HeavenlyStem) -> Element {
        self.stem_elements[stem.index() as usize].unwrap_or_else(|| {
            tracing::warn!(stem = stem.kanji(), "hidden stem without element, using earth");
            Element::Earth
        })
    }

    /// Hidden stems of a branch, primary first.
    pub fn hidden_stems(&self, branch: EarthlyBranch) -> &[HeavenlyStem] {
        &self.hidden_stems[branch.index() as usize]
    }

    /// Primary hidden stem of a branch.
    pub fn primary_hidden_stem(&self, branch: EarthlyBranch) -> Result<HeavenlyStem, SajuError> {
        self.hidden_stems(branch).first().copied().ok_or_else(|| {
            SajuError::IncompleteRuleMatch(format!("no hidden stems for {}", branch.kanji()))
        })
    }

    /// Element a branch carries in its own right: that of its primary hidden stem.
    pub fn branch_element(&self, branch: EarthlyBranch) -> Result<Element, SajuError> {
        Ok(self.hidden_stem_element(self.primary_hidden_stem(branch)?))
    }

    /// Transformation element of an unordered stem pair.
    pub fn stem_combination(&self, a: HeavenlyStem, b: HeavenlyStem) -> Option<Element> {
        self.stem_combinations
            .iter()
            .find(|c| c.pair == (a, b) || c.pair == (b, a))
            .map(|c| c.element)
    }

    /// Enhanced element of an unordered branch pair.
    pub fn branch_combination(&self, a: EarthlyBranch, b: EarthlyBranch) -> Option<Element> {
        self.branch_combinations
            .iter()
            .find(|c| c.pair == (a, b) || c.pair == (b, a))
            .map(|c| c.element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tables_are_total() {
        let rules = RuleBook::standard();
        for s in ALL_STEMS {
            assert!(rules.stem_element(s).is_ok());
        }
        let mut covered = [false; 10];
        for c in &rules.stem_combinations {
            covered[c.pair.0.index() as usize] = true;
            covered[c.pair.1.index() as usize] = true;
        }
        assert!(covered.iter().all(|&c| c));
        assert_eq!(rules.branch_combinations.len(), 6);
    }

    #[test]
    fn combination_lookup_is_unordered() {
        let rules = RuleBook::standard();
        assert_eq!(
            rules.stem_combination(S::Tsuchinoto, S::Kinoe),
            Some(Element::Earth)
        );
        assert_eq!(rules.branch_combination(B::I, B::Tora), Some(Element::Wood));
        assert_eq!(rules.stem_combination(S::Kinoe, S::Kinoto), None);
    }

    #[test]
    fn missing_stem_element_is_reported() {
        let mut rules = RuleBook::default();
        rules.stem_elements[0] = None;
        assert!(matches!(
            rules.stem_element(S::Kinoe),
            Err(SajuError::IncompleteRuleMatch(_))
        ));
        assert_eq!(rules.hidden_stem_element(S::Kinoe), Element::Earth);
    }

    #[test]
    fn branch_element_follows_hidden_stem_table() {
        let standard = RuleBook::standard();
        assert_eq!(standard.branch_element(B::Mi).unwrap(), Element::Fire);
        assert_eq!(standard.branch_element(B::Ushi).unwrap(), Element::Earth);

        let mut custom = RuleBook::default();
        custom.hidden_stems[B::Mi.index() as usize] = vec![S::Kanoe, S::Hinoe];
        assert_eq!(custom.branch_element(B::Mi).unwrap(), Element::Metal);

        custom.hidden_stems[B::Mi.index() as usize].clear();
        assert!(matches!(
            custom.branch_element(B::Mi),
            Err(SajuError::IncompleteRuleMatch(_))
        ));
    }

    #[test]
    fn weight_splits_sum_to_one() {
        let w = ProfileWeights::default();
        for n in 1..=3 {
            let sum: f64 = w.split(n).iter().sum();
            assert!((sum - 1.0).abs() < 1e-12);
        }
    }
}
