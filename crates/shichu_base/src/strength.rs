//! Day Master strength score.
//!
//! `score = support% − drain% ± month_command + ten_god_weight × (reinforcing − draining)`
//!
//! - support: the Day Master's own element plus its resource element
//! - drain: output, wealth and officer elements
//! - month command: the month branch's element supports (+) or not (−)
//! - reinforcing / draining: visible-stem and branch ten gods by relation

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::element_profile::ElementProfile;
use crate::error::SajuError;
use crate::pillar::FourPillars;
use crate::rules::RuleBook;
use crate::ten_god::{Relation, TenGodMap};

/// Configurable classification thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StrengthThresholds {
    /// Scores above this are strong.
    pub strong: f64,
    /// Scores below this are weak.
    pub weak: f64,
    pub extreme_strong: f64,
    pub extreme_weak: f64,
    pub month_command: f64,
    pub ten_god_weight: f64,
}

impl Default for StrengthThresholds {
    fn default() -> Self {
        Self {
            strong: 15.0,
            weak: -15.0,
            extreme_strong: 60.0,
            extreme_weak: -60.0,
            month_command: 10.0,
            ten_god_weight: 2.0,
        }
    }
}

/// Strength verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Strength {
    Strong,
    Weak,
    Neutral,
}

impl Strength {
    pub const fn kanji(self) -> &'static str {
        match self {
            Self::Strong => "身強",
            Self::Weak => "身弱",
            Self::Neutral => "中和",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthAssessment {
    pub score: f64,
    pub strength: Strength,
    pub is_extreme_strong: bool,
    pub is_extreme_weak: bool,
    pub support_percent: f64,
    pub drain_percent: f64,
    /// The month branch's element is the Day Master's own or its resource.
    pub month_support: bool,
    /// A hidden stem of the Day Master's element sits in some branch.
    pub has_root: bool,
    /// An officer ten god appears among the visible stems.
    pub visible_officer: bool,
    pub reinforcing_count: usize,
    pub draining_count: usize,
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Percentage of the profile standing in `relation` to `dm`.
pub fn relation_percent(profile: &ElementProfile, dm: Element, relation: Relation) -> f64 {
    profile.percent(relation.element_for(dm))
}

/// Score and classify the Day Master's strength.
pub fn assess_strength(
    pillars: &FourPillars,
    ten_gods: &TenGodMap,
    profile: &ElementProfile,
    rules: &RuleBook,
) -> Result<StrengthAssessment, SajuError> {
    let t = &rules.thresholds;
    let dm = rules.stem_element(pillars.day_master())?;

    let support = relation_percent(profile, dm, Relation::Same)
        + relation_percent(profile, dm, Relation::Resource);
    let drain = relation_percent(profile, dm, Relation::Output)
        + relation_percent(profile, dm, Relation::Wealth)
        + relation_percent(profile, dm, Relation::Officer);

    let month_element = rules.branch_element(pillars.month.branch)?;
    let month_support = Relation::between(dm, month_element).is_supportive();
    let command = if month_support {
        t.month_command
    } else {
        -t.month_command
    };

    let gods: Vec<_> = ten_gods.visible().chain(ten_gods.branches()).collect();
    let reinforcing = gods.iter().filter(|g| g.relation().is_supportive()).count();
    let draining = gods.len() - reinforcing;

    let score = round1(
        support - drain + command + t.ten_god_weight * (reinforcing as f64 - draining as f64),
    );

    let has_root = pillars
        .iter()
        .flat_map(|(_, p)| p.hidden_stems.iter())
        .any(|&h| rules.hidden_stem_element(h) == dm);
    let visible_officer = ten_gods
        .visible()
        .any(|g| g.relation() == Relation::Officer);

    let strength = if score > t.strong {
        Strength::Strong
    } else if score < t.weak {
        Strength::Weak
    } else {
        Strength::Neutral
    };
    let is_extreme_strong = score >= t.extreme_strong && month_support && !visible_officer;
    let is_extreme_weak = score <= t.extreme_weak && !has_root;

    tracing::debug!(score, ?strength, is_extreme_strong, is_extreme_weak, "strength assessed");
    Ok(StrengthAssessment {
        score,
        strength,
        is_extreme_strong,
        is_extreme_weak,
        support_percent: round1(support),
        drain_percent: round1(drain),
        month_support,
        has_root,
        visible_officer,
        reinforcing_count: reinforcing,
        draining_count: draining,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::EarthlyBranch as B;
    use crate::element_profile::compute_element_profile;
    use crate::pillar::Pillar;
    use crate::stem::HeavenlyStem as S;
    use crate::ten_god::classify_ten_gods;

    fn assess(stems: [S; 4], branches: [B; 4], rules: &RuleBook) -> StrengthAssessment {
        let fp = FourPillars {
            year: Pillar::new(stems[0], branches[0], rules),
            month: Pillar::new(stems[1], branches[1], rules),
            day: Pillar::new(stems[2], branches[2], rules),
            hour: Pillar::new(stems[3], branches[3], rules),
        };
        let tg = classify_ten_gods(&fp, rules).unwrap();
        let profile = compute_element_profile(&fp, rules).unwrap();
        assess_strength(&fp, &tg, &profile, rules).unwrap()
    }

    #[test]
    fn fixture_chart_is_weak() {
        let a = assess(
            [S::Hinoe, S::Mizunoto, S::Kanoe, S::Tsuchinoto],
            [B::Tora, B::Mi, B::Uma, B::U],
            RuleBook::standard(),
        );
        assert_eq!(a.strength, Strength::Weak);
        assert!(!a.month_support);
        assert!(a.visible_officer);
        assert_eq!((a.reinforcing_count, a.draining_count), (1, 6));
        assert!(!a.is_extreme_weak);
    }

    #[test]
    fn pure_wood_is_extreme_strong() {
        let a = assess(
            [S::Kinoe, S::Kinoto, S::Kinoe, S::Kinoto],
            [B::U, B::U, B::U, B::U],
            RuleBook::standard(),
        );
        assert_eq!(a.strength, Strength::Strong);
        assert!(a.is_extreme_strong);
        assert_eq!(a.support_percent, 100.0);
    }

    #[test]
    fn month_support_reads_the_rule_book() {
        // Give 巳 a metal primary so the 庚 Day Master draws support from it.
        let mut rules = RuleBook::default();
        rules.hidden_stems[B::Mi.index() as usize] = vec![S::Kanoe, S::Hinoe, S::Tsuchinoe];
        let standard = assess(
            [S::Hinoe, S::Mizunoto, S::Kanoe, S::Tsuchinoto],
            [B::Tora, B::Mi, B::Uma, B::U],
            RuleBook::standard(),
        );
        let custom = assess(
            [S::Hinoe, S::Mizunoto, S::Kanoe, S::Tsuchinoto],
            [B::Tora, B::Mi, B::Uma, B::U],
            &rules,
        );
        assert!(!standard.month_support);
        assert!(custom.month_support);
        assert!(custom.score > standard.score);
    }

    #[test]
    fn thresholds_are_configurable() {
        let strict = RuleBook::with_thresholds(StrengthThresholds {
            strong: 500.0,
            extreme_strong: 1000.0,
            ..StrengthThresholds::default()
        });
        let a = assess(
            [S::Kinoe, S::Kinoto, S::Kinoe, S::Kinoto],
            [B::U, B::U, B::U, B::U],
            &strict,
        );
        assert_eq!(a.strength, Strength::Neutral);
        assert!(!a.is_extreme_strong);
    }
}
