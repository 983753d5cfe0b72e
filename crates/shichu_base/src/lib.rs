//! Four Pillars (四柱推命) chart stages.
//!
//! This crate provides:
//! - Stems, branches, elements and the injectable [`RuleBook`] tables
//! - Year/month/day/hour pillars from an adjusted birth time
//! - Stem (干合) and branch (支合) combination resolution
//! - Ten-god classification, the weighted element profile and Day Master strength
//! - Pattern (格局) classification with auditable rule checks
//! - The useful god (用神) and its companions
//! - Twelve fortunes, twelve spirit killers and major fortune cycles

pub mod branch;
pub mod chart;
pub mod combination;
pub mod element;
pub mod element_profile;
pub mod error;
pub mod kakukyoku;
pub mod major_fortune;
pub mod pillar;
pub mod pillars;
pub mod rules;
pub mod spirit_killer;
pub mod stem;
pub mod strength;
pub mod ten_god;
pub mod twelve_fortune;
pub mod yojin;

pub use branch::{ALL_BRANCHES, EarthlyBranch, Triad};
pub use chart::{Chart, build_chart};
pub use combination::{CombinationMatch, resolve_combinations};
pub use element::{ALL_ELEMENTS, Element, YinYang};
pub use element_profile::{ElementPercentages, ElementProfile, YinYangBalance, compute_element_profile};
pub use error::SajuError;
pub use kakukyoku::{
    ExtremeType, Kakukyoku, KakukyokuKind, PatternCategory, RuleCheck, determine_kakukyoku,
};
pub use major_fortune::{FortuneDirection, Gender, MajorFortuneCycle, MajorFortunes};
pub use pillar::{FourPillars, Pillar, PillarPosition};
pub use pillars::{calculate_four_pillars, compute_pillars};
pub use rules::{ProfileWeights, RuleBook};
pub use spirit_killer::{SpiritKiller, SpiritKillers};
pub use stem::{ALL_STEMS, HeavenlyStem};
pub use strength::{Strength, StrengthAssessment, StrengthThresholds, assess_strength};
pub use ten_god::{TenGod, TenGodMap, classify_ten_gods};
pub use twelve_fortune::{TwelveFortune, TwelveFortunes};
pub use yojin::{Companion, Yojin, determine_yojin, determine_yojin_with};
