//! Useful god (用神) and its companions.
//!
//! The useful god is picked from the pattern and the strength verdict; its
//! companions follow from the element cycle:
//! - kijin (favorable): generates the useful element
//! - kijin2 (unfavorable): the element the useful element controls
//! - kyujin (hostile, 仇神): controls the useful element

use serde::Serialize;

use crate::element::Element;
use crate::element_profile::compute_element_profile;
use crate::error::SajuError;
use crate::kakukyoku::{Kakukyoku, KakukyokuKind};
use crate::pillar::FourPillars;
use crate::rules::RuleBook;
use crate::strength::Strength;
use crate::ten_god::{Relation, TenGod, TenGodMap};

/// An element with the ten god it represents for the Day Master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Companion {
    pub element: Element,
    pub ten_god: TenGod,
}

impl Companion {
    fn of(day_master: Element, element: Element) -> Self {
        Self {
            element,
            ten_god: TenGod::canonical(Relation::between(day_master, element)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Yojin {
    pub ten_god: TenGod,
    pub element: Element,
    pub description: String,
    /// The useful element and the element that generates it.
    pub support_elements: Vec<Element>,
    /// Favorable companion.
    pub kijin: Companion,
    /// Unfavorable companion.
    pub kijin2: Companion,
    /// Hostile companion.
    pub kyujin: Companion,
}

/// Determine the useful god with the standard rule tables.
pub fn determine_yojin(
    pillars: &FourPillars,
    ten_gods: &TenGodMap,
    kakukyoku: &Kakukyoku,
) -> Result<Yojin, SajuError> {
    determine_yojin_with(pillars, ten_gods, kakukyoku, RuleBook::standard())
}

fn special_ten_god(kind: KakukyokuKind) -> Option<TenGod> {
    match kind {
        k if k.is_single_element() => Some(TenGod::Hiken),
        KakukyokuKind::Juuou => Some(TenGod::Hiken),
        KakukyokuKind::Juukyou => Some(TenGod::Inju),
        KakukyokuKind::Juuji => Some(TenGod::Shokujin),
        KakukyokuKind::Juuzai => Some(TenGod::Henzai),
        KakukyokuKind::Juusatsu => Some(TenGod::Henkan),
        // Relative to the transformed Day Master.
        KakukyokuKind::Kaki => Some(TenGod::Inju),
        _ => None,
    }
}

fn strong_ten_god(kind: KakukyokuKind, ten_gods: &TenGodMap) -> TenGod {
    match kind {
        KakukyokuKind::Kenroku | KakukyokuKind::Getsujin => {
            let visible = |relation: Relation| ten_gods.visible().find(|g| g.relation() == relation);
            visible(Relation::Officer)
                .or_else(|| visible(Relation::Wealth))
                .unwrap_or(TenGod::Shokujin)
        }
        KakukyokuKind::Henin | KakukyokuKind::Inju => TenGod::Henzai,
        _ => TenGod::Shokujin,
    }
}

fn weak_ten_god(kind: KakukyokuKind) -> TenGod {
    match kind {
        KakukyokuKind::Henzai | KakukyokuKind::Seizai => TenGod::Hiken,
        _ => TenGod::Inju,
    }
}

/// Determine the useful god with explicit rule tables.
pub fn determine_yojin_with(
    pillars: &FourPillars,
    ten_gods: &TenGodMap,
    kakukyoku: &Kakukyoku,
    rules: &RuleBook,
) -> Result<Yojin, SajuError> {
    let dm = rules.stem_element(pillars.day_master())?;

    let (ten_god, reason) = match special_ten_god(kakukyoku.kind) {
        Some(god) => (god, format!("follows the special pattern {}", kakukyoku.name)),
        None => match kakukyoku.strength {
            Strength::Strong => (
                strong_ten_god(kakukyoku.kind, ten_gods),
                format!("{} with a strong Day Master: drain it", kakukyoku.name),
            ),
            Strength::Weak => (
                weak_ten_god(kakukyoku.kind),
                format!("{} with a weak Day Master: support it", kakukyoku.name),
            ),
            Strength::Neutral => {
                let weakest = compute_element_profile(pillars, rules)?.weakest_element();
                (
                    TenGod::canonical(Relation::between(dm, weakest)),
                    format!("balanced chart: reinforce the weakest element {}", weakest.kanji()),
                )
            }
        },
    };

    let element = ten_god.element_for(dm);
    let yojin = Yojin {
        ten_god,
        element,
        description: format!("{} ({}): {reason}", ten_god.kanji(), element.kanji()),
        support_elements: vec![element, element.generated_by()],
        kijin: Companion::of(dm, element.generated_by()),
        kijin2: Companion::of(dm, element.controls()),
        kyujin: Companion::of(dm, element.controlled_by()),
    };
    tracing::debug!(
        ten_god = yojin.ten_god.kanji(),
        element = yojin.element.kanji(),
        "yojin determined"
    );
    Ok(yojin)
}
