//! Stem (干合) and branch (支合) combinations.
//!
//! Candidates are every pair of pillars whose base stems (or branches) form a
//! pair in the rule book. They are taken greedily in precedence order:
//! 1. pairs involving the day pillar,
//! 2. closer pillars (adjacency distance),
//! 3. the leftmost pair.
//!
//! Each pillar combines at most once per kind. Matching always starts from
//! the base stems, so resolving an already-resolved chart changes nothing.

use serde::Serialize;

use crate::element::Element;
use crate::pillar::{ALL_POSITIONS, FourPillars, PillarPosition};
use crate::rules::RuleBook;
use crate::stem::HeavenlyStem;

/// One accepted combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinationMatch {
    pub first: PillarPosition,
    pub second: PillarPosition,
    pub element: Element,
}

fn precedence(a: PillarPosition, b: PillarPosition) -> (bool, usize, usize) {
    let involves_day = a == PillarPosition::Day || b == PillarPosition::Day;
    (!involves_day, b.index() - a.index(), a.index())
}

/// Pick non-overlapping pairs in precedence order.
fn greedy<F>(mut matcher: F) -> Vec<CombinationMatch>
where
    F: FnMut(PillarPosition, PillarPosition) -> Option<Element>,
{
    let mut candidates = Vec::new();
    for (i, &a) in ALL_POSITIONS.iter().enumerate() {
        for &b in &ALL_POSITIONS[i + 1..] {
            if let Some(element) = matcher(a, b) {
                candidates.push(CombinationMatch {
                    first: a,
                    second: b,
                    element,
                });
            }
        }
    }
    candidates.sort_by_key(|c| precedence(c.first, c.second));

    let mut used = [false; 4];
    let mut accepted = Vec::new();
    for c in candidates {
        if used[c.first.index()] || used[c.second.index()] {
            continue;
        }
        used[c.first.index()] = true;
        used[c.second.index()] = true;
        accepted.push(c);
    }
    accepted
}

/// Stem combinations that apply to a chart.
pub fn find_stem_combinations(pillars: &FourPillars, rules: &RuleBook) -> Vec<CombinationMatch> {
    greedy(|a, b| {
        rules.stem_combination(pillars.get(a).base_stem(), pillars.get(b).base_stem())
    })
}

/// Branch combinations that apply to a chart.
pub fn find_branch_combinations(pillars: &FourPillars, rules: &RuleBook) -> Vec<CombinationMatch> {
    greedy(|a, b| rules.branch_combination(pillars.get(a).branch, pillars.get(b).branch))
}

/// Apply stem and branch combinations, returning a new chart.
pub fn resolve_combinations(pillars: &FourPillars, rules: &RuleBook) -> FourPillars {
    let mut out = pillars.clone();
    for position in ALL_POSITIONS {
        let p = out.get_mut(position);
        p.stem = p.base_stem();
        p.original_stem = None;
        p.combined_element = None;
        p.enhanced_element = None;
    }

    for m in find_stem_combinations(pillars, rules) {
        for position in [m.first, m.second] {
            let p = out.get_mut(position);
            let base = p.stem;
            let transformed = HeavenlyStem::of(m.element, base.yin_yang());
            p.combined_element = Some(m.element);
            if transformed != base {
                p.stem = transformed;
                p.original_stem = Some(base);
            }
        }
        tracing::debug!(
            first = ?m.first,
            second = ?m.second,
            element = m.element.kanji(),
            "stem combination"
        );
    }

    for m in find_branch_combinations(pillars, rules) {
        out.get_mut(m.first).enhanced_element = Some(m.element);
        out.get_mut(m.second).enhanced_element = Some(m.element);
    }
    out
}
