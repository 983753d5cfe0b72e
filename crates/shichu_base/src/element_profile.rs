//! Weighted five-element distribution of a chart.

use serde::Serialize;

use crate::element::{ALL_ELEMENTS, Element};
use crate::error::SajuError;
use crate::pillar::FourPillars;
use crate::rules::RuleBook;

/// Overall yin/yang lean of the eight visible characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum YinYangBalance {
    Yang,
    Yin,
    Balanced,
}

/// Percentages per element (one decimal).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElementPercentages {
    pub wood: f64,
    pub fire: f64,
    pub earth: f64,
    pub metal: f64,
    pub water: f64,
}

impl ElementPercentages {
    pub fn get(&self, element: Element) -> f64 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    fn from_array(a: [f64; 5]) -> Self {
        Self {
            wood: a[0],
            fire: a[1],
            earth: a[2],
            metal: a[3],
            water: a[4],
        }
    }

    pub fn total(&self) -> f64 {
        ALL_ELEMENTS.iter().map(|&e| self.get(e)).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementProfile {
    pub percentages: ElementPercentages,
    pub main_element: Element,
    pub secondary_element: Element,
    pub yin_yang: YinYangBalance,
}

impl ElementProfile {
    pub fn percent(&self, element: Element) -> f64 {
        self.percentages.get(element)
    }

    /// Element with the lowest share; ties go to the earlier element.
    pub fn weakest_element(&self) -> Element {
        let mut weakest = Element::Wood;
        for e in ALL_ELEMENTS {
            if self.percent(e) < self.percent(weakest) {
                weakest = e;
            }
        }
        weakest
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Build the element profile of a (resolved) chart.
pub fn compute_element_profile(
    pillars: &FourPillars,
    rules: &RuleBook,
) -> Result<ElementProfile, SajuError> {
    let w = &rules.weights;
    let mut raw = [0.0_f64; 5];
    let mut yang = 0;

    for (position, pillar) in pillars.iter() {
        let stem_element = rules.stem_element(pillar.stem)?;
        raw[stem_element.index() as usize] += w.visible_stem;

        let total = w.branch_totals[position.index()];
        let hidden = &pillar.hidden_stems;
        for (stem, factor) in hidden.iter().zip(w.split(hidden.len())) {
            raw[rules.hidden_stem_element(*stem).index() as usize] += total * factor;
        }
        if let Some(e) = pillar.enhanced_element {
            raw[e.index() as usize] += w.enhanced_bonus;
        }

        yang += usize::from(pillar.stem.yin_yang().is_yang());
        yang += usize::from(pillar.branch.yin_yang().is_yang());
    }

    let sum: f64 = raw.iter().sum();
    if sum <= 0.0 {
        return Err(SajuError::IncompleteRuleMatch(
            "element weights sum to zero".to_string(),
        ));
    }
    let pct = raw.map(|r| round1(r / sum * 100.0));

    let mut order: Vec<Element> = ALL_ELEMENTS.to_vec();
    // Stable sort keeps element order on ties.
    order.sort_by(|a, b| raw[b.index() as usize].total_cmp(&raw[a.index() as usize]));

    let yin_yang = match yang.cmp(&4) {
        std::cmp::Ordering::Greater => YinYangBalance::Yang,
        std::cmp::Ordering::Less => YinYangBalance::Yin,
        std::cmp::Ordering::Equal => YinYangBalance::Balanced,
    };

    Ok(ElementProfile {
        percentages: ElementPercentages::from_array(pct),
        main_element: order[0],
        secondary_element: order[1],
        yin_yang,
    })
}
