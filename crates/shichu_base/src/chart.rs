//! Full chart pipeline over an adjusted birth time.

use serde::Serialize;
use shichu_time::{AdjustedDateTime, SolarMonth};

use crate::combination::resolve_combinations;
use crate::element_profile::{ElementProfile, compute_element_profile};
use crate::error::SajuError;
use crate::kakukyoku::{Kakukyoku, determine_kakukyoku};
use crate::major_fortune::{Gender, MajorFortunes, major_fortunes};
use crate::pillar::FourPillars;
use crate::pillars::compute_pillars;
use crate::rules::RuleBook;
use crate::spirit_killer::{SpiritKillers, spirit_killers};
use crate::strength::{StrengthAssessment, assess_strength};
use crate::ten_god::{TenGodMap, classify_ten_gods};
use crate::twelve_fortune::{TwelveFortunes, twelve_fortunes};
use crate::yojin::{Yojin, determine_yojin_with};

/// Everything derived from one adjusted birth time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    /// Pillars after combinations.
    pub four_pillars: FourPillars,
    pub ten_gods: TenGodMap,
    pub element_profile: ElementProfile,
    pub strength: StrengthAssessment,
    pub kakukyoku: Kakukyoku,
    pub yojin: Yojin,
    pub twelve_fortunes: TwelveFortunes,
    pub twelve_spirit_killers: SpiritKillers,
    pub major_fortunes: MajorFortunes,
    pub solar_month: SolarMonth,
}

/// Run every chart stage in order.
pub fn build_chart(
    adjusted: &AdjustedDateTime,
    gender: Gender,
    rules: &RuleBook,
) -> Result<Chart, SajuError> {
    let raw = compute_pillars(adjusted, rules)?;
    let four_pillars = resolve_combinations(&raw.pillars, rules);
    let ten_gods = classify_ten_gods(&four_pillars, rules)?;
    let element_profile = compute_element_profile(&four_pillars, rules)?;
    let strength = assess_strength(&four_pillars, &ten_gods, &element_profile, rules)?;
    let kakukyoku =
        determine_kakukyoku(&four_pillars, &ten_gods, &element_profile, &strength, rules)?;
    let yojin = determine_yojin_with(&four_pillars, &ten_gods, &kakukyoku, rules)?;

    Ok(Chart {
        twelve_fortunes: twelve_fortunes(&four_pillars),
        twelve_spirit_killers: spirit_killers(&four_pillars),
        major_fortunes: major_fortunes(&four_pillars, gender, adjusted, &raw.solar_month, rules),
        four_pillars,
        ten_gods,
        element_profile,
        strength,
        kakukyoku,
        yojin,
        solar_month: raw.solar_month,
    })
}
