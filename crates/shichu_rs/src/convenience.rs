use chrono::NaiveDate;
use serde::Serialize;
use shichu_base::{
    ElementProfile, FourPillars, Gender, Kakukyoku, MajorFortunes, RuleBook, SpiritKillers,
    StrengthAssessment, TenGodMap, TwelveFortunes, Yojin, build_chart,
};
use shichu_geo::{Location, LocationRegistry, builtin_registry};
use shichu_time::{
    AdjustedDateTime, CalculationOptions, LunarDate, PlaceInput, SolarTermInstant, TimeError,
    adjust_birth_time, lunar_date, resolve_place,
};

use crate::error::ShichuError;

/// Complete output of one calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub four_pillars: FourPillars,
    pub ten_gods: TenGodMap,
    pub element_profile: ElementProfile,
    pub strength: StrengthAssessment,
    pub kakukyoku: Kakukyoku,
    pub yojin: Yojin,
    pub processed_date_time: AdjustedDateTime,
    pub location: Location,
    /// Lunisolar date of the adjusted day; `None` when it cannot be derived.
    pub lunar_date: Option<LunarDate>,
    pub twelve_fortunes: TwelveFortunes,
    pub twelve_spirit_killers: SpiritKillers,
    pub major_fortunes: MajorFortunes,
    /// The 節 that opened the birth month.
    pub solar_term: SolarTermInstant,
}

/// The lunar date is supplementary output; a failure is logged, not raised.
fn lunar_or_none(date: NaiveDate, result: Result<LunarDate, TimeError>) -> Option<LunarDate> {
    result
        .map_err(|e| tracing::warn!(%date, error = %e, "lunar date unavailable"))
        .ok()
}

/// Calculate a chart with the built-in registry and standard rule tables.
///
/// `birth_hour` is a fractional wall-clock hour (`5.5` is 05:30).
pub fn calculate(
    birth_date: NaiveDate,
    birth_hour: f64,
    gender: Gender,
    place: &PlaceInput,
    options: &CalculationOptions,
) -> Result<CalculationResult, ShichuError> {
    calculate_with(
        birth_date,
        birth_hour,
        gender,
        place,
        options,
        builtin_registry(),
        RuleBook::standard(),
    )
}

/// Calculate a chart against an explicit registry and rule book.
pub fn calculate_with(
    birth_date: NaiveDate,
    birth_hour: f64,
    gender: Gender,
    place: &PlaceInput,
    options: &CalculationOptions,
    registry: &LocationRegistry,
    rules: &RuleBook,
) -> Result<CalculationResult, ShichuError> {
    let span = tracing::debug_span!("calculate", %birth_date, birth_hour);
    let _guard = span.enter();

    let location = resolve_place(registry, place)?;
    let adjusted = adjust_birth_time(birth_date, birth_hour, &location, options)?;
    let lunar = lunar_or_none(adjusted.date(), lunar_date(adjusted.date()));
    let chart = build_chart(&adjusted, gender, rules)?;

    tracing::debug!(
        place = %location.name,
        pattern = chart.kakukyoku.name,
        yojin = chart.yojin.ten_god.kanji(),
        "calculation complete"
    );
    Ok(CalculationResult {
        four_pillars: chart.four_pillars,
        ten_gods: chart.ten_gods,
        element_profile: chart.element_profile,
        strength: chart.strength,
        kakukyoku: chart.kakukyoku,
        yojin: chart.yojin,
        processed_date_time: adjusted,
        location,
        lunar_date: lunar,
        twelve_fortunes: chart.twelve_fortunes,
        twelve_spirit_killers: chart.twelve_spirit_killers,
        major_fortunes: chart.major_fortunes,
        solar_term: chart.solar_month.start,
    })
}

/// Calculate with the options and rule tables of a loaded config.
pub fn calculate_configured(
    birth_date: NaiveDate,
    birth_hour: f64,
    gender: Gender,
    place: &PlaceInput,
    config: &shichu_config::ShichuConfig,
) -> Result<CalculationResult, ShichuError> {
    calculate_with(
        birth_date,
        birth_hour,
        gender,
        place,
        &config.options,
        builtin_registry(),
        &config.rule_book(),
    )
}
