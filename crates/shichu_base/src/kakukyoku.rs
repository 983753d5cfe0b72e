//! Chart pattern (格局) classification.
//!
//! Special patterns are tried first, in a fixed order, each as a list of
//! preconditions. The first rule whose preconditions all hold wins; every
//! precondition evaluated is recorded in [`Kakukyoku::details`]. Charts that
//! match no special rule take the ordinary pattern named by the month
//! branch's ten god.

use serde::Serialize;

use crate::combination::find_stem_combinations;
use crate::element::Element;
use crate::element_profile::ElementProfile;
use crate::error::SajuError;
use crate::pillar::{FourPillars, PillarPosition};
use crate::rules::RuleBook;
use crate::strength::{Strength, StrengthAssessment, relation_percent};
use crate::ten_god::{Relation, TenGod, TenGodMap};

/// Share of a single element that counts as dominant (一行得気).
pub const DOMINANT_ELEMENT_PERCENT: f64 = 60.0;
/// Combined own + resource share required for 従旺 / 従強.
pub const FOLLOW_SUPPORT_PERCENT: f64 = 80.0;
/// Share of the transformed element required for 化気.
pub const TRANSFORMED_ELEMENT_PERCENT: f64 = 40.0;
/// Resource share below which a weak chart can follow.
pub const FOLLOW_RESOURCE_LIMIT: f64 = 10.0;
/// Share of the controller below which a transformation holds.
pub const TRANSFORMATION_CONTROL_LIMIT: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PatternCategory {
    Ordinary,
    Special,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ExtremeType {
    ExtremeStrong,
    ExtremeWeak,
}

/// All patterns the classifier can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KakukyokuKind {
    // Ordinary
    Kenroku,
    Getsujin,
    Shokujin,
    Shoukan,
    Henzai,
    Seizai,
    Henkan,
    Seikan,
    Henin,
    Inju,
    // 一行得気
    Kyokuchoku,
    Enjou,
    Kashoku,
    Juukaku,
    Junka,
    // Following and transformation
    Juuou,
    Juukyou,
    Kaki,
    Juuji,
    Juuzai,
    Juusatsu,
}

impl KakukyokuKind {
    pub const fn kanji(self) -> &'static str {
        match self {
            Self::Kenroku => "建禄格",
            Self::Getsujin => "月刃格",
            Self::Shokujin => "食神格",
            Self::Shoukan => "傷官格",
            Self::Henzai => "偏財格",
            Self::Seizai => "正財格",
            Self::Henkan => "偏官格",
            Self::Seikan => "正官格",
            Self::Henin => "偏印格",
            Self::Inju => "印綬格",
            Self::Kyokuchoku => "曲直格",
            Self::Enjou => "炎上格",
            Self::Kashoku => "稼穡格",
            Self::Juukaku => "従革格",
            Self::Junka => "潤下格",
            Self::Juuou => "従旺格",
            Self::Juukyou => "従強格",
            Self::Kaki => "化気格",
            Self::Juuji => "従児格",
            Self::Juuzai => "従財格",
            Self::Juusatsu => "従殺格",
        }
    }

    pub const fn category(self) -> PatternCategory {
        match self {
            Self::Kenroku
            | Self::Getsujin
            | Self::Shokujin
            | Self::Shoukan
            | Self::Henzai
            | Self::Seizai
            | Self::Henkan
            | Self::Seikan
            | Self::Henin
            | Self::Inju => PatternCategory::Ordinary,
            _ => PatternCategory::Special,
        }
    }

    /// Whether this is one of the five 一行得気 patterns.
    pub const fn is_single_element(self) -> bool {
        matches!(
            self,
            Self::Kyokuchoku | Self::Enjou | Self::Kashoku | Self::Juukaku | Self::Junka
        )
    }

    /// The ordinary pattern named by a month branch ten god.
    pub const fn ordinary(month_god: TenGod) -> Self {
        match month_god {
            TenGod::Hiken => Self::Kenroku,
            TenGod::Gouzai => Self::Getsujin,
            TenGod::Shokujin => Self::Shokujin,
            TenGod::Shoukan => Self::Shoukan,
            TenGod::Henzai => Self::Henzai,
            TenGod::Seizai => Self::Seizai,
            TenGod::Henkan => Self::Henkan,
            TenGod::Seikan => Self::Seikan,
            TenGod::Henin => Self::Henin,
            TenGod::Inju => Self::Inju,
        }
    }

    /// The 一行得気 pattern of a Day Master element.
    pub const fn single_element(element: Element) -> Self {
        match element {
            Element::Wood => Self::Kyokuchoku,
            Element::Fire => Self::Enjou,
            Element::Earth => Self::Kashoku,
            Element::Metal => Self::Juukaku,
            Element::Water => Self::Junka,
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Kenroku => "month branch is the Day Master's own element (same polarity)",
            Self::Getsujin => "month branch is the Day Master's own element (opposite polarity)",
            Self::Shokujin | Self::Shoukan => "month branch is the Day Master's output",
            Self::Henzai | Self::Seizai => "month branch is the Day Master's wealth",
            Self::Henkan | Self::Seikan => "month branch controls the Day Master",
            Self::Henin | Self::Inju => "month branch generates the Day Master",
            Self::Kyokuchoku
            | Self::Enjou
            | Self::Kashoku
            | Self::Juukaku
            | Self::Junka => "the chart is dominated by the Day Master's element",
            Self::Juuou => "extremely strong, led by the Day Master's own element",
            Self::Juukyou => "extremely strong, led by the resource element",
            Self::Kaki => "the day stem transforms through a stem combination",
            Self::Juuji => "extremely weak, following the output element",
            Self::Juuzai => "extremely weak, following the wealth element",
            Self::Juusatsu => "extremely weak, following the officer element",
        }
    }
}

impl std::fmt::Display for KakukyokuKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kanji())
    }
}

/// One evaluated precondition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleCheck {
    pub rule: &'static str,
    pub condition: String,
    pub passed: bool,
}

/// Classification result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Kakukyoku {
    pub kind: KakukyokuKind,
    pub name: &'static str,
    pub category: PatternCategory,
    pub strength: Strength,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extreme_type: Option<ExtremeType>,
    pub is_extreme_strong: bool,
    pub is_extreme_weak: bool,
    pub score: f64,
    pub description: String,
    pub details: Vec<RuleCheck>,
}

// ---------------------------------------------------------------------------
// Rule evaluation
// ---------------------------------------------------------------------------

struct ChartContext<'a> {
    pillars: &'a FourPillars,
    profile: &'a ElementProfile,
    strength: &'a StrengthAssessment,
    rules: &'a RuleBook,
    dm: Element,
}

impl ChartContext<'_> {
    fn pct(&self, relation: Relation) -> f64 {
        relation_percent(self.profile, self.dm, relation)
    }
}

/// Records checks for one rule and tracks whether all have passed.
struct Checks<'a> {
    rule: &'static str,
    log: &'a mut Vec<RuleCheck>,
    ok: bool,
}

impl Checks<'_> {
    fn check(&mut self, condition: impl Into<String>, passed: bool) -> &mut Self {
        self.log.push(RuleCheck {
            rule: self.rule,
            condition: condition.into(),
            passed,
        });
        self.ok &= passed;
        self
    }
}

type SpecialRule = fn(&ChartContext<'_>, &mut Checks<'_>) -> Option<KakukyokuKind>;

/// Special rules in evaluation order.
const SPECIAL_RULES: &[(&str, SpecialRule)] = &[
    ("一行得気", single_element_rule),
    ("従旺格", follow_own_rule),
    ("従強格", follow_resource_rule),
    ("化気格", transformation_rule),
    ("従児格", follow_output_rule),
    ("従財格", follow_wealth_rule),
    ("従殺格", follow_officer_rule),
];

fn single_element_rule(ctx: &ChartContext<'_>, c: &mut Checks<'_>) -> Option<KakukyokuKind> {
    let own = ctx.pct(Relation::Same);
    let officer = ctx.pct(Relation::Officer);
    c.check("extreme strong", ctx.strength.is_extreme_strong)
        .check(
            format!("own element {own:.1}% >= {DOMINANT_ELEMENT_PERCENT}%"),
            own >= DOMINANT_ELEMENT_PERCENT,
        )
        .check(format!("officer element {officer:.1}% = 0"), officer <= 0.0);
    c.ok.then(|| KakukyokuKind::single_element(ctx.dm))
}

fn strong_follow_checks(ctx: &ChartContext<'_>, c: &mut Checks<'_>) {
    let support = ctx.pct(Relation::Same) + ctx.pct(Relation::Resource);
    let officer = ctx.pct(Relation::Officer);
    c.check("extreme strong", ctx.strength.is_extreme_strong)
        .check(
            format!("support {support:.1}% >= {FOLLOW_SUPPORT_PERCENT}%"),
            support >= FOLLOW_SUPPORT_PERCENT,
        )
        .check(format!("officer element {officer:.1}% = 0"), officer <= 0.0);
}

fn follow_own_rule(ctx: &ChartContext<'_>, c: &mut Checks<'_>) -> Option<KakukyokuKind> {
    strong_follow_checks(ctx, c);
    let (own, res) = (ctx.pct(Relation::Same), ctx.pct(Relation::Resource));
    c.check(format!("own {own:.1}% >= resource {res:.1}%"), own >= res);
    c.ok.then_some(KakukyokuKind::Juuou)
}

fn follow_resource_rule(ctx: &ChartContext<'_>, c: &mut Checks<'_>) -> Option<KakukyokuKind> {
    strong_follow_checks(ctx, c);
    let (own, res) = (ctx.pct(Relation::Same), ctx.pct(Relation::Resource));
    c.check(format!("resource {res:.1}% > own {own:.1}%"), res > own);
    c.ok.then_some(KakukyokuKind::Juukyou)
}

fn transformation_rule(ctx: &ChartContext<'_>, c: &mut Checks<'_>) -> Option<KakukyokuKind> {
    let Some(element) = ctx.pillars.day.combined_element else {
        c.check("day stem combines", false);
        return None;
    };
    c.check("day stem combines", true);

    let adjacent = find_stem_combinations(ctx.pillars, ctx.rules).iter().any(|m| {
        let pair = (m.first, m.second);
        pair == (PillarPosition::Month, PillarPosition::Day)
            || pair == (PillarPosition::Day, PillarPosition::Hour)
    });
    let share = ctx.profile.percent(element);
    let Ok(month_element) = ctx.rules.branch_element(ctx.pillars.month.branch) else {
        c.check("month branch has a primary hidden stem", false);
        return None;
    };
    let controller = ctx.profile.percent(element.controlled_by());

    c.check("partner is the month or hour stem", adjacent)
        .check(
            format!("{} {share:.1}% >= {TRANSFORMED_ELEMENT_PERCENT}%", element.kanji()),
            share >= TRANSFORMED_ELEMENT_PERCENT,
        )
        .check(
            format!("month branch {} supports {}", month_element.kanji(), element.kanji()),
            month_element == element || month_element == element.generated_by(),
        )
        .check(
            format!(
                "controller {} {controller:.1}% < {TRANSFORMATION_CONTROL_LIMIT}%",
                element.controlled_by().kanji()
            ),
            controller < TRANSFORMATION_CONTROL_LIMIT,
        );
    c.ok.then_some(KakukyokuKind::Kaki)
}

/// Shared preconditions of the weak-following rules: `lead` must be the
/// largest drain and the resource condition must hold.
fn weak_follow_checks(
    ctx: &ChartContext<'_>,
    c: &mut Checks<'_>,
    lead: Relation,
    resource_ok: bool,
    resource_label: String,
) {
    let lead_pct = ctx.pct(lead);
    let largest = [Relation::Output, Relation::Wealth, Relation::Officer]
        .into_iter()
        .all(|r| ctx.pct(r) <= lead_pct);
    c.check("extreme weak", ctx.strength.is_extreme_weak)
        .check(format!("{lead:?} {lead_pct:.1}% is the largest drain"), largest)
        .check(resource_label, resource_ok);
}

fn follow_output_rule(ctx: &ChartContext<'_>, c: &mut Checks<'_>) -> Option<KakukyokuKind> {
    let res = ctx.pct(Relation::Resource);
    weak_follow_checks(ctx, c, Relation::Output, res <= 0.0, format!("resource {res:.1}% = 0"));
    c.ok.then_some(KakukyokuKind::Juuji)
}

fn follow_wealth_rule(ctx: &ChartContext<'_>, c: &mut Checks<'_>) -> Option<KakukyokuKind> {
    let res = ctx.pct(Relation::Resource);
    weak_follow_checks(
        ctx,
        c,
        Relation::Wealth,
        res < FOLLOW_RESOURCE_LIMIT,
        format!("resource {res:.1}% < {FOLLOW_RESOURCE_LIMIT}%"),
    );
    c.ok.then_some(KakukyokuKind::Juuzai)
}

fn follow_officer_rule(ctx: &ChartContext<'_>, c: &mut Checks<'_>) -> Option<KakukyokuKind> {
    let res = ctx.pct(Relation::Resource);
    weak_follow_checks(
        ctx,
        c,
        Relation::Officer,
        res < FOLLOW_RESOURCE_LIMIT,
        format!("resource {res:.1}% < {FOLLOW_RESOURCE_LIMIT}%"),
    );
    c.ok.then_some(KakukyokuKind::Juusatsu)
}

/// Classify the chart's pattern.
pub fn determine_kakukyoku(
    pillars: &FourPillars,
    ten_gods: &TenGodMap,
    profile: &ElementProfile,
    strength: &StrengthAssessment,
    rules: &RuleBook,
) -> Result<Kakukyoku, SajuError> {
    let ctx = ChartContext {
        pillars,
        profile,
        strength,
        rules,
        dm: rules.stem_element(pillars.day_master())?,
    };

    let mut details = Vec::new();
    let mut matched = None;
    for &(rule, apply) in SPECIAL_RULES {
        let mut checks = Checks {
            rule,
            log: &mut details,
            ok: true,
        };
        if let Some(kind) = apply(&ctx, &mut checks) {
            matched = Some(kind);
            break;
        }
    }

    let month_god = ten_gods.month.branch;
    let kind = matched.unwrap_or(KakukyokuKind::ordinary(month_god));
    details.push(RuleCheck {
        rule: "普通格局",
        condition: format!("month branch ten god {month_god}"),
        passed: matched.is_none(),
    });

    let extreme_type = if strength.is_extreme_strong {
        Some(ExtremeType::ExtremeStrong)
    } else if strength.is_extreme_weak {
        Some(ExtremeType::ExtremeWeak)
    } else {
        None
    };

    tracing::debug!(pattern = kind.kanji(), score = strength.score, "kakukyoku determined");
    Ok(Kakukyoku {
        kind,
        name: kind.kanji(),
        category: kind.category(),
        strength: strength.strength,
        extreme_type,
        is_extreme_strong: strength.is_extreme_strong,
        is_extreme_weak: strength.is_extreme_weak,
        score: strength.score,
        description: kind.description().to_string(),
        details,
    })
}
