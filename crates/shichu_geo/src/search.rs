//! Name normalization and ranked fuzzy matching.
//!
//! Normalization folds the differences a user typing a birth place is likely
//! to introduce: full-width vs half-width ASCII, katakana vs hiragana, case,
//! Latin diacritics, separators, and administrative suffixes (市, 県, "city",
//! "-shi", ...).
//!
//! Names that match no containment tier are scored with Jaro-Winkler
//! similarity so a misspelled query ("Tokio", "Londn") still finds its city.

use std::cmp::Ordering;

use serde::Serialize;

use crate::location::Location;

/// How a query matched a location name. Ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchKind {
    /// A name is similar to the query (Jaro-Winkler at or above [`FUZZY_THRESHOLD`]).
    Fuzzy,
    /// Every query token occurs somewhere in the location's names.
    Token,
    /// The query occurs inside a name.
    Substring,
    /// A name starts with the query.
    Prefix,
    /// A name equals the query after normalization.
    Exact,
}

/// One ranked search result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit<'a> {
    pub location: &'a Location,
    pub kind: MatchKind,
    /// Jaro-Winkler similarity of the query to the closest name, in [0, 1].
    pub similarity: f64,
    /// Length difference between the matched name and the query (smaller is closer).
    pub slack: usize,
}

impl SearchHit<'_> {
    /// Best-first ordering: match kind, then similarity, then slack.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .kind
            .cmp(&self.kind)
            .then(other.similarity.total_cmp(&self.similarity))
            .then(self.slack.cmp(&other.slack))
    }

    /// Whether this hit ranks strictly ahead of `other`.
    pub fn outranks(&self, other: &Self) -> bool {
        self.rank_cmp(other) == Ordering::Less
    }
}

/// Minimum Jaro-Winkler similarity for a [`MatchKind::Fuzzy`] hit.
pub const FUZZY_THRESHOLD: f64 = 0.85;

const KANJI_SUFFIXES: [char; 8] = ['市', '区', '町', '村', '県', '府', '都', '道'];
const LATIN_SUFFIXES: [&str; 7] = [" city", "-shi", " shi", "-ken", " ken", "-fu", "-to"];

/// Fold a single character: full-width ASCII to ASCII, katakana to hiragana,
/// Latin diacritics to base letters, then lowercase.
fn fold_char(c: char) -> char {
    let c = match c as u32 {
        // Full-width ASCII block.
        0xFF01..=0xFF5E => char::from_u32(c as u32 - 0xFEE0).unwrap_or(c),
        // Ideographic space.
        0x3000 => ' ',
        // Katakana ァ..ヶ map onto hiragana ぁ..ゖ.
        0x30A1..=0x30F6 => char::from_u32(c as u32 - 0x60).unwrap_or(c),
        _ => c,
    };
    match c {
        'ā' | 'á' | 'à' | 'â' | 'ã' | 'ä' | 'Ā' | 'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'a',
        'ē' | 'é' | 'è' | 'ê' | 'ë' | 'Ē' | 'É' | 'È' | 'Ê' | 'Ë' => 'e',
        'ī' | 'í' | 'ì' | 'î' | 'ï' | 'Ī' | 'Í' | 'Ì' | 'Î' | 'Ï' => 'i',
        'ō' | 'ó' | 'ò' | 'ô' | 'õ' | 'ö' | 'Ō' | 'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'o',
        'ū' | 'ú' | 'ù' | 'û' | 'ü' | 'Ū' | 'Ú' | 'Ù' | 'Û' | 'Ü' => 'u',
        'ç' | 'Ç' => 'c',
        'ñ' | 'Ñ' => 'n',
        _ => c.to_ascii_lowercase(),
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | '_' | '.' | ',' | '\'' | '・' | '･')
}

fn strip_suffix(folded: &str) -> &str {
    for suffix in LATIN_SUFFIXES {
        if let Some(rest) = folded.strip_suffix(suffix) {
            if rest.chars().count() >= 2 {
                return rest;
            }
        }
    }
    if let Some(last) = folded.chars().last() {
        if KANJI_SUFFIXES.contains(&last) {
            let rest = &folded[..folded.len() - last.len_utf8()];
            // Keep two-character names such as 京都 intact.
            if rest.chars().count() >= 2 {
                return rest;
            }
        }
    }
    folded
}

/// Normalize a place name for comparison.
pub fn normalize_name(raw: &str) -> String {
    let folded: String = raw.trim().chars().map(fold_char).collect();
    strip_suffix(folded.trim())
        .chars()
        .filter(|c| !is_separator(*c))
        .collect()
}

/// Split a query into normalized tokens.
pub fn query_tokens(raw: &str) -> Vec<String> {
    raw.split(is_separator)
        .map(normalize_name)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Score one location against a normalized query.
pub(crate) fn match_location<'a>(
    location: &'a Location,
    query: &str,
    tokens: &[String],
) -> Option<SearchHit<'a>> {
    let keys: Vec<String> = location
        .names()
        .map(normalize_name)
        .filter(|k| !k.is_empty())
        .collect();
    let qlen = query.chars().count();

    let mut best: Option<SearchHit<'a>> = None;
    let consider = |best: &mut Option<SearchHit<'a>>, kind, similarity, slack| {
        let hit = SearchHit {
            location,
            kind,
            similarity,
            slack,
        };
        if best.is_none_or(|b| hit.outranks(&b)) {
            *best = Some(hit);
        }
    };

    for key in &keys {
        let similarity = strsim::jaro_winkler(query, key);
        let slack = key.chars().count().abs_diff(qlen);
        if key == query {
            consider(&mut best, MatchKind::Exact, similarity, slack);
        } else if key.starts_with(query) {
            consider(&mut best, MatchKind::Prefix, similarity, slack);
        } else if key.contains(query) {
            consider(&mut best, MatchKind::Substring, similarity, slack);
        } else if similarity >= FUZZY_THRESHOLD {
            consider(&mut best, MatchKind::Fuzzy, similarity, slack);
        }
    }

    let contained = best.is_some_and(|b| b.kind > MatchKind::Token);
    if !contained && tokens.len() > 1 {
        let all_tokens = tokens
            .iter()
            .all(|t| keys.iter().any(|k| k.contains(t.as_str())));
        if all_tokens {
            let joined: usize = tokens.iter().map(|t| t.chars().count()).sum();
            let slack = keys
                .iter()
                .map(|k| k.chars().count().abs_diff(joined))
                .min()
                .unwrap_or(usize::MAX);
            let similarity = keys
                .iter()
                .map(|k| strsim::jaro_winkler(query, k))
                .fold(0.0, f64::max);
            consider(&mut best, MatchKind::Token, similarity, slack);
        }
    }
    best
}

/// Rank every location against `raw_query`. Stable for equal scores, so table
/// order breaks ties.
pub fn rank<'a>(locations: &'a [Location], raw_query: &str) -> Vec<SearchHit<'a>> {
    let query = normalize_name(raw_query);
    if query.is_empty() {
        return Vec::new();
    }
    let tokens = query_tokens(raw_query);
    let mut hits: Vec<SearchHit<'a>> = locations
        .iter()
        .filter_map(|loc| match_location(loc, &query, &tokens))
        .collect();
    hits.sort_by(|a, b| a.rank_cmp(b));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_katakana_to_hiragana() {
        assert_eq!(normalize_name("トウキョウ"), "とうきょう");
    }

    #[test]
    fn folds_full_width_ascii() {
        assert_eq!(normalize_name("ＴＯＫＹＯ"), "tokyo");
    }

    #[test]
    fn strips_kanji_suffix() {
        assert_eq!(normalize_name("大阪市"), "大阪");
        assert_eq!(normalize_name("東京都"), "東京");
        assert_eq!(normalize_name("京都府"), "京都");
    }

    #[test]
    fn keeps_short_names() {
        assert_eq!(normalize_name("京都"), "京都");
        assert_eq!(normalize_name("津"), "津");
    }

    #[test]
    fn strips_latin_suffix_and_separators() {
        assert_eq!(normalize_name("Osaka City"), "osaka");
        assert_eq!(normalize_name("Sapporo-shi"), "sapporo");
        assert_eq!(normalize_name("New York"), "newyork");
    }

    #[test]
    fn drops_diacritics() {
        assert_eq!(normalize_name("Tōkyō"), "tokyo");
        assert_eq!(normalize_name("São Paulo"), "saopaulo");
    }

    #[test]
    fn match_kind_ordering() {
        assert!(MatchKind::Exact > MatchKind::Prefix);
        assert!(MatchKind::Prefix > MatchKind::Substring);
        assert!(MatchKind::Substring > MatchKind::Token);
        assert!(MatchKind::Token > MatchKind::Fuzzy);
    }

    fn loc(romaji: &str) -> Location {
        Location {
            name: romaji.to_string(),
            romaji: romaji.to_string(),
            kana: String::new(),
            aliases: vec![],
            country: None,
            coordinates: crate::location::Coordinates {
                longitude: 0.0,
                latitude: 0.0,
            },
            time_zone: "UTC".to_string(),
        }
    }

    #[test]
    fn one_letter_typo_is_fuzzy() {
        let tokyo = loc("Tokyo");
        let hit = match_location(&tokyo, "tokio", &[]).unwrap();
        assert_eq!(hit.kind, MatchKind::Fuzzy);
        assert!(hit.similarity >= FUZZY_THRESHOLD && hit.similarity < 1.0);
    }

    #[test]
    fn dissimilar_name_is_rejected() {
        assert!(match_location(&loc("Tokyo"), "zzzz", &[]).is_none());
    }

    #[test]
    fn containment_outranks_similarity() {
        let places = [loc("Tokio"), loc("Tokyo Bay")];
        let hits = rank(&places, "tokyo");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].location.romaji, "Tokyo Bay");
        assert_eq!(hits[0].kind, MatchKind::Prefix);
        assert_eq!(hits[1].kind, MatchKind::Fuzzy);
    }

    #[test]
    fn tokens_split_on_separators() {
        assert_eq!(query_tokens("los  angeles"), vec!["los", "angeles"]);
    }
}
