//! Integration tests for the built-in location registry.

use shichu_geo::{
    Coordinates, GeoError, Location, LocationRegistry, MatchKind, builtin_registry, find_city,
    find_nearest_city, haversine_km, list_available_cities, smart_search,
};

// ---------------------------------------------------------------------------
// Exact lookup
// ---------------------------------------------------------------------------

#[test]
fn find_city_by_prefecture_alias() {
    assert_eq!(find_city("北海道").unwrap().name, "札幌");
    assert_eq!(find_city("愛知県").unwrap().name, "名古屋");
    assert_eq!(find_city("Okinawa").unwrap().name, "那覇");
}

#[test]
fn find_city_world_in_katakana_and_romaji() {
    assert_eq!(find_city("ニューヨーク").unwrap().time_zone, "America/New_York");
    assert_eq!(find_city("new york").unwrap().name, "ニューヨーク");
    assert_eq!(find_city("ＳＥＯＵＬ").unwrap().time_zone, "Asia/Seoul");
}

#[test]
fn find_city_not_found_is_typed() {
    match find_city("Gotham") {
        Err(GeoError::LocationNotFound(name)) => assert_eq!(name, "Gotham"),
        other => panic!("unexpected: {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Smart search
// ---------------------------------------------------------------------------

#[test]
fn smart_search_exact_ranks_first() {
    let hits = builtin_registry().smart_search("osaka");
    assert!(!hits.is_empty());
    assert_eq!(hits[0].location.name, "大阪");
    assert_eq!(hits[0].kind, MatchKind::Exact);
}

#[test]
fn smart_search_prefix_match() {
    let hits = smart_search("kago");
    assert_eq!(hits[0].romaji, "Kagoshima");
}

#[test]
fn smart_search_hiragana_reaches_kanji_entry() {
    let hits = smart_search("ふくお");
    assert_eq!(hits[0].name, "福岡");
}

#[test]
fn smart_search_prefers_exact_over_prefix() {
    // "Fukushima" is exact; nothing else shares the name.
    let hits = builtin_registry().smart_search("fukushima");
    assert_eq!(hits[0].kind, MatchKind::Exact);
    assert_eq!(hits[0].location.name, "福島");
}

#[test]
fn smart_search_substring_match() {
    let hits = builtin_registry().smart_search("angeles");
    assert_eq!(hits[0].location.romaji, "Los Angeles");
    assert_eq!(hits[0].kind, MatchKind::Substring);
}

#[test]
fn smart_search_token_match_any_order() {
    let hits = builtin_registry().smart_search("york new");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].kind, MatchKind::Token);
    assert_eq!(hits[0].location.romaji, "New York");
}

#[test]
fn smart_search_tolerates_misspelling() {
    for (query, romaji) in [
        ("Tokio", "Tokyo"),
        ("Sapporro", "Sapporo"),
        ("Londn", "London"),
        ("Hiroshma", "Hiroshima"),
    ] {
        let hits = builtin_registry().smart_search(query);
        assert!(!hits.is_empty(), "{query}");
        assert_eq!(hits[0].location.romaji, romaji, "{query}");
        assert_eq!(hits[0].kind, MatchKind::Fuzzy, "{query}");
    }
}

#[test]
fn smart_search_fuzzy_ranks_after_containment() {
    // "fukushima" is exact for 福島 and merely similar to 福井 and 福岡.
    let hits = builtin_registry().smart_search("fukushima");
    assert_eq!(hits[0].location.name, "福島");
    assert!(hits[1..].iter().all(|h| h.kind == MatchKind::Fuzzy));
    assert!(hits.windows(2).all(|w| w[0].similarity >= w[1].similarity));
}

#[test]
fn smart_search_unrelated_name_has_no_fuzzy_hit() {
    assert!(smart_search("Atlantis").is_empty());
    assert!(smart_search("Gotham").is_empty());
}

#[test]
fn smart_search_no_match_is_empty() {
    assert!(smart_search("zzzz").is_empty());
    assert!(smart_search("").is_empty());
}

// ---------------------------------------------------------------------------
// Nearest
// ---------------------------------------------------------------------------

#[test]
fn nearest_city_for_each_capital_is_itself() {
    for loc in list_available_cities() {
        let nearest =
            find_nearest_city(loc.coordinates.longitude, loc.coordinates.latitude).unwrap();
        assert_eq!(nearest.romaji, loc.romaji);
    }
}

#[test]
fn nearest_city_kawasaki_is_tokyo_or_yokohama() {
    let loc = find_nearest_city(139.7029, 35.5308).unwrap();
    assert!(loc.romaji == "Yokohama" || loc.romaji == "Tokyo", "{}", loc.romaji);
}

#[test]
fn nearest_rejects_invalid_coordinates() {
    assert!(matches!(
        find_nearest_city(200.0, 0.0),
        Err(GeoError::InvalidCoordinates(_))
    ));
}

#[test]
fn distance_is_monotonic_along_a_meridian() {
    let origin = Coordinates::new(135.0, 35.0).unwrap();
    let mut last = 0.0;
    for step in 1..=20 {
        let p = Coordinates::new(135.0, 35.0 + step as f64 * 0.5).unwrap();
        let d = haversine_km(origin, p);
        assert!(d > last);
        last = d;
    }
}

// ---------------------------------------------------------------------------
// Custom registries
// ---------------------------------------------------------------------------

#[test]
fn custom_registry_lookup() {
    let custom = Location {
        name: "函館".to_string(),
        romaji: "Hakodate".to_string(),
        kana: "はこだて".to_string(),
        aliases: vec![],
        country: Some("JP".to_string()),
        coordinates: Coordinates::new(140.7288, 41.7687).unwrap(),
        time_zone: "Asia/Tokyo".to_string(),
    };
    let reg = LocationRegistry::new(vec![custom.clone()]);
    assert_eq!(reg.find_by_name("hakodate").unwrap(), &custom);
    assert!(reg.find_by_name("tokyo").is_err());
}

#[test]
fn location_serializes_camel_case() {
    let loc = find_city("Tokyo").unwrap();
    let json = serde_json::to_value(loc).unwrap();
    assert_eq!(json["timeZone"], "Asia/Tokyo");
    assert_eq!(json["coordinates"]["longitude"], 139.6917);
}
