//! End-to-end adjustment scenarios through place resolution.

use chrono::NaiveDate;
use shichu_geo::builtin_registry;
use shichu_time::{
    AdjustmentKind, CalculationOptions, PlaceInput, TimeError, adjust_birth_time, resolve_place,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn tokyo_fixture() {
    let tokyo = resolve_place(builtin_registry(), &PlaceInput::from("東京")).unwrap();
    let a = adjust_birth_time(date(1986, 5, 26), 5.0, &tokyo, &CalculationOptions::default())
        .unwrap();
    assert_eq!((a.year, a.month, a.day, a.hour, a.minute), (1986, 5, 26, 5, 18));
    assert_eq!(a.political_time_zone, "Asia/Tokyo");
    assert_eq!(a.adjustment_details.len(), 1);
    assert_eq!(a.adjustment_details[0].kind, AdjustmentKind::Longitude);
}

#[test]
fn legacy_mode_ignores_foreign_zone() {
    let seoul = resolve_place(builtin_registry(), &PlaceInput::from("Seoul")).unwrap();
    let a = adjust_birth_time(date(1990, 3, 1), 12.0, &seoul, &CalculationOptions::default())
        .unwrap();
    assert_eq!(a.political_time_zone, "Asia/Tokyo");
    // 126.978 vs 135: -32 min.
    assert_eq!(a.local_time_adjustment_seconds, -32 * 60);
}

#[test]
fn international_seoul_half_hour_era() {
    let seoul = resolve_place(builtin_registry(), &PlaceInput::from("Seoul")).unwrap();
    let o = CalculationOptions {
        use_international_mode: true,
        use_local_time: false,
        ..CalculationOptions::default()
    };
    let a = adjust_birth_time(date(1958, 3, 1), 12.0, &seoul, &o).unwrap();
    assert_eq!(a.local_time_adjustment_seconds, 30 * 60);
    assert_eq!(a.adjustment_details[0].kind, AdjustmentKind::TimeZone);
}

#[test]
fn historical_dst_window_on_and_off() {
    let tokyo = resolve_place(builtin_registry(), &PlaceInput::from("Tokyo")).unwrap();
    let on = CalculationOptions {
        use_historical_dst: true,
        ..CalculationOptions::default()
    };
    let a = adjust_birth_time(date(1948, 6, 1), 12.0, &tokyo, &on).unwrap();
    assert!(a.is_dst);
    assert_eq!(a.local_time_adjustment_seconds, -3600 + 18 * 60);

    let b = adjust_birth_time(date(1948, 6, 1), 12.0, &tokyo, &CalculationOptions::default())
        .unwrap();
    assert!(!b.is_dst);
}

#[test]
fn additivity_holds_across_options() {
    let places = ["東京", "Sydney", "London", "New York", "札幌"];
    let flags = [false, true];
    for name in places {
        let loc = resolve_place(builtin_registry(), &PlaceInput::from(name)).unwrap();
        for intl in flags {
            for dst in flags {
                for std_tz in flags {
                    let o = CalculationOptions {
                        use_international_mode: intl,
                        use_dst: dst,
                        use_standard_time_zone: std_tz,
                        use_historical_dst: true,
                        ..CalculationOptions::default()
                    };
                    let a = adjust_birth_time(date(1995, 7, 15), 10.5, &loc, &o).unwrap();
                    assert_eq!(a.details_total_seconds(), a.local_time_adjustment_seconds);
                    assert_eq!(
                        (a.naive() - a.wall_clock).num_seconds(),
                        a.local_time_adjustment_seconds
                    );
                }
            }
        }
    }
}

#[test]
fn ambiguous_place_is_an_error() {
    let err = resolve_place(builtin_registry(), &PlaceInput::from("zzzz")).unwrap_err();
    assert!(matches!(err, TimeError::AmbiguousLocation { .. }));
}
