//! Political time zones: date-ranged standard offsets per IANA identifier.
//!
//! Each zone carries a list of [`OffsetSpan`]s ordered by their `until`
//! stamp (local standard time, `YYYYMMDDhhmm`). The offset in force at a wall
//! time is that of the first span whose `until` lies after it. Adding a
//! historical change means adding a row, never a branch.

use chrono::{Datelike, NaiveDateTime, Timelike};

use shichu_geo::LocationRegistry;

use crate::dst::DstRegion;
use crate::error::TimeError;

/// Encode a local date-time as a sortable `YYYYMMDDhhmm` stamp.
pub const fn stamp(year: u64, month: u64, day: u64, hour: u64, minute: u64) -> u64 {
    (((year * 100 + month) * 100 + day) * 100 + hour) * 100 + minute
}

/// Stamp of a naive wall time.
pub fn stamp_of(dt: NaiveDateTime) -> u64 {
    let year = dt.year().max(0) as u64;
    stamp(
        year,
        dt.month() as u64,
        dt.day() as u64,
        dt.hour() as u64,
        dt.minute() as u64,
    )
}

/// Open-ended upper bound for the last span of a zone.
pub const FOREVER: u64 = u64::MAX;

/// A standard UTC offset in force until (exclusive) a local stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetSpan {
    pub until: u64,
    pub offset_minutes: i32,
}

const fn span(until: u64, offset_minutes: i32) -> OffsetSpan {
    OffsetSpan {
        until,
        offset_minutes,
    }
}

const fn fixed_span(offset_minutes: i32) -> [OffsetSpan; 1] {
    [span(FOREVER, offset_minutes)]
}

const UTC_P9: &[OffsetSpan] = &fixed_span(540);
const UTC_P8: &[OffsetSpan] = &fixed_span(480);
const UTC_P7: &[OffsetSpan] = &fixed_span(420);
const UTC_P5_30: &[OffsetSpan] = &fixed_span(330);
const UTC_P4: &[OffsetSpan] = &fixed_span(240);
const UTC_P10: &[OffsetSpan] = &fixed_span(600);
const UTC_P1: &[OffsetSpan] = &fixed_span(60);
const UTC_M3: &[OffsetSpan] = &fixed_span(-180);
const UTC_M5: &[OffsetSpan] = &fixed_span(-300);
const UTC_M6: &[OffsetSpan] = &fixed_span(-360);
const UTC_M7: &[OffsetSpan] = &fixed_span(-420);
const UTC_M8: &[OffsetSpan] = &fixed_span(-480);

/// One political zone.
#[derive(Debug, Clone, Copy)]
pub struct ZoneInfo {
    pub id: &'static str,
    pub spans: &'static [OffsetSpan],
    pub dst: Option<DstRegion>,
}

const fn zone(id: &'static str, spans: &'static [OffsetSpan], dst: Option<DstRegion>) -> ZoneInfo {
    ZoneInfo { id, spans, dst }
}

// ---------------------------------------------------------------------------
// Zone table
// ---------------------------------------------------------------------------

const SEOUL: &[OffsetSpan] = &[
    span(stamp(1912, 1, 1, 0, 0), 510),
    span(stamp(1954, 3, 21, 0, 0), 540),
    span(stamp(1961, 8, 10, 0, 0), 510),
    span(FOREVER, 540),
];

const HONG_KONG: &[OffsetSpan] = &[
    span(stamp(1941, 12, 25, 0, 0), 480),
    span(stamp(1945, 9, 16, 0, 0), 540),
    span(FOREVER, 480),
];

const TAIPEI: &[OffsetSpan] = &[
    span(stamp(1937, 10, 1, 0, 0), 480),
    span(stamp(1945, 9, 21, 0, 0), 540),
    span(FOREVER, 480),
];

const SINGAPORE: &[OffsetSpan] = &[
    span(stamp(1941, 9, 1, 0, 0), 440),
    span(stamp(1942, 2, 16, 0, 0), 450),
    span(stamp(1945, 9, 12, 0, 0), 540),
    span(stamp(1982, 1, 1, 0, 0), 450),
    span(FOREVER, 480),
];

const AUCKLAND: &[OffsetSpan] = &[span(stamp(1946, 1, 1, 0, 0), 690), span(FOREVER, 720)];

const MOSCOW: &[OffsetSpan] = &[
    span(stamp(2011, 3, 27, 2, 0), 180),
    span(stamp(2014, 10, 26, 2, 0), 240),
    span(FOREVER, 180),
];

const LONDON: &[OffsetSpan] = &[
    span(stamp(1968, 10, 27, 0, 0), 0),
    span(stamp(1971, 10, 31, 3, 0), 60),
    span(FOREVER, 0),
];

const HONOLULU: &[OffsetSpan] = &[span(stamp(1947, 6, 8, 2, 0), -630), span(FOREVER, -600)];

/// All zones the registry refers to.
pub const ZONES: &[ZoneInfo] = &[
    zone("Asia/Tokyo", UTC_P9, None),
    zone("Asia/Seoul", SEOUL, None),
    zone("Asia/Shanghai", UTC_P8, None),
    zone("Asia/Hong_Kong", HONG_KONG, None),
    zone("Asia/Taipei", TAIPEI, None),
    zone("Asia/Manila", UTC_P8, None),
    zone("Asia/Singapore", SINGAPORE, None),
    zone("Asia/Bangkok", UTC_P7, None),
    zone("Asia/Kolkata", UTC_P5_30, None),
    zone("Asia/Dubai", UTC_P4, None),
    zone("Australia/Sydney", UTC_P10, Some(DstRegion::Australia)),
    zone("Australia/Melbourne", UTC_P10, Some(DstRegion::Australia)),
    zone("Pacific/Auckland", AUCKLAND, Some(DstRegion::NewZealand)),
    zone("Pacific/Honolulu", HONOLULU, None),
    zone("Europe/London", LONDON, Some(DstRegion::Europe)),
    zone("Europe/Paris", UTC_P1, Some(DstRegion::Europe)),
    zone("Europe/Berlin", UTC_P1, Some(DstRegion::Europe)),
    zone("Europe/Rome", UTC_P1, Some(DstRegion::Europe)),
    zone("Europe/Madrid", UTC_P1, Some(DstRegion::Europe)),
    zone("Europe/Moscow", MOSCOW, Some(DstRegion::Russia)),
    zone("America/New_York", UTC_M5, Some(DstRegion::UnitedStates)),
    zone("America/Toronto", UTC_M5, Some(DstRegion::UnitedStates)),
    zone("America/Chicago", UTC_M6, Some(DstRegion::UnitedStates)),
    zone("America/Mexico_City", UTC_M6, None),
    zone("America/Denver", UTC_M7, Some(DstRegion::UnitedStates)),
    zone("America/Los_Angeles", UTC_M8, Some(DstRegion::UnitedStates)),
    zone("America/Vancouver", UTC_M8, Some(DstRegion::UnitedStates)),
    zone("America/Sao_Paulo", UTC_M3, None),
];

/// Look up a zone from the table.
pub fn zone_info(id: &str) -> Option<&'static ZoneInfo> {
    ZONES.iter().find(|z| z.id == id)
}

/// Parse `UTC`, `GMT`, `Etc/UTC`, `Etc/GMT` and `Etc/GMT±n` (POSIX-inverted sign).
fn parse_etc_offset(id: &str) -> Option<i32> {
    match id {
        "UTC" | "GMT" | "Etc/UTC" | "Etc/GMT" => return Some(0),
        _ => {}
    }
    let rest = id.strip_prefix("Etc/GMT")?;
    let (sign, digits) = match rest.as_bytes().first()? {
        b'+' => (-1, &rest[1..]),
        b'-' => (1, &rest[1..]),
        _ => return None,
    };
    let hours: i32 = digits.parse().ok()?;
    (0..=14).contains(&hours).then_some(sign * hours * 60)
}

/// Standard UTC offset in minutes of `zone_id` at a local wall time.
///
/// DST is not included; see [`crate::dst::is_dst`].
pub fn zone_offset_minutes(wall: NaiveDateTime, zone_id: &str) -> Result<i32, TimeError> {
    if let Some(info) = zone_info(zone_id) {
        let s = stamp_of(wall);
        let offset = info
            .spans
            .iter()
            .find(|sp| s < sp.until)
            .or_else(|| info.spans.last())
            .map(|sp| sp.offset_minutes)
            .ok_or_else(|| TimeError::UnknownTimeZone(zone_id.to_string()))?;
        return Ok(offset);
    }
    parse_etc_offset(zone_id).ok_or_else(|| TimeError::UnknownTimeZone(zone_id.to_string()))
}

/// Alias of [`zone_offset_minutes`] under the public utility name.
pub fn get_timezone_offset(wall: NaiveDateTime, zone_id: &str) -> Result<i32, TimeError> {
    zone_offset_minutes(wall, zone_id)
}

/// Radius within which a registry city lends its zone to bare coordinates.
pub const NEAREST_CITY_RADIUS_KM: f64 = 500.0;

/// Zone identifier for bare coordinates.
///
/// The nearest registry city within [`NEAREST_CITY_RADIUS_KM`] supplies its
/// zone; otherwise a nautical `Etc/GMT±n` zone from the longitude.
pub fn get_timezone_identifier(latitude: f64, longitude: f64) -> Result<String, TimeError> {
    timezone_identifier_in(shichu_geo::builtin_registry(), latitude, longitude)
}

/// [`get_timezone_identifier`] against a caller-supplied registry.
pub fn timezone_identifier_in(
    registry: &LocationRegistry,
    latitude: f64,
    longitude: f64,
) -> Result<String, TimeError> {
    let (city, distance_km) = registry.find_nearest(longitude, latitude)?;
    if distance_km <= NEAREST_CITY_RADIUS_KM {
        tracing::debug!(city = %city.name, distance_km, zone = %city.time_zone, "zone from nearest city");
        return Ok(city.time_zone.clone());
    }
    let hours = (longitude / 15.0).round() as i32;
    let id = match hours {
        0 => "Etc/GMT".to_string(),
        h if h > 0 => format!("Etc/GMT-{h}"),
        h => format!("Etc/GMT+{}", -h),
    };
    tracing::debug!(zone = %id, distance_km, "no city nearby, nautical zone");
    Ok(id)
}
