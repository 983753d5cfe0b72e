//! Wall-clock birth time to true local time.
//!
//! Corrections are computed independently, recorded as [`AdjustmentDetail`]s
//! and summed onto the wall clock with full date carry. The recorded
//! components always add up to the total shift.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;
use shichu_geo::{Coordinates, Location, haversine_km};

use crate::dst::{is_dst, is_japanese_historical_dst};
use crate::error::TimeError;
use crate::options::CalculationOptions;
use crate::zone::zone_offset_minutes;

/// Supported Gregorian years.
pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

/// Japan Standard Time zone and meridian.
pub const JST_ZONE: &str = "Asia/Tokyo";
pub const JST_OFFSET_MINUTES: i32 = 540;
pub const JST_MERIDIAN_DEG: f64 = 135.0;

/// Centre and radius of the Tokyo conurbation, and its fixed correction.
pub const TOKYO_CENTRE: Coordinates = Coordinates {
    longitude: 139.6917,
    latitude: 35.6895,
};
pub const TOKYO_RADIUS_KM: f64 = 20.0;
pub const TOKYO_FIXED_SECONDS: i64 = 18 * 60;

/// Which correction a detail records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AdjustmentKind {
    /// Conversion of a foreign wall clock to JST.
    TimeZone,
    /// Modern daylight saving.
    Dst,
    /// Japanese summer time 1948–1951.
    HistoricalDst,
    /// Local mean time against the standard meridian.
    Longitude,
}

/// One applied correction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentDetail {
    pub kind: AdjustmentKind,
    pub seconds: i64,
    pub source: String,
}

/// The corrected birth time with provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustedDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub political_time_zone: String,
    #[serde(rename = "isDST")]
    pub is_dst: bool,
    pub local_time_adjustment_seconds: i64,
    pub local_time_adjustment_minutes: f64,
    pub adjustment_details: Vec<AdjustmentDetail>,
    /// Offset of the adjusted frame from UTC.
    pub utc_offset_seconds: i64,
    /// The wall-clock input after rounding.
    pub wall_clock: NaiveDateTime,
}

impl AdjustedDateTime {
    /// The adjusted time as a naive date-time.
    pub fn naive(&self) -> NaiveDateTime {
        self.wall_clock + Duration::seconds(self.local_time_adjustment_seconds)
    }

    /// The adjusted calendar date.
    pub fn date(&self) -> NaiveDate {
        self.naive().date()
    }

    /// The same instant in UTC.
    pub fn utc(&self) -> NaiveDateTime {
        self.naive() - Duration::seconds(self.utc_offset_seconds)
    }

    /// Sum of the recorded components.
    pub fn details_total_seconds(&self) -> i64 {
        self.adjustment_details.iter().map(|d| d.seconds).sum()
    }
}

/// Round a fractional hour to a wall time, clamped to the last representable
/// minute (or second) of the day.
fn wall_time(
    date: NaiveDate,
    hour: f64,
    seconds_precision: bool,
) -> Result<NaiveDateTime, TimeError> {
    if !hour.is_finite() || !(0.0..24.0).contains(&hour) {
        return Err(TimeError::InvalidDateRange(format!(
            "hour must be within [0, 24), got {hour}"
        )));
    }
    let secs = if seconds_precision {
        ((hour * 3600.0).round() as i64).min(86_399)
    } else {
        ((hour * 60.0).round() as i64).min(1_439) * 60
    };
    date.and_hms_opt(0, 0, 0)
        .map(|m| m + Duration::seconds(secs))
        .ok_or_else(|| TimeError::InvalidDateRange(date.to_string()))
}

fn longitude_seconds(
    location: &Location,
    meridian_deg: f64,
    seconds_precision: bool,
) -> (i64, String) {
    let lon = location.coordinates.longitude;
    let in_tokyo = (meridian_deg - JST_MERIDIAN_DEG).abs() < 1e-9
        && haversine_km(location.coordinates, TOKYO_CENTRE) <= TOKYO_RADIUS_KM;
    if in_tokyo {
        return (
            TOKYO_FIXED_SECONDS,
            "Tokyo conurbation, fixed +18 min".to_string(),
        );
    }
    let delta = lon - meridian_deg;
    let secs = if seconds_precision {
        (delta * 240.0).round() as i64
    } else {
        (delta * 4.0).round() as i64 * 60
    };
    (
        secs,
        format!("longitude {lon:.4} vs meridian {meridian_deg:.2}"),
    )
}

/// Apply the corrections selected by `options` to a wall-clock birth time.
pub fn adjust_birth_time(
    date: NaiveDate,
    hour: f64,
    location: &Location,
    options: &CalculationOptions,
) -> Result<AdjustedDateTime, TimeError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
        return Err(TimeError::InvalidDateRange(format!(
            "year must be within {MIN_YEAR}..={MAX_YEAR}, got {}",
            date.year()
        )));
    }
    let wall = wall_time(date, hour, options.use_seconds_precision)?;

    let zone = if options.use_international_mode {
        location.time_zone.as_str()
    } else {
        JST_ZONE
    };
    let zone_offset = zone_offset_minutes(wall, zone)?;
    let mut details = Vec::with_capacity(3);
    let mut dst_applied = false;

    if options.use_historical_dst && zone == JST_ZONE && is_japanese_historical_dst(wall) {
        details.push(AdjustmentDetail {
            kind: AdjustmentKind::HistoricalDst,
            seconds: -3600,
            source: "Japanese summer time 1948-1951".to_string(),
        });
        dst_applied = true;
    } else if options.use_dst && is_dst(wall, zone)? {
        details.push(AdjustmentDetail {
            kind: AdjustmentKind::Dst,
            seconds: -3600,
            source: format!("{zone} daylight saving"),
        });
        dst_applied = true;
    }

    let mut tz_seconds = 0;
    let meridian = if options.use_international_mode && options.use_standard_time_zone {
        zone_offset as f64 / 4.0
    } else {
        if options.use_international_mode && zone_offset != JST_OFFSET_MINUTES {
            tz_seconds = (JST_OFFSET_MINUTES - zone_offset) as i64 * 60;
            details.push(AdjustmentDetail {
                kind: AdjustmentKind::TimeZone,
                seconds: tz_seconds,
                source: format!("{zone} (UTC{zone_offset:+} min) to JST"),
            });
        }
        JST_MERIDIAN_DEG
    };

    let mut longitude_comp = 0;
    if options.use_local_time {
        let (secs, source) =
            longitude_seconds(location, meridian, options.use_seconds_precision);
        longitude_comp = secs;
        details.push(AdjustmentDetail {
            kind: AdjustmentKind::Longitude,
            seconds: secs,
            source,
        });
    }

    let total: i64 = details.iter().map(|d| d.seconds).sum();
    let adjusted = wall + Duration::seconds(total);
    let utc_offset_seconds = zone_offset as i64 * 60 + tz_seconds + longitude_comp;

    tracing::debug!(
        %wall,
        %adjusted,
        zone,
        total_seconds = total,
        "birth time adjusted"
    );

    Ok(AdjustedDateTime {
        year: adjusted.year(),
        month: adjusted.month(),
        day: adjusted.day(),
        hour: adjusted.hour(),
        minute: adjusted.minute(),
        second: adjusted.second(),
        political_time_zone: zone.to_string(),
        is_dst: dst_applied,
        local_time_adjustment_seconds: total,
        local_time_adjustment_minutes: total as f64 / 60.0,
        adjustment_details: details,
        utc_offset_seconds,
        wall_clock: wall,
    })
}
