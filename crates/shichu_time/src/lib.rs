//! Civil-time corrections and calendrical helpers for Four Pillars charts.
//!
//! This crate provides:
//! - Julian Date / Julian Day Number conversions and ΔT
//! - Date-ranged political time-zone offsets and DST rule tables, including
//!   the Japanese summer time of 1948–1951
//! - Birthplace resolution from names, coordinates or explicit locations
//! - Wall-clock → true-local-time adjustment with per-correction provenance
//! - The 24 solar terms computed per year, and solar-month lookup
//! - The Japanese lunisolar (旧暦) date

pub mod adjust;
pub mod delta_t;
pub mod dst;
pub mod error;
pub mod julian;
pub mod lunar;
pub mod options;
pub mod place;
pub mod solar_term;
pub mod sun;
pub mod zone;

pub use adjust::{
    AdjustedDateTime, AdjustmentDetail, AdjustmentKind, JST_MERIDIAN_DEG, JST_ZONE,
    adjust_birth_time,
};
pub use dst::{DstRegion, is_dst, is_japanese_historical_dst};
pub use error::TimeError;
pub use julian::{J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar, julian_day_number};
pub use lunar::{LunarDate, lunar_date};
pub use options::CalculationOptions;
pub use place::{PlaceInput, resolve_place};
pub use solar_term::{
    ALL_SOLAR_TERMS, SolarMonth, SolarTerm, SolarTermInstant, SolarTermTable, solar_month_at,
};
pub use zone::{get_timezone_identifier, get_timezone_offset, zone_offset_minutes};
