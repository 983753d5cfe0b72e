//! Convenience wrapper for the shichu Four Pillars (四柱推命) engine.
//!
//! One call resolves the birthplace, corrects the wall-clock time and runs
//! every chart stage.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use chrono::NaiveDate;
//! use shichu_rs::*;
//!
//! let date = NaiveDate::from_ymd_opt(1986, 5, 26).unwrap();
//! let result = calculate(
//!     date,
//!     5.0,
//!     Gender::Male,
//!     &PlaceInput::from("東京"),
//!     &CalculationOptions::default(),
//! )
//! .unwrap();
//! println!("{}", result.four_pillars.day.label());
//! ```

pub mod convenience;
pub mod error;

// Primary re-exports; callers should only need `use shichu_rs::*`
pub use convenience::{CalculationResult, calculate, calculate_configured, calculate_with};
pub use error::{ErrorKind, ShichuError};

pub use shichu_geo::{
    Coordinates, GeoError, Location, LocationRegistry, MatchKind, SearchHit, builtin_registry,
    find_city, find_nearest_city, list_available_cities, smart_search,
};
pub use shichu_time::{
    AdjustedDateTime, AdjustmentDetail, AdjustmentKind, CalculationOptions, LunarDate,
    PlaceInput, SolarTerm, SolarTermInstant, SolarTermTable, TimeError, get_timezone_identifier,
    get_timezone_offset, is_dst, is_japanese_historical_dst,
};
pub use shichu_base::{
    Chart, EarthlyBranch, Element, ElementProfile, FourPillars, Gender, HeavenlyStem, Kakukyoku,
    KakukyokuKind, MajorFortunes, Pillar, RuleBook, SajuError, SpiritKiller, Strength,
    StrengthThresholds, TenGod, TenGodMap, TwelveFortune, Yojin, determine_yojin,
};
pub use shichu_config::{ConfigError, ShichuConfig, load_config, resolve_config};

/// Alias kept for callers that name the birthplace argument this way.
pub type LocationInput = PlaceInput;
