//! Calculation options toggling each time correction.

use serde::{Deserialize, Serialize};

/// Independent switches for the corrections applied to a wall-clock birth
/// time. Absent fields take the legacy Japan-only behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalculationOptions {
    /// Honour the birthplace's own political zone; otherwise the wall clock is
    /// read as JST.
    pub use_international_mode: bool,
    /// Apply the longitude (local mean time) correction.
    pub use_local_time: bool,
    /// Apply modern DST rules.
    #[serde(rename = "useDST")]
    pub use_dst: bool,
    /// Apply the Japanese 1948–1951 summer time.
    #[serde(rename = "useHistoricalDST")]
    pub use_historical_dst: bool,
    /// In international mode, correct against the zone's own meridian instead
    /// of converting to JST first.
    pub use_standard_time_zone: bool,
    /// Keep seconds instead of rounding to whole minutes.
    pub use_seconds_precision: bool,
}

impl Default for CalculationOptions {
    fn default() -> Self {
        Self {
            use_international_mode: false,
            use_local_time: true,
            use_dst: false,
            use_historical_dst: false,
            use_standard_time_zone: false,
            use_seconds_precision: false,
        }
    }
}

impl CalculationOptions {
    /// Legacy defaults.
    pub fn legacy() -> Self {
        Self::default()
    }

    /// International mode with modern DST.
    pub fn international() -> Self {
        Self {
            use_international_mode: true,
            use_dst: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_default() {
        let o = CalculationOptions::default();
        assert!(!o.use_international_mode);
        assert!(o.use_local_time);
        assert!(!o.use_dst && !o.use_historical_dst);
    }

    #[test]
    fn international_preset() {
        let o = CalculationOptions::international();
        assert!(o.use_international_mode && o.use_dst && o.use_local_time);
        assert!(!o.use_standard_time_zone);
    }
}
