//! Apparent geocentric longitude of the Sun.
//!
//! Low-precision solar theory (Meeus, *Astronomical Algorithms* 2nd ed.,
//! chapter 25): mean longitude and anomaly, equation of centre, aberration
//! and the dominant nutation term. Accuracy is about 0.01 deg, i.e. roughly a
//! quarter of an hour in the timing of a solar term.

use crate::delta_t::delta_t_days;
use crate::julian::jd_to_centuries;

/// Mean daily motion of the Sun in degrees.
pub const SUN_MEAN_MOTION_DEG_PER_DAY: f64 = 360.0 / 365.242_189;

/// Normalize an angle to [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Normalize an angle to [-180, 180).
pub fn normalize_pm180(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r >= 180.0 { r - 360.0 } else { r }
}

/// Apparent ecliptic longitude of the Sun in degrees [0, 360) at a JDE (TT).
pub fn apparent_longitude_deg(jde: f64) -> f64 {
    let t = jd_to_centuries(jde);
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    let true_lon = l0 + c;
    let omega = (125.04 - 1_934.136 * t).to_radians();
    normalize_360(true_lon - 0.005_69 - 0.004_78 * omega.sin())
}

/// Apparent solar longitude at a UT Julian Date.
pub fn apparent_longitude_at_ut(jd_ut: f64) -> f64 {
    apparent_longitude_deg(jd_ut + delta_t_days(jd_ut))
}

/// Find the UT Julian Date nearest `jd_guess` at which the Sun's apparent
/// longitude equals `target_deg`.
///
/// Newton iteration on the mean motion; converges to well under a second
/// within a handful of steps for any guess within a few weeks of the event.
pub fn find_longitude_crossing(target_deg: f64, jd_guess: f64) -> f64 {
    let mut jd = jd_guess;
    for _ in 0..12 {
        let diff = normalize_pm180(target_deg - apparent_longitude_at_ut(jd));
        let step = diff / SUN_MEAN_MOTION_DEG_PER_DAY;
        jd += step;
        if step.abs() < 1e-7 {
            break;
        }
    }
    jd
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::calendar_to_jd;

    #[test]
    fn meeus_example_25a() {
        // 1992 Oct 13.0 TD: apparent longitude 199.90895 deg (low precision 199.9090).
        let lon = apparent_longitude_deg(2_448_908.5);
        assert!((lon - 199.909).abs() < 0.002, "lon = {lon}");
    }

    #[test]
    fn vernal_equinox_2000() {
        // 2000-03-20 07:35 UT
        let guess = calendar_to_jd(2000, 3, 20.0);
        let jd = find_longitude_crossing(0.0, guess);
        let expected = calendar_to_jd(2000, 3, 20.0 + (7.0 + 35.0 / 60.0) / 24.0);
        assert!((jd - expected).abs() * 1440.0 < 20.0, "off by {} min", (jd - expected) * 1440.0);
    }

    #[test]
    fn normalize_helpers() {
        assert_eq!(normalize_360(-30.0), 330.0);
        assert_eq!(normalize_pm180(190.0), -170.0);
        assert_eq!(normalize_pm180(-180.0), -180.0);
    }
}
