//! ΔT = TT − UT, from the Espenak & Meeus (2006) polynomial fits.
//!
//! Accuracy is a few seconds over 1900–2100, far below the resolution that
//! matters for solar-term and new-moon boundaries.

/// ΔT in seconds for a decimal year.
pub fn delta_t_seconds(decimal_year: f64) -> f64 {
    let y = decimal_year;
    if (1900.0..1920.0).contains(&y) {
        let t = y - 1900.0;
        -2.79 + 1.494119 * t - 0.059_893_9 * t.powi(2) + 0.006_196_6 * t.powi(3)
            - 0.000_197 * t.powi(4)
    } else if (1920.0..1941.0).contains(&y) {
        let t = y - 1920.0;
        21.20 + 0.84493 * t - 0.076_100 * t.powi(2) + 0.002_093_6 * t.powi(3)
    } else if (1941.0..1961.0).contains(&y) {
        let t = y - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if (1961.0..1986.0).contains(&y) {
        let t = y - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if (1986.0..2005.0).contains(&y) {
        let t = y - 2000.0;
        63.86 + 0.3345 * t - 0.060_374 * t.powi(2)
            + 0.001_727_5 * t.powi(3)
            + 0.000_651_814 * t.powi(4)
            + 0.000_023_735_99 * t.powi(5)
    } else if (2005.0..2050.0).contains(&y) {
        let t = y - 2000.0;
        62.92 + 0.32217 * t + 0.005_589 * t.powi(2)
    } else if (2050.0..2150.0).contains(&y) {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
    } else {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    }
}

/// ΔT in days for a Julian Date (UT), using the JD's approximate decimal year.
pub fn delta_t_days(jd_ut: f64) -> f64 {
    let decimal_year = 2000.0 + (jd_ut - crate::julian::J2000_JD) / 365.25;
    delta_t_seconds(decimal_year) / crate::julian::SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_2000_about_64s() {
        assert!((delta_t_seconds(2000.0) - 63.86).abs() < 0.01);
    }

    #[test]
    fn year_1986_about_55s() {
        let dt = delta_t_seconds(1986.4);
        assert!((54.0..56.5).contains(&dt), "dt = {dt}");
    }

    #[test]
    fn continuous_at_segment_joins() {
        for y in [1920.0, 1941.0, 1961.0, 1986.0, 2005.0, 2050.0] {
            let before = delta_t_seconds(y - 1e-6);
            let after = delta_t_seconds(y);
            assert!((before - after).abs() < 2.0, "jump at {y}: {before} vs {after}");
        }
    }
}
