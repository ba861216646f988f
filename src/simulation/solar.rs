//! # Rooftop Solar Generation Model
//!
//! A half-sine approximation of daily PV output: zero outside the daylight
//! window, peaking at solar noon.

use super::environment::EnvironmentSample;
use std::f64::consts::PI;

/// Nameplate output at solar noon, in kW.
const PEAK_OUTPUT_KW: f64 = 50.0;

/// Hour at which the generation curve starts (sunrise edge of the window).
const SUNRISE_HOUR: f64 = 6.0;

/// Width of the generation half-sine, in hours.
const GENERATION_SPAN_HOURS: f64 = 12.0;

/// Instantaneous solar output in kW for the given conditions.
///
/// `50 * sin((hour - 6) * pi / 12)` across the daylight window, floored at
/// zero so boundary rounding can never emit negative power.
pub fn solar_kw(env: &EnvironmentSample) -> f64 {
    if !env.is_daylight {
        return 0.0;
    }

    let output =
        PEAK_OUTPUT_KW * ((env.hour as f64 - SUNRISE_HOUR) * PI / GENERATION_SPAN_HOURS).sin();
    output.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_at_night() {
        for hour in [0u8, 3, 5, 19, 23] {
            let env = EnvironmentSample::resolve(hour);
            assert_eq!(solar_kw(&env), 0.0);
        }
    }

    #[test]
    fn test_peak_at_solar_noon() {
        let noon = EnvironmentSample::resolve(12);
        assert!((solar_kw(&noon) - PEAK_OUTPUT_KW).abs() < 1e-9);
    }

    #[test]
    fn test_zero_at_daylight_boundaries() {
        // sin(0) and sin(pi) both land on zero exactly at the window edges
        assert!(solar_kw(&EnvironmentSample::resolve(6)) < 1e-9);
        assert!(solar_kw(&EnvironmentSample::resolve(18)) < 1e-9);
    }

    #[test]
    fn test_bounded_and_non_negative_all_day() {
        for hour in 0..24u8 {
            let output = solar_kw(&EnvironmentSample::resolve(hour));
            assert!(output >= 0.0);
            assert!(output <= PEAK_OUTPUT_KW);
        }
    }

    #[test]
    fn test_positive_inside_the_window() {
        for hour in 7..=17u8 {
            let output = solar_kw(&EnvironmentSample::resolve(hour));
            assert!(output > 0.0, "expected generation at hour {hour}");
        }
    }

    #[test]
    fn test_symmetric_around_noon() {
        let morning = solar_kw(&EnvironmentSample::resolve(9));
        let afternoon = solar_kw(&EnvironmentSample::resolve(15));
        assert!((morning - afternoon).abs() < 1e-9);
    }
}
