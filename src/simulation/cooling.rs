//! # Cooling Load Model
//!
//! Instantaneous chiller load as a function of ambient temperature and
//! operating mode. Manual mode tracks temperature with a steep linear
//! profile; AI-optimized mode flattens the slope with electrochromic window
//! tinting and offsets the peak window with ice discharge.

use super::environment::EnvironmentSample;
use super::OperatingMode;

/// Load floor at 20 °C ambient, in kW.
const BASE_LOAD_KW: f64 = 20.0;

/// Reference temperature above which cooling demand accrues.
const REFERENCE_TEMP_C: f64 = 20.0;

/// Manual-mode load slope, kW per °C of excess temperature.
const MANUAL_SLOPE_KW_PER_C: f64 = 2.5;

/// AI-mode load slope before tinting, kW per °C of excess temperature.
const OPTIMIZED_SLOPE_KW_PER_C: f64 = 1.2;

/// Ambient temperature above which window tinting engages.
const TINT_THRESHOLD_C: f64 = 32.0;

/// Solar-gain reduction factor while the windows are tinted.
const TINT_FACTOR: f64 = 0.6;

/// Load offset supplied by ice discharge during the peak window, in kW.
const ICE_DISCHARGE_KW: f64 = 15.0;

/// Cooling load in kW for the given conditions and mode.
///
/// The result is intentionally not clamped at zero: an ice discharge large
/// relative to a low baseline could drive it negative, and downstream
/// consumers tolerate that. The fixed temperature table keeps it positive in
/// practice.
pub fn cooling_load_kw(env: &EnvironmentSample, mode: OperatingMode) -> f64 {
    let excess_c = env.temperature_c - REFERENCE_TEMP_C;

    match mode {
        OperatingMode::Manual => BASE_LOAD_KW + excess_c * MANUAL_SLOPE_KW_PER_C,
        OperatingMode::AiOptimized => {
            let tint_factor = if env.temperature_c > TINT_THRESHOLD_C {
                TINT_FACTOR
            } else {
                1.0
            };
            let ice_discharge_kw = if env.is_peak { ICE_DISCHARGE_KW } else { 0.0 };

            BASE_LOAD_KW + excess_c * OPTIMIZED_SLOPE_KW_PER_C * tint_factor - ice_discharge_kw
        }
    }
}
