//! # Per-Tick Snapshot
//!
//! The full derived output for one simulated instant, and the pure function
//! that evaluates every model to produce it. There is no memoization: the
//! controller calls [`compute_snapshot`] after every state change, so a mode
//! toggle is visible on the very next read.

use serde::{Deserialize, Serialize};

use super::cooling::cooling_load_kw;
use super::environment::EnvironmentSample;
use super::ice_storage::ice_level_pct;
use super::narrator::analyze;
use super::recovery::water_recovered_lph;
use super::solar::solar_kw;
use super::OperatingMode;

/// Everything the building derives for one hour, recomputed fresh each tick
/// and never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Ambient temperature in °C
    pub temperature_c: f64,
    /// Chiller load in kW
    pub cooling_load_kw: f64,
    /// Ice bank charge level, 0-100 %
    pub ice_level_pct: f64,
    /// Rooftop solar output in kW
    pub solar_kw: f64,
    /// Condensate recovered in litres per hour
    pub water_recovered_lph: f64,
    /// Operator-facing status line
    pub analysis: String,
}

/// Evaluate all models for `hour` under `mode`.
pub fn compute_snapshot(hour: u8, mode: OperatingMode) -> Snapshot {
    let env = EnvironmentSample::resolve(hour);

    let cooling_load = cooling_load_kw(&env, mode);

    Snapshot {
        temperature_c: env.temperature_c,
        cooling_load_kw: cooling_load,
        ice_level_pct: ice_level_pct(&env, mode),
        solar_kw: solar_kw(&env),
        water_recovered_lph: water_recovered_lph(cooling_load),
        analysis: analyze(&env, mode).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::narrator;

    #[test]
    fn test_midday_optimized() {
        let snapshot = compute_snapshot(12, OperatingMode::AiOptimized);

        assert_eq!(snapshot.temperature_c, 45.0);
        assert_eq!(snapshot.ice_level_pct, 75.0);
        assert!((snapshot.solar_kw - 50.0).abs() < 1e-9);
        assert!((snapshot.cooling_load_kw - 23.0).abs() < 1e-9);
        assert_eq!(snapshot.water_recovered_lph, 9.2);
        assert_eq!(snapshot.analysis, narrator::MSG_PEAK_HEAT);
    }

    #[test]
    fn test_night_optimized() {
        let snapshot = compute_snapshot(2, OperatingMode::AiOptimized);

        assert_eq!(snapshot.temperature_c, 26.0);
        assert_eq!(snapshot.ice_level_pct, 30.0);
        assert_eq!(snapshot.solar_kw, 0.0);
        assert_eq!(snapshot.analysis, narrator::MSG_NIGHT_CHARGE);
    }

    #[test]
    fn test_midday_manual() {
        let snapshot = compute_snapshot(12, OperatingMode::Manual);

        assert_eq!(snapshot.ice_level_pct, 0.0);
        assert!((snapshot.cooling_load_kw - 82.5).abs() < 1e-9);
        assert_eq!(snapshot.water_recovered_lph, 33.0);
        assert_eq!(snapshot.analysis, narrator::MSG_MANUAL);
    }

    #[test]
    fn test_all_fields_finite_for_every_hour_and_mode() {
        for hour in 0..24u8 {
            for mode in [OperatingMode::AiOptimized, OperatingMode::Manual] {
                let s = compute_snapshot(hour, mode);
                for value in [
                    s.temperature_c,
                    s.cooling_load_kw,
                    s.ice_level_pct,
                    s.solar_kw,
                    s.water_recovered_lph,
                ] {
                    assert!(value.is_finite(), "hour {hour} mode {mode:?}: {value}");
                }
                assert!((0.0..=100.0).contains(&s.ice_level_pct));
                assert!(s.solar_kw >= 0.0);
                assert!(!s.analysis.is_empty());
            }
        }
    }

    #[test]
    fn test_serializes_for_consumers() {
        let snapshot = compute_snapshot(8, OperatingMode::AiOptimized);
        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json.get("cooling_load_kw").is_some());
        assert!(json.get("analysis").is_some());
    }
}
