//! # Ambient Environment Model
//!
//! Maps the simulated hour of day to outdoor conditions: ambient temperature
//! from a fixed lookup table, plus the daylight and peak-demand
//! classifications every other model keys off.

use serde::{Deserialize, Serialize};

/// Hourly ambient temperature in °C, indexed by hour of day.
///
/// A synthetic hot-climate daily cycle: overnight trough of 26 °C around
/// 02:00–03:00, midday peak of 45 °C at 11:00–12:00.
pub const TEMP_TABLE: [f64; 24] = [
    29.0, 28.0, 26.0, 26.0, 27.0, 28.0, // 00:00 - 05:00
    30.0, 32.0, 35.0, 38.0, 42.0, 45.0, // 06:00 - 11:00
    45.0, 44.0, 43.0, 42.0, 40.0, 38.0, // 12:00 - 17:00
    36.0, 34.0, 33.0, 32.0, 31.0, 30.0, // 18:00 - 23:00
];

/// Daylight window: hours 6..=18, when solar generation is possible.
const DAYLIGHT_HOURS: std::ops::RangeInclusive<u8> = 6..=18;

/// Peak window: hours 11..=17, when cooling demand and ice discharge peak.
const PEAK_HOURS: std::ops::RangeInclusive<u8> = 11..=17;

/// Outdoor conditions for one simulated hour.
///
/// Immutable once resolved; recomputed from the table on every tick rather
/// than cached across hour or mode changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnvironmentSample {
    /// Hour of day, 0-23
    pub hour: u8,
    /// Ambient temperature in °C
    pub temperature_c: f64,
    /// Whether the sun is up
    pub is_daylight: bool,
    /// Whether the building sits in the peak-demand window
    pub is_peak: bool,
}

impl EnvironmentSample {
    /// Resolve outdoor conditions for `hour`.
    ///
    /// Callers must pass an hour in `0..24`; the clock guarantees this by
    /// construction.
    pub fn resolve(hour: u8) -> Self {
        debug_assert!(hour < 24, "hour out of range: {hour}");

        Self {
            hour,
            temperature_c: TEMP_TABLE[hour as usize],
            is_daylight: DAYLIGHT_HOURS.contains(&hour),
            is_peak: PEAK_HOURS.contains(&hour),
        }
    }
}
