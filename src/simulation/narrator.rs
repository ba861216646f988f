//! # Status Narrator
//!
//! Picks the one-line operator-facing status text for the current hour and
//! mode. Pure selection over the same inputs the numeric models consume.

use super::environment::EnvironmentSample;
use super::OperatingMode;

/// First hour of the afternoon heat message window (inclusive).
const PEAK_HEAT_START_HOUR: u8 = 12;

/// Last hour of the afternoon heat message window (inclusive).
const PEAK_HEAT_END_HOUR: u8 = 15;

pub const MSG_MANUAL: &str = "Manual operation: chillers tracking demand directly, ice bank idle \
     and peak tariffs ignored - wasting resources.";

pub const MSG_PEAK_HEAT: &str = "Peak afternoon heat: discharging ice storage and riding solar \
     output to shave the cooling peak.";

pub const MSG_DAYLIGHT: &str =
    "Daylight operation: rooftop solar offsetting load, building running on clean energy.";

pub const MSG_NIGHT_CHARGE: &str = "Night cycle: pre-cooling the building and charging the ice \
     bank on off-peak power.";

/// Status text for the given conditions.
///
/// Exactly one message applies per tick. The afternoon-heat check runs
/// before the general daylight check: hours 12-15 are inside the daylight
/// window but get the more specific message.
pub fn analyze(env: &EnvironmentSample, mode: OperatingMode) -> &'static str {
    if mode == OperatingMode::Manual {
        return MSG_MANUAL;
    }

    if (PEAK_HEAT_START_HOUR..=PEAK_HEAT_END_HOUR).contains(&env.hour) {
        MSG_PEAK_HEAT
    } else if env.is_daylight {
        MSG_DAYLIGHT
    } else {
        MSG_NIGHT_CHARGE
    }
}
