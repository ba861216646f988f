//! # Building Simulation Module
//!
//! The derivation engine for the single-building micro-simulation. Every
//! model here is a pure, synchronous function of the current
//! [`EnvironmentSample`] and [`OperatingMode`] — no I/O, no hidden state.
//!
//! ## Components
//!
//! - **Clock**: discrete hour-of-day counter, wrapping at 24
//! - **Environment**: fixed 24-entry temperature table plus daylight/peak
//!   classification derived from the hour
//! - **Solar**: half-sine rooftop PV output over the daylight window
//! - **Cooling**: chiller load, with window tinting and ice discharge
//!   mitigation in AI-optimized mode
//! - **Ice storage**: thermal battery charge level over the daily cycle
//! - **Recovery**: condensate water reclaimed from cooling work
//! - **Narrator**: one-line operator-facing status text
//! - **History**: bounded FIFO window of recent samples for charting
//! - **Snapshot**: evaluates all of the above for one instant
//!
//! ## Usage
//!
//! ```rust
//! use smart_building_sim::simulation::{compute_snapshot, OperatingMode};
//!
//! let snapshot = compute_snapshot(12, OperatingMode::AiOptimized);
//! assert!(snapshot.solar_kw > 49.0);
//! ```

pub mod clock;
pub mod cooling;
pub mod environment;
pub mod history;
pub mod ice_storage;
pub mod narrator;
pub mod recovery;
pub mod snapshot;
pub mod solar;

pub use clock::SimulationClock;
pub use cooling::cooling_load_kw;
pub use environment::{EnvironmentSample, TEMP_TABLE};
pub use history::{HistoryBuffer, HistorySample, HISTORY_CAPACITY};
pub use ice_storage::ice_level_pct;
pub use narrator::analyze;
pub use recovery::water_recovered_lph;
pub use snapshot::{compute_snapshot, Snapshot};
pub use solar::solar_kw;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Operating mode of the building systems.
///
/// Affects the cooling load, ice storage and narrator models; toggled
/// externally at any time and picked up on the next snapshot computation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OperatingMode {
    /// Automation engaged: window tinting, ice discharge, night charging.
    #[default]
    AiOptimized,
    /// Traditional operation, chillers track demand directly.
    Manual,
}
