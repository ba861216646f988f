//! # Building Controller
//!
//! Owns the mutable simulation state — clock, operating mode and sample
//! history — behind a single lock, and drives the tick loop. The tick task
//! and the mode-toggle handler are the only writers, and model evaluation is
//! pure and synchronous, so no lock is held across an await point.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::Config;
use crate::simulation::{
    compute_snapshot, HistoryBuffer, HistorySample, OperatingMode, SimulationClock, Snapshot,
};

#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    pub controller: Arc<BuildingController>,
}

impl AppState {
    pub fn new(cfg: Config) -> Self {
        let controller = Arc::new(BuildingController::new(cfg.sim.start_hour));
        Self { cfg, controller }
    }
}

/// Spawn the tick driver. The returned token stops it cleanly: each tick
/// completes fully before the loop re-checks for cancellation, so there is
/// never in-flight work to abort.
pub fn spawn_controller_tasks(state: &AppState, cfg: &Config) -> CancellationToken {
    let cancel = CancellationToken::new();

    let controller = state.controller.clone();
    let period = cfg.sim.tick_period();
    let token = cancel.clone();
    tokio::spawn(async move {
        controller.run(period, token).await;
    });

    cancel
}

/// What a status read returns: the current clock and mode alongside a
/// freshly computed snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct StatusView {
    pub hour: u8,
    pub mode: OperatingMode,
    pub snapshot: Snapshot,
}

struct SimState {
    clock: SimulationClock,
    mode: OperatingMode,
    history: HistoryBuffer,
}

pub struct BuildingController {
    state: RwLock<SimState>,
}

impl BuildingController {
    pub fn new(start_hour: u8) -> Self {
        Self {
            state: RwLock::new(SimState {
                clock: SimulationClock::new(start_hour),
                mode: OperatingMode::default(),
                history: HistoryBuffer::new(),
            }),
        }
    }

    /// Advance the clock one hour, recompute the snapshot for the new hour
    /// and append one history sample. Returns the snapshot.
    pub async fn tick(&self) -> Snapshot {
        let mut state = self.state.write().await;

        let hour = state.clock.advance();
        let snapshot = compute_snapshot(hour, state.mode);
        state.history.append(HistorySample::new(
            hour,
            snapshot.cooling_load_kw,
            snapshot.solar_kw,
        ));

        info!(
            hour,
            mode = %state.mode,
            load_kw = snapshot.cooling_load_kw,
            solar_kw = snapshot.solar_kw,
            ice_pct = snapshot.ice_level_pct,
            "simulation tick"
        );

        snapshot
    }

    /// External mutation entry point. Takes effect on the next snapshot
    /// computation; no tick needs to elapse.
    pub async fn set_mode(&self, mode: OperatingMode) {
        let mut state = self.state.write().await;
        if state.mode != mode {
            info!(mode = %mode, "operating mode changed");
            state.mode = mode;
        }
    }

    pub async fn mode(&self) -> OperatingMode {
        self.state.read().await.mode
    }

    pub async fn hour(&self) -> u8 {
        self.state.read().await.clock.hour()
    }

    /// Current clock, mode and a snapshot computed fresh for this read.
    pub async fn status(&self) -> StatusView {
        let state = self.state.read().await;
        StatusView {
            hour: state.clock.hour(),
            mode: state.mode,
            snapshot: compute_snapshot(state.clock.hour(), state.mode),
        }
    }

    /// Retained history samples, oldest first, at most 16.
    pub async fn history(&self) -> Vec<HistorySample> {
        self.state.read().await.history.samples()
    }

    /// Tick loop: one tick per period until cancelled.
    pub async fn run(&self, period: Duration, cancel: CancellationToken) {
        let mut interval = tokio::time::interval(period);
        // the first interval tick fires immediately; skip it so the clock
        // holds its start hour for one full period
        interval.tick().await;

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    info!("tick driver stopped");
                    break;
                }
                _ = interval.tick() => {
                    self.tick().await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::HISTORY_CAPACITY;

    #[tokio::test]
    async fn test_tick_advances_clock_and_appends_history() {
        let controller = BuildingController::new(0);
        assert_eq!(controller.hour().await, 0);
        assert!(controller.history().await.is_empty());

        controller.tick().await;

        assert_eq!(controller.hour().await, 1);
        let history = controller.history().await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].time_label, "01:00");
    }

    #[tokio::test]
    async fn test_mode_toggle_is_visible_without_a_tick() {
        let controller = BuildingController::new(11);

        let before = controller.status().await;
        assert_eq!(before.mode, OperatingMode::AiOptimized);
        assert!(before.snapshot.ice_level_pct > 0.0);

        controller.set_mode(OperatingMode::Manual).await;

        let after = controller.status().await;
        assert_eq!(after.hour, before.hour);
        assert_eq!(after.mode, OperatingMode::Manual);
        assert_eq!(after.snapshot.ice_level_pct, 0.0);
        assert!(after.snapshot.cooling_load_kw > before.snapshot.cooling_load_kw);
    }

    #[tokio::test]
    async fn test_history_window_slides() {
        let controller = BuildingController::new(0);
        for _ in 0..20 {
            controller.tick().await;
        }

        let history = controller.history().await;
        assert_eq!(history.len(), HISTORY_CAPACITY);
        // ticks 1..=20 ran; the window holds hours 5..=20
        assert_eq!(history[0].time_label, "05:00");
        assert_eq!(history[15].time_label, "20:00");
    }

    #[tokio::test]
    async fn test_clock_wraps_across_midnight() {
        let controller = BuildingController::new(23);
        controller.tick().await;
        assert_eq!(controller.hour().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_ticks_on_cadence_and_stops_cleanly() {
        let controller = Arc::new(BuildingController::new(0));
        let cancel = CancellationToken::new();

        let task = {
            let controller = controller.clone();
            let token = cancel.clone();
            tokio::spawn(async move {
                controller.run(Duration::from_secs(2), token).await;
            })
        };

        tokio::time::sleep(Duration::from_secs(7)).await;
        cancel.cancel();
        task.await.unwrap();

        // three full periods elapsed
        assert_eq!(controller.hour().await, 3);
        assert_eq!(controller.history().await.len(), 3);
    }
}
