//! # Rolling Sample History
//!
//! A bounded FIFO window of recent (time, load, solar) samples kept for
//! chart rendering. Append-only: entries are immutable once created and
//! leave only by capacity eviction.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of samples retained.
pub const HISTORY_CAPACITY: usize = 16;

/// One charted sample, produced once per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySample {
    /// Clock label, e.g. "14:00"
    pub time_label: String,
    /// Cooling load at that hour in kW
    pub load_kw: f64,
    /// Solar output at that hour in kW
    pub solar_kw: f64,
}

impl HistorySample {
    pub fn new(hour: u8, load_kw: f64, solar_kw: f64) -> Self {
        Self {
            time_label: format!("{hour:02}:00"),
            load_kw,
            solar_kw,
        }
    }
}

/// Fixed-capacity sliding window over recent samples.
#[derive(Debug, Clone, Default)]
pub struct HistoryBuffer {
    samples: VecDeque<HistorySample>,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Append one sample, evicting from the front past capacity.
    pub fn append(&mut self, sample: HistorySample) {
        self.samples.push_back(sample);
        while self.samples.len() > HISTORY_CAPACITY {
            self.samples.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// All retained samples, oldest first.
    pub fn samples(&self) -> Vec<HistorySample> {
        self.samples.iter().cloned().collect()
    }
}
