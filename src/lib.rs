//! Smart Building Simulation Service
//!
//! A single-building energy/water micro-simulation: a tick driver advances a
//! simulated hour of day, and a set of pure models derives cooling load,
//! solar generation, ice-thermal-storage level, condensate recovery and a
//! status narrative for that hour. A bounded rolling history of recent
//! samples is kept for charting, and everything is exposed read-only over a
//! small HTTP API.

pub mod api;
pub mod config;
pub mod controller;
pub mod simulation;
pub mod telemetry;
