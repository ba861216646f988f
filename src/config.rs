use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub sim: SimConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            request_timeout_secs: 10,
            enable_cors: true,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

/// Simulation settings. `tick_period_ms` controls how fast simulated time
/// runs: one tick advances the building clock by one hour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    pub tick_period_ms: u64,
    pub start_hour: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: 2000,
            start_hour: 0,
        }
    }
}

impl SimConfig {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms.max(1))
    }
}

impl Config {
    /// Layered load: built-in defaults, then `config/default.toml` if
    /// present, then `BSIM__`-prefixed environment variables.
    pub fn load() -> Result<Self> {
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("BSIM__").split("__"));
        Ok(figment.extract()?)
    }
}
