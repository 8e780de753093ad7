//! Core types: players, deterministic RNG, configuration.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{EngineConfig, TimingConfig};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
