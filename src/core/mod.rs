//! Core generator support: seedable RNG and configuration.

pub mod config;
pub mod rng;

pub use config::{ConfigError, GeneratorConfig, DEFAULT_MAX_CARDS};
pub use rng::CardRng;
