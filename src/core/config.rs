//! Generator configuration.
//!
//! Limits and defaults for card generation. Configs are built in code with
//! the `with_*` builders or loaded from a TOML file:
//!
//! ```toml
//! max_cards = 250
//! seed = 7
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::CardRng;

/// Default hard cap on cards per call.
pub const DEFAULT_MAX_CARDS: usize = 100;

/// Errors raised while loading a [`GeneratorConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("max_cards must be at least 1")]
    ZeroMaxCards,
}

/// Card generation parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Maximum cards a single `generate` call may produce.
    /// Larger requests fail validation instead of allocating unbounded output.
    pub max_cards: usize,

    /// Fixed seed for reproducible output. `None` seeds from the OS.
    ///
    /// Read only by [`GeneratorConfig::rng`]. `CardGenerator::generate`
    /// always draws from the RNG it is handed.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_cards: DEFAULT_MAX_CARDS,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Set the maximum cards per call. Values below 1 are raised to 1.
    #[must_use]
    pub fn with_max_cards(mut self, max: usize) -> Self {
        self.max_cards = max.max(1);
        self
    }

    /// Fix the generation seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the RNG for this config: seeded when `seed` is set, from OS
    /// entropy otherwise.
    #[must_use]
    pub fn rng(&self) -> CardRng {
        self.seed.map_or_else(CardRng::from_entropy, CardRng::new)
    }

    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_cards == 0 {
            return Err(ConfigError::ZeroMaxCards);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.max_cards, 100);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder() {
        let config = GeneratorConfig::default().with_max_cards(10).with_seed(5);
        assert_eq!(config.max_cards, 10);
        assert_eq!(config.seed, Some(5));
    }

    #[test]
    fn test_builder_clamps_zero_max() {
        let config = GeneratorConfig::default().with_max_cards(0);
        assert_eq!(config.max_cards, 1);
    }

    #[test]
    fn test_rng_follows_seed() {
        let config = GeneratorConfig::default().with_seed(5);
        assert_eq!(config.rng().seed(), 5);
        assert_eq!(config.rng().fork().seed(), CardRng::new(5).fork().seed());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = GeneratorConfig::from_toml_str("seed = 99").unwrap();
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.max_cards, DEFAULT_MAX_CARDS);
    }

    #[test]
    fn test_from_toml_empty() {
        let config = GeneratorConfig::from_toml_str("").unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_from_toml_rejects_zero_max() {
        let err = GeneratorConfig::from_toml_str("max_cards = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroMaxCards));
    }

    #[test]
    fn test_from_toml_rejects_bad_type() {
        let err = GeneratorConfig::from_toml_str("max_cards = \"lots\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = GeneratorConfig::load("/nonexistent/bingo.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
