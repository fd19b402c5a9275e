//! Game configuration and fixed game constants.
//!
//! The board shape and rank range are rules of the game, not settings;
//! only the source of randomness is configurable.

use serde::{Deserialize, Serialize};

use super::GameRng;

/// Number of slots dealt face-up at the start of a game.
pub const SLOT_COUNT: usize = 9;

/// Slots per rendered row (the cube is drawn as a 3x3 grid).
pub const GRID_WIDTH: usize = 3;

/// Cube configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeConfig {
    /// Seed for the deck shuffle.
    /// `None` draws a fresh seed from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl CubeConfig {
    /// Create a configuration that shuffles from entropy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the RNG this configuration describes.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CubeConfig::default();
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = CubeConfig::new().with_seed(123);
        assert_eq!(config.seed, Some(123));
        assert_eq!(config.rng().seed(), 123);
    }

    #[test]
    fn test_serialization() {
        let config = CubeConfig::new().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: CubeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);

        let empty: CubeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.seed, None);
    }
}
