//! Core engine types: RNG, configuration, errors.
//!
//! Nothing in here knows about cards; the card and cube modules build on it.

pub mod rng;
pub mod config;
pub mod error;

pub use rng::GameRng;
pub use config::{CubeConfig, GRID_WIDTH, SLOT_COUNT};
pub use error::{CubeError, Result};
