//! # cube-game
//!
//! Game-state engine for Cube, a single-player higher/lower elimination game.
//!
//! ## Rules
//!
//! 1. Nine cards are dealt face-up from a shuffled 52-card deck, one per slot.
//!
//! 2. Pick a live slot and bet whether the next card will be **higher** or
//!    **lower** than the one showing. The drawn card lands on that slot.
//!
//! 3. A wrong call kills the slot. A tie is always wrong.
//!
//! The game ends when every slot is dead or the deck runs out.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Cards (compared by rank only) and decks
//! - `cube`: The nine-slot state machine and extremity queries
//! - `strategy`: Automated play and simulation statistics

pub mod core;
pub mod cards;
pub mod cube;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{CubeConfig, CubeError, GameRng, Result, SLOT_COUNT};

pub use crate::cards::{Card, Deck, Suit, MAX_RANK, MIN_RANK, RANK_MIDPOINT};

pub use crate::cube::{Cube, Extreme, Prediction, WagerOutcome};

pub use crate::strategy::{
    play_out, simulate, ExtremeStrategy, GameSummary, RandomStrategy, SimulationStats, Strategy,
    Wager,
};
