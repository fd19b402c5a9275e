//! The nine-slot game state machine.
//!
//! - `Cube`: owns the deck and the slots; `wager` drives it
//! - `Prediction` / `WagerOutcome`: what the player bets and what happened
//! - `Extreme`: a live slot/card pair, as returned by the extremity queries

pub mod extreme;
pub mod game;
pub mod wager;

pub use extreme::Extreme;
pub use game::Cube;
pub use wager::{Prediction, WagerOutcome};
