//! Automated play: strategies, a game runner, and simulation statistics.
//!
//! The extremity heuristic can advise a human or drive play outright; this
//! module is the driving side.

pub mod policy;
pub mod runner;
pub mod stats;

pub use policy::{ExtremeStrategy, RandomStrategy, Strategy, Wager};
pub use runner::{play_out, simulate, GameSummary};
pub use stats::SimulationStats;
