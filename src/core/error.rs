//! Error taxonomy for deck and game operations.
//!
//! Every failure leaves the deck and the cube exactly as they were before
//! the call. A wager on an eliminated slot is not an error; it resolves to
//! `WagerOutcome::SlotDead`.

use thiserror::Error;

/// Errors raised by deck draws and cube wagers.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CubeError {
    /// Attempted to draw from a deck with no cards left.
    #[error("cannot draw from an empty deck")]
    EmptyDeck,

    /// Slot index outside the cube.
    #[error("slot index {index} is out of range (expected 0..{slots})")]
    InvalidIndex { index: usize, slots: usize },
}

/// Result alias for fallible cube operations.
pub type Result<T> = std::result::Result<T, CubeError>;
