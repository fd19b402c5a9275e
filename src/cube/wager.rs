//! Wager inputs and outcomes.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Direction the player bets the next card will move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prediction {
    Higher,
    Lower,
}

impl Prediction {
    /// `true` means "higher", `false` means "lower".
    #[must_use]
    pub const fn from_higher(higher: bool) -> Self {
        if higher {
            Prediction::Higher
        } else {
            Prediction::Lower
        }
    }

    /// Did `new` beat `old` in this direction?
    ///
    /// Equal ranks never win, whichever way the bet went.
    #[must_use]
    pub fn holds(self, old: Card, new: Card) -> bool {
        match self {
            Prediction::Higher => new > old,
            Prediction::Lower => new < old,
        }
    }
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Prediction::Higher => f.write_str("higher"),
            Prediction::Lower => f.write_str("lower"),
        }
    }
}

/// Result of a wager that did not error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WagerOutcome {
    /// The prediction held; the slot stays alive.
    Won,
    /// The prediction failed; the slot is now dead.
    Lost,
    /// The slot was already dead. Nothing was drawn or changed.
    SlotDead,
}

impl WagerOutcome {
    #[must_use]
    pub const fn is_won(self) -> bool {
        matches!(self, WagerOutcome::Won)
    }

    #[must_use]
    pub const fn is_lost(self) -> bool {
        matches!(self, WagerOutcome::Lost)
    }

    /// Did the wager consume a card?
    #[must_use]
    pub const fn resolved(self) -> bool {
        !matches!(self, WagerOutcome::SlotDead)
    }
}
