//! Extremity: which live slot sits farthest from the middle of the rank range.
//!
//! A card far from the midpoint is the safest bet to move back toward it:
//! an Ace can only be followed by something lower, a Two by something higher.

use serde::{Deserialize, Serialize};

use super::wager::Prediction;
use crate::cards::{Card, RANK_MIDPOINT};

/// A live slot and the card showing on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extreme {
    /// Slot index (0-based).
    pub index: usize,
    /// Card currently on top of the slot.
    pub card: Card,
}

impl Extreme {
    #[must_use]
    pub const fn new(index: usize, card: Card) -> Self {
        Self { index, card }
    }

    /// Distance of the card's rank from the midpoint.
    #[must_use]
    pub const fn distance(&self) -> u8 {
        self.card.distance_from_midpoint()
    }

    /// The bet against this card: lower for cards above the midpoint,
    /// higher otherwise.
    #[must_use]
    pub fn safer_prediction(&self) -> Prediction {
        if self.card.rank() > RANK_MIDPOINT {
            Prediction::Lower
        } else {
            Prediction::Higher
        }
    }
}

/// Scan slots for the highest and lowest live card.
///
/// Dead slots are skipped. Ties keep the lower index. Returns `None`
/// for both when nothing is alive.
pub(crate) fn scan(slots: &[Card], alive: &[bool]) -> (Option<Extreme>, Option<Extreme>) {
    let mut highest: Option<Extreme> = None;
    let mut lowest: Option<Extreme> = None;

    for (index, (&card, &live)) in slots.iter().zip(alive).enumerate() {
        if !live {
            continue;
        }
        if highest.map_or(true, |h| card > h.card) {
            highest = Some(Extreme::new(index, card));
        }
        if lowest.map_or(true, |l| card < l.card) {
            lowest = Some(Extreme::new(index, card));
        }
    }

    (highest, lowest)
}

/// Pick whichever extreme lies strictly farther from the midpoint.
/// The lowest card wins distance ties.
pub(crate) fn most_extreme(highest: Option<Extreme>, lowest: Option<Extreme>) -> Option<Extreme> {
    match (highest, lowest) {
        (Some(h), Some(l)) if h.distance() > l.distance() => Some(h),
        (_, Some(l)) => Some(l),
        (h, None) => h,
    }
}
