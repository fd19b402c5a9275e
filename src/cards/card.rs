//! Playing cards compared by rank alone.
//!
//! ## Comparison Contract
//!
//! `Card` implements `Eq`, `Ord` and `Hash` on **rank only**. Suit never
//! affects a higher/lower bet, so the Five of Hearts equals the Five of Clubs
//! and both are below any Six. Use `Card::suit` when the suit matters.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Lowest rank in the deck (Two).
pub const MIN_RANK: u8 = 2;

/// Highest rank in the deck (Ace).
pub const MAX_RANK: u8 = 14;

/// Numeric midpoint of the rank range, used to measure extremity.
pub const RANK_MIDPOINT: u8 = 8;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        };
        f.write_str(name)
    }
}

/// An immutable playing card.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Card {
    /// Create a card.
    ///
    /// Panics if `rank` is outside `MIN_RANK..=MAX_RANK`.
    #[must_use]
    pub fn new(rank: u8, suit: Suit) -> Self {
        assert!(
            (MIN_RANK..=MAX_RANK).contains(&rank),
            "Rank must be {}-{}, got {}",
            MIN_RANK,
            MAX_RANK,
            rank
        );
        Self { rank, suit }
    }

    /// Rank from 2 (Two) to 14 (Ace).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Distance of this card's rank from `RANK_MIDPOINT`.
    #[must_use]
    pub const fn distance_from_midpoint(self) -> u8 {
        self.rank.abs_diff(RANK_MIDPOINT)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Card {}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl Hash for Card {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.rank.hash(hasher);
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.rank {
            11 => write!(f, "Jack of {}", self.suit),
            12 => write!(f, "Queen of {}", self.suit),
            13 => write!(f, "King of {}", self.suit),
            14 => write!(f, "Ace of {}", self.suit),
            n => write!(f, "{} of {}", n, self.suit),
        }
    }
}
