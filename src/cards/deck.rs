//! The draw pile.
//!
//! A `Deck` only ever shrinks: cards leave from the top (the end of the
//! backing `Vec`) and nothing is put back.

use log::trace;

use super::card::{Card, Suit, MAX_RANK, MIN_RANK};
use crate::core::{CubeError, GameRng, Result};

/// Cards in a standard deck.
pub const STANDARD_DECK_SIZE: usize = 52;

/// An ordered pile of cards. The last card is the top.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl Deck {
    /// Create an unshuffled standard deck.
    #[must_use]
    pub fn new() -> Self {
        Self::standard()
    }

    /// All 52 cards, suit-major (Clubs, Diamonds, Hearts, Spades) and
    /// rank-minor (Two through Ace).
    #[must_use]
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| (MIN_RANK..=MAX_RANK).map(move |rank| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }

    /// Build a deck variant from explicit cards. The last card is drawn first.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Shuffle the remaining cards in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the top card.
    ///
    /// Fails with `CubeError::EmptyDeck` when no cards remain; the deck is
    /// left untouched.
    pub fn pop(&mut self) -> Result<Card> {
        let card = self.cards.pop().ok_or(CubeError::EmptyDeck)?;
        trace!("drew {} ({} left)", card, self.cards.len());
        Ok(card)
    }

    /// The card `pop` would return next, if any.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} Cards:", self.size())?;
        for card in &self.cards {
            writeln!(f, "{}", card)?;
        }
        Ok(())
    }
}
