//! The cube: nine face-up slots dealt from one deck.
//!
//! Each slot shows one card. A wager draws the next card onto a live slot;
//! a wrong call (or a tie) kills the slot. The game is over once every slot
//! is dead, and stuck once the deck runs out.

use log::{debug, trace};

use super::extreme::{self, Extreme};
use super::wager::{Prediction, WagerOutcome};
use crate::cards::{Card, Deck};
use crate::core::{CubeConfig, CubeError, GameRng, Result, GRID_WIDTH, SLOT_COUNT};

/// Width of one rendered grid cell.
const CELL_WIDTH: usize = 23;

/// Single-player game state.
///
/// ```
/// use cube_game::{Cube, Prediction, WagerOutcome};
///
/// let mut cube = Cube::seeded(7).unwrap();
/// assert_eq!(cube.alive_count(), 9);
///
/// if let Some(target) = cube.most_extreme() {
///     let outcome = cube.wager(target.index, target.safer_prediction()).unwrap();
///     assert_ne!(outcome, WagerOutcome::SlotDead);
/// }
/// assert_eq!(cube.cards_consumed(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct Cube {
    deck: Deck,
    slots: Vec<Card>,
    depths: [usize; SLOT_COUNT],
    alive: [bool; SLOT_COUNT],
    alive_count: usize,
    highest: Option<Extreme>,
    lowest: Option<Extreme>,
}

impl Cube {
    /// Deal a new game from a freshly shuffled deck.
    pub fn new() -> Result<Self> {
        Self::with_config(&CubeConfig::default())
    }

    /// Deal a new game whose shuffle is fixed by `seed`.
    pub fn seeded(seed: u64) -> Result<Self> {
        Self::with_config(&CubeConfig::new().with_seed(seed))
    }

    /// Deal a new game from configuration.
    pub fn with_config(config: &CubeConfig) -> Result<Self> {
        Self::shuffled(&mut config.rng())
    }

    /// Deal a new game, shuffling with the given RNG.
    pub fn shuffled(rng: &mut GameRng) -> Result<Self> {
        let mut deck = Deck::standard();
        deck.shuffle(rng);
        trace!("shuffled deck with seed {}", rng.seed());
        Self::from_deck(deck)
    }

    /// Deal from `deck` as-is, without shuffling.
    ///
    /// Slot 0 gets the top card, slot 1 the next, and so on. Fails with
    /// `CubeError::EmptyDeck` if the deck holds fewer than nine cards.
    pub fn from_deck(mut deck: Deck) -> Result<Self> {
        if deck.size() < SLOT_COUNT {
            return Err(CubeError::EmptyDeck);
        }
        let slots = (0..SLOT_COUNT)
            .map(|_| deck.pop())
            .collect::<Result<Vec<_>>>()?;

        let mut cube = Self {
            deck,
            slots,
            depths: [1; SLOT_COUNT],
            alive: [true; SLOT_COUNT],
            alive_count: SLOT_COUNT,
            highest: None,
            lowest: None,
        };
        cube.set_highest_lowest();
        debug!("dealt {} slots, {} cards left in deck", SLOT_COUNT, cube.deck.size());
        Ok(cube)
    }

    /// Bet that the next card drawn onto slot `index` moves in `prediction`'s
    /// direction.
    ///
    /// - Out-of-range index: `CubeError::InvalidIndex`.
    /// - Dead slot: `WagerOutcome::SlotDead`; nothing is drawn.
    /// - Empty deck: `CubeError::EmptyDeck`; nothing changes.
    ///
    /// Otherwise the drawn card replaces the slot's card and the slot's depth
    /// grows by one whether the bet wins or not. Equal ranks lose.
    pub fn wager(&mut self, index: usize, prediction: Prediction) -> Result<WagerOutcome> {
        if index >= SLOT_COUNT {
            return Err(CubeError::InvalidIndex {
                index,
                slots: SLOT_COUNT,
            });
        }
        if !self.alive[index] {
            trace!("slot {} is dead, ignoring wager", index);
            return Ok(WagerOutcome::SlotDead);
        }

        let new_card = self.deck.pop()?;
        let old_card = std::mem::replace(&mut self.slots[index], new_card);
        self.depths[index] += 1;

        let outcome = if prediction.holds(old_card, new_card) {
            WagerOutcome::Won
        } else {
            self.alive[index] = false;
            self.alive_count -= 1;
            WagerOutcome::Lost
        };
        self.set_highest_lowest();

        debug!(
            "slot {}: {} -> {} ({}) {:?}, {} alive",
            index, old_card, new_card, prediction, outcome, self.alive_count
        );
        Ok(outcome)
    }

    /// Convenience for callers holding a "predict higher" flag.
    pub fn bet(&mut self, index: usize, higher: bool) -> Result<WagerOutcome> {
        self.wager(index, Prediction::from_higher(higher))
    }

    fn set_highest_lowest(&mut self) {
        let (highest, lowest) = extreme::scan(&self.slots, &self.alive);
        self.highest = highest;
        self.lowest = lowest;
    }

    // === Queries ===

    /// Highest live card and its slot.
    #[must_use]
    pub fn highest(&self) -> Option<Extreme> {
        self.highest
    }

    /// Lowest live card and its slot.
    #[must_use]
    pub fn lowest(&self) -> Option<Extreme> {
        self.lowest
    }

    /// The live extreme farthest from the rank midpoint (lowest on ties).
    ///
    /// `None` once every slot is dead.
    #[must_use]
    pub fn most_extreme(&self) -> Option<Extreme> {
        extreme::most_extreme(self.highest, self.lowest)
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.size()
    }

    /// Total cards dealt onto slots so far, including the initial deal.
    #[must_use]
    pub fn cards_consumed(&self) -> usize {
        self.depths.iter().sum()
    }

    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.alive_count
    }

    #[must_use]
    pub fn dead_count(&self) -> usize {
        SLOT_COUNT - self.alive_count
    }

    /// Is slot `index` alive? Out-of-range indices are never alive.
    #[must_use]
    pub fn is_alive(&self, index: usize) -> bool {
        self.alive.get(index).copied().unwrap_or(false)
    }

    /// Card showing on slot `index`.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<Card> {
        self.slots.get(index).copied()
    }

    /// Cards consumed by slot `index`.
    #[must_use]
    pub fn depth(&self, index: usize) -> Option<usize> {
        self.depths.get(index).copied()
    }

    #[must_use]
    pub fn slots(&self) -> &[Card] {
        &self.slots
    }

    #[must_use]
    pub fn depths(&self) -> &[usize] {
        &self.depths
    }

    /// Indices of slots still in play, ascending.
    pub fn live_slots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..SLOT_COUNT).filter(move |&i| self.alive[i])
    }

    /// Every slot is dead.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.alive_count == 0
    }

    /// The deck has no cards left to wager with.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.deck.is_empty()
    }
}

impl std::fmt::Display for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} cards in deck", self.deck_size())?;
        writeln!(f, "{} cards in cube", self.cards_consumed())?;
        writeln!(f, "{} alive, {} dead:", self.alive_count(), self.dead_count())?;
        writeln!(f)?;

        for (row_index, cards) in self.slots.chunks(GRID_WIDTH).enumerate() {
            for (col, card) in cards.iter().enumerate() {
                let marker = if self.alive[row_index * GRID_WIDTH + col] { "A" } else { "D" };
                let cell = format!("{} ({})", card, marker);
                write!(f, "{:<width$}", cell, width = CELL_WIDTH)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
