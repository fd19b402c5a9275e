//! Aggregate statistics over many simulated games.

use serde::{Deserialize, Serialize};

use super::runner::GameSummary;

/// Totals collected across simulated games.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Games played.
    pub games: usize,

    /// Wagers that drew a card.
    pub wagers: usize,

    /// Wagers won.
    pub wins: usize,

    /// Games that ended with every slot dead.
    pub clears: usize,

    /// Games that ended with the deck empty and slots still alive.
    pub exhausted: usize,

    /// Live slots summed over all games' final states.
    pub survivors: usize,

    /// Most slots left alive in any one game.
    pub best_survivors: usize,
}

impl SimulationStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one game's summary into the totals.
    pub fn record(&mut self, game: &GameSummary) {
        self.games += 1;
        self.wagers += game.wagers;
        self.wins += game.wins;
        self.survivors += game.survivors;
        self.best_survivors = self.best_survivors.max(game.survivors);
        if game.cleared() {
            self.clears += 1;
        } else if game.deck_remaining == 0 {
            self.exhausted += 1;
        }
    }

    /// Fraction of wagers won.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.wagers == 0 {
            0.0
        } else {
            self.wins as f64 / self.wagers as f64
        }
    }

    /// Average live slots at the end of a game.
    #[must_use]
    pub fn mean_survivors(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.survivors as f64 / self.games as f64
        }
    }

    /// Average wagers per game.
    #[must_use]
    pub fn mean_wagers(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wagers as f64 / self.games as f64
        }
    }
}

impl std::fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games, {:.1} wagers/game, {:.1}% won, {} cleared, {} exhausted, {:.2} survivors/game (best {})",
            self.games,
            self.mean_wagers(),
            self.win_rate() * 100.0,
            self.clears,
            self.exhausted,
            self.mean_survivors(),
            self.best_survivors,
        )
    }
}
