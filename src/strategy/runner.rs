//! Playing a cube to the end with a strategy.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::policy::Strategy;
use super::stats::SimulationStats;
use crate::core::{CubeConfig, GameRng, Result};
use crate::cube::{Cube, WagerOutcome};

/// How a single game ended.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Wagers that drew a card.
    pub wagers: usize,
    /// Wagers that kept their slot alive.
    pub wins: usize,
    /// Wagers that killed their slot.
    pub losses: usize,
    /// Slots still alive at the end.
    pub survivors: usize,
    /// Cards left in the deck at the end.
    pub deck_remaining: usize,
}

impl GameSummary {
    /// Every slot died.
    #[must_use]
    pub fn cleared(&self) -> bool {
        self.survivors == 0
    }
}

/// Wager with `strategy` until every slot is dead or the deck runs out.
///
/// Stops early if the strategy has nothing to offer or picks a dead slot.
pub fn play_out<S: Strategy + ?Sized>(
    cube: &mut Cube,
    strategy: &S,
    rng: &mut GameRng,
) -> Result<GameSummary> {
    let mut summary = GameSummary::default();

    while !cube.is_over() && !cube.is_exhausted() {
        let Some(wager) = strategy.choose(cube, rng) else {
            break;
        };

        match cube.wager(wager.index, wager.prediction)? {
            WagerOutcome::Won => summary.wins += 1,
            WagerOutcome::Lost => summary.losses += 1,
            WagerOutcome::SlotDead => {
                warn!("{} strategy chose dead slot {}", strategy.name(), wager.index);
                break;
            }
        }
        summary.wagers += 1;
    }

    summary.survivors = cube.alive_count();
    summary.deck_remaining = cube.deck_size();
    debug!(
        "game finished after {} wagers: {} survivors, {} cards left",
        summary.wagers, summary.survivors, summary.deck_remaining
    );
    Ok(summary)
}

/// Play `games` games and aggregate the results.
///
/// Each game shuffles with its own fork of the configured RNG, so a fixed
/// seed reproduces the whole run.
pub fn simulate<S: Strategy + ?Sized>(
    config: &CubeConfig,
    strategy: &S,
    games: usize,
) -> Result<SimulationStats> {
    let mut master = config.rng();
    let mut stats = SimulationStats::new();

    for _ in 0..games {
        let mut game_rng = master.fork();
        let mut cube = Cube::shuffled(&mut game_rng)?;
        let summary = play_out(&mut cube, strategy, &mut game_rng)?;
        stats.record(&summary);
    }

    Ok(stats)
}
