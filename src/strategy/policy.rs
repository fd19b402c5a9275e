//! Play policies.
//!
//! A `Strategy` looks at the cube and picks the next wager. Policies are
//! trait-based so callers can plug in their own:
//! - `ExtremeStrategy`: bet against the card farthest from the midpoint
//! - `RandomStrategy`: any live slot, any direction

use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::cube::{Cube, Prediction};

/// A chosen move: which slot, which direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wager {
    pub index: usize,
    pub prediction: Prediction,
}

impl Wager {
    #[must_use]
    pub const fn new(index: usize, prediction: Prediction) -> Self {
        Self { index, prediction }
    }
}

/// Policy for choosing the next wager.
pub trait Strategy: Send + Sync {
    /// Pick a wager on a live slot.
    ///
    /// Returns `None` when no slot is alive.
    fn choose(&self, cube: &Cube, rng: &mut GameRng) -> Option<Wager>;

    /// Short name for logs and reports.
    fn name(&self) -> &'static str;
}

/// Always bets against the most extreme live card.
///
/// High cards are bet lower, low cards higher. Deterministic; ignores the RNG.
#[derive(Clone, Debug, Default)]
pub struct ExtremeStrategy;

impl Strategy for ExtremeStrategy {
    fn choose(&self, cube: &Cube, _rng: &mut GameRng) -> Option<Wager> {
        cube.most_extreme()
            .map(|target| Wager::new(target.index, target.safer_prediction()))
    }

    fn name(&self) -> &'static str {
        "extreme"
    }
}

/// Uniformly random live slot and direction.
///
/// Baseline for judging other policies.
#[derive(Clone, Debug, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn choose(&self, cube: &Cube, rng: &mut GameRng) -> Option<Wager> {
        let live: Vec<usize> = cube.live_slots().collect();
        let index = *rng.choose(&live)?;
        Some(Wager::new(index, Prediction::from_higher(rng.gen_bool(0.5))))
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
