use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::PolicyError;
use crate::game::{Board, Player};

use super::{MinimaxPolicy, RandomPolicy, TacticalPolicy};

/// A move-selection strategy playing on behalf of `ai`.
///
/// Policies may speculate on the board during lookahead, but every trial
/// placement is undone before the call returns; the only lasting mutation of
/// a board comes from the session applying the chosen move.
pub trait Policy {
    /// Choose an empty cell for `ai` to play. Fails only when the board has
    /// no empty cell, a state the session never presents.
    fn select_move(
        &mut self,
        board: &mut Board,
        ai: Player,
    ) -> Result<(usize, usize), PolicyError>;

    /// Return the policy's display name.
    fn name(&self) -> &str;
}

/// AI strength setting. The set is closed: dispatch is an exhaustive match,
/// so adding or removing a level is a compile-time-checked change.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Build the policy implementing this level. A seed makes the random
    /// components reproducible; `None` draws OS entropy.
    pub fn policy(self, seed: Option<u64>) -> Box<dyn Policy> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        match self {
            Difficulty::Easy => Box::new(RandomPolicy::from_rng(rng)),
            Difficulty::Medium => Box::new(TacticalPolicy::from_rng(rng)),
            Difficulty::Hard => Box::new(MinimaxPolicy),
        }
    }
}
