use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::PolicyError;
use crate::game::{Board, Player};

use super::policy::Policy;

/// Easy difficulty: a uniform choice among the empty cells.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new() -> Self {
        RandomPolicy {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for reproducible games and tests.
    pub fn seeded(seed: u64) -> Self {
        RandomPolicy {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub(crate) fn from_rng(rng: StdRng) -> Self {
        RandomPolicy { rng }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick uniformly among the empty cells by enumerating them and indexing,
/// which terminates in bounded time where rejection sampling only
/// terminates with probability 1. Shared with the tactical fallback.
pub(crate) fn choose_uniform(
    rng: &mut StdRng,
    board: &Board,
) -> Result<(usize, usize), PolicyError> {
    let legal = board.legal_moves();
    if legal.is_empty() {
        debug_assert!(false, "policy invoked on a full board");
        return Err(PolicyError::NoLegalMove);
    }
    let idx = rng.random_range(0..legal.len());
    Ok(legal[idx])
}

impl Policy for RandomPolicy {
    fn select_move(
        &mut self,
        board: &mut Board,
        _ai: Player,
    ) -> Result<(usize, usize), PolicyError> {
        choose_uniform(&mut self.rng, board)
    }

    fn name(&self) -> &str {
        "Random"
    }
}
