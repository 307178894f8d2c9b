use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::PolicyError;
use crate::game::{rules, Board, Player, TrialMove};

use super::policy::Policy;
use super::random;

/// Medium difficulty: one-ply lookahead. Take an immediate win if one
/// exists, otherwise block the opponent's immediate win, otherwise play
/// like [`super::RandomPolicy`].
pub struct TacticalPolicy {
    rng: StdRng,
}

impl TacticalPolicy {
    pub fn new() -> Self {
        TacticalPolicy {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for reproducible games and tests.
    pub fn seeded(seed: u64) -> Self {
        TacticalPolicy {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub(crate) fn from_rng(rng: StdRng) -> Self {
        TacticalPolicy { rng }
    }
}

impl Default for TacticalPolicy {
    fn default() -> Self {
        Self::new()
    }
}

/// First cell in row-major order where placing `player`'s mark completes a
/// line, if any. The trial mark is removed before returning.
fn winning_cell(board: &mut Board, player: Player) -> Option<(usize, usize)> {
    for (row, col) in board.legal_moves() {
        let mut trial = TrialMove::place(board, row, col, player.to_cell())
            .expect("legal_moves yields empty cells");
        if rules::has_won(trial.board(), player) {
            return Some((row, col));
        }
    }
    None
}

impl Policy for TacticalPolicy {
    fn select_move(
        &mut self,
        board: &mut Board,
        ai: Player,
    ) -> Result<(usize, usize), PolicyError> {
        if board.is_full() {
            debug_assert!(false, "policy invoked on a full board");
            return Err(PolicyError::NoLegalMove);
        }
        if let Some(cell) = winning_cell(board, ai) {
            return Ok(cell);
        }
        if let Some(cell) = winning_cell(board, ai.other()) {
            return Ok(cell);
        }
        random::choose_uniform(&mut self.rng, board)
    }

    fn name(&self) -> &str {
        "Tactical"
    }
}
