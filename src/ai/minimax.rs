use crate::error::PolicyError;
use crate::game::{rules, Board, Player, TrialMove};

use super::policy::Policy;

/// Base score for a decided game; depth is subtracted so the search prefers
/// faster wins and slower losses.
const WIN_SCORE: i32 = 10;

/// Hard difficulty: exhaustive minimax over the full game tree. The 3x3
/// tree is small enough that no pruning is needed, and depth is bounded by
/// the 9 cells, so the search always terminates.
pub struct MinimaxPolicy;

impl MinimaxPolicy {
    fn best_move(&self, board: &mut Board, ai: Player) -> (usize, usize) {
        let legal = board.legal_moves();
        let mut best_move = legal[0];
        let mut best_score = i32::MIN;

        for (row, col) in legal {
            let mut trial = TrialMove::place(board, row, col, ai.to_cell())
                .expect("legal_moves yields empty cells");
            let score = minimax(trial.board(), ai, 0, false);
            drop(trial);
            // strict comparison keeps the first best cell in row-major order
            if score > best_score {
                best_score = score;
                best_move = (row, col);
            }
        }

        best_move
    }
}

/// Score the position for `ai` after a trial placement. `maximizing` is true
/// when it is `ai`'s turn to place; `depth` counts plies below the root
/// candidate.
fn minimax(board: &mut Board, ai: Player, depth: i32, maximizing: bool) -> i32 {
    if rules::has_won(board, ai) {
        return WIN_SCORE - depth;
    }
    if rules::has_won(board, ai.other()) {
        return depth - WIN_SCORE;
    }
    if board.is_full() {
        return 0;
    }

    if maximizing {
        let mut best = i32::MIN;
        for (row, col) in board.legal_moves() {
            let mut trial = TrialMove::place(board, row, col, ai.to_cell())
                .expect("legal_moves yields empty cells");
            best = best.max(minimax(trial.board(), ai, depth + 1, false));
        }
        best
    } else {
        let mut worst = i32::MAX;
        for (row, col) in board.legal_moves() {
            let mut trial = TrialMove::place(board, row, col, ai.other().to_cell())
                .expect("legal_moves yields empty cells");
            worst = worst.min(minimax(trial.board(), ai, depth + 1, true));
        }
        worst
    }
}

impl Policy for MinimaxPolicy {
    fn select_move(
        &mut self,
        board: &mut Board,
        ai: Player,
    ) -> Result<(usize, usize), PolicyError> {
        if board.is_full() {
            debug_assert!(false, "policy invoked on a full board");
            return Err(PolicyError::NoLegalMove);
        }
        Ok(self.best_move(board, ai))
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    fn board_with(marks: &[(usize, usize, Cell)]) -> Board {
        let mut board = Board::new();
        for &(row, col, cell) in marks {
            board.set(row, col, cell).unwrap();
        }
        board
    }

    #[test]
    fn takes_immediate_win_at_1_2() {
        let mut board = board_with(&[
            (1, 0, Cell::Ai),
            (1, 1, Cell::Ai),
            (0, 0, Cell::Human),
            (2, 2, Cell::Human),
        ]);
        let mut policy = MinimaxPolicy;
        assert_eq!(
            policy.select_move(&mut board, Player::Ai).unwrap(),
            (1, 2)
        );
    }

    #[test]
    fn blocks_opponent_win() {
        let mut board = board_with(&[
            (0, 0, Cell::Human),
            (1, 0, Cell::Human),
            (1, 1, Cell::Ai),
        ]);
        let mut policy = MinimaxPolicy;
        assert_eq!(
            policy.select_move(&mut board, Player::Ai).unwrap(),
            (2, 0)
        );
    }

    #[test]
    fn prefers_faster_win() {
        // O can win immediately at (0,2) or (2,0); (0,2) is scanned first
        let mut board = board_with(&[
            (0, 0, Cell::Ai),
            (0, 1, Cell::Ai),
            (1, 0, Cell::Ai),
            (1, 1, Cell::Human),
            (1, 2, Cell::Human),
            (2, 2, Cell::Human),
        ]);
        let mut policy = MinimaxPolicy;
        assert_eq!(
            policy.select_move(&mut board, Player::Ai).unwrap(),
            (0, 2)
        );
    }

    #[test]
    fn answers_corner_opening_with_center() {
        // every reply except the center loses to perfect play
        let mut board = board_with(&[(0, 0, Cell::Human)]);
        let mut policy = MinimaxPolicy;
        assert_eq!(
            policy.select_move(&mut board, Player::Ai).unwrap(),
            (1, 1)
        );
    }

    #[test]
    fn leaves_board_unchanged_after_search() {
        let mut board = board_with(&[(0, 0, Cell::Human)]);
        let before = board;
        let mut policy = MinimaxPolicy;
        policy.select_move(&mut board, Player::Ai).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn scores_bias_toward_shallow_wins() {
        // immediate win scores 10, a win after two more plies at most 8
        let mut board = board_with(&[
            (1, 0, Cell::Ai),
            (1, 1, Cell::Ai),
            (0, 0, Cell::Human),
            (2, 2, Cell::Human),
        ]);
        let mut trial = TrialMove::place(&mut board, 1, 2, Cell::Ai).unwrap();
        assert_eq!(minimax(trial.board(), Player::Ai, 0, false), WIN_SCORE);
    }

    #[test]
    fn lost_position_scores_negative() {
        // human threatens both (0,2) and (2,0); O cannot cover both
        let mut board = board_with(&[
            (0, 0, Cell::Human),
            (0, 1, Cell::Human),
            (1, 0, Cell::Human),
            (1, 1, Cell::Ai),
            (2, 2, Cell::Ai),
        ]);
        // O to move; every option leads to a human win under best play
        let legal = board.legal_moves();
        let mut best = i32::MIN;
        for (row, col) in legal {
            let mut trial = TrialMove::place(&mut board, row, col, Cell::Ai).unwrap();
            best = best.max(minimax(trial.board(), Player::Ai, 0, false));
        }
        assert!(best < 0, "double threat should be lost for O, got {best}");
    }
}
