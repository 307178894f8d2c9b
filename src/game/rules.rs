//! Terminal-state detection. Pure functions over a board: the board itself
//! carries no notion of winning.

use super::board::{Board, SIZE};
use super::player::Player;

/// Result of evaluating a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Win(Player),
    Draw,
}

/// The 8 winning lines in the order they are checked: rows top to bottom,
/// columns left to right, main diagonal, anti-diagonal.
const LINES: [[(usize, usize); SIZE]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// True iff `player` occupies all three cells of some line.
pub fn has_won(board: &Board, player: Player) -> bool {
    let mark = player.to_cell();
    let grid = board.grid();
    LINES
        .iter()
        .any(|line| line.iter().all(|&(row, col)| grid[row][col] == mark))
}

/// The winning player, if any. Boards where both players hold a line are
/// unreachable through the session; for such boards the answer is fixed by
/// check order (Human first), not left to chance.
pub fn winner(board: &Board) -> Option<Player> {
    [Player::Human, Player::Ai]
        .into_iter()
        .find(|&player| has_won(board, player))
}

/// Classify the position. Always computed fresh from the board.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(player) = winner(board) {
        Outcome::Win(player)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
