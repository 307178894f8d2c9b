use crate::error::MoveError;

pub const SIZE: usize = 3;

/// A single cell: empty, or claimed by one of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Human,
    Ai,
}

/// The 3x3 playing grid, row-major. The board validates coordinates and
/// occupancy but knows nothing about winning; see [`super::rules`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Get the mark at a cell.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        if row >= SIZE || col >= SIZE {
            return Err(MoveError::OutOfRange { row, col });
        }
        Ok(self.cells[row][col])
    }

    /// Place a mark on an empty cell. Rejected moves leave the board
    /// untouched.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), MoveError> {
        if row >= SIZE || col >= SIZE {
            return Err(MoveError::OutOfRange { row, col });
        }
        if self.cells[row][col] != Cell::Empty {
            return Err(MoveError::Occupied { row, col });
        }
        self.cells[row][col] = cell;
        Ok(())
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&c| c != Cell::Empty))
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..SIZE).flat_map(move |row| (0..SIZE).map(move |col| (row, col, self.cells[row][col])))
    }

    /// Empty cells in row-major order. Policies scan and index into this
    /// rather than sampling blindly.
    pub fn legal_moves(&self) -> Vec<(usize, usize)> {
        self.cells()
            .filter(|&(_, _, c)| c == Cell::Empty)
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    /// Copy of the grid for the presentation layer.
    pub fn grid(&self) -> [[Cell; SIZE]; SIZE] {
        self.cells
    }

    /// Clear every cell. Used by session reset.
    pub fn clear_all(&mut self) {
        self.cells = [[Cell::Empty; SIZE]; SIZE];
    }

    fn clear(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Cell::Empty;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[[Cell; SIZE]; SIZE]> for Board {
    fn from(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Board { cells }
    }
}

/// A speculative placement that is undone when the guard drops, so search
/// code cannot leave a trial mark behind on any return path.
pub struct TrialMove<'a> {
    board: &'a mut Board,
    row: usize,
    col: usize,
}

impl<'a> TrialMove<'a> {
    /// Place `cell` at `(row, col)`, failing like [`Board::set`].
    pub fn place(
        board: &'a mut Board,
        row: usize,
        col: usize,
        cell: Cell,
    ) -> Result<Self, MoveError> {
        board.set(row, col, cell)?;
        Ok(TrialMove { board, row, col })
    }

    /// The board with the trial mark applied.
    pub fn board(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.clear(self.row, self.col);
    }
}
