//! The 20x20 board and its fixed starting position.
//!
//! The outermost row and column on each side form a permanently empty
//! border: stones pushed onto it by a committed move fall off the board.
//! `clear_border` re-asserts that invariant after every commit.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, Color};
use super::coord::Coord;

/// Board side length.
pub const BOARD_SIZE: usize = 20;

/// Black's starting stones as (row, columns) groups.
///
/// White's stones are the mirror image: same rows, column `19 - c`. Each
/// side starts with exactly one ring (Black centered at row 11, column 2).
const BLACK_SETUP: &[(usize, &[usize])] = &[
    (1, &[2]),
    (2, &[1, 2, 3, 6]),
    (3, &[2]),
    (4, &[1, 3]),
    (5, &[2, 6]),
    (6, &[1, 3]),
    (7, &[1, 2, 3]),
    (8, &[1, 2, 3, 6]),
    (9, &[1, 2, 3]),
    (10, &[1, 2, 3]),
    (11, &[1, 3, 6]),
    (12, &[1, 2, 3]),
    (13, &[1, 3]),
    (14, &[2, 6]),
    (15, &[1, 3]),
    (16, &[2]),
    (17, &[1, 2, 3, 6]),
    (18, &[2]),
];

/// The full 20x20 grid of cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a board with no stones.
    pub fn empty() -> Board {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates a board in the standard Gess starting position.
    pub fn initial() -> Board {
        let mut board = Board::empty();
        for &(row, cols) in BLACK_SETUP {
            for &col in cols {
                board.cells[row][col] = Cell::Stone(Color::Black);
                board.cells[row][BOARD_SIZE - 1 - col] = Cell::Stone(Color::White);
            }
        }
        board
    }

    /// Returns the cell at the given coordinate.
    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[coord.row][coord.col]
    }

    /// Sets the cell at the given coordinate.
    pub fn set_cell(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row][coord.col] = cell;
    }

    /// Clears the permanent border rows and columns.
    ///
    /// Idempotent; run after every committed move.
    pub fn clear_border(&mut self) {
        for i in 0..BOARD_SIZE {
            self.cells[0][i] = Cell::Empty;
            self.cells[BOARD_SIZE - 1][i] = Cell::Empty;
            self.cells[i][0] = Cell::Empty;
            self.cells[i][BOARD_SIZE - 1] = Cell::Empty;
        }
    }

    /// Returns true if every border cell is empty.
    pub fn border_is_clear(&self) -> bool {
        (0..BOARD_SIZE).all(|i| {
            self.cells[0][i].is_empty()
                && self.cells[BOARD_SIZE - 1][i].is_empty()
                && self.cells[i][0].is_empty()
                && self.cells[i][BOARD_SIZE - 1].is_empty()
        })
    }

    /// Renders the board as one string per row, using `.`/`B`/`W` cells.
    ///
    /// Any richer display formatting is a caller concern.
    pub fn render(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.to_char()).collect())
            .collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.render() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
