//! Stone colors and cell contents.

use serde::{Deserialize, Serialize};

/// The color of a stone, and by extension of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Returns the opposing color.
    pub const fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Returns the color to move for a given turn count.
    ///
    /// Black moves on even turns, White on odd, matching the standard Gess
    /// starting-player assignment.
    pub const fn from_turn(turn: u32) -> Color {
        if turn % 2 == 0 {
            Color::Black
        } else {
            Color::White
        }
    }
}

/// The contents of one board cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Stone(Color),
}

impl Cell {
    /// Returns true if the cell holds no stone.
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the stone color, if any.
    pub const fn stone(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Stone(c) => Some(c),
        }
    }

    /// Returns the single-character notation for this cell.
    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Stone(Color::Black) => 'B',
            Cell::Stone(Color::White) => 'W',
        }
    }

    /// Parses a cell from its single-character notation.
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'B' => Some(Cell::Stone(Color::Black)),
            'W' => Some(Cell::Stone(Color::White)),
            _ => None,
        }
    }
}
