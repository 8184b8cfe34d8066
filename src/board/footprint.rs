//! Footprints, pieces, and the movement compass.
//!
//! A piece in Gess is not a single stone but the contents of a 3x3
//! neighborhood (the footprint) around a chosen center. The nine footprint
//! positions are kept in a fixed raster order, and the nine compass
//! directions use the same order, so the piece cell that must hold a stone
//! to permit travel in a direction is simply `cells[direction as usize]`.

use super::cell::{Cell, Color};
use super::coord::Coord;
use super::grid::Board;

/// One of the nine compass directions, in footprint raster order.
///
/// `Center` (index 4) is the no-displacement entry; it exists to keep the
/// compass aligned with the footprint but is never a legal movement
/// direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    NorthWest = 0,
    North = 1,
    NorthEast = 2,
    West = 3,
    Center = 4,
    East = 5,
    SouthWest = 6,
    South = 7,
    SouthEast = 8,
}

impl Direction {
    /// Returns the unit (row, column) displacement for this direction.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::West => (0, -1),
            Direction::Center => (0, 0),
            Direction::East => (0, 1),
            Direction::SouthWest => (1, -1),
            Direction::South => (1, 0),
            Direction::SouthEast => (1, 1),
        }
    }

    /// Looks up the direction for a unit displacement.
    pub fn from_offset(d_row: i32, d_col: i32) -> Option<Direction> {
        match (d_row, d_col) {
            (-1, -1) => Some(Direction::NorthWest),
            (-1, 0) => Some(Direction::North),
            (-1, 1) => Some(Direction::NorthEast),
            (0, -1) => Some(Direction::West),
            (0, 0) => Some(Direction::Center),
            (0, 1) => Some(Direction::East),
            (1, -1) => Some(Direction::SouthWest),
            (1, 0) => Some(Direction::South),
            (1, 1) => Some(Direction::SouthEast),
            _ => None,
        }
    }
}

/// The nine board positions of a 3x3 neighborhood, in raster order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    pub cells: [Coord; 9],
}

impl Footprint {
    /// Builds the footprint around a center.
    ///
    /// The center must lie in the interior band (see `Coord::is_center`) or
    /// the neighborhood would leave the grid.
    pub fn around(center: Coord) -> Footprint {
        let mut cells = [center; 9];
        let mut idx = 0;
        for d_row in -1..=1 {
            for d_col in -1..=1 {
                cells[idx] = center.offset(d_row, d_col);
                idx += 1;
            }
        }
        Footprint { cells }
    }

    /// Returns the center position (raster index 4).
    pub fn center(&self) -> Coord {
        self.cells[4]
    }

    /// Returns true if the footprint contains the given position.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }
}

/// The cell contents at a footprint's positions, positionally aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub cells: [Cell; 9],
}

impl Piece {
    /// Reads the piece at a footprint off the board.
    pub fn at(board: &Board, footprint: &Footprint) -> Piece {
        let mut cells = [Cell::Empty; 9];
        for (cell, coord) in cells.iter_mut().zip(footprint.cells) {
            *cell = board.cell(coord);
        }
        Piece { cells }
    }

    /// Returns true if any cell holds a stone of the given color.
    pub fn contains_color(&self, color: Color) -> bool {
        self.cells.iter().any(|c| c.stone() == Some(color))
    }

    /// Returns the center cell (raster index 4).
    pub fn center(&self) -> Cell {
        self.cells[4]
    }

    /// Returns the cell on the piece's edge or corner facing the direction.
    pub fn cell_toward(&self, direction: Direction) -> Cell {
        self.cells[direction as usize]
    }
}
