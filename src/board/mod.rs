//! Board representation: cells, coordinates, the grid, and 3x3 pieces.

pub mod cell;
pub mod coord;
pub mod footprint;
pub mod grid;

pub use cell::{Cell, Color};
pub use coord::{Coord, CENTER_MAX, CENTER_MIN};
pub use footprint::{Direction, Footprint, Piece};
pub use grid::{Board, BOARD_SIZE};
