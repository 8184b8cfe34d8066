//! Ring census.
//!
//! A ring is a 3x3 neighborhood whose eight perimeter cells all hold stones
//! of one color around an empty center. Rings are never stored; whenever a
//! count is needed the whole interior is rescanned. The same scan serves
//! both the speculative pre-commit check (on a shadow board) and the
//! definitive post-commit win check (on the real board).

use crate::board::{Board, Color, Coord, Footprint, Piece, CENTER_MAX, CENTER_MIN};

/// Per-color ring counts from one census scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RingTally {
    pub black: u32,
    pub white: u32,
}

impl RingTally {
    /// Returns the count for the given color.
    pub const fn of(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }
}

/// Classifies a 3x3 neighborhood as a ring of some color, or not.
fn ring_color(piece: &Piece) -> Option<Color> {
    if !piece.center().is_empty() {
        return None;
    }
    let first = piece.cells[0].stone()?;
    let uniform = piece
        .cells
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != 4)
        .all(|(_, cell)| cell.stone() == Some(first));
    uniform.then_some(first)
}

/// Counts rings of each color on the board.
///
/// Scans every window centered in the interior band. Windows centered
/// outside it would have perimeter cells on the permanently empty border
/// and can never be rings, so the band scan is exhaustive.
pub fn ring_census(board: &Board) -> RingTally {
    let mut tally = RingTally::default();
    for row in CENTER_MIN..=CENTER_MAX {
        for col in CENTER_MIN..=CENTER_MAX {
            let footprint = Footprint::around(Coord::new(row, col));
            let piece = Piece::at(board, &footprint);
            match ring_color(&piece) {
                Some(Color::Black) => tally.black += 1,
                Some(Color::White) => tally.white += 1,
                None => {}
            }
        }
    }
    tally
}
