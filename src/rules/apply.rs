//! Committing a validated move to a board.
//!
//! The same routine serves the speculative self-elimination check (applied
//! to a shadow clone) and the real commit: write the piece into the
//! destination footprint, clear the vacated source cells, re-assert the
//! border invariant.

use crate::board::{Board, Cell};
use crate::rules::validate::ValidatedMove;

/// Applies a validated move's footprint swap to the given board.
///
/// Destination cells take the source piece's contents positionally; source
/// cells not shared with the destination footprint are cleared, so
/// overlapping moves never duplicate stones.
pub fn apply_move(board: &mut Board, mv: &ValidatedMove) {
    for (coord, cell) in mv.dest.cells.iter().zip(mv.piece.cells) {
        board.set_cell(*coord, cell);
    }
    for coord in mv.source.cells {
        if !mv.dest.contains(coord) {
            board.set_cell(coord, Cell::Empty);
        }
    }
    board.clear_border();
}
