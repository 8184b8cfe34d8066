//! The move-validator chain.
//!
//! Checks run in a fixed order and the first failure aborts with its
//! specific reason: color singularity, turn ownership, distance, direction,
//! then path obstruction. The self-elimination guard is not part of this
//! chain; it needs a shadow board and lives with the engine commit logic.

use crate::board::{Board, Color, Coord, Direction, Footprint, Piece};
use crate::error::MoveError;

/// A move that has passed the structural checks and is ready to commit.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedMove {
    pub source: Footprint,
    pub dest: Footprint,
    pub piece: Piece,
    pub direction: Direction,
    /// Displacement magnitude in cells along the resolved direction.
    pub distance: i32,
}

/// Runs the validator chain for a move by `mover` from `source` to `dest`.
///
/// Both coordinates must already be interior-band centers (the coordinate
/// translator enforces that).
pub fn validate(
    board: &Board,
    mover: Color,
    source: Coord,
    dest: Coord,
) -> Result<ValidatedMove, MoveError> {
    let source_fp = Footprint::around(source);
    let dest_fp = Footprint::around(dest);
    let piece = Piece::at(board, &source_fp);

    check_ownership(&piece, mover)?;
    let (d_row, d_col) = (
        dest.row as i32 - source.row as i32,
        dest.col as i32 - source.col as i32,
    );
    check_distance(&piece, d_row, d_col)?;
    let direction = resolve_direction(&piece, d_row, d_col)?;
    let distance = d_row.abs().max(d_col.abs());
    check_path(board, &source_fp, source, dest, direction, distance)?;

    Ok(ValidatedMove {
        source: source_fp,
        dest: dest_fp,
        piece,
        direction,
        distance,
    })
}

/// Steps 1-2: single-color composition, then ownership by the mover.
fn check_ownership(piece: &Piece, mover: Color) -> Result<(), MoveError> {
    if piece.contains_color(Color::Black) && piece.contains_color(Color::White) {
        return Err(MoveError::MixedColorPiece);
    }
    if piece.contains_color(mover.opponent()) {
        return Err(MoveError::WrongPlayerTurn);
    }
    Ok(())
}

/// Step 3: no axis of the displacement may exceed 3 cells, and a full
/// 3-cell displacement requires the piece's own center to be occupied.
fn check_distance(piece: &Piece, d_row: i32, d_col: i32) -> Result<(), MoveError> {
    if d_row.abs() > 3 || d_col.abs() > 3 {
        return Err(MoveError::IllegalDistance);
    }
    if d_row.abs().max(d_col.abs()) == 3 && piece.center().is_empty() {
        return Err(MoveError::IllegalDistance);
    }
    Ok(())
}

/// Step 4: the displacement must lie on a compass line, and the piece cell
/// facing that direction must hold a stone.
fn resolve_direction(piece: &Piece, d_row: i32, d_col: i32) -> Result<Direction, MoveError> {
    if d_row == 0 && d_col == 0 {
        return Err(MoveError::UnsupportedDirection);
    }
    if d_row != 0 && d_col != 0 && d_row.abs() != d_col.abs() {
        return Err(MoveError::UnsupportedDirection);
    }
    let direction = Direction::from_offset(d_row.signum(), d_col.signum())
        .ok_or(MoveError::UnsupportedDirection)?;
    if piece.cell_toward(direction).is_empty() {
        return Err(MoveError::UnsupportedDirection);
    }
    Ok(direction)
}

/// Step 5: for displacements of 2 or more, every footprint stop strictly
/// before the destination must be clear of stones outside the source
/// footprint. One-cell moves skip this: their destination overlaps the
/// source and any contact there is a capture, not an obstruction.
fn check_path(
    board: &Board,
    source_fp: &Footprint,
    source: Coord,
    dest: Coord,
    direction: Direction,
    distance: i32,
) -> Result<(), MoveError> {
    if distance < 2 {
        return Ok(());
    }
    let (unit_row, unit_col) = direction.offset();
    for step in 1..distance {
        let stop = source.offset(unit_row * step, unit_col * step);
        debug_assert_ne!(stop, dest);
        for coord in Footprint::around(stop).cells {
            if !source_fp.contains(coord) && !board.cell(coord).is_empty() {
                return Err(MoveError::PathObstructed);
            }
        }
    }
    Ok(())
}
