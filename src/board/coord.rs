//! Board coordinates and token translation.
//!
//! A coordinate token is the only parsed input format the engine accepts:
//! one letter (`a`-`t`, the row) followed by a 1-2 digit number (1-20, the
//! column). Tokens always name a piece *center*, so translation also
//! enforces the interior band: a center outside rows/columns 2-17 would put
//! part of its 3x3 footprint on the permanently empty border ring.

use crate::error::MoveError;

/// Lowest row/column index a piece center may occupy.
pub const CENTER_MIN: usize = 2;
/// Highest row/column index a piece center may occupy.
pub const CENTER_MAX: usize = 17;

/// A zero-based board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate from raw indices.
    pub const fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// Returns true if this coordinate is a legal piece center.
    pub const fn is_center(self) -> bool {
        self.row >= CENTER_MIN
            && self.row <= CENTER_MAX
            && self.col >= CENTER_MIN
            && self.col <= CENTER_MAX
    }

    /// Returns the coordinate displaced by the given row/column deltas.
    ///
    /// Callers must keep the result on the board; every call site works
    /// within the interior band, where a one-cell displacement cannot leave
    /// the grid.
    pub fn offset(self, d_row: i32, d_col: i32) -> Coord {
        Coord {
            row: (self.row as i32 + d_row) as usize,
            col: (self.col as i32 + d_col) as usize,
        }
    }

    /// Translates a coordinate token into a piece-center coordinate.
    ///
    /// Fails with [`MoveError::InvalidCoordinate`] when the token is
    /// malformed or the resulting center falls outside the interior band.
    pub fn parse(token: &str) -> Result<Coord, MoveError> {
        let invalid = || MoveError::InvalidCoordinate(token.to_string());

        let mut chars = token.chars();
        let letter = chars.next().ok_or_else(invalid)?;
        let number_part = chars.as_str();

        if !letter.is_ascii_lowercase() || letter > 't' {
            return Err(invalid());
        }
        let row = (letter as u8 - b'a') as usize;

        if number_part.is_empty()
            || number_part.len() > 2
            || !number_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        let number: usize = number_part.parse().map_err(|_| invalid())?;
        if number == 0 || number > 20 {
            return Err(invalid());
        }
        let col = number - 1;

        let coord = Coord { row, col };
        if !coord.is_center() {
            return Err(invalid());
        }
        Ok(coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_interior_token() {
        assert_eq!(Coord::parse("c3"), Ok(Coord::new(2, 2)));
        assert_eq!(Coord::parse("l3"), Ok(Coord::new(11, 2)));
        assert_eq!(Coord::parse("r18"), Ok(Coord::new(17, 17)));
    }

    #[test]
    fn parse_rejects_border_letters() {
        assert!(Coord::parse("a5").is_err());
        assert!(Coord::parse("t5").is_err());
        // b maps to row 1, which is border-adjacent but not a legal center
        assert!(Coord::parse("b5").is_err());
        assert!(Coord::parse("s5").is_err());
    }

    #[test]
    fn parse_rejects_out_of_band_numbers() {
        assert!(Coord::parse("c1").is_err());
        assert!(Coord::parse("c2").is_err());
        assert!(Coord::parse("c19").is_err());
        assert!(Coord::parse("c20").is_err());
        assert!(Coord::parse("c0").is_err());
        assert!(Coord::parse("c21").is_err());
    }

    #[test]
    fn parse_rejects_malformed_tokens() {
        assert!(Coord::parse("").is_err());
        assert!(Coord::parse("5c").is_err());
        assert!(Coord::parse("c").is_err());
        assert!(Coord::parse("cc").is_err());
        assert!(Coord::parse("C5").is_err());
        assert!(Coord::parse("c123").is_err());
        assert!(Coord::parse("u5").is_err());
    }

    #[test]
    fn parse_error_carries_token() {
        assert_eq!(
            Coord::parse("z9"),
            Err(MoveError::InvalidCoordinate("z9".to_string()))
        );
    }

    #[test]
    fn band_membership() {
        assert!(Coord::new(2, 2).is_center());
        assert!(Coord::new(17, 17).is_center());
        assert!(!Coord::new(1, 5).is_center());
        assert!(!Coord::new(18, 5).is_center());
        assert!(!Coord::new(5, 18).is_center());
    }

    #[test]
    fn offset_moves_both_axes() {
        let c = Coord::new(10, 10);
        assert_eq!(c.offset(-1, 1), Coord::new(9, 11));
        assert_eq!(c.offset(0, 0), c);
    }
}
