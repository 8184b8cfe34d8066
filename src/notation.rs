//! Compact board notation.
//!
//! A whole-board position is written as 20 ranks separated by `/`, top row
//! first: `B` and `W` for stones, decimal run-lengths for empty cells
//! (chess-FEN style, so a fully empty rank is `20`). The codec exists for
//! test construction and for host applications that want to ship positions
//! around as single strings.

use crate::board::{Board, Cell, Coord, BOARD_SIZE};

/// Errors that can occur while parsing board notation.
#[derive(Debug, thiserror::Error)]
pub enum NotationError {
    #[error("expected {BOARD_SIZE} ranks separated by '/', got {0}")]
    WrongRankCount(usize),

    #[error("rank {0} covers {1} cells, expected {BOARD_SIZE}")]
    WrongRankLength(usize, usize),

    #[error("invalid character '{1}' in rank {0}")]
    InvalidChar(usize, char),
}

/// Parses a board from its notation string.
pub fn parse_board(s: &str) -> Result<Board, NotationError> {
    let ranks: Vec<&str> = s.split('/').collect();
    if ranks.len() != BOARD_SIZE {
        return Err(NotationError::WrongRankCount(ranks.len()));
    }

    let mut board = Board::empty();
    for (row, rank) in ranks.iter().enumerate() {
        let mut col = 0usize;
        let mut run = 0usize;
        for c in rank.chars() {
            if let Some(d) = c.to_digit(10) {
                run = run * 10 + d as usize;
                continue;
            }
            col += run;
            run = 0;
            let cell = Cell::from_char(c).ok_or(NotationError::InvalidChar(row, c))?;
            if col >= BOARD_SIZE {
                return Err(NotationError::WrongRankLength(row, col + 1));
            }
            board.set_cell(Coord::new(row, col), cell);
            col += 1;
        }
        col += run;
        if col != BOARD_SIZE {
            return Err(NotationError::WrongRankLength(row, col));
        }
    }
    Ok(board)
}

/// Formats a board as its notation string.
pub fn format_board(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..BOARD_SIZE {
        if row > 0 {
            out.push('/');
        }
        let mut run = 0usize;
        for col in 0..BOARD_SIZE {
            match board.cell(Coord::new(row, col)) {
                Cell::Empty => run += 1,
                stone => {
                    if run > 0 {
                        out.push_str(&run.to_string());
                        run = 0;
                    }
                    out.push(stone.to_char());
                }
            }
        }
        if run > 0 {
            out.push_str(&run.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    #[test]
    fn empty_board_roundtrip() {
        let s = ["20"; 20].join("/");
        let board = parse_board(&s).unwrap();
        assert_eq!(board, Board::empty());
        assert_eq!(format_board(&board), s);
    }

    #[test]
    fn initial_board_roundtrip() {
        let board = Board::initial();
        let s = format_board(&board);
        let reparsed = parse_board(&s).unwrap();
        assert_eq!(reparsed, board);
    }

    #[test]
    fn stones_land_where_written() {
        let mut ranks = vec!["20".to_string(); 20];
        ranks[3] = "2B16W".to_string();
        let board = parse_board(&ranks.join("/")).unwrap();
        assert_eq!(board.cell(Coord::new(3, 2)), Cell::Stone(Color::Black));
        assert_eq!(board.cell(Coord::new(3, 19)), Cell::Stone(Color::White));
        assert!(board.cell(Coord::new(3, 1)).is_empty());
    }

    #[test]
    fn explicit_dots_are_accepted() {
        let mut ranks = vec!["20".to_string(); 20];
        ranks[5] = format!("{}B{}", ".".repeat(4), ".".repeat(15));
        let board = parse_board(&ranks.join("/")).unwrap();
        assert_eq!(board.cell(Coord::new(5, 4)), Cell::Stone(Color::Black));
    }

    #[test]
    fn wrong_rank_count_is_rejected() {
        let s = ["20"; 19].join("/");
        assert!(matches!(
            parse_board(&s),
            Err(NotationError::WrongRankCount(19))
        ));
    }

    #[test]
    fn wrong_rank_length_is_rejected() {
        let mut ranks = vec!["20".to_string(); 20];
        ranks[7] = "19".to_string();
        assert!(matches!(
            parse_board(&ranks.join("/")),
            Err(NotationError::WrongRankLength(7, 19))
        ));
        ranks[7] = "21".to_string();
        assert!(matches!(
            parse_board(&ranks.join("/")),
            Err(NotationError::WrongRankLength(7, 21))
        ));
        ranks[7] = "19BB".to_string();
        assert!(parse_board(&ranks.join("/")).is_err());
    }

    #[test]
    fn invalid_character_is_rejected() {
        let mut ranks = vec!["20".to_string(); 20];
        ranks[2] = "5x14".to_string();
        assert!(matches!(
            parse_board(&ranks.join("/")),
            Err(NotationError::InvalidChar(2, 'x'))
        ));
    }
}
