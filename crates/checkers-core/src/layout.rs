//! Board layout notation parsing.
//!
//! A layout string describes a full position: eight rows separated by '/',
//! row 0 first, followed by the side to move. Each row is a run of digits
//! (counts of empty cells) and piece characters ('w'/'W'/'b'/'B' for
//! white/black man/king).

use crate::{Color, Piece, Square, BOARD_SIZE};
use thiserror::Error;

/// Errors that can occur when parsing layout strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid layout: expected 2 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid layout: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("row {0} does not describe exactly 8 cells")]
    InvalidRowLength(u8),

    #[error("invalid piece character '{0}'")]
    InvalidPieceChar(char),

    #[error("piece on light square {0}")]
    PieceOnLightSquare(Square),

    #[error("invalid side to move: expected 'w' or 'b', got '{0}'")]
    InvalidSideToMove(String),
}

/// Parsed layout data.
///
/// This struct holds the piece placement and side to move. The engine is
/// responsible for converting it into its board representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    /// Pieces and the dark squares they occupy.
    pub pieces: Vec<(Square, Piece)>,
    /// The player to move.
    pub side_to_move: Color,
}

impl BoardLayout {
    /// The standard starting position.
    pub const STARTPOS: &'static str =
        "1b1b1b1b/b1b1b1b1/1b1b1b1b/8/8/w1w1w1w1/1w1w1w1w/w1w1w1w1 w";

    /// Parses a layout string.
    pub fn parse(layout: &str) -> Result<Self, LayoutError> {
        let parts: Vec<&str> = layout.split_whitespace().collect();

        if parts.len() != 2 {
            return Err(LayoutError::InvalidPartCount(parts.len()));
        }

        let rows: Vec<&str> = parts[0].split('/').collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(LayoutError::InvalidRowCount(rows.len()));
        }

        let mut pieces = Vec::new();
        for (row, cells) in rows.iter().enumerate() {
            let row = row as u8;
            let mut col: u8 = 0;
            for c in cells.chars() {
                if col > BOARD_SIZE {
                    return Err(LayoutError::InvalidRowLength(row));
                }
                if let Some(count) = c.to_digit(10) {
                    col += count as u8;
                    continue;
                }
                let piece =
                    Piece::from_char(c).ok_or(LayoutError::InvalidPieceChar(c))?;
                let square =
                    Square::new(row, col).ok_or(LayoutError::InvalidRowLength(row))?;
                if !square.is_dark() {
                    return Err(LayoutError::PieceOnLightSquare(square));
                }
                pieces.push((square, piece));
                col += 1;
            }
            if col != BOARD_SIZE {
                return Err(LayoutError::InvalidRowLength(row));
            }
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(LayoutError::InvalidSideToMove(other.to_string())),
        };

        Ok(BoardLayout {
            pieces,
            side_to_move,
        })
    }
}
