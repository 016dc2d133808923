//! Board square representation.

use std::fmt;

/// The width and height of the board.
pub const BOARD_SIZE: u8 = 8;

/// A square on the checkers board, indexed 0-63.
///
/// Squares are addressed by `(row, col)` cell coordinates, each in `0..8`,
/// packed as `row * 8 + col`. Pieces only ever occupy dark squares, the
/// cells where `row + col` is odd.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Creates a square from row and column, or `None` if out of bounds.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square(row * BOARD_SIZE + col))
        } else {
            None
        }
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Creates a square from index without bounds checking.
    ///
    /// # Safety
    /// The index must be in the range 0-63.
    #[inline]
    pub const unsafe fn from_index_unchecked(index: u8) -> Self {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Parses a square from algebraic notation (e.g., "b6").
    ///
    /// Files a-h map to columns 0-7 and ranks 1-8 map to rows 0-7.
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = match bytes[0].to_ascii_lowercase() {
            c @ b'a'..=b'h' => c - b'a',
            _ => return None,
        };
        let row = match bytes[1] {
            r @ b'1'..=b'8' => r - b'1',
            _ => return None,
        };
        Square::new(row, col)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the row (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    /// Returns the column (0-7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    /// Returns true if this is a dark square (`row + col` odd).
    ///
    /// Only dark squares are ever occupied by pieces.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row() + self.col()) % 2 == 1
    }

    /// Returns the square offset by the given row/column deltas, or `None`
    /// if the result falls off the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row() as i8 + dr;
        let col = self.col() as i8 + dc;
        if row >= 0 && row < BOARD_SIZE as i8 && col >= 0 && col < BOARD_SIZE as i8 {
            Square::new(row as u8, col as u8)
        } else {
            None
        }
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!(
            "{}{}",
            (b'a' + self.col()) as char,
            (b'1' + self.row()) as char
        )
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_new() {
        let sq = Square::new(5, 2).unwrap();
        assert_eq!(sq.row(), 5);
        assert_eq!(sq.col(), 2);
        assert_eq!(sq.index(), 42);

        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
    }

    #[test]
    fn square_from_algebraic() {
        assert_eq!(Square::from_algebraic("a1"), Square::new(0, 0));
        assert_eq!(Square::from_algebraic("c6"), Square::new(5, 2));
        assert_eq!(Square::from_algebraic("h8"), Square::new(7, 7));
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic(""), None);
    }

    #[test]
    fn square_to_algebraic() {
        assert_eq!(Square::new(0, 0).unwrap().to_algebraic(), "a1");
        assert_eq!(Square::new(7, 7).unwrap().to_algebraic(), "h8");
        assert_eq!(Square::new(5, 2).unwrap().to_algebraic(), "c6");
    }

    #[test]
    fn dark_squares() {
        assert!(!Square::new(0, 0).unwrap().is_dark());
        assert!(Square::new(0, 1).unwrap().is_dark());
        assert!(Square::new(5, 2).unwrap().is_dark());
        assert!(!Square::new(7, 7).unwrap().is_dark());
    }

    #[test]
    fn offset_stays_on_board() {
        let sq = Square::new(5, 2).unwrap();
        assert_eq!(sq.offset(-1, 1), Square::new(4, 3));
        assert_eq!(sq.offset(2, -2), Square::new(7, 0));

        let corner = Square::new(0, 0).unwrap();
        assert_eq!(corner.offset(-1, -1), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 1), Square::new(1, 1));
    }
}
