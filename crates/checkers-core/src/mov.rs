//! Move representation.

use crate::Square;
use std::fmt;

/// A checkers move.
///
/// Encoded compactly: 6 bits from, 6 bits to = 12 bits total. Whether the
/// move is a jump is derived from the displacement, so no flag bits are
/// needed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move((from.index() as u16) | ((to.index() as u16) << 6))
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        // SAFETY: masked to 6 bits, always a valid square index
        unsafe { Square::from_index_unchecked((self.0 & 0x3F) as u8) }
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        // SAFETY: masked to 6 bits, always a valid square index
        unsafe { Square::from_index_unchecked(((self.0 >> 6) & 0x3F) as u8) }
    }

    /// Returns true if this move is a capture jump (row displacement of 2).
    #[inline]
    pub const fn is_jump(self) -> bool {
        let dr = self.to().row() as i8 - self.from().row() as i8;
        dr == 2 || dr == -2
    }

    /// Returns the square jumped over, or `None` for a simple move.
    #[inline]
    pub const fn jumped_square(self) -> Option<Square> {
        if self.is_jump() {
            let row = (self.from().row() + self.to().row()) / 2;
            let col = (self.from().col() + self.to().col()) / 2;
            Square::new(row, col)
        } else {
            None
        }
    }

    /// Returns the text notation for this move ("c6-b5", jumps as "c6xe4").
    pub fn to_text(self) -> String {
        let sep = if self.is_jump() { 'x' } else { '-' };
        format!("{}{}{}", self.from(), sep, self.to())
    }

    /// Parses a move from text notation.
    ///
    /// The separator must match the move type: '-' for a simple step, 'x'
    /// for a jump.
    pub fn from_text(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 5 {
            return None;
        }
        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[3..5])?;
        let mov = Move::new(from, to);
        match bytes[2] {
            b'-' if !mov.is_jump() => Some(mov),
            b'x' if mov.is_jump() => Some(mov),
            _ => None,
        }
    }

    /// A null move (used as placeholder, not a legal move).
    pub const NULL: Move = Move(0);
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_text())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}
