//! Checker piece representation.

use crate::Color;

/// Diagonal step directions toward decreasing row.
const UP: [(i8, i8); 2] = [(-1, -1), (-1, 1)];
/// Diagonal step directions toward increasing row.
const DOWN: [(i8, i8); 2] = [(1, -1), (1, 1)];
/// All four diagonal step directions.
const ALL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A single checker: its owner and whether it has been crowned.
///
/// A piece carries no coordinates; the board grid slot it occupies is the
/// sole authority for its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    king: bool,
}

impl Piece {
    /// Creates an uncrowned man of the given color.
    #[inline]
    pub const fn man(color: Color) -> Self {
        Piece { color, king: false }
    }

    /// Creates a king of the given color.
    #[inline]
    pub const fn king(color: Color) -> Self {
        Piece { color, king: true }
    }

    /// Returns the owner of this piece.
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Returns true if this piece has been crowned.
    #[inline]
    pub const fn is_king(self) -> bool {
        self.king
    }

    /// Crowns this piece. Crowning is monotonic: a king stays a king.
    #[inline]
    pub fn crown(&mut self) {
        self.king = true;
    }

    /// Returns the diagonal step directions this piece may move in.
    ///
    /// A man moves along its color's two forward diagonals; a king moves
    /// along all four.
    #[inline]
    pub const fn directions(self) -> &'static [(i8, i8)] {
        if self.king {
            &ALL
        } else {
            match self.color {
                Color::White => &UP,
                Color::Black => &DOWN,
            }
        }
    }

    /// Returns the layout character for this piece.
    ///
    /// White pieces are 'w'/'W' (man/king), Black pieces 'b'/'B'.
    pub const fn to_char(self) -> char {
        match (self.color, self.king) {
            (Color::White, false) => 'w',
            (Color::White, true) => 'W',
            (Color::Black, false) => 'b',
            (Color::Black, true) => 'B',
        }
    }

    /// Parses a layout character into a piece.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'w' => Some(Piece::man(Color::White)),
            'W' => Some(Piece::king(Color::White)),
            'b' => Some(Piece::man(Color::Black)),
            'B' => Some(Piece::king(Color::Black)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.king { "king" } else { "man" };
        write!(f, "{} {}", self.color, kind)
    }
}
