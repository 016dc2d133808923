//! Board state and move execution.

use crate::movegen::{self, MoveList};
use checkers_core::{BoardLayout, Color, LayoutError, Move, Piece, Square, BOARD_SIZE};
use std::fmt;

/// A recorded move in game history.
///
/// Besides the move itself, the record carries what the move did: the
/// captured piece and its square, if any, and whether the mover was crowned.
/// Hosts polling after a successful move can read the latest entry instead
/// of diffing the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    /// The move that was played.
    pub mov: Move,
    /// The player who moved.
    pub color: Color,
    /// The jumped square and the piece removed from it, for captures.
    pub captured: Option<(Square, Piece)>,
    /// True if the move crowned the piece.
    pub promoted: bool,
}

/// The checkers engine: grid, turn state, selection, and game result.
///
/// All mutation goes through [`select`](Board::select) and
/// [`move_to`](Board::move_to). Invalid input declines with `false` and
/// leaves the state untouched; the engine has no panicking paths.
///
/// # Example
///
/// ```
/// use checkers_engine::Board;
/// use checkers_core::Color;
///
/// let mut board = Board::new();
/// assert_eq!(board.side_to_move(), Color::White);
/// assert!(board.select(5, 0));
/// assert!(board.move_to(4, 1));
/// assert_eq!(board.side_to_move(), Color::Black);
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    /// One slot per square, indexed by `Square::index`.
    grid: [Option<Piece>; 64],
    side_to_move: Color,
    /// Live pieces per color, indexed by `Color::index`.
    piece_count: [u8; 2],
    /// Captures made by each color, indexed by `Color::index`.
    score: [u8; 2],
    selected: Option<Square>,
    selected_moves: MoveList,
    winner: Option<Color>,
    history: Vec<PlayedMove>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a board with the standard starting layout: Black men on the
    /// dark squares of rows 0-2, White men on rows 5-7.
    pub fn new() -> Self {
        let mut grid = [None; 64];
        for index in 0..64u8 {
            // SAFETY: index is always in 0-63
            let square = unsafe { Square::from_index_unchecked(index) };
            if !square.is_dark() {
                continue;
            }
            if square.row() < 3 {
                grid[index as usize] = Some(Piece::man(Color::Black));
            } else if square.row() > 4 {
                grid[index as usize] = Some(Piece::man(Color::White));
            }
        }
        Board {
            grid,
            side_to_move: Color::White,
            piece_count: [12, 12],
            score: [0, 0],
            selected: None,
            selected_moves: MoveList::new(),
            winner: None,
            history: Vec::new(),
        }
    }

    /// Creates a board from layout notation (see [`BoardLayout`]).
    ///
    /// Piece counts are derived from the layout. The terminal check runs
    /// immediately, so a layout can describe a position that is already
    /// decided.
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        let parsed = BoardLayout::parse(layout)?;

        let mut grid = [None; 64];
        let mut piece_count = [0u8; 2];
        for (square, piece) in parsed.pieces {
            grid[square.index() as usize] = Some(piece);
            piece_count[piece.color().index()] += 1;
        }

        let mut board = Board {
            grid,
            side_to_move: parsed.side_to_move,
            piece_count,
            score: [0, 0],
            selected: None,
            selected_moves: MoveList::new(),
            winner: None,
            history: Vec::new(),
        };
        board.check_game_over();
        Ok(board)
    }

    /// Serializes the current position to layout notation.
    pub fn to_layout(&self) -> String {
        let mut layout = String::new();
        for row in 0..BOARD_SIZE {
            if row > 0 {
                layout.push('/');
            }
            let mut empty = 0;
            for col in 0..BOARD_SIZE {
                match self.piece_at(row, col) {
                    Some(piece) => {
                        if empty > 0 {
                            layout.push(char::from_digit(empty, 10).unwrap_or('0'));
                            empty = 0;
                        }
                        layout.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                layout.push(char::from_digit(empty, 10).unwrap_or('0'));
            }
        }
        layout.push(' ');
        layout.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });
        layout
    }

    /// Returns the piece on the given square.
    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.grid[square.index() as usize]
    }

    /// Returns the piece at the given cell, or `None` if the cell is empty
    /// or out of range.
    #[inline]
    pub fn piece_at(&self, row: u8, col: u8) -> Option<Piece> {
        Square::new(row, col).and_then(|sq| self.piece_on(sq))
    }

    /// Returns the player to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the number of live pieces of the given color.
    #[inline]
    pub fn piece_count(&self, color: Color) -> u8 {
        self.piece_count[color.index()]
    }

    /// Returns the number of captures made by the given color.
    #[inline]
    pub fn score(&self, color: Color) -> u8 {
        self.score[color.index()]
    }

    /// Returns the currently selected square, if any.
    #[inline]
    pub fn selection(&self) -> Option<Square> {
        self.selected
    }

    /// Returns the legal moves for the current selection.
    ///
    /// Empty when nothing is selected. Recomputed on every new selection.
    #[inline]
    pub fn selected_moves(&self) -> &MoveList {
        &self.selected_moves
    }

    /// Returns the winner, or `None` while the game is in progress.
    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Returns true if the game has ended.
    #[inline]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Returns the move history.
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    /// Returns the number of moves played.
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Generates all legal moves for the piece at `square`.
    pub fn legal_moves(&self, square: Square) -> MoveList {
        movegen::legal_moves(self, square)
    }

    /// Selects the piece at the given cell.
    ///
    /// Succeeds only if the cell is in range and holds a piece of the side
    /// to move; the selection's legal moves are recomputed. Reselection
    /// overwrites any prior selection. Selecting an empty cell or an
    /// opponent's piece declines without touching state.
    pub fn select(&mut self, row: u8, col: u8) -> bool {
        if self.winner.is_some() {
            return false;
        }
        let square = match Square::new(row, col) {
            Some(sq) => sq,
            None => return false,
        };
        match self.piece_on(square) {
            Some(piece) if piece.color() == self.side_to_move => {
                self.selected = Some(square);
                self.selected_moves = movegen::legal_moves(self, square);
                true
            }
            _ => false,
        }
    }

    /// Moves the selected piece to the given cell.
    ///
    /// Requires a selection and a destination in its legal-move set,
    /// otherwise declines. On success, as one transition: the jumped piece
    /// is removed (for captures), the mover is relocated and crowned if it
    /// reached its crowning row, the turn flips, the selection clears, and
    /// the terminal check runs.
    pub fn move_to(&mut self, row: u8, col: u8) -> bool {
        if self.winner.is_some() {
            return false;
        }
        let from = match self.selected {
            Some(sq) => sq,
            None => return false,
        };
        let to = match Square::new(row, col) {
            Some(sq) => sq,
            None => return false,
        };
        if !self.selected_moves.contains_destination(to) {
            return false;
        }
        let mut piece = match self.piece_on(from) {
            Some(p) => p,
            None => return false,
        };

        let mov = Move::new(from, to);

        let mut captured = None;
        if let Some(mid) = mov.jumped_square() {
            if let Some(victim) = self.piece_on(mid) {
                self.grid[mid.index() as usize] = None;
                self.piece_count[victim.color().index()] -= 1;
                self.score[victim.color().opposite().index()] += 1;
                captured = Some((mid, victim));
            }
        }

        let mut promoted = false;
        if !piece.is_king() && to.row() == piece.color().crowning_row() {
            piece.crown();
            promoted = true;
        }
        self.grid[from.index() as usize] = None;
        self.grid[to.index() as usize] = Some(piece);

        self.history.push(PlayedMove {
            mov,
            color: piece.color(),
            captured,
            promoted,
        });

        self.side_to_move = self.side_to_move.opposite();
        self.selected = None;
        self.selected_moves.clear();

        self.check_game_over();
        true
    }

    /// Checks for a finished game and records the winner.
    ///
    /// A side with no pieces loses; otherwise a side to move with no legal
    /// move anywhere loses. Once a winner is set the board is frozen:
    /// `select` and `move_to` decline forever.
    fn check_game_over(&mut self) {
        if self.piece_count[Color::White.index()] == 0 {
            self.winner = Some(Color::Black);
        } else if self.piece_count[Color::Black.index()] == 0 {
            self.winner = Some(Color::White);
        } else if !movegen::has_any_move(self, self.side_to_move) {
            self.winner = Some(self.side_to_move.opposite());
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let c = match self.piece_at(row, col) {
                    Some(piece) => piece.to_char(),
                    None => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        match self.winner {
            Some(color) => write!(f, "{} wins", color),
            None => write!(f, "{} to move", self.side_to_move),
        }
    }
}
