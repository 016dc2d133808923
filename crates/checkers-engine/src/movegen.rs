//! Legal move generation.
//!
//! Move generation is a pure function of the grid and the queried piece: no
//! selection state, no side effects. The move set is the union of simple
//! diagonal steps onto empty cells and single capture jumps over an adjacent
//! opposing piece onto an empty landing cell. Captures are never mandatory
//! and never chain; each jump is one discrete move.

use crate::Board;
use checkers_core::{Color, Move, Square};

/// A list of moves with a fixed maximum capacity.
///
/// A single checker has at most four directions with one step and one jump
/// candidate each, so eight slots suffice and no heap allocation is needed.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Maximum number of legal moves for any single piece.
    pub const MAX_MOVES: usize = 8;

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [Move::NULL; Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = m;
        self.len += 1;
    }

    /// Returns the number of moves.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    /// Returns true if some move in the list lands on `to`.
    pub fn contains_destination(&self, to: Square) -> bool {
        self.as_slice().iter().any(|m| m.to() == to)
    }

    /// Clears the move list.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len);
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Generates all legal moves for the piece on `from`.
///
/// Returns an empty list if the square is empty. The result is independent
/// of whose turn it is; turn ownership is enforced at selection time.
pub fn legal_moves(board: &Board, from: Square) -> MoveList {
    let mut moves = MoveList::new();
    let piece = match board.piece_on(from) {
        Some(p) => p,
        None => return moves,
    };

    for &(dr, dc) in piece.directions() {
        // Simple step onto an adjacent empty cell.
        if let Some(to) = from.offset(dr, dc) {
            if board.piece_on(to).is_none() {
                moves.push(Move::new(from, to));
            }
        }

        // Capture jump: empty landing cell two steps out, opposing piece in
        // between.
        if let Some(to) = from.offset(2 * dr, 2 * dc) {
            if board.piece_on(to).is_none() {
                let over = from.offset(dr, dc).and_then(|sq| board.piece_on(sq));
                if over.is_some_and(|p| p.color() != piece.color()) {
                    moves.push(Move::new(from, to));
                }
            }
        }
    }

    moves
}

/// Returns true if any piece of `color` has at least one legal move.
pub fn has_any_move(board: &Board, color: Color) -> bool {
    (0..64u8).any(|index| {
        // SAFETY: index is always in 0-63
        let square = unsafe { Square::from_index_unchecked(index) };
        board
            .piece_on(square)
            .is_some_and(|p| p.color() == color && !legal_moves(board, square).is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn destinations(board: &Board, from: Square) -> Vec<Square> {
        legal_moves(board, from).as_slice().iter().map(|m| m.to()).collect()
    }

    #[test]
    fn movelist_push_and_iterate() {
        let mut list = MoveList::new();
        assert!(list.is_empty());

        let m1 = Move::new(sq(5, 2), sq(4, 3));
        let m2 = Move::new(sq(5, 2), sq(4, 1));
        list.push(m1);
        list.push(m2);

        assert_eq!(list.len(), 2);
        assert_eq!(list[0], m1);
        assert_eq!(list[1], m2);
        assert!(list.contains_destination(sq(4, 1)));
        assert!(!list.contains_destination(sq(3, 0)));
    }

    #[test]
    fn lone_edge_man_has_one_step() {
        let board = Board::from_layout("8/8/8/8/8/w7/8/8 w").unwrap();
        assert_eq!(destinations(&board, sq(5, 0)), vec![sq(4, 1)]);
    }

    #[test]
    fn man_moves_forward_only() {
        let board = Board::from_layout("8/8/8/8/8/2w5/8/8 w").unwrap();
        let dests = destinations(&board, sq(5, 2));
        assert_eq!(dests, vec![sq(4, 1), sq(4, 3)]);
    }

    #[test]
    fn king_moves_all_four_diagonals() {
        let board = Board::from_layout("8/8/8/8/8/2W5/8/8 w").unwrap();
        let dests = destinations(&board, sq(5, 2));
        assert_eq!(dests.len(), 4);
        for to in [sq(4, 1), sq(4, 3), sq(6, 1), sq(6, 3)] {
            assert!(dests.contains(&to));
        }
    }

    #[test]
    fn jump_over_opponent() {
        // White at c6, Black at d5, e4 empty.
        let board = Board::from_layout("8/8/8/8/3b4/2w5/8/8 w").unwrap();
        let dests = destinations(&board, sq(5, 2));
        assert!(dests.contains(&sq(3, 4)));
        // The occupied adjacent cell is not a step destination.
        assert!(!dests.contains(&sq(4, 3)));
    }

    #[test]
    fn no_jump_over_own_piece() {
        let board = Board::from_layout("8/8/8/8/3w4/2w5/8/8 w").unwrap();
        let dests = destinations(&board, sq(5, 2));
        assert_eq!(dests, vec![sq(4, 1)]);
    }

    #[test]
    fn no_jump_onto_occupied_landing() {
        // White at c6, Black at d5 and e4: the landing cell is blocked.
        let board = Board::from_layout("8/8/8/4b3/3b4/2w5/8/8 w").unwrap();
        let dests = destinations(&board, sq(5, 2));
        assert_eq!(dests, vec![sq(4, 1)]);
    }

    #[test]
    fn capture_does_not_prune_steps() {
        // A jump is available but the simple step stays legal too.
        let board = Board::from_layout("8/8/8/8/1b6/2w5/8/8 w").unwrap();
        let dests = destinations(&board, sq(5, 2));
        assert!(dests.contains(&sq(3, 0)));
        assert!(dests.contains(&sq(4, 3)));
    }

    #[test]
    fn empty_square_has_no_moves() {
        let board = Board::new();
        assert!(legal_moves(&board, sq(4, 1)).is_empty());
    }

    #[test]
    fn blocked_color_has_no_moves() {
        // Lone Black man with both forward steps and both jump landings
        // occupied by White pieces.
        let board = Board::from_layout("8/8/8/8/8/2b5/1w1w4/w3w3 b").unwrap();
        assert!(!has_any_move(&board, Color::Black));
        assert!(has_any_move(&board, Color::White));
    }
}
