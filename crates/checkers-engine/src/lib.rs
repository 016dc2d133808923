//! Checkers rule engine.
//!
//! This crate provides:
//! - [`Board`] - The full game state: grid, turn, selection, counters, and
//!   game-over detection
//! - [`PlayedMove`] - Move history records with capture and promotion info
//! - [`MoveList`] and [`legal_moves`] - Move generation
//!
//! # Architecture
//!
//! The board owns an 8x8 arena of optional pieces indexed by square; pieces
//! carry no coordinates of their own. Hosts drive the engine through two
//! cell-coordinate calls, [`Board::select`] and [`Board::move_to`], and poll
//! the read-only state surface for everything else. Invalid input declines
//! with `false` rather than failing; the engine never panics.
//!
//! The engine implements the rules of the original game faithfully:
//! captures are voluntary (no mandatory-capture rule) and each capture is a
//! single discrete jump, never a chained sequence.
//!
//! # Example
//!
//! ```
//! use checkers_engine::Board;
//!
//! let mut board = Board::new();
//! assert!(board.select(5, 2));
//! assert!(board.move_to(4, 3));
//! println!("{}", board);
//! ```

mod board;
pub mod movegen;

pub use board::{Board, PlayedMove};
pub use movegen::{has_any_move, legal_moves, MoveList};
