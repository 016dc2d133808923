//! Core types for checkers.
//!
//! This crate provides the fundamental types used across the checkers engine:
//! - [`Piece`] and [`Color`] for piece representation
//! - [`Square`] for board coordinates
//! - [`Move`] for move representation
//! - Board layout notation parsing

mod color;
mod layout;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use layout::{BoardLayout, LayoutError};
pub use mov::Move;
pub use piece::Piece;
pub use square::{Square, BOARD_SIZE};
