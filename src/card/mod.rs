//! The bingo card and its winning patterns.

pub mod grid;
pub mod pattern;

pub use grid::BingoCard;
pub use pattern::{WinPattern, LINE_LENGTH};
