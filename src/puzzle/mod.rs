//! Sliding-tile board model: grid values, moves, heuristic, file loading.

pub mod board;
pub mod direction;
pub mod loader;

pub use board::{Anchor, Board};
pub use direction::{invert_path, render_path, Direction};
pub use loader::{load_board, parse_board};
