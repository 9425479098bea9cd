//! Sliding (N²−1)-tile puzzle logic

pub mod board;
pub mod generator;

pub use board::{TileBoard, is_legal_move};
pub use generator::{MAX_SIZE, MIN_SIZE, PuzzleGenerator};
