//! Tic-Tac-Toe game logic and automated player

pub mod board;
pub mod lines;
pub mod solver;

pub use board::{Board, Cell, Player};
pub use lines::{Outcome, WINNING_LINES, evaluate, winning_moves};
pub use solver::{Difficulty, Solver};
