//! Game-logic core for a collection of single-screen mini-games
//!
//! This crate provides:
//! - Tic-Tac-Toe rules and an automated player (random, minimax, or a blend)
//! - Sliding (N²−1)-tile puzzle generation with guaranteed solvability
//! - Memory-match, typing-test, and catch-the-ball game engines
//!
//! Rendering, input capture, and timer scheduling belong to the embedding
//! shell: every timed behavior here is an explicit tick or resolve call, and
//! all randomized components accept an explicit seed for deterministic tests.

pub mod catch;
pub mod cli;
pub mod error;
pub mod memory;
pub mod puzzle;
pub mod tictactoe;
pub mod typing;

pub use catch::{CatchGame, TickOutcome};
pub use error::{Error, Result};
pub use memory::{FlipOutcome, MemoryGame, Symbol};
pub use puzzle::{PuzzleGenerator, TileBoard};
pub use tictactoe::{Board, Cell, Difficulty, Outcome, Player, Solver};
pub use typing::TypingTest;
