//! Error types for the minigames crate

use thiserror::Error;

/// Main error type for the minigames crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {position} is already occupied")]
    InvalidMove { position: usize },

    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("game already over")]
    GameOver,

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or differ by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("puzzle side length {size} is out of range (must be 2-15)")]
    InvalidPuzzleSize { size: usize },

    #[error("tile array has wrong length: expected {expected}, got {got}")]
    InvalidTileCount { expected: usize, got: usize },

    #[error("tile array must contain exactly one empty slot, found {found}")]
    WrongEmptyCount { found: usize },

    #[error("tile value {value} is invalid for a {size}x{size} puzzle")]
    InvalidTileValue { value: u8, size: usize },

    #[error("tile {value} appears more than once")]
    DuplicateTile { value: u8 },

    #[error("tile index {index} is out of bounds for a {size}x{size} puzzle")]
    TileIndexOutOfBounds { index: usize, size: usize },

    #[error("cannot slide tile at {from}: not adjacent to the empty slot at {empty}")]
    IllegalSlide { from: usize, empty: usize },

    #[error("card {id} does not exist in this deck")]
    UnknownCard { id: usize },

    #[error("card {id} is already face up")]
    CardFaceUp { id: usize },

    #[error("a mismatched pair is still face up; conceal it before flipping again")]
    PairPending,
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
