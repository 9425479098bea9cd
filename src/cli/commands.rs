//! Command implementations for the companion binary

pub mod puzzle;
pub mod solve;
