//! CLI infrastructure for the minigames companion binary
//!
//! One-shot analysis commands only; the interactive shells that render the
//! games live outside this crate.

pub mod commands;
