//! Minigames CLI - analysis commands for the game-logic core
//!
//! One-shot, non-interactive commands for inspecting the algorithmic pieces:
//! - Evaluating Tic-Tac-Toe positions and the automated player's choice
//! - Generating and checking sliding-puzzle arrangements

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "minigames")]
#[command(version, about = "Analysis tools for the mini-game logic core", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a Tic-Tac-Toe board and choose a move for the side to move
    Solve(minigames::cli::commands::solve::SolveArgs),

    /// Generate a solvable sliding puzzle or check an arrangement
    Puzzle(minigames::cli::commands::puzzle::PuzzleArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => minigames::cli::commands::solve::execute(args),
        Commands::Puzzle(args) => minigames::cli::commands::puzzle::execute(args),
    }
}
