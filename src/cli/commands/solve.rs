//! Evaluate a board position and pick a move for the side to move

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;

use crate::tictactoe::{Board, Difficulty, Outcome, Player, Solver, winning_moves};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Board as 9 characters, row-major: '.', 'X', or 'O' (e.g. "XX..O....")
    pub board: String,

    /// Strength of the automated player
    #[arg(long, value_enum, default_value_t = DifficultyArg::Hard)]
    pub difficulty: DifficultyArg,

    /// Seed for the random policies (easy and medium)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Emit machine-readable JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct SolveReport {
    board: Board,
    to_move: Player,
    outcome: Outcome,
    x_winning_moves: Vec<usize>,
    o_winning_moves: Vec<usize>,
    chosen_move: Option<usize>,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    let mut solver = match args.seed {
        Some(seed) => Solver::with_seed(seed),
        None => Solver::new(),
    };

    let outcome = board.outcome();
    let chosen = if outcome == Outcome::InProgress {
        solver.choose_move(&board, args.difficulty.into())
    } else {
        None
    };

    if args.json {
        let report = SolveReport {
            board,
            to_move: board.to_move,
            outcome,
            x_winning_moves: winning_moves(&board.cells, Player::X),
            o_winning_moves: winning_moves(&board.cells, Player::O),
            chosen_move: chosen,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{board}");
    println!();
    match outcome {
        Outcome::Win { player, line } => {
            println!("Outcome: {player:?} wins on line {line:?}");
        }
        Outcome::Draw => println!("Outcome: draw"),
        Outcome::InProgress => {
            println!("Outcome: in progress, {:?} to move", board.to_move);
            for player in [Player::X, Player::O] {
                let wins = winning_moves(&board.cells, player);
                if !wins.is_empty() {
                    println!("Immediate wins for {player:?}: {wins:?}");
                }
            }
            match chosen {
                Some(pos) => println!(
                    "Chosen move ({:?}): position {pos} (row {}, col {})",
                    args.difficulty,
                    pos / 3,
                    pos % 3
                ),
                None => println!("No move available"),
            }
        }
    }

    Ok(())
}
