//! Generate solvable puzzles and check tile arrangements

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::puzzle::{PuzzleGenerator, TileBoard};

#[derive(Args, Debug)]
pub struct PuzzleArgs {
    /// Side length of the grid
    #[arg(long, default_value_t = 4)]
    pub size: usize,

    /// Check this arrangement instead of generating one: comma-separated
    /// tile values with '.' for the empty slot (e.g. "1,2,3,.")
    #[arg(long)]
    pub check: Option<String>,

    /// Seed for the generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Emit machine-readable JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct PuzzleReport {
    board: TileBoard,
    solvable: bool,
    solved: bool,
}

pub fn execute(args: PuzzleArgs) -> Result<()> {
    let board = match &args.check {
        Some(list) => parse_tiles(args.size, list)?,
        None => {
            let mut generator = match args.seed {
                Some(seed) => PuzzleGenerator::with_seed(seed),
                None => PuzzleGenerator::new(),
            };
            generator.generate(args.size)?
        }
    };

    if args.json {
        let report = PuzzleReport {
            solvable: board.is_solvable(),
            solved: board.is_solved(),
            board,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{board}");
    println!();
    println!("Solvable: {}", board.is_solvable());
    if board.is_solved() {
        println!("Arrangement is the canonical goal");
    }

    Ok(())
}

fn parse_tiles(size: usize, list: &str) -> Result<TileBoard> {
    let tiles = list
        .split(',')
        .map(|part| {
            let part = part.trim();
            if part == "." {
                Ok(None)
            } else {
                part.parse::<u8>()
                    .map(Some)
                    .with_context(|| format!("invalid tile value '{part}'"))
            }
        })
        .collect::<Result<Vec<Option<u8>>>>()?;

    Ok(TileBoard::from_tiles(size, tiles)?)
}
