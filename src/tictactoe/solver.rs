//! Automated player: random, minimax, and blended move selection
//!
//! The solver always plays for the side to move on the board it is given.
//! Search runs over copied board snapshots (`Board` is `Copy`), so the
//! caller's board is never mutated.

use rand::{Rng, SeedableRng, prelude::IndexedRandom, rngs::StdRng};
use serde::{Deserialize, Serialize};

use super::board::{Board, Player};
use super::lines::Outcome;

/// Strength of the automated player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Uniformly random choice among empty cells
    Easy,
    /// Coin flip between the easy and hard policies per move
    Medium,
    /// Exhaustive minimax
    Hard,
}

/// Move selector for the automated player.
///
/// Holds the random source used by the easy policy and the medium coin flip;
/// construct with [`Solver::with_seed`] for deterministic behavior.
#[derive(Debug, Clone)]
pub struct Solver {
    rng: StdRng,
}

impl Solver {
    /// Create a solver with an OS-derived random seed
    pub fn new() -> Self {
        Self::with_seed(rand::random::<u64>())
    }

    /// Create a solver with an explicit seed
    pub fn with_seed(seed: u64) -> Self {
        Solver {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Choose a move for the side to move on `board`.
    ///
    /// Returns `None` when no empty cell remains; the caller treats that as
    /// a terminal position, not an error. The board is read-only: any cell
    /// tried during search is tried on a snapshot.
    pub fn choose_move(&mut self, board: &Board, difficulty: Difficulty) -> Option<usize> {
        match difficulty {
            Difficulty::Easy => self.random_move(board),
            Difficulty::Hard => best_move(board),
            Difficulty::Medium => {
                if self.rng.random::<f64>() < 0.5 {
                    self.random_move(board)
                } else {
                    best_move(board)
                }
            }
        }
    }

    fn random_move(&mut self, board: &Board) -> Option<usize> {
        board.empty_positions().choose(&mut self.rng).copied()
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the minimax-optimal move for the side to move.
///
/// Every empty cell is tried in ascending index order; ties keep the
/// first-found candidate. Returns `None` on a full board.
pub fn best_move(board: &Board) -> Option<usize> {
    let solver = board.to_move;
    let mut best: Option<(usize, i32)> = None;

    for pos in board.empty_positions() {
        let score = minimax(board.child(pos), solver, 0);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((pos, score)),
        }
    }

    best.map(|(pos, _)| pos)
}

/// Score a position for `solver` by exhaustive search.
///
/// Terminal positions score `10 - depth` for a solver win, `depth - 10` for
/// an opponent win, and `0` for a draw, where `depth` counts plies below the
/// candidate move at the root.
fn minimax(board: Board, solver: Player, depth: i32) -> i32 {
    match board.outcome() {
        Outcome::Win { player, .. } => {
            if player == solver {
                10 - depth
            } else {
                depth - 10
            }
        }
        Outcome::Draw => 0,
        Outcome::InProgress => {
            let maximizing = board.to_move == solver;
            let mut best = if maximizing { i32::MIN } else { i32::MAX };
            for pos in board.empty_positions() {
                let score = minimax(board.child(pos), solver, depth + 1);
                best = if maximizing {
                    best.max(score)
                } else {
                    best.min(score)
                };
            }
            best
        }
    }
}
