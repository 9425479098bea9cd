//! Winning line evaluation for the 3x3 board

use serde::{Deserialize, Serialize};

use super::board::{Cell, Player};

/// Winning line indices, in evaluation order: rows top-to-bottom, columns
/// left-to-right, then the two diagonals. `evaluate` reports the first
/// complete line in this order.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Result of evaluating a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line; `line` is the first complete line in
    /// `WINNING_LINES` order.
    Win { player: Player, line: [usize; 3] },
    /// All cells occupied with no complete line
    Draw,
    /// Empty cells remain and nobody has won
    InProgress,
}

impl Outcome {
    /// The winning player, if any
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }
}

/// Evaluate a board: scan the 8 lines in fixed order and report the first
/// complete one, a draw when the board is full, or in-progress otherwise.
pub fn evaluate(cells: &[Cell; 9]) -> Outcome {
    for line in WINNING_LINES {
        let first = cells[line[0]];
        if let Some(player) = first.to_player()
            && first == cells[line[1]]
            && first == cells[line[2]]
        {
            return Outcome::Win { player, line };
        }
    }

    if cells.contains(&Cell::Empty) {
        Outcome::InProgress
    } else {
        Outcome::Draw
    }
}

/// Find all positions that would immediately complete a line for the player
pub fn winning_moves(cells: &[Cell; 9], player: Player) -> Vec<usize> {
    let target = player.to_cell();
    let mut moves = Vec::new();

    for line in WINNING_LINES {
        let mut count = 0;
        let mut empty_pos = None;
        for &idx in &line {
            match cells[idx] {
                Cell::Empty => empty_pos = Some(idx),
                c if c == target => count += 1,
                _ => {}
            }
        }
        if count == 2
            && let Some(pos) = empty_pos
            && !moves.contains(&pos)
        {
            moves.push(pos);
        }
    }

    moves
}
