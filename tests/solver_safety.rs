//! Safety properties of the automated player across random play

use minigames::tictactoe::{Board, Cell, Difficulty, Outcome, Player, Solver, winning_moves};
use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};

/// Whether the opponent of `board.to_move` could win immediately after the
/// mover plays `pos`
fn opponent_wins_after(board: &Board, pos: usize) -> bool {
    let after = board.make_move(pos).expect("candidate cell is empty");
    !winning_moves(&after.cells, after.to_move).is_empty()
}

/// The hard policy may only hand the opponent an immediate win when every
/// alternative did too (a forced loss, e.g. against a double threat).
#[test]
fn hard_never_gifts_an_avoidable_immediate_win() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut solver = Solver::with_seed(2024);

    for _ in 0..200 {
        let mut board = Board::new();
        // The random side opens; the hard side answers every other ply.
        loop {
            if board.is_terminal() {
                break;
            }
            let pos = *board
                .empty_positions()
                .choose(&mut rng)
                .expect("non-terminal board has empty cells");
            board = board.make_move(pos).unwrap();

            if board.is_terminal() {
                break;
            }
            let chosen = solver
                .choose_move(&board, Difficulty::Hard)
                .expect("non-terminal board has a move");

            if opponent_wins_after(&board, chosen) {
                for alternative in board.empty_positions() {
                    assert!(
                        opponent_wins_after(&board, alternative),
                        "hard chose {chosen} allowing an immediate loss while \
                         {alternative} did not, on:\n{board}"
                    );
                }
            }

            board = board.make_move(chosen).unwrap();
        }
    }
}

/// Perfect play never loses to a random opponent from the empty board
#[test]
fn hard_never_loses_a_full_game() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut solver = Solver::with_seed(7);

    for game in 0..100 {
        let mut board = Board::new();
        // Alternate who opens so the hard side plays both X and O
        let hard_player = if game % 2 == 0 { Player::X } else { Player::O };

        while !board.is_terminal() {
            let pos = if board.to_move == hard_player {
                solver
                    .choose_move(&board, Difficulty::Hard)
                    .expect("non-terminal board has a move")
            } else {
                *board
                    .empty_positions()
                    .choose(&mut rng)
                    .expect("non-terminal board has empty cells")
            };
            board = board.make_move(pos).unwrap();
        }

        if let Outcome::Win { player, .. } = board.outcome() {
            assert_eq!(
                player, hard_player,
                "perfect play lost game {game}:\n{board}"
            );
        }
    }
}

#[test]
fn choose_move_leaves_the_board_bit_identical() {
    let mut solver = Solver::with_seed(11);
    let boards = [
        Board::new(),
        Board::from_string("XX..O....").unwrap(),
        Board::from_string("XOXXO.O..").unwrap(),
        Board::from_string("XOXXOOOXX").unwrap(),
    ];

    for board in boards {
        let snapshot = board;
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let _ = solver.choose_move(&board, difficulty);
            assert_eq!(board, snapshot, "board mutated by {difficulty:?}");
        }
    }
}

#[test]
fn full_board_yields_no_move_at_any_difficulty() {
    let board = Board::from_string("XOXXOOOXX").unwrap();
    assert!(board.is_full());
    let mut solver = Solver::with_seed(3);
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        assert_eq!(solver.choose_move(&board, difficulty), None);
    }
}

/// X and X on the top row with O in the center: position 2 is the sole
/// optimal reply for the side to move
#[test]
fn top_row_threat_forces_position_two() {
    let board = Board::from_string("XX..O....").unwrap();
    let mut solver = Solver::with_seed(0);
    assert_eq!(solver.choose_move(&board, Difficulty::Hard), Some(2));
    // The chosen cell was empty on the untouched input board
    assert_eq!(board.get(2), Cell::Empty);
}
