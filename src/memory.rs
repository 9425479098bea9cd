//! Memory-match card game engine
//!
//! The shell owns the reveal delay for mismatched pairs: after a
//! [`FlipOutcome::Mismatched`] result the pair stays face up and further
//! flips are rejected until the shell calls [`MemoryGame::conceal_mismatch`].

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use serde::{Deserialize, Serialize};

/// Number of symbol pairs in the default deck
pub const DEFAULT_PAIR_COUNT: usize = 8;

/// An abstract card face; the shell maps symbols to artwork
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(pub u8);

/// A card in the deck, identified by its position-independent id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: usize,
    pub symbol: Symbol,
    pub face_up: bool,
}

/// Result of flipping a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// First card of a pair turned face up
    FirstUp,
    /// Second card matched the first; the pair stays face up permanently
    Matched(Symbol),
    /// Second card did not match; both stay face up until concealed
    Mismatched(Symbol, Symbol),
}

/// Pair-matching game state
#[derive(Debug, Clone)]
pub struct MemoryGame {
    cards: Vec<Card>,
    pending: Vec<usize>,
    solved: Vec<Symbol>,
    moves: usize,
    best_score: Option<usize>,
    rng: StdRng,
}

impl MemoryGame {
    /// Create a shuffled deck of `pair_count` symbol pairs with an
    /// OS-derived random seed
    pub fn new(pair_count: usize) -> Self {
        Self::with_seed(pair_count, rand::random::<u64>())
    }

    /// Create a shuffled deck with an explicit seed
    pub fn with_seed(pair_count: usize, seed: u64) -> Self {
        let mut game = MemoryGame {
            cards: Vec::new(),
            pending: Vec::new(),
            solved: Vec::new(),
            moves: 0,
            best_score: None,
            rng: StdRng::seed_from_u64(seed),
        };
        game.deal(pair_count);
        game
    }

    fn deal(&mut self, pair_count: usize) {
        let mut symbols: Vec<Symbol> = (0..pair_count as u8)
            .flat_map(|s| [Symbol(s), Symbol(s)])
            .collect();
        symbols.shuffle(&mut self.rng);

        self.cards = symbols
            .into_iter()
            .enumerate()
            .map(|(id, symbol)| Card {
                id,
                symbol,
                face_up: false,
            })
            .collect();
        self.pending.clear();
        self.solved.clear();
        self.moves = 0;
    }

    /// Reshuffle and start over; the session-best score is kept
    pub fn reset(&mut self) {
        let pair_count = self.cards.len() / 2;
        self.deal(pair_count);
    }

    /// Turn a card face up.
    ///
    /// # Errors
    ///
    /// Returns error if a mismatched pair is still awaiting
    /// [`conceal_mismatch`](Self::conceal_mismatch), the id is unknown, or
    /// the card is already face up (including solved cards).
    pub fn flip(&mut self, id: usize) -> crate::Result<FlipOutcome> {
        if self.pending.len() == 2 {
            return Err(crate::Error::PairPending);
        }
        let card = *self
            .cards
            .get(id)
            .ok_or(crate::Error::UnknownCard { id })?;
        if card.face_up {
            return Err(crate::Error::CardFaceUp { id });
        }

        self.cards[id].face_up = true;
        self.pending.push(id);

        if self.pending.len() < 2 {
            return Ok(FlipOutcome::FirstUp);
        }

        // Second card of the pair: this completes a move
        self.moves += 1;
        let first = self.cards[self.pending[0]];
        let second = self.cards[self.pending[1]];

        if first.symbol == second.symbol {
            self.solved.push(first.symbol);
            self.pending.clear();
            if self.is_complete() {
                let beats_best = self.best_score.is_none_or(|best| self.moves < best);
                if beats_best {
                    self.best_score = Some(self.moves);
                }
            }
            Ok(FlipOutcome::Matched(first.symbol))
        } else {
            Ok(FlipOutcome::Mismatched(first.symbol, second.symbol))
        }
    }

    /// Turn a mismatched pair back face down. No-op when no mismatch is
    /// pending.
    pub fn conceal_mismatch(&mut self) {
        if self.pending.len() == 2 {
            for &id in &self.pending {
                self.cards[id].face_up = false;
            }
            self.pending.clear();
        }
    }

    /// All cards in board order
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Symbols whose pairs have been found
    pub fn solved(&self) -> &[Symbol] {
        &self.solved
    }

    /// Completed moves (each second flip counts as one move)
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Fewest moves over completed games this session
    pub fn best_score(&self) -> Option<usize> {
        self.best_score
    }

    /// Whether every pair has been found
    pub fn is_complete(&self) -> bool {
        self.solved.len() * 2 == self.cards.len()
    }
}
