//! Solvable-puzzle generation by rejection sampling

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use super::board::TileBoard;

/// Smallest supported side length
pub const MIN_SIZE: usize = 2;

/// Largest supported side length (tile values are stored as `u8`)
pub const MAX_SIZE: usize = 15;

/// Produces randomized, guaranteed-solvable starting arrangements.
///
/// Generation shuffles a full permutation and rejects it unless
/// [`TileBoard::is_solvable`] accepts it. Exactly half of all permutations
/// are solvable, so the loop terminates after two attempts on average.
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    rng: StdRng,
}

impl PuzzleGenerator {
    /// Create a generator with an OS-derived random seed
    pub fn new() -> Self {
        Self::with_seed(rand::random::<u64>())
    }

    /// Create a generator with an explicit seed
    pub fn with_seed(seed: u64) -> Self {
        PuzzleGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a uniformly random solvable arrangement of the given side
    /// length.
    ///
    /// # Errors
    ///
    /// Returns error if `size` is outside `MIN_SIZE..=MAX_SIZE`.
    pub fn generate(&mut self, size: usize) -> crate::Result<TileBoard> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(crate::Error::InvalidPuzzleSize { size });
        }

        let cell_count = size * size;
        let mut tiles: Vec<Option<u8>> = (1..cell_count as u8).map(Some).collect();
        tiles.push(None);

        loop {
            tiles.shuffle(&mut self.rng);
            let board = TileBoard::from_generated(size, tiles.clone());
            if board.is_solvable() {
                return Ok(board);
            }
        }
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}
