//! Tile arrangement, move legality, solvability, and win checking

use std::fmt;

use serde::{Deserialize, Serialize};

/// Check whether the tile at `from` may slide into the empty slot at `empty`
/// on a `size` x `size` grid: the two indices must be grid-adjacent, meaning
/// same row with column distance 1 or same column with row distance 1.
/// Diagonal neighbors are not adjacent.
pub fn is_legal_move(from: usize, empty: usize, size: usize) -> bool {
    let (row, col) = (from / size, from % size);
    let (empty_row, empty_col) = (empty / size, empty % size);

    (row == empty_row && col.abs_diff(empty_col) == 1)
        || (col == empty_col && row.abs_diff(empty_row) == 1)
}

/// A square sliding-puzzle arrangement: a permutation of `1..=size²−1` plus
/// exactly one empty slot (`None`), stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileBoard {
    size: usize,
    tiles: Vec<Option<u8>>,
    moves: usize,
}

impl TileBoard {
    /// The canonical goal arrangement `{1, 2, ..., size²−1, Empty}`
    pub fn solved(size: usize) -> Self {
        let cell_count = size * size;
        let mut tiles: Vec<Option<u8>> = (1..cell_count as u8).map(Some).collect();
        tiles.push(None);
        TileBoard {
            size,
            tiles,
            moves: 0,
        }
    }

    /// Build a board from an explicit tile list.
    ///
    /// # Errors
    ///
    /// Returns error if the list length is not `size²`, the empty slot does
    /// not appear exactly once, or the tile values are not exactly
    /// `1..=size²−1` each appearing once.
    pub fn from_tiles(size: usize, tiles: Vec<Option<u8>>) -> crate::Result<Self> {
        let cell_count = size * size;
        if tiles.len() != cell_count {
            return Err(crate::Error::InvalidTileCount {
                expected: cell_count,
                got: tiles.len(),
            });
        }

        let empties = tiles.iter().filter(|t| t.is_none()).count();
        if empties != 1 {
            return Err(crate::Error::WrongEmptyCount { found: empties });
        }

        let mut seen = vec![false; cell_count];
        for value in tiles.iter().flatten() {
            let value = *value;
            if !(1..cell_count as u8).contains(&value) {
                return Err(crate::Error::InvalidTileValue { value, size });
            }
            if seen[value as usize] {
                return Err(crate::Error::DuplicateTile { value });
            }
            seen[value as usize] = true;
        }

        Ok(TileBoard {
            size,
            tiles,
            moves: 0,
        })
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// The tiles in row-major order
    pub fn tiles(&self) -> &[Option<u8>] {
        &self.tiles
    }

    /// Number of successful slides since construction or the last reset
    pub fn move_count(&self) -> usize {
        self.moves
    }

    /// Index of the empty slot
    pub fn empty_index(&self) -> usize {
        self.tiles
            .iter()
            .position(|t| t.is_none())
            .expect("a TileBoard always holds exactly one empty slot")
    }

    /// Check whether the tile at `from` may slide into the empty slot
    pub fn can_slide(&self, from: usize) -> bool {
        from < self.tiles.len() && is_legal_move(from, self.empty_index(), self.size)
    }

    /// Slide the tile at `from` into the empty slot.
    ///
    /// # Errors
    ///
    /// Returns error if `from` is out of bounds or not grid-adjacent to the
    /// empty slot.
    pub fn slide(&mut self, from: usize) -> crate::Result<()> {
        if from >= self.tiles.len() {
            return Err(crate::Error::TileIndexOutOfBounds {
                index: from,
                size: self.size,
            });
        }
        let empty = self.empty_index();
        if !is_legal_move(from, empty, self.size) {
            return Err(crate::Error::IllegalSlide { from, empty });
        }
        self.tiles.swap(from, empty);
        self.moves += 1;
        Ok(())
    }

    /// Check whether the arrangement is the canonical goal: tile `i + 1` at
    /// every index `i` with the empty slot last.
    pub fn is_solved(&self) -> bool {
        let last = self.tiles.len() - 1;
        self.tiles[..last]
            .iter()
            .enumerate()
            .all(|(i, &t)| t == Some(i as u8 + 1))
            && self.tiles[last].is_none()
    }

    /// Check whether the arrangement can reach the canonical goal.
    ///
    /// Counts inversions (pairs of tiles out of relative numeric order,
    /// skipping the empty slot) and combines their parity with the empty
    /// slot's 1-indexed row distance from the bottom edge: an even row
    /// distance requires an odd inversion count, an odd row distance an even
    /// one. This is the standard parity rule for square even-width boards.
    pub fn is_solvable(&self) -> bool {
        let mut inversions = 0usize;
        for (i, tile) in self.tiles.iter().enumerate() {
            let Some(a) = tile else { continue };
            for later in &self.tiles[i + 1..] {
                if let Some(b) = later
                    && a > b
                {
                    inversions += 1;
                }
            }
        }

        let empty_row_from_bottom = self.size - self.empty_index() / self.size;
        if empty_row_from_bottom.is_multiple_of(2) {
            !inversions.is_multiple_of(2)
        } else {
            inversions.is_multiple_of(2)
        }
    }

    pub(crate) fn from_generated(size: usize, tiles: Vec<Option<u8>>) -> Self {
        TileBoard {
            size,
            tiles,
            moves: 0,
        }
    }
}

impl fmt::Display for TileBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.size * self.size - 1).to_string().len();
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.tiles[row * self.size + col] {
                    Some(value) => write!(f, "{value:>width$}")?,
                    None => write!(f, "{:>width$}", ".")?,
                }
            }
            if row + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_4(values: [u8; 16]) -> TileBoard {
        let tiles = values
            .iter()
            .map(|&v| if v == 0 { None } else { Some(v) })
            .collect();
        TileBoard::from_tiles(4, tiles).expect("valid tile list")
    }

    #[test]
    fn solved_board_is_canonical() {
        let board = TileBoard::solved(4);
        assert!(board.is_solved());
        assert!(board.is_solvable());
        assert_eq!(board.empty_index(), 15);
        assert_eq!(board.tiles()[0], Some(1));
        assert_eq!(board.tiles()[14], Some(15));
    }

    #[test]
    fn single_transpositions_are_not_solved() {
        let solved = TileBoard::solved(4);
        for i in 0..16 {
            for j in (i + 1)..16 {
                let mut tiles = solved.tiles().to_vec();
                tiles.swap(i, j);
                let board = TileBoard::from_tiles(4, tiles).unwrap();
                assert!(!board.is_solved(), "swap of {i} and {j} reported solved");
            }
        }
    }

    #[test]
    fn from_tiles_validates_shape() {
        assert!(matches!(
            TileBoard::from_tiles(4, vec![Some(1); 15]),
            Err(crate::Error::InvalidTileCount { .. })
        ));

        let no_empty: Vec<Option<u8>> = (1..=16).map(Some).collect();
        assert!(matches!(
            TileBoard::from_tiles(4, no_empty),
            Err(crate::Error::WrongEmptyCount { found: 0 })
        ));

        let mut two_empty: Vec<Option<u8>> = (1..15).map(Some).collect();
        two_empty.push(None);
        two_empty.push(None);
        assert!(matches!(
            TileBoard::from_tiles(4, two_empty),
            Err(crate::Error::WrongEmptyCount { found: 2 })
        ));

        let mut duplicate: Vec<Option<u8>> = (1..15).map(Some).collect();
        duplicate.push(Some(3));
        duplicate.push(None);
        assert!(matches!(
            TileBoard::from_tiles(4, duplicate),
            Err(crate::Error::DuplicateTile { value: 3 })
        ));

        let mut out_of_range: Vec<Option<u8>> = (1..15).map(Some).collect();
        out_of_range.push(Some(16));
        out_of_range.push(None);
        assert!(matches!(
            TileBoard::from_tiles(4, out_of_range),
            Err(crate::Error::InvalidTileValue { value: 16, .. })
        ));
    }

    #[test]
    fn legal_moves_are_row_and_column_neighbors() {
        // Empty at index 5 (row 1, col 1) on a 4x4 grid
        assert!(is_legal_move(1, 5, 4)); // above
        assert!(is_legal_move(9, 5, 4)); // below
        assert!(is_legal_move(4, 5, 4)); // left
        assert!(is_legal_move(6, 5, 4)); // right

        assert!(!is_legal_move(0, 5, 4)); // diagonal
        assert!(!is_legal_move(2, 5, 4)); // diagonal
        assert!(!is_legal_move(8, 5, 4)); // diagonal
        assert!(!is_legal_move(10, 5, 4)); // diagonal
        assert!(!is_legal_move(13, 5, 4)); // two rows away
        assert!(!is_legal_move(5, 5, 4)); // itself
    }

    #[test]
    fn row_wrap_is_not_adjacent() {
        // Index 3 is the end of row 0, index 4 starts row 1: column distance
        // is 1 in flat indexing but they are on different rows and columns.
        assert!(!is_legal_move(3, 4, 4));
        assert!(!is_legal_move(4, 3, 4));
    }

    #[test]
    fn slide_swaps_tile_into_empty_slot() {
        let mut board = TileBoard::solved(4);
        assert!(board.can_slide(14));
        board.slide(14).unwrap();
        assert_eq!(board.empty_index(), 14);
        assert_eq!(board.tiles()[15], Some(15));
        assert_eq!(board.move_count(), 1);
        assert!(!board.is_solved());

        // Slide it back
        board.slide(15).unwrap();
        assert!(board.is_solved());
        assert_eq!(board.move_count(), 2);
    }

    #[test]
    fn slide_rejects_illegal_moves() {
        let mut board = TileBoard::solved(4);
        assert!(matches!(
            board.slide(0),
            Err(crate::Error::IllegalSlide { from: 0, empty: 15 })
        ));
        assert!(matches!(
            board.slide(16),
            Err(crate::Error::TileIndexOutOfBounds { index: 16, .. })
        ));
        assert_eq!(board.move_count(), 0);
    }

    #[test]
    fn slides_preserve_solvability() {
        let mut board = TileBoard::solved(4);
        for from in [14, 10, 11, 15, 14, 13] {
            board.slide(from).unwrap();
            assert!(board.is_solvable(), "board became unsolvable after slide");
        }
    }

    #[test]
    fn known_solvable_and_unsolvable_arrangements() {
        // The goal with tiles 14 and 15 swapped is the classic unsolvable
        // "15 puzzle" configuration.
        let mut swapped = TileBoard::solved(4).tiles().to_vec();
        swapped.swap(13, 14);
        let board = TileBoard::from_tiles(4, swapped).unwrap();
        assert!(!board.is_solvable());

        assert!(TileBoard::solved(4).is_solvable());

        // One legal slide away from the goal: still solvable.
        let one_away = board_4([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 0, 15]);
        assert!(one_away.is_solvable());
        assert!(!one_away.is_solved());
    }

    #[test]
    fn parity_rule_matches_empty_row_position() {
        // Empty in the bottom row (row distance 1, odd): inversions must be even.
        let solved = TileBoard::solved(4);
        assert_eq!(solved.empty_index() / 4, 3);
        assert!(solved.is_solvable());

        // Moving the empty up one row flips the required inversion parity;
        // the slide also changes the inversion count, keeping it solvable.
        let mut board = TileBoard::solved(4);
        board.slide(11).unwrap();
        assert_eq!(board.empty_index() / 4, 2);
        assert!(board.is_solvable());
    }

    #[test]
    fn display_lays_out_grid() {
        let board = TileBoard::solved(2);
        assert_eq!(format!("{board}"), "1 2\n3 .");
    }
}
