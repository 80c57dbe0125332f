use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::coord::{Cell, BLANK_STEPS};

/// Tile value used for the blank cell.
pub const BLANK: u32 = 0;

/// Reasons a grid is rejected by [`Board::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("grid is empty")]
    Empty,
    #[error("grid is not square: row {row} has {len} cells, expected {dimension}")]
    NotSquare {
        row: usize,
        len: usize,
        dimension: usize,
    },
    #[error("expected {expected} tiles, found {found}")]
    WrongTileCount { expected: usize, found: usize },
    #[error("dimension {dimension} is too large: its tiles cannot be numbered in u32")]
    TooLarge { dimension: usize },
    #[error("dimension {dimension} is too small (need at least 2)")]
    TooSmall { dimension: usize },
    #[error("grid has no blank cell")]
    NoBlank,
    #[error("tile {tile} appears more than once")]
    DuplicateTile { tile: u32 },
    #[error("tile {tile} is out of range for dimension {dimension}")]
    TileOutOfRange { tile: u32, dimension: usize },
}

/// Number of cells of an n×n board, if every tile `0..n²` fits in a `u32`.
pub(crate) fn cell_count(dimension: usize) -> Result<u32, BoardError> {
    dimension
        .checked_mul(dimension)
        .and_then(|cells| u32::try_from(cells).ok())
        .ok_or(BoardError::TooLarge { dimension })
}

/// An immutable n×n sliding-tile configuration.
///
/// Tiles are stored row-major; `0` is the blank. Every transformation
/// ([`Board::neighbors`], [`Board::twin`]) returns a fresh board with its own
/// storage, so boards never alias each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr", into = "BoardRepr")]
pub struct Board {
    dimension: usize,
    tiles: Box<[u32]>,
    blank: Cell,
}

impl Board {
    /// Build a board from rows of tiles, where `rows[r][c]` is the tile at (r, c).
    ///
    /// The values must be a permutation of `0..n²`.
    pub fn new(rows: Vec<Vec<u32>>) -> Result<Self, BoardError> {
        let dimension = rows.len();
        if dimension == 0 {
            return Err(BoardError::Empty);
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != dimension {
                return Err(BoardError::NotSquare {
                    row,
                    len: cells.len(),
                    dimension,
                });
            }
        }
        Self::from_row_major(dimension, rows.into_iter().flatten().collect())
    }

    /// Build a board from `dimension²` tiles in row-major order.
    pub fn from_row_major(dimension: usize, tiles: Vec<u32>) -> Result<Self, BoardError> {
        if dimension == 0 || tiles.is_empty() {
            return Err(BoardError::Empty);
        }
        let expected = cell_count(dimension)? as usize;
        if tiles.len() != expected {
            return Err(BoardError::WrongTileCount {
                expected,
                found: tiles.len(),
            });
        }
        if dimension < 2 {
            return Err(BoardError::TooSmall { dimension });
        }

        let cells = tiles.len();
        let mut seen = vec![false; cells];
        let mut blank = None;
        for (idx, &tile) in tiles.iter().enumerate() {
            let slot = tile as usize;
            if slot >= cells {
                return Err(BoardError::TileOutOfRange { tile, dimension });
            }
            if seen[slot] {
                return Err(BoardError::DuplicateTile { tile });
            }
            seen[slot] = true;
            if tile == BLANK {
                blank = Some(Cell::from_index(idx, dimension));
            }
        }
        let blank = blank.ok_or(BoardError::NoBlank)?;

        Ok(Self {
            dimension,
            tiles: tiles.into_boxed_slice(),
            blank,
        })
    }

    /// The solved board of side `dimension`: `1..n²` row-major, blank last.
    pub fn goal(dimension: usize) -> Result<Self, BoardError> {
        let cells = cell_count(dimension)?;
        let tiles = (1..cells).chain(std::iter::once(BLANK)).collect();
        Self::from_row_major(dimension, tiles)
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn blank(&self) -> Cell {
        self.blank
    }

    /// Tiles in row-major order.
    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.tiles.chunks(self.dimension)
    }

    /// Goal cell of a non-blank tile.
    #[inline]
    fn goal_cell(&self, tile: u32) -> Cell {
        Cell::from_index(tile as usize - 1, self.dimension)
    }

    /// Number of non-blank tiles out of place.
    pub fn hamming(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(idx, &tile)| tile != BLANK && tile as usize != idx + 1)
            .count()
    }

    /// Sum over non-blank tiles of the row and column offsets from their goal cells.
    ///
    /// A move changes this by exactly one, so it never overestimates the
    /// remaining number of moves.
    pub fn manhattan(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != BLANK)
            .map(|(idx, &tile)| Cell::from_index(idx, self.dimension).manhattan(self.goal_cell(tile)))
            .sum()
    }

    pub fn is_goal(&self) -> bool {
        self.hamming() == 0
    }

    /// Boards reachable by sliding one tile into the blank (2 to 4 of them).
    ///
    /// Generated in the order of [`BLANK_STEPS`]: blank down, up, right, left.
    pub fn neighbors(&self) -> Vec<Board> {
        let mut out = Vec::with_capacity(4);
        for step in BLANK_STEPS {
            if let Some(to) = self.blank.step(step, self.dimension) {
                out.push(self.with_blank_moved_to(to));
            }
        }
        out
    }

    fn with_blank_moved_to(&self, to: Cell) -> Board {
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank.index(self.dimension), to.index(self.dimension));
        Board {
            dimension: self.dimension,
            tiles,
            blank: to,
        }
    }

    /// This board with the first horizontally adjacent pair of non-blank tiles
    /// (row-major scan) exchanged.
    ///
    /// At least one row never contains the blank, so the pair always exists.
    /// The swap flips permutation parity: exactly one of a board and its twin
    /// is solvable. `twin` is an involution.
    pub fn twin(&self) -> Board {
        let n = self.dimension;
        let mut tiles = self.tiles.clone();
        let pair = (0..n)
            .flat_map(|row| (0..n - 1).map(move |col| row * n + col))
            .find(|&idx| tiles[idx] != BLANK && tiles[idx + 1] != BLANK);
        if let Some(idx) = pair {
            tiles.swap(idx, idx + 1);
        }
        Board {
            dimension: n,
            tiles,
            blank: self.blank,
        }
    }

    /// Number of pairs of non-blank tiles that appear in the wrong relative order.
    pub fn inversions(&self) -> usize {
        let tiles: Vec<u32> = self.tiles.iter().copied().filter(|&t| t != BLANK).collect();
        let mut count = 0;
        for (i, &a) in tiles.iter().enumerate() {
            count += tiles[i + 1..].iter().filter(|&&b| b < a).count();
        }
        count
    }

    /// Closed-form solvability test.
    ///
    /// Odd side: solvable iff the inversion count is even. Even side: solvable
    /// iff inversions plus the blank's row is odd.
    pub fn has_solvable_parity(&self) -> bool {
        let inversions = self.inversions();
        if self.dimension % 2 == 1 {
            inversions % 2 == 0
        } else {
            (inversions + self.blank.row) % 2 == 1
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.dimension)?;
        for row in self.rows() {
            for tile in row {
                write!(f, "{tile:>2} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Serialized shape of a [`Board`]: `{"tiles": [[1, 2], [3, 0]]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BoardRepr {
    tiles: Vec<Vec<u32>>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = BoardError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        Board::new(repr.tiles)
    }
}

impl From<Board> for BoardRepr {
    fn from(board: Board) -> Self {
        BoardRepr {
            tiles: board.rows().map(<[u32]>::to_vec).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&[u32]]) -> Board {
        Board::new(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn rejects_malformed_grids() {
        assert_eq!(Board::new(vec![]), Err(BoardError::Empty));
        assert_eq!(
            Board::new(vec![vec![1, 2], vec![0]]),
            Err(BoardError::NotSquare {
                row: 1,
                len: 1,
                dimension: 2
            })
        );
        assert_eq!(
            Board::new(vec![vec![0]]),
            Err(BoardError::TooSmall { dimension: 1 })
        );
        assert_eq!(
            Board::new(vec![vec![1, 2], vec![3, 3]]),
            Err(BoardError::DuplicateTile { tile: 3 })
        );
        assert_eq!(
            Board::new(vec![vec![1, 2], vec![3, 4]]),
            Err(BoardError::TileOutOfRange {
                tile: 4,
                dimension: 2
            })
        );
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        assert_eq!(
            Board::from_row_major(usize::MAX, vec![0]),
            Err(BoardError::TooLarge {
                dimension: usize::MAX
            })
        );
        // 65536² tiles no longer fit in u32.
        assert_eq!(
            Board::from_row_major(1 << 16, vec![0, 1, 2, 3]),
            Err(BoardError::TooLarge { dimension: 1 << 16 })
        );
        assert_eq!(
            Board::goal(usize::MAX),
            Err(BoardError::TooLarge {
                dimension: usize::MAX
            })
        );
        assert_eq!(
            Board::from_row_major(3, vec![0, 1, 2, 3]),
            Err(BoardError::WrongTileCount {
                expected: 9,
                found: 4
            })
        );
        assert_eq!(Board::goal(0), Err(BoardError::Empty));
        assert_eq!(Board::goal(1), Err(BoardError::TooSmall { dimension: 1 }));
    }

    #[test]
    fn metrics_match_hand_counts() {
        let b = board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]);
        assert_eq!(b.hamming(), 5);
        assert_eq!(b.manhattan(), 10);
        assert!(!b.is_goal());

        let g = Board::goal(3).unwrap();
        assert_eq!(g.hamming(), 0);
        assert_eq!(g.manhattan(), 0);
        assert!(g.is_goal());
    }

    #[test]
    fn neighbors_follow_down_up_right_left() {
        let b = board(&[&[1, 2, 3], &[4, 0, 5], &[7, 8, 6]]);
        let n = b.neighbors();
        assert_eq!(n.len(), 4);
        assert_eq!(n[0].blank(), Cell::new(2, 1));
        assert_eq!(n[1].blank(), Cell::new(0, 1));
        assert_eq!(n[2].blank(), Cell::new(1, 2));
        assert_eq!(n[3].blank(), Cell::new(1, 0));
        assert_eq!(n[2].manhattan(), 1);

        let corner = Board::goal(3).unwrap();
        assert_eq!(corner.neighbors().len(), 2);
    }

    #[test]
    fn twin_swaps_first_adjacent_pair() {
        let b = board(&[&[0, 1, 3], &[4, 2, 5], &[7, 8, 6]]);
        let t = b.twin();
        assert_eq!(t.tiles(), &[0, 3, 1, 4, 2, 5, 7, 8, 6]);
        assert_ne!(b, t);
        assert_eq!(t.twin(), b);
    }

    #[test]
    fn display_pads_tiles() {
        let b = board(&[&[1, 2, 3], &[4, 0, 5], &[7, 8, 6]]);
        assert_eq!(b.to_string(), "3\n 1  2  3 \n 4  0  5 \n 7  8  6 \n");
    }

    #[test]
    fn parity_of_known_boards() {
        assert!(Board::goal(3).unwrap().has_solvable_parity());
        assert!(Board::goal(4).unwrap().has_solvable_parity());
        assert!(!board(&[&[1, 2, 3], &[4, 5, 6], &[8, 7, 0]]).has_solvable_parity());
        assert!(!board(&[&[2, 1], &[3, 0]]).has_solvable_parity());
    }

    #[test]
    fn serde_revalidates() {
        let b = board(&[&[1, 2], &[0, 3]]);
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, r#"{"tiles":[[1,2],[0,3]]}"#);
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);

        let bad = serde_json::from_str::<Board>(r#"{"tiles":[[1,2],[3,4]]}"#);
        assert!(bad.is_err());
    }
}
