//! Plain-text puzzle files.
//!
//! A file holds whitespace-separated integers: the dimension `n` first, then
//! `n²` tiles in row-major order with `0` for the blank:
//!
//! ```text
//! 3
//!  0  1  3
//!  4  2  5
//!  7  8  6
//! ```
//!
//! This is also exactly what [`Board`]'s `Display` produces.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::core::board::{cell_count, Board, BoardError};
use crate::puzzles;

/// Prefix selecting a built-in puzzle instead of a file in [`load_board`].
pub const BUILTIN_PREFIX: &str = "builtin:";

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("missing dimension")]
    MissingDimension,
    #[error("token {index} ({token:?}) is not a non-negative integer")]
    BadInteger { index: usize, token: String },
    #[error("expected {expected} tiles after the dimension, found {found}")]
    TileCount { expected: usize, found: usize },
    #[error("unknown built-in puzzle {0:?}")]
    UnknownPuzzle(String),
    #[error("invalid board: {0}")]
    Board(#[from] BoardError),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Parse a board from the text format described in the module docs.
pub fn parse_board(text: &str) -> Result<Board, FormatError> {
    let mut values = Vec::new();
    for (index, token) in text.split_whitespace().enumerate() {
        let value: u32 = token.parse().map_err(|_| FormatError::BadInteger {
            index,
            token: token.to_string(),
        })?;
        values.push(value);
    }

    let (&dimension, tiles) = values.split_first().ok_or(FormatError::MissingDimension)?;
    let dimension = dimension as usize;
    let expected = cell_count(dimension)? as usize;
    if tiles.len() != expected {
        return Err(FormatError::TileCount {
            expected,
            found: tiles.len(),
        });
    }

    Ok(Board::from_row_major(dimension, tiles.to_vec())?)
}

pub fn read_board(path: &Path) -> Result<Board, FormatError> {
    let text = fs::read_to_string(path).map_err(|source| FormatError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_board(&text)
}

/// Load `builtin:NAME` from the built-in table, anything else from a file.
pub fn load_board(source: &str) -> Result<Board, FormatError> {
    match source.strip_prefix(BUILTIN_PREFIX) {
        Some(name) => puzzles::by_name(name)
            .map(|p| p.board)
            .ok_or_else(|| FormatError::UnknownPuzzle(name.to_string())),
        None => read_board(Path::new(source)),
    }
}
