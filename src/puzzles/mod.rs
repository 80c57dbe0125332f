//! Built-in puzzles with known answers, used by tests and the CLIs.

use crate::core::board::Board;

/// A named instance and its optimal move count (`None` if unsolvable).
#[derive(Debug, Clone)]
pub struct BuiltInPuzzle {
    pub name: &'static str,
    pub board: Board,
    pub moves: Option<usize>,
}

type Entry = (&'static str, usize, &'static [u32], Option<usize>);

const PUZZLES: &[Entry] = &[
    ("goal3x3", 3, &[1, 2, 3, 4, 5, 6, 7, 8, 0], Some(0)),
    ("two_moves3x3", 3, &[1, 2, 3, 4, 5, 6, 0, 7, 8], Some(2)),
    ("center3x3", 3, &[1, 2, 3, 4, 0, 5, 7, 8, 6], Some(2)),
    ("four_moves3x3", 3, &[0, 1, 3, 4, 2, 5, 7, 8, 6], Some(4)),
    ("swapped3x3", 3, &[1, 2, 3, 4, 5, 6, 8, 7, 0], None),
    ("one_move2x2", 2, &[1, 2, 0, 3], Some(1)),
    ("swapped2x2", 2, &[2, 1, 3, 0], None),
    (
        "one_move4x4",
        4,
        &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 0, 15],
        Some(1),
    ),
];

fn build(&(name, dimension, tiles, moves): &Entry) -> BuiltInPuzzle {
    let board = Board::from_row_major(dimension, tiles.to_vec())
        .unwrap_or_else(|e| panic!("built-in puzzle {name} is malformed: {e}"));
    BuiltInPuzzle { name, board, moves }
}

/// Return a puzzle by name.
pub fn by_name(name: &str) -> Option<BuiltInPuzzle> {
    PUZZLES.iter().find(|p| p.0 == name).map(build)
}

/// All built-in puzzles, in table order.
pub fn all() -> Vec<BuiltInPuzzle> {
    PUZZLES.iter().map(build).collect()
}

/// Names of all built-in puzzles.
pub fn names() -> Vec<&'static str> {
    PUZZLES.iter().map(|p| p.0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_is_well_formed() {
        for p in all() {
            assert_eq!(
                p.board.has_solvable_parity(),
                p.moves.is_some(),
                "{}",
                p.name
            );
            if let Some(m) = p.moves {
                assert!(p.board.manhattan() <= m, "{}", p.name);
            }
        }
    }

    #[test]
    fn lookup_by_name() {
        assert!(by_name("goal3x3").unwrap().board.is_goal());
        assert!(by_name("nope").is_none());
        assert_eq!(names().len(), all().len());
    }
}
