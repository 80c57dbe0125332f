/// A (row, col) cell on an n×n grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Cell of the row-major index `idx` on a grid of side `n`.
    #[inline]
    pub fn from_index(idx: usize, n: usize) -> Self {
        Self::new(idx / n, idx % n)
    }

    #[inline]
    pub fn index(self, n: usize) -> usize {
        self.row * n + self.col
    }

    #[inline]
    pub fn manhattan(self, other: Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Apply `step`, returning `None` if the result leaves the n×n grid.
    #[inline]
    pub fn step(self, step: Step, n: usize) -> Option<Cell> {
        let row = self.row.checked_add_signed(step.drow)?;
        let col = self.col.checked_add_signed(step.dcol)?;
        (row < n && col < n).then_some(Cell { row, col })
    }
}

/// A unit displacement of the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step {
    pub drow: isize,
    pub dcol: isize,
}

/// Blank moves in generation order: down, up, right, left.
///
/// The order is fixed so that searches are reproducible.
pub const BLANK_STEPS: [Step; 4] = [
    Step { drow: 1, dcol: 0 },
    Step { drow: -1, dcol: 0 },
    Step { drow: 0, dcol: 1 },
    Step { drow: 0, dcol: -1 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_is_bounds_checked() {
        let corner = Cell::new(0, 0);
        assert_eq!(corner.step(BLANK_STEPS[0], 3), Some(Cell::new(1, 0)));
        assert_eq!(corner.step(BLANK_STEPS[1], 3), None);
        assert_eq!(corner.step(BLANK_STEPS[3], 3), None);
        assert_eq!(Cell::new(2, 2).step(BLANK_STEPS[2], 3), None);
    }

    #[test]
    fn index_roundtrip() {
        for idx in 0..16 {
            assert_eq!(Cell::from_index(idx, 4).index(4), idx);
        }
        assert_eq!(Cell::new(2, 1).manhattan(Cell::new(0, 2)), 3);
    }
}
