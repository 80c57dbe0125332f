//! A* with solvability detection by a twin search.
//!
//! Two frontiers run in strict alternation: one seeded with the initial board,
//! one with its [`Board::twin`]. Exactly one of the two boards is solvable, so
//! exactly one frontier can reach the goal:
//! - the initial frontier reaching it yields an optimal solution,
//! - the twin frontier reaching it proves the initial board unsolvable.
//!
//! Each round performs one step on the initial frontier, then one on the twin,
//! so which frontier finishes first is deterministic.

use tracing::{debug, info_span, trace};

use crate::config::{ResourceCounts, SearchError, SolverConfig};
use crate::core::board::Board;
use crate::search::astar::{AStar, Step};
use crate::search::resources::{Frontier, ResourceTracker};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Boards from the initial board to the goal, inclusive.
    Solved { path: Vec<Board> },
    Unsolvable,
}

/// Solves one board to completion on construction.
#[derive(Debug, Clone)]
pub struct Solver {
    initial: Board,
    outcome: Outcome,
    rounds: u64,
    counts: ResourceCounts,
}

impl Solver {
    /// Solve `initial` with the default configuration (Manhattan priority,
    /// parent-only pruning, no budgets).
    pub fn new(initial: Board) -> Result<Self, SearchError> {
        Self::with_config(initial, &SolverConfig::default())
    }

    pub fn with_config(initial: Board, config: &SolverConfig) -> Result<Self, SearchError> {
        let span = info_span!("solve", dimension = initial.dimension());
        let _guard = span.enter();

        let mut tracker = ResourceTracker::new(config.limits);
        let mut main = AStar::new(Frontier::Initial, initial.clone(), config, &mut tracker)?;
        let mut twin = AStar::new(Frontier::Twin, initial.twin(), config, &mut tracker)?;
        debug!(
            heuristic = config.heuristic.name(),
            duplicates = ?config.duplicates,
            manhattan = initial.manhattan(),
            "search started"
        );

        let mut rounds: u64 = 0;
        let outcome = loop {
            rounds += 1;

            let main_step = main.step(&mut tracker)?;
            if let Step::Goal(id) = main_step {
                break Outcome::Solved {
                    path: main.path_to(id),
                };
            }

            let twin_step = twin.step(&mut tracker)?;
            if let Step::Goal(_) = twin_step {
                break Outcome::Unsolvable;
            }

            if main_step == Step::Exhausted && twin_step == Step::Exhausted {
                return Err(SearchError::Exhausted);
            }

            trace!(
                rounds,
                open_initial = main.open_len(),
                open_twin = twin.open_len(),
                "round finished"
            );
        };

        let counts = tracker.counts();
        let spent_initial = tracker.frontier_counts(Frontier::Initial);
        let spent_twin = tracker.frontier_counts(Frontier::Twin);
        debug!(
            rounds,
            solvable = matches!(outcome, Outcome::Solved { .. }),
            popped_initial = spent_initial.expansions,
            popped_twin = spent_twin.expansions,
            nodes_initial = spent_initial.nodes,
            nodes_twin = spent_twin.nodes,
            edges = counts.edges,
            "search finished"
        );

        Ok(Self {
            initial,
            outcome,
            rounds,
            counts,
        })
    }

    pub fn initial(&self) -> &Board {
        &self.initial
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn is_solvable(&self) -> bool {
        matches!(self.outcome, Outcome::Solved { .. })
    }

    /// Minimum number of moves, or `None` if the board is unsolvable.
    pub fn moves(&self) -> Option<usize> {
        self.solution().map(|path| path.len() - 1)
    }

    /// A shortest sequence of boards from the initial board to the goal, or
    /// `None` if the board is unsolvable.
    pub fn solution(&self) -> Option<&[Board]> {
        match &self.outcome {
            Outcome::Solved { path } => Some(path),
            Outcome::Unsolvable => None,
        }
    }

    /// Lockstep rounds executed (one step per frontier per round).
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    pub fn counts(&self) -> ResourceCounts {
        self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DuplicatePolicy, ResourceLimits};

    fn board(rows: &[&[u32]]) -> Board {
        Board::new(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn goal_board_needs_zero_moves() {
        let b = board(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 0]]);
        let s = Solver::new(b.clone()).unwrap();
        assert!(s.is_solvable());
        assert_eq!(s.moves(), Some(0));
        assert_eq!(s.solution(), Some(&[b][..]));
        assert_eq!(s.rounds(), 1);
    }

    #[test]
    fn two_move_board() {
        let s = Solver::new(board(&[&[1, 2, 3], &[4, 5, 6], &[0, 7, 8]])).unwrap();
        assert!(s.is_solvable());
        assert_eq!(s.moves(), Some(2));
        assert_eq!(s.solution().map(<[Board]>::len), Some(3));
    }

    #[test]
    fn swapped_tiles_are_unsolvable() {
        let s = Solver::new(board(&[&[1, 2, 3], &[4, 5, 6], &[8, 7, 0]])).unwrap();
        assert!(!s.is_solvable());
        assert_eq!(s.moves(), None);
        assert_eq!(s.solution(), None);
        assert_eq!(s.outcome(), &Outcome::Unsolvable);
    }

    #[test]
    fn closed_set_agrees_with_parent_pruning() {
        let b = board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]);
        let plain = Solver::new(b.clone()).unwrap();
        let closed = Solver::with_config(
            b,
            &SolverConfig::default().with_duplicates(DuplicatePolicy::ClosedSet),
        )
        .unwrap();
        assert_eq!(plain.moves(), closed.moves());
        assert!(plain.is_solvable());
    }

    #[test]
    fn closed_set_detects_unsolvable_2x2() {
        let cfg = SolverConfig::default().with_duplicates(DuplicatePolicy::ClosedSet);
        let s = Solver::with_config(board(&[&[0, 2], &[3, 1]]), &cfg).unwrap();
        assert!(!s.is_solvable());
    }

    #[test]
    fn node_budget_aborts_search() {
        let cfg = SolverConfig::default().with_limits(ResourceLimits {
            max_nodes: 10,
            ..ResourceLimits::UNBOUNDED
        });
        let err = Solver::with_config(board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]), &cfg)
            .unwrap_err();
        assert!(matches!(
            err,
            SearchError::LimitExceeded { metric: "nodes", .. }
        ));
        let SearchError::LimitExceeded { observed, counts, .. } = err else {
            unreachable!();
        };
        assert_eq!(observed, 11);
        assert_eq!(counts.nodes, 11);
    }
}
