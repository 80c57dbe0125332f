//! A single best-first frontier, advanced one expansion at a time.
//!
//! The solver owns two of these and interleaves their [`AStar::step`] calls.
//! On its own a frontier can also be driven to completion with [`AStar::run`].

use std::collections::BinaryHeap;

use rustc_hash::FxHashSet;

use crate::config::{DuplicatePolicy, Heuristic, SearchError, SolverConfig};
use crate::core::board::Board;
use crate::search::movegen::successors;
use crate::search::node::{NodeArena, NodeId, OpenEntry, SearchNode};
use crate::search::resources::{Frontier, Metric, ResourceTracker};

/// Result of one frontier step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The popped node is a goal.
    Goal(NodeId),
    /// The popped node was expanded (or skipped as already closed).
    Expanded,
    /// Nothing left to pop.
    Exhausted,
}

pub struct AStar {
    frontier: Frontier,
    heuristic: Heuristic,
    arena: NodeArena,
    open: BinaryHeap<OpenEntry>,
    closed: Option<FxHashSet<Board>>,
    next_seq: u64,
    expanded: u64,
}

impl AStar {
    /// Seed `frontier` with a zero-move node for `root`.
    pub fn new(
        frontier: Frontier,
        root: Board,
        config: &SolverConfig,
        tracker: &mut ResourceTracker,
    ) -> Result<Self, SearchError> {
        let closed = match config.duplicates {
            DuplicatePolicy::ParentOnly => None,
            DuplicatePolicy::ClosedSet => Some(FxHashSet::default()),
        };
        let mut astar = Self {
            frontier,
            heuristic: config.heuristic,
            arena: NodeArena::new(),
            open: BinaryHeap::new(),
            closed,
            next_seq: 0,
            expanded: 0,
        };
        astar.push(root, 0, None, tracker)?;
        Ok(astar)
    }

    /// Nodes popped and expanded so far.
    pub fn expanded(&self) -> u64 {
        self.expanded
    }

    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    pub fn node(&self, id: NodeId) -> &SearchNode {
        self.arena.get(id)
    }

    /// Boards from the root to `id`, inclusive.
    pub fn path_to(&self, id: NodeId) -> Vec<Board> {
        self.arena.path_to(id)
    }

    fn push(
        &mut self,
        board: Board,
        moves: usize,
        parent: Option<NodeId>,
        tracker: &mut ResourceTracker,
    ) -> Result<(), SearchError> {
        let priority = moves + self.heuristic.estimate(&board);
        let id = self.arena.alloc(
            SearchNode {
                board,
                moves,
                parent,
                priority,
            },
            self.frontier,
            tracker,
        )?;
        self.open.push(OpenEntry {
            priority,
            seq: self.next_seq,
            id,
        });
        self.next_seq += 1;
        Ok(())
    }

    /// Pop the minimum-priority node; report it if it is a goal, otherwise push
    /// its successors with one more move.
    pub fn step(&mut self, tracker: &mut ResourceTracker) -> Result<Step, SearchError> {
        let Some(entry) = self.open.pop() else {
            return Ok(Step::Exhausted);
        };
        tracker.charge(self.frontier, Metric::Expansions, 1)?;

        let node = self.arena.get(entry.id);
        if node.board.is_goal() {
            return Ok(Step::Goal(entry.id));
        }

        if let Some(closed) = self.closed.as_mut() {
            if closed.contains(&node.board) {
                return Ok(Step::Expanded);
            }
            closed
                .try_reserve(1)
                .map_err(|_| tracker.allocation_failed(self.frontier, "closed_set"))?;
            closed.insert(node.board.clone());
        }

        let moves = node.moves + 1;
        let next = successors(
            &node.board,
            self.arena.parent_board(entry.id),
            self.closed.as_ref(),
            self.frontier,
            tracker,
        )?;
        self.expanded += 1;
        for board in next {
            self.push(board, moves, Some(entry.id), tracker)?;
        }
        Ok(Step::Expanded)
    }

    /// Step until a goal is popped or the frontier is exhausted.
    pub fn run(&mut self, tracker: &mut ResourceTracker) -> Result<Option<NodeId>, SearchError> {
        loop {
            match self.step(tracker)? {
                Step::Goal(id) => return Ok(Some(id)),
                Step::Expanded => {}
                Step::Exhausted => return Ok(None),
            }
        }
    }
}
