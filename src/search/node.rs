//! Search nodes and the arena that owns them.
//!
//! Each node records its parent as an index into the same arena, so a node's
//! predecessor chain lives exactly as long as the arena. The arena is dropped
//! wholesale with the frontier that built it.

use std::cmp::Ordering;

use crate::config::SearchError;
use crate::core::board::Board;
use crate::search::resources::{Frontier, Metric, ResourceTracker};

/// Handle of a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
pub struct SearchNode {
    pub board: Board,
    /// Moves taken from the root (`g`).
    pub moves: usize,
    pub parent: Option<NodeId>,
    /// `g + h`, fixed at construction.
    pub priority: usize,
}

#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `node`, charging it to `frontier`.
    pub fn alloc(
        &mut self,
        node: SearchNode,
        frontier: Frontier,
        tracker: &mut ResourceTracker,
    ) -> Result<NodeId, SearchError> {
        let id = u32::try_from(self.nodes.len())
            .map_err(|_| tracker.allocation_failed(frontier, "node_ids"))?;
        tracker.charge(frontier, Metric::Nodes, 1)?;
        self.nodes
            .try_reserve(1)
            .map_err(|_| tracker.allocation_failed(frontier, "search_nodes"))?;
        self.nodes.push(node);
        Ok(NodeId(id))
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }

    /// Board of `id`'s parent, if `id` is not a root.
    pub fn parent_board(&self, id: NodeId) -> Option<&Board> {
        self.get(id).parent.map(|p| &self.get(p).board)
    }

    /// Boards from the root down to `id`, inclusive.
    pub fn path_to(&self, id: NodeId) -> Vec<Board> {
        let mut path = Vec::with_capacity(self.get(id).moves + 1);
        let mut cur = Some(id);
        while let Some(c) = cur {
            let node = self.get(c);
            path.push(node.board.clone());
            cur = node.parent;
        }
        path.reverse();
        path
    }
}

/// Frontier entry: min-ordered by priority, then by insertion sequence so that
/// equal-priority nodes pop first-in first-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OpenEntry {
    pub priority: usize,
    pub seq: u64,
    pub id: NodeId,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: `BinaryHeap` is a max-heap.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
