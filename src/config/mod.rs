//! Search configuration: priority function, duplicate pruning, budgets, and the
//! structured errors a search can end with.
//!
//! Every knob has a default matching the plain A* contract: Manhattan priority,
//! parent-only pruning and no budgets. Changing them never changes the answer for
//! a solvable board, only how much work it takes to find it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::board::Board;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Heuristic `h` in the node priority `f = g + h`.
pub enum Heuristic {
    #[default]
    Manhattan,
    Hamming,
}

impl Heuristic {
    #[inline]
    pub fn estimate(self, board: &Board) -> usize {
        match self {
            Heuristic::Manhattan => board.manhattan(),
            Heuristic::Hamming => board.hamming(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::Hamming => "hamming",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "manhattan" => Some(Heuristic::Manhattan),
            "hamming" => Some(Heuristic::Hamming),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Which successors a frontier refuses to push.
pub enum DuplicatePolicy {
    /// Skip only the board the expanded node came from.
    #[default]
    ParentOnly,
    /// Also skip boards this frontier has already expanded.
    ClosedSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Search budgets, counted across both frontiers of a solver.
///
/// - `max_nodes`: search nodes allocated in the arenas
/// - `max_edges`: successor boards generated (before pruning)
/// - `max_expansions`: nodes popped from a frontier
pub struct ResourceLimits {
    pub max_nodes: usize,
    pub max_edges: usize,
    pub max_expansions: u64,
}

impl ResourceLimits {
    pub const UNBOUNDED: ResourceLimits = ResourceLimits {
        max_nodes: usize::MAX,
        max_edges: usize::MAX,
        max_expansions: u64::MAX,
    };
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Running counters tracked during a search.
pub struct ResourceCounts {
    pub nodes: u64,
    pub edges: u64,
    pub expansions: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverConfig {
    pub heuristic: Heuristic,
    pub duplicates: DuplicatePolicy,
    pub limits: ResourceLimits,
}

impl SolverConfig {
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    pub fn with_limits(mut self, limits: ResourceLimits) -> Self {
        self.limits = limits;
        self
    }
}

#[derive(Debug, Error)]
/// Structured errors returned by search routines.
pub enum SearchError {
    /// A configured resource limit was exceeded.
    #[error(
        "{metric} limit exceeded in the {frontier} search (limit={limit}, observed={observed}); \
         counts(nodes={}, edges={}, expansions={})",
        .counts.nodes,
        .counts.edges,
        .counts.expansions
    )]
    LimitExceeded {
        frontier: &'static str,
        metric: &'static str,
        limit: u64,
        observed: u64,
        counts: ResourceCounts,
    },
    /// A `try_reserve` allocation failed for a large structure.
    #[error(
        "allocation failed in the {frontier} search for {structure}; \
         counts(nodes={}, edges={}, expansions={})",
        .counts.nodes,
        .counts.edges,
        .counts.expansions
    )]
    AllocationFailed {
        frontier: &'static str,
        structure: &'static str,
        counts: ResourceCounts,
    },
    /// Both frontiers ran dry without reaching a goal.
    #[error("both frontiers exhausted without reaching the goal")]
    Exhausted,
    /// I/O failure while writing or reading a solution report.
    #[error("io error at {stage} for {path}: {error}")]
    Io {
        stage: &'static str,
        path: String,
        error: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_plain_astar() {
        let cfg = SolverConfig::default();
        assert_eq!(cfg.heuristic, Heuristic::Manhattan);
        assert_eq!(cfg.duplicates, DuplicatePolicy::ParentOnly);
        assert_eq!(cfg.limits, ResourceLimits::UNBOUNDED);
    }

    #[test]
    fn heuristic_names_roundtrip() {
        for h in [Heuristic::Manhattan, Heuristic::Hamming] {
            assert_eq!(Heuristic::from_name(h.name()), Some(h));
        }
        assert_eq!(Heuristic::from_name("euclid"), None);
    }

    #[test]
    fn limit_error_mentions_metric() {
        let err = SearchError::LimitExceeded {
            frontier: "twin",
            metric: "nodes",
            limit: 10,
            observed: 11,
            counts: ResourceCounts {
                nodes: 11,
                edges: 20,
                expansions: 5,
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("nodes limit exceeded in the twin search"));
        assert!(msg.contains("edges=20"));
    }
}
