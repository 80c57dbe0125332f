//! Budgets shared by the two frontiers of a solver.
//!
//! Parent-only pruning explores a tree, not a graph, so hard instances grow
//! without bound. Both frontiers charge one [`ResourceTracker`]: limits apply
//! to the combined totals, and a per-frontier breakdown is kept alongside for
//! logging. Failed `try_reserve` calls are reported through
//! [`ResourceTracker::allocation_failed`].

use crate::config::{ResourceCounts, ResourceLimits, SearchError};

/// Which of the solver's two searches is doing the work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frontier {
    /// Seeded with the board being solved.
    Initial,
    /// Seeded with its twin.
    Twin,
}

impl Frontier {
    pub fn label(self) -> &'static str {
        match self {
            Frontier::Initial => "initial",
            Frontier::Twin => "twin",
        }
    }

    #[inline]
    fn slot(self) -> usize {
        match self {
            Frontier::Initial => 0,
            Frontier::Twin => 1,
        }
    }
}

/// A budgeted quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Search nodes allocated.
    Nodes,
    /// Neighbour boards generated, before pruning.
    Edges,
    /// Nodes popped from a frontier.
    Expansions,
}

impl Metric {
    pub fn name(self) -> &'static str {
        match self {
            Metric::Nodes => "nodes",
            Metric::Edges => "edges",
            Metric::Expansions => "expansions",
        }
    }

    fn limit(self, limits: &ResourceLimits) -> u64 {
        match self {
            Metric::Nodes => limits.max_nodes as u64,
            Metric::Edges => limits.max_edges as u64,
            Metric::Expansions => limits.max_expansions,
        }
    }

    fn counter(self, counts: &mut ResourceCounts) -> &mut u64 {
        match self {
            Metric::Nodes => &mut counts.nodes,
            Metric::Edges => &mut counts.edges,
            Metric::Expansions => &mut counts.expansions,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResourceTracker {
    limits: ResourceLimits,
    total: ResourceCounts,
    by_frontier: [ResourceCounts; 2],
}

impl ResourceTracker {
    pub fn new(limits: ResourceLimits) -> Self {
        Self {
            limits,
            total: ResourceCounts::default(),
            by_frontier: [ResourceCounts::default(); 2],
        }
    }

    /// Totals over both frontiers.
    #[inline]
    pub fn counts(&self) -> ResourceCounts {
        self.total
    }

    /// What `frontier` alone has spent.
    #[inline]
    pub fn frontier_counts(&self, frontier: Frontier) -> ResourceCounts {
        self.by_frontier[frontier.slot()]
    }

    /// Charge `amount` of `metric` to `frontier`. Fails once the combined
    /// total is above its limit; reaching the limit exactly is allowed.
    pub fn charge(
        &mut self,
        frontier: Frontier,
        metric: Metric,
        amount: u64,
    ) -> Result<(), SearchError> {
        let own = metric.counter(&mut self.by_frontier[frontier.slot()]);
        *own = own.saturating_add(amount);
        let total = metric.counter(&mut self.total);
        *total = total.saturating_add(amount);

        let observed = *total;
        let limit = metric.limit(&self.limits);
        if observed <= limit {
            return Ok(());
        }
        Err(SearchError::LimitExceeded {
            frontier: frontier.label(),
            metric: metric.name(),
            limit,
            observed,
            counts: self.total,
        })
    }

    /// Error for a `try_reserve` on `structure` that `frontier` could not get.
    pub fn allocation_failed(&self, frontier: Frontier, structure: &'static str) -> SearchError {
        SearchError::AllocationFailed {
            frontier: frontier.label(),
            structure,
            counts: self.total,
        }
    }
}
