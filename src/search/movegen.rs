use rustc_hash::FxHashSet;

use crate::config::SearchError;
use crate::core::board::Board;
use crate::search::resources::{Frontier, Metric, ResourceTracker};

/// Successors of `board` worth pushing onto a frontier.
///
/// The board the node was reached from is always dropped: re-entering it can
/// never shorten a path. With a closed set, boards already expanded are dropped
/// as well. Every generated neighbour counts as an edge of `frontier`.
pub fn successors(
    board: &Board,
    parent: Option<&Board>,
    closed: Option<&FxHashSet<Board>>,
    frontier: Frontier,
    tracker: &mut ResourceTracker,
) -> Result<Vec<Board>, SearchError> {
    let neighbors = board.neighbors();
    tracker.charge(frontier, Metric::Edges, neighbors.len() as u64)?;

    let out = neighbors
        .into_iter()
        .filter(|b| parent != Some(b))
        .filter(|b| closed.map_or(true, |c| !c.contains(b)))
        .collect();
    Ok(out)
}
