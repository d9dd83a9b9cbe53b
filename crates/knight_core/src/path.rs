//! Breadth-first shortest paths over the knight-move graph.
//!
//! The search itself is generic over the node type and neighbour function,
//! so nothing here depends on the board being 8x8. [`shortest_knight_path`]
//! is the knight instance of it.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::time::{Duration, Instant};

use tracing::trace;

use crate::moves::knight_moves;
use crate::squareset::SquareSet;
use crate::types::Square;

/// Result of a shortest-path search.
#[derive(Debug, Clone)]
pub struct PathResult<N> {
    /// Start to target inclusive. Empty when the target was never reached.
    pub path: Vec<N>,
    /// Minimum number of moves, `None` when unreachable
    pub distance: Option<u32>,
    /// Nodes taken off the queue and expanded
    pub nodes_expanded: u32,
    /// Wall time spent searching
    pub elapsed: Duration,
}

impl<N> PathResult<N> {
    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }
}

pub type KnightPath = PathResult<Square>;

/// Breadth-first search from `start` to `target`.
///
/// Nodes are expanded in FIFO discovery order and the search stops as soon as
/// `target` is dequeued. The returned path is one shortest path; which one
/// depends on the order `neighbours` yields nodes. If the frontier runs dry
/// first, the result is empty with `distance == None`.
pub fn bfs_path<N, F, I>(start: N, target: N, mut neighbours: F) -> PathResult<N>
where
    N: Copy + Eq + Hash,
    F: FnMut(N) -> I,
    I: IntoIterator<Item = N>,
{
    let t0 = Instant::now();
    let mut queue = VecDeque::from([start]);
    let mut prev: HashMap<N, Option<N>> = HashMap::new();
    prev.insert(start, None);
    let mut nodes_expanded = 0u32;

    while let Some(cur) = queue.pop_front() {
        if cur == target {
            break;
        }
        nodes_expanded += 1;
        for next in neighbours(cur) {
            if let Entry::Vacant(slot) = prev.entry(next) {
                slot.insert(Some(cur));
                queue.push_back(next);
            }
        }
    }

    // Walk predecessor links back from the target, then flip
    let mut path = Vec::new();
    if prev.contains_key(&target) {
        let mut cur = Some(target);
        while let Some(node) = cur {
            path.push(node);
            cur = prev.get(&node).copied().flatten();
        }
        path.reverse();
    }

    let distance = path.len().checked_sub(1).map(|d| d as u32);
    PathResult {
        path,
        distance,
        nodes_expanded,
        elapsed: t0.elapsed(),
    }
}

/// Minimum number of knight moves from `start` to `target` plus one path
/// achieving it. `start == target` gives the zero-move path `[start]`.
pub fn shortest_knight_path(start: Square, target: Square) -> KnightPath {
    let result = bfs_path(start, target, knight_moves);
    trace!(
        %start,
        %target,
        distance = ?result.distance,
        nodes = result.nodes_expanded,
        elapsed_us = result.elapsed.as_micros() as u64,
        "knight path search"
    );
    result
}

/// Knight distance from `start` to every square, indexed by square index.
///
/// Computed by expanding whole BFS layers as square sets, independently of
/// [`bfs_path`]. Unreachable squares stay `None`.
pub fn knight_distances(start: Square) -> [Option<u8>; 64] {
    let mut dist = [None; 64];
    let mut seen = SquareSet::from_square(start);
    let mut frontier = seen;
    let mut depth = 0u8;

    while !frontier.is_empty() {
        let mut next = SquareSet::EMPTY;
        for sq in frontier {
            dist[sq.index()] = Some(depth);
            next |= knight_moves(sq);
        }
        frontier = next & !seen;
        seen |= frontier;
        depth += 1;
    }

    dist
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod path_tests;
