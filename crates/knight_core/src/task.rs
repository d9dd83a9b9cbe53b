//! Route tasks: a start square, a target square and the shortest route
//! between them.

use rand::Rng;
use tracing::{debug, warn};

use crate::path::shortest_knight_path;
use crate::types::Square;

/// Pair used when sampling cannot satisfy the minimum distance: b1 -> c5,
/// three moves apart.
pub const DEFAULT_FALLBACK: (Square, Square) = (Square::at(1, 0), Square::at(2, 4));

/// Default number of random pairs tried before falling back.
pub const DEFAULT_MAX_TRIES: u32 = 200;

/// A fallback pair closer than this is replaced by [`DEFAULT_FALLBACK`].
pub const MIN_FALLBACK_DISTANCE: u32 = 2;

/// Longest shortest route on the 8x8 board (a1 -> h8).
pub const MAX_KNIGHT_DISTANCE: u32 = 6;

/// A single round's puzzle. Never mutated; a new round gets a new `Task`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    start: Square,
    target: Square,
    optimal: Vec<Square>,
}

impl Task {
    /// Build a task for a given pair. `None` if the squares are equal or the
    /// target cannot be reached.
    pub fn new(start: Square, target: Square) -> Option<Task> {
        if start == target {
            return None;
        }
        let shortest = shortest_knight_path(start, target);
        if !shortest.is_reachable() {
            return None;
        }
        Some(Task {
            start,
            target,
            optimal: shortest.path,
        })
    }

    /// Sample random distinct pairs until one is at least `min_distance`
    /// moves apart, trying at most `max_tries` pairs before using `fallback`.
    pub fn random<R: Rng>(
        rng: &mut R,
        min_distance: u32,
        max_tries: u32,
        fallback: (Square, Square),
    ) -> Task {
        for attempt in 0..max_tries {
            let start = random_square(rng);
            let target = random_square(rng);
            if let Some(task) = Task::new(start, target)
                && task.optimal_distance() >= min_distance
            {
                debug!(
                    %start,
                    %target,
                    distance = task.optimal_distance(),
                    tries = attempt + 1,
                    "sampled task"
                );
                return task;
            }
        }

        warn!(
            min_distance,
            max_tries,
            start = %fallback.0,
            target = %fallback.1,
            "no sampled pair met the minimum distance, using fallback"
        );
        match Task::new(fallback.0, fallback.1) {
            Some(task) if task.optimal_distance() >= MIN_FALLBACK_DISTANCE => task,
            _ => {
                warn!(
                    start = %fallback.0,
                    target = %fallback.1,
                    "fallback pair too close, using default pair"
                );
                let (start, target) = DEFAULT_FALLBACK;
                Task {
                    start,
                    target,
                    optimal: shortest_knight_path(start, target).path,
                }
            }
        }
    }

    pub fn start(&self) -> Square {
        self.start
    }

    pub fn target(&self) -> Square {
        self.target
    }

    /// One shortest route, start and target inclusive.
    pub fn optimal_path(&self) -> &[Square] {
        &self.optimal
    }

    /// Minimum number of moves.
    pub fn optimal_distance(&self) -> u32 {
        (self.optimal.len() - 1) as u32
    }
}

fn random_square<R: Rng>(rng: &mut R) -> Square {
    Square::at(rng.gen_range(0..8), rng.gen_range(0..8))
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod task_tests;
