//! Knight routes trainer: the round state machine.
//!
//! A round pairs an immutable [`Task`] with the player's attempt at it. The
//! trainer moves through three phases:
//!
//! - `Idle`: no task yet
//! - `InProgress`: a task is set and the target has not been reached
//! - `Solved`: the route ends on the target; moves are ignored until
//!   [`RouteTrainer::reset`] or [`RouteTrainer::new_task`]
//!
//! Invalid input (a square that is not a knight jump away, clicking the
//! current square, moving after the round is solved) is never an error, the
//! operation simply reports that nothing changed.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::TrainerConfig;
use crate::moves::{is_knight_move, knight_moves};
use crate::squareset::SquareSet;
use crate::stopwatch::Stopwatch;
use crate::task::Task;
use crate::types::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    InProgress,
    Solved,
}

/// How a completed route compares with the shortest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grade {
    pub moves: u32,
    pub optimal: u32,
    pub is_optimal: bool,
    /// Time from the first move to the last, if the clock ran
    pub elapsed: Option<Duration>,
}

impl Grade {
    /// Moves beyond the minimum.
    pub fn excess(&self) -> u32 {
        self.moves.saturating_sub(self.optimal)
    }
}

/// What [`RouteTrainer::attempt_move`] did with a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The knight jumped to the square
    Moved,
    /// The square was the previous one on the route; the last move was undone
    SteppedBack,
    /// No task, round already solved, or the square is the knight's own
    Unchanged,
    /// Not a knight jump from the current square
    Rejected,
    /// The jump reached the target
    Solved(Grade),
}

#[derive(Debug, Clone)]
struct Attempt {
    /// Route so far, starting with the task's start square. Never empty.
    path: Vec<Square>,
    stopwatch: Stopwatch,
    /// Index into the optimal path of the furthest hinted square
    hint_index: usize,
    revealed: bool,
    grade: Option<Grade>,
}

impl Attempt {
    fn new(start: Square) -> Self {
        Self {
            path: vec![start],
            stopwatch: Stopwatch::new(),
            hint_index: 0,
            revealed: false,
            grade: None,
        }
    }

    /// Back to the start square with a cleared timer, hints and grade.
    fn restart(&mut self) {
        self.path.truncate(1);
        self.stopwatch.reset();
        self.hint_index = 0;
        self.revealed = false;
        self.grade = None;
    }

    fn head(&self) -> Square {
        self.path[self.path.len() - 1]
    }

    fn moves(&self) -> usize {
        self.path.len() - 1
    }
}

#[derive(Debug, Clone)]
struct Round {
    task: Task,
    attempt: Attempt,
}

impl Round {
    fn new(task: Task) -> Self {
        let attempt = Attempt::new(task.start());
        Self { task, attempt }
    }
}

/// Owns the current task, the player's route and the solved counter.
pub struct RouteTrainer<R = StdRng> {
    config: TrainerConfig,
    rng: R,
    round: Option<Round>,
    solved_count: u32,
}

impl RouteTrainer<StdRng> {
    /// Trainer seeded from `config.seed`, or from OS entropy when unset.
    pub fn new(config: TrainerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> RouteTrainer<R> {
    pub fn with_rng(config: TrainerConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            round: None,
            solved_count: 0,
        }
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        match &self.round {
            None => Phase::Idle,
            Some(round) if round.attempt.grade.is_some() => Phase::Solved,
            Some(_) => Phase::InProgress,
        }
    }

    /// Replace the current round with a freshly sampled task at least
    /// `min_distance` moves long.
    pub fn new_task(&mut self, min_distance: u32) -> &Task {
        let task = Task::random(
            &mut self.rng,
            min_distance,
            self.config.max_tries,
            self.config.fallback(),
        );
        self.start_task(task)
    }

    /// Replace the current round with a given task.
    pub fn start_task(&mut self, task: Task) -> &Task {
        info!(
            start = %task.start(),
            target = %task.target(),
            optimal = task.optimal_distance(),
            "new task"
        );
        &self.round.insert(Round::new(task)).task
    }

    /// Try to move the knight to `sq`.
    pub fn attempt_move(&mut self, sq: Square) -> MoveOutcome {
        let undo_on_reclick = self.config.undo_on_reclick;
        let Some(round) = self.round.as_mut() else {
            return MoveOutcome::Unchanged;
        };
        let attempt = &mut round.attempt;
        if attempt.grade.is_some() {
            return MoveOutcome::Unchanged;
        }

        let path = &attempt.path;
        if undo_on_reclick && path.len() >= 2 && path[path.len() - 2] == sq {
            attempt.path.pop();
            debug!(%sq, "stepped back");
            return MoveOutcome::SteppedBack;
        }

        let head = attempt.head();
        if sq == head {
            return MoveOutcome::Unchanged;
        }
        if !is_knight_move(head, sq) {
            debug!(from = %head, to = %sq, "rejected move");
            return MoveOutcome::Rejected;
        }

        attempt.path.push(sq);
        attempt.stopwatch.start();
        debug!(from = %head, to = %sq, moves = attempt.moves(), "moved");

        if sq != round.task.target() {
            return MoveOutcome::Moved;
        }

        let moves = attempt.moves() as u32;
        let optimal = round.task.optimal_distance();
        let grade = Grade {
            moves,
            optimal,
            is_optimal: moves == optimal,
            elapsed: attempt.stopwatch.stop(),
        };
        attempt.grade = Some(grade);
        self.solved_count += 1;
        info!(
            moves,
            optimal,
            optimal_route = grade.is_optimal,
            solved = self.solved_count,
            "task solved"
        );
        MoveOutcome::Solved(grade)
    }

    /// Take back the last move. False if there was nothing to undo or the
    /// round is solved.
    pub fn undo(&mut self) -> bool {
        let Some(round) = self.round.as_mut() else {
            return false;
        };
        let attempt = &mut round.attempt;
        if attempt.grade.is_some() || attempt.path.len() <= 1 {
            return false;
        }
        attempt.path.pop();
        true
    }

    /// Restart the current task from its start square, clearing timer,
    /// hints and reveal. Does not touch the solved counter.
    pub fn reset(&mut self) {
        if let Some(round) = self.round.as_mut() {
            round.attempt.restart();
            debug!("round reset");
        }
    }

    /// Reveal one more square of the shortest route, one step beyond the
    /// player's current depth. Returns the newly hinted square, or `None` when
    /// there is nothing left to hint.
    pub fn request_hint(&mut self) -> Option<Square> {
        let round = self.round.as_mut()?;
        let attempt = &mut round.attempt;
        let optimal = round.task.optimal_path();
        let last = optimal.len() - 1;
        if attempt.grade.is_some() || attempt.revealed || attempt.hint_index >= last {
            return None;
        }

        let depth = attempt.moves().min(last);
        attempt.hint_index = (attempt.hint_index.max(depth) + 1).min(last);
        let hinted = optimal[attempt.hint_index];
        debug!(%hinted, index = attempt.hint_index, "hint");
        Some(hinted)
    }

    /// Mark the whole shortest route for display.
    pub fn reveal(&mut self) {
        if let Some(round) = self.round.as_mut() {
            round.attempt.revealed = true;
        }
    }

    pub fn task(&self) -> Option<&Task> {
        self.round.as_ref().map(|r| &r.task)
    }

    /// The player's route so far, start inclusive. Empty while idle.
    pub fn current_path(&self) -> &[Square] {
        match &self.round {
            Some(round) => &round.attempt.path,
            None => &[],
        }
    }

    /// Square the knight stands on.
    pub fn head(&self) -> Option<Square> {
        self.round.as_ref().map(|r| r.attempt.head())
    }

    pub fn moves_made(&self) -> usize {
        self.round.as_ref().map_or(0, |r| r.attempt.moves())
    }

    /// Squares the knight may jump to next. Empty unless a round is in
    /// progress.
    pub fn legal_next(&self) -> SquareSet {
        match &self.round {
            Some(round) if round.attempt.grade.is_none() => knight_moves(round.attempt.head()),
            _ => SquareSet::EMPTY,
        }
    }

    /// Squares of the shortest route uncovered by hints so far.
    pub fn hinted_squares(&self) -> &[Square] {
        match &self.round {
            Some(round) => &round.task.optimal_path()[1..round.attempt.hint_index + 1],
            None => &[],
        }
    }

    /// Squares of the shortest route to highlight: all of it once revealed,
    /// otherwise the hinted prefix.
    pub fn marked_squares(&self) -> &[Square] {
        match &self.round {
            Some(round) if round.attempt.revealed => round.task.optimal_path(),
            _ => self.hinted_squares(),
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.round.as_ref().is_some_and(|r| r.attempt.revealed)
    }

    /// Grade of the current round once solved.
    pub fn grade(&self) -> Option<Grade> {
        self.round.as_ref().and_then(|r| r.attempt.grade)
    }

    pub fn solved_count(&self) -> u32 {
        self.solved_count
    }

    /// Attempt timer reading: live while playing, frozen once solved.
    pub fn elapsed(&self) -> Option<Duration> {
        self.round.as_ref().and_then(|r| r.attempt.stopwatch.elapsed())
    }
}

#[cfg(test)]
#[path = "trainer_tests.rs"]
mod trainer_tests;
