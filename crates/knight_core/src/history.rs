//! Log of solved rounds, stored as JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::TrainerError;
use crate::task::Task;
use crate::trainer::Grade;
use crate::types::Square;

/// One solved round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub start: Square,
    pub target: Square,
    pub moves: u32,
    pub optimal: u32,
    /// Milliseconds from first to last move, microsecond precision
    pub elapsed_ms: Option<f64>,
}

impl RoundRecord {
    pub fn is_optimal(&self) -> bool {
        self.moves == self.optimal
    }
}

/// All solved rounds, oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingLog {
    pub rounds: Vec<RoundRecord>,
}

impl TrainingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a solved round.
    pub fn record(&mut self, task: &Task, grade: &Grade) {
        self.rounds.push(RoundRecord {
            start: task.start(),
            target: task.target(),
            moves: grade.moves,
            optimal: grade.optimal,
            elapsed_ms: grade
                .elapsed
                .map(|d| (d.as_secs_f64() * 1_000_000.0).round() / 1000.0),
        });
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn optimal_count(&self) -> usize {
        self.rounds.iter().filter(|r| r.is_optimal()).count()
    }

    /// Fraction of rounds solved in the minimum number of moves.
    pub fn optimal_rate(&self) -> f64 {
        if self.rounds.is_empty() {
            return 0.0;
        }
        self.optimal_count() as f64 / self.rounds.len() as f64
    }

    /// Mean number of moves beyond the minimum.
    pub fn average_excess(&self) -> f64 {
        if self.rounds.is_empty() {
            return 0.0;
        }
        let total: u32 = self
            .rounds
            .iter()
            .map(|r| r.moves.saturating_sub(r.optimal))
            .sum();
        total as f64 / self.rounds.len() as f64
    }

    pub fn save(&self, path: &Path) -> Result<(), TrainerError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, TrainerError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Load, or start empty if the file is missing or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "ignoring unreadable training log");
            Self::default()
        })
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str("=== Knight Routes ===\n\n");
        report.push_str(&format!(
            "Solved: {}, optimal: {} ({:.1}%), avg extra moves: {:.2}\n\n",
            self.len(),
            self.optimal_count(),
            self.optimal_rate() * 100.0,
            self.average_excess()
        ));

        report.push_str(&format!(
            "{:<4} {:<6} {:<6} {:>5} {:>7} {:>10}\n",
            "#", "Start", "Target", "Moves", "Minimum", "Time (ms)"
        ));
        report.push_str(&"-".repeat(43));
        report.push('\n');

        for (i, r) in self.rounds.iter().enumerate() {
            let time = r
                .elapsed_ms
                .map_or_else(|| "-".to_string(), |ms| format!("{ms:.1}"));
            report.push_str(&format!(
                "{:<4} {:<6} {:<6} {:>5} {:>7} {:>10}\n",
                i + 1,
                r.start.to_string(),
                r.target.to_string(),
                r.moves,
                r.optimal,
                time
            ));
        }

        report
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod history_tests;
