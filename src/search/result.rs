//! Solve results and statistics.

use std::fmt;
use std::time::Duration;

use crate::puzzle::{render_path, Direction};

/// Outcome of a bidirectional solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// A path from start to goal was assembled.
    Solved(Solution),
    /// Both directions ran out of states (or a configured bound was hit)
    /// without the explored sets ever intersecting.
    Unsolvable,
}

/// An assembled start-to-goal path plus the two partial paths it was
/// joined from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// The full move sequence, blank's direction of travel per step.
    pub moves: Vec<Direction>,
    /// Forward partial path: start to the meeting state.
    pub forward: Vec<Direction>,
    /// Backward partial path as recorded: goal to the meeting state.
    pub backward: Vec<Direction>,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_path(&self.moves))
    }
}

/// Result of one solve: the outcome plus aggregate search statistics.
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub outcome: SolveOutcome,
    pub statistics: SearchStatistics,
}

impl SolveReport {
    pub fn solution(&self) -> Option<&Solution> {
        match &self.outcome {
            SolveOutcome::Solved(solution) => Some(solution),
            SolveOutcome::Unsolvable => None,
        }
    }
}

/// Counters aggregated across both workers.
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Total wall-clock time of the solve.
    pub elapsed: Duration,
    /// Nodes expanded by the forward worker.
    pub expanded_forward: u64,
    /// Nodes expanded by the backward worker.
    pub expanded_backward: u64,
}

impl SearchStatistics {
    pub fn total_expanded(&self) -> u64 {
        self.expanded_forward + self.expanded_backward
    }

    /// Human-readable multi-line summary.
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed));
        s.push_str(&format!("Expanded (forward): {}\n", self.expanded_forward));
        s.push_str(&format!("Expanded (backward): {}\n", self.expanded_backward));
        s.push_str(&format!("Expanded (total): {}\n", self.total_expanded()));
        s
    }
}

impl fmt::Display for SolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            SolveOutcome::Solved(solution) => {
                writeln!(f, "Solved in {} moves: {}", solution.len(), solution)?;
                writeln!(
                    f,
                    "  forward segment ({}): {}",
                    solution.forward.len(),
                    render_path(&solution.forward)
                )?;
                writeln!(
                    f,
                    "  backward segment ({}): {}",
                    solution.backward.len(),
                    render_path(&solution.backward)
                )
            }
            SolveOutcome::Unsolvable => writeln!(f, "Unsolvable."),
        }
    }
}
