//! Search configuration.

use std::time::Duration;

/// Tunables for a bidirectional solve.
///
/// The base design needs neither bound; both exist to force a verdict on
/// pathological inputs instead of letting the frontiers grow unbounded.
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Per-worker expansion budget. A worker that exceeds it reports
    /// exhaustion, and the solve ends Unsolvable.
    pub max_steps: Option<u64>,
    /// Wall-clock bound, checked once per expansion step.
    pub timeout: Option<Duration>,
}

impl SearchConfig {
    /// Set the per-worker expansion budget.
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Set the wall-clock bound.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the expansion budget from an Option.
    pub fn with_max_steps_option(mut self, max_steps: Option<u64>) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Set the wall-clock bound from an Option.
    pub fn with_timeout_option(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}
