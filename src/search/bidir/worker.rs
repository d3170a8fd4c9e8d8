//! One search direction: frontier expansion plus meeting detection.

use std::collections::HashSet;
use std::time::Instant;

use crossbeam_channel::TryRecvError;
use log::{debug, info};

use super::channel::{SearchDirection, WorkerLink, WorkerReport};
use crate::puzzle::{Anchor, Board, Direction};
use crate::search::config::SearchConfig;
use crate::search::frontier::Frontier;

/// A single search worker, forward or backward. Owns its frontier, its
/// explored set, the boards received from the peer, and its channel ends.
pub struct DirectionalSearch {
    anchor: Anchor,
    frontier: Frontier,
    explored: HashSet<Board>,
    received: HashSet<Board>,
    link: WorkerLink,
    expanded: u64,
}

impl DirectionalSearch {
    /// Seed a worker with its root board, scored against this direction's
    /// own target anchor.
    pub fn new(root: Board, anchor: Anchor, link: WorkerLink) -> Self {
        let mut frontier = Frontier::new();
        frontier.push(root.scored(&anchor));
        Self {
            anchor,
            frontier,
            explored: HashSet::new(),
            received: HashSet::new(),
            link,
            expanded: 0,
        }
    }

    /// Run to completion and deliver exactly one terminal report.
    pub fn run(mut self, config: &SearchConfig) {
        let report = self.search(config);
        let _ = self.link.reports.send(report);
    }

    fn search(&mut self, config: &SearchConfig) -> WorkerReport {
        let direction = self.link.direction;
        let started = Instant::now();

        while let Some(current) = self.frontier.pop() {
            if self.link.control.should_stop() {
                return WorkerReport::Stopped {
                    direction,
                    expanded: self.expanded,
                };
            }

            // The same configuration can be queued twice from different
            // parents before either copy is popped.
            if self.explored.contains(&current) {
                continue;
            }

            // Reaching this direction's own anchor completes a path on its
            // own; the opposite partial path is empty.
            if current.at_target() {
                return self.met(current.path().to_vec(), Vec::new());
            }

            if self.out_of_budget(config, started) {
                debug!(
                    "{direction} search hit its bound after {} expansions",
                    self.expanded
                );
                return WorkerReport::Exhausted {
                    direction,
                    expanded: self.expanded,
                };
            }
            self.expanded += 1;

            self.explored.insert(current.clone());
            // Publish before draining: the peer must be able to see this
            // expansion no later than our next receive.
            let _ = self.link.outbound.send(current.clone());

            if let Some((own, other)) = self.drain_then_match(&current) {
                return self.met(own, other);
            }

            for child in current.children(&self.anchor) {
                if !self.explored.contains(&child) {
                    self.frontier.push(child);
                }
            }
        }

        debug!(
            "{direction} frontier exhausted after {} expansions",
            self.expanded
        );
        WorkerReport::Exhausted {
            direction,
            expanded: self.expanded,
        }
    }

    /// Fully drain the inbound channel, then test for overlap between the
    /// two searches.
    ///
    /// Testing before a full drain can miss a meeting state already sitting
    /// in the buffer, so the drain always completes first. Every drained
    /// board is tested against the explored set as it arrives, and the
    /// just-expanded board against everything received so far; a pair is
    /// therefore examined exactly when the later of its two sides becomes
    /// visible. Among the candidates visible in this step, the one with the
    /// smallest combined partial-path length wins.
    fn drain_then_match(
        &mut self,
        current: &Board,
    ) -> Option<(Vec<Direction>, Vec<Direction>)> {
        let mut best: Option<(usize, Vec<Direction>, Vec<Direction>)> = None;

        loop {
            let board = match self.link.inbound.try_recv() {
                Ok(board) => board,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            };

            if let Some(mine) = self.explored.get(&board) {
                consider(&mut best, mine.path(), board.path());
            }

            // Keep the cheapest received copy of each configuration.
            let keep = match self.received.get(&board) {
                Some(existing) => board.cost() < existing.cost(),
                None => true,
            };
            if keep {
                self.received.replace(board);
            }
        }

        if let Some(theirs) = self.received.get(current) {
            consider(&mut best, current.path(), theirs.path());
        }

        best.map(|(_, own, other)| (own, other))
    }

    fn met(&self, own: Vec<Direction>, other: Vec<Direction>) -> WorkerReport {
        let direction = self.link.direction;
        info!(
            "{direction} search met after {} expansions (own {} + peer {} moves)",
            self.expanded,
            own.len(),
            other.len()
        );
        let (forward, backward) = match direction {
            SearchDirection::Forward => (own, other),
            SearchDirection::Backward => (other, own),
        };
        WorkerReport::Met {
            direction,
            forward,
            backward,
            expanded: self.expanded,
        }
    }

    fn out_of_budget(&self, config: &SearchConfig, started: Instant) -> bool {
        if config.max_steps.is_some_and(|max| self.expanded >= max) {
            return true;
        }
        config.timeout.is_some_and(|limit| started.elapsed() >= limit)
    }
}

fn consider(
    best: &mut Option<(usize, Vec<Direction>, Vec<Direction>)>,
    own: &[Direction],
    other: &[Direction],
) {
    let combined = own.len() + other.len();
    if best.as_ref().is_none_or(|(c, _, _)| combined < *c) {
        *best = Some((combined, own.to_vec(), other.to_vec()));
    }
}
