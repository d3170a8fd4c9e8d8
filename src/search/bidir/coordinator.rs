//! Owns both directional workers and assembles the final path.

use std::thread;
use std::time::Instant;

use log::{debug, info};

use super::channel::{create_links, SearchDirection, WorkerReport};
use super::worker::DirectionalSearch;
use crate::puzzle::{invert_path, Anchor, Board, Direction};
use crate::search::config::SearchConfig;
use crate::search::result::{SearchStatistics, Solution, SolveOutcome, SolveReport};

/// Solve a puzzle by running one search from `start` toward the canonical
/// goal and one from the goal toward `start`, concurrently, joining them at
/// the first configuration both have seen.
///
/// Returns Unsolvable when either frontier exhausts (or a configured bound
/// is hit) before a meeting; never blocks indefinitely.
pub fn solve(start: &Board, config: &SearchConfig) -> SolveReport {
    let started = Instant::now();
    let goal = Board::goal_of(start.height(), start.width());

    // Each direction scores against its own target anchor: the goal for the
    // forward search, the original start for the backward search.
    let forward_anchor = Anchor::new(&goal);
    let backward_anchor = Anchor::new(start);

    let (link, forward_link, backward_link) = create_links();

    debug!(
        "solving {}x{} board, h(start) = {}",
        start.height(),
        start.width(),
        forward_anchor.manhattan(start.tiles())
    );

    let forward_root = start.clone();
    let forward_config = config.clone();
    let forward_handle = thread::spawn(move || {
        DirectionalSearch::new(forward_root, forward_anchor, forward_link)
            .run(&forward_config);
    });

    let backward_config = config.clone();
    let backward_handle = thread::spawn(move || {
        DirectionalSearch::new(goal, backward_anchor, backward_link).run(&backward_config);
    });

    let mut best: Option<Solution> = None;
    let mut statistics = SearchStatistics::default();

    // Every worker sends exactly one terminal report. The first one, of
    // either kind, ends the run: a meeting is a result, and either side
    // exhausting proves no path exists (the move relation is invertible,
    // so the two reachable components coincide).
    for _ in 0..2 {
        let report = match link.reports.recv() {
            Ok(report) => report,
            Err(_) => break,
        };
        link.control.signal_stop();

        match report.direction() {
            SearchDirection::Forward => statistics.expanded_forward = report.expanded(),
            SearchDirection::Backward => statistics.expanded_backward = report.expanded(),
        }

        if let WorkerReport::Met {
            forward, backward, ..
        } = report
        {
            // Both workers can race to report a meeting; keep the one with
            // the smaller combined length.
            let combined = forward.len() + backward.len();
            if best
                .as_ref()
                .is_none_or(|solution| combined < solution.len())
            {
                best = Some(assemble(forward, backward));
            }
        }
    }

    let _ = forward_handle.join();
    let _ = backward_handle.join();
    statistics.elapsed = started.elapsed();

    let outcome = match best {
        Some(solution) => {
            info!(
                "solved in {} moves ({} forward + {} backward), {} expansions",
                solution.len(),
                solution.forward.len(),
                solution.backward.len(),
                statistics.total_expanded()
            );
            SolveOutcome::Solved(solution)
        }
        None => {
            info!(
                "unsolvable, {} expansions",
                statistics.total_expanded()
            );
            SolveOutcome::Unsolvable
        }
    };

    SolveReport {
        outcome,
        statistics,
    }
}

/// Join the two partial paths. The backward partial was recorded walking
/// away from the goal, so reversed-and-inverted it continues the forward
/// direction of travel from the meeting point to the goal.
fn assemble(forward: Vec<Direction>, backward: Vec<Direction>) -> Solution {
    let mut moves = forward.clone();
    moves.extend(invert_path(&backward));
    Solution {
        moves,
        forward,
        backward,
    }
}
