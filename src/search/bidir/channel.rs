//! Channel wiring between the two search workers and the coordinator.
//!
//! Each worker publishes every board it expands on its outbound channel and
//! polls its inbound channel for the peer's boards. Ownership of a sent
//! board transfers to the channel; the sender keeps publishing clones of
//! its own copies, so no board is ever aliased across threads. Both links
//! are single-producer/single-consumer by construction.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::puzzle::{Board, Direction};

/// Which end of the problem a worker searches from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    /// From the start configuration toward the goal.
    Forward,
    /// From the goal configuration toward the start.
    Backward,
}

impl SearchDirection {
    pub fn label(self) -> &'static str {
        match self {
            SearchDirection::Forward => "forward",
            SearchDirection::Backward => "backward",
        }
    }
}

impl std::fmt::Display for SearchDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Terminal message a worker sends to the coordinator. Every worker sends
/// exactly one of these before exiting.
#[derive(Debug, Clone)]
pub enum WorkerReport {
    /// A meeting state was found. Both partial paths are relative to their
    /// own anchors: `forward` walks start -> meeting, `backward` walks
    /// goal -> meeting.
    Met {
        direction: SearchDirection,
        forward: Vec<Direction>,
        backward: Vec<Direction>,
        expanded: u64,
    },
    /// The frontier emptied, or a configured bound was hit, without any
    /// meeting being found.
    Exhausted {
        direction: SearchDirection,
        expanded: u64,
    },
    /// The worker observed the stop signal and quit mid-search.
    Stopped {
        direction: SearchDirection,
        expanded: u64,
    },
}

impl WorkerReport {
    pub fn direction(&self) -> SearchDirection {
        match *self {
            WorkerReport::Met { direction, .. }
            | WorkerReport::Exhausted { direction, .. }
            | WorkerReport::Stopped { direction, .. } => direction,
        }
    }

    pub fn expanded(&self) -> u64 {
        match *self {
            WorkerReport::Met { expanded, .. }
            | WorkerReport::Exhausted { expanded, .. }
            | WorkerReport::Stopped { expanded, .. } => expanded,
        }
    }
}

/// Cooperative cancellation flag shared by the coordinator and both workers.
#[derive(Debug, Default)]
pub struct SharedControl {
    stop: AtomicBool,
}

impl SharedControl {
    /// Signal both workers to stop. Workers check at least once per
    /// expansion step.
    pub fn signal_stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    pub fn should_stop(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }
}

/// Channel endpoints owned by one worker.
pub struct WorkerLink {
    pub direction: SearchDirection,
    /// Boards this worker has expanded, published to the peer.
    pub outbound: Sender<Board>,
    /// Boards the peer has expanded. Drained without blocking.
    pub inbound: Receiver<Board>,
    /// Terminal report back to the coordinator.
    pub reports: Sender<WorkerReport>,
    pub control: Arc<SharedControl>,
}

/// Channel endpoints owned by the coordinator.
pub struct CoordinatorLink {
    pub reports: Receiver<WorkerReport>,
    pub control: Arc<SharedControl>,
}

/// Wire up both workers and the coordinator.
pub fn create_links() -> (CoordinatorLink, WorkerLink, WorkerLink) {
    let control = Arc::new(SharedControl::default());

    // Unbounded FIFO in each direction; workers never block on publish.
    let (fwd_tx, fwd_rx) = unbounded();
    let (bwd_tx, bwd_rx) = unbounded();
    let (report_tx, report_rx) = unbounded();

    let forward = WorkerLink {
        direction: SearchDirection::Forward,
        outbound: fwd_tx,
        inbound: bwd_rx,
        reports: report_tx.clone(),
        control: Arc::clone(&control),
    };
    let backward = WorkerLink {
        direction: SearchDirection::Backward,
        outbound: bwd_tx,
        inbound: fwd_rx,
        reports: report_tx,
        control: Arc::clone(&control),
    };
    let coordinator = CoordinatorLink {
        reports: report_rx,
        control,
    };

    (coordinator, forward, backward)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_signal() {
        let control = SharedControl::default();
        assert!(!control.should_stop());
        control.signal_stop();
        assert!(control.should_stop());
    }

    #[test]
    fn test_boards_cross_between_workers() {
        let (_coordinator, forward, backward) = create_links();

        let board = Board::goal_of(2, 2);
        forward.outbound.send(board.clone()).unwrap();

        let received = backward.inbound.try_recv().unwrap();
        assert_eq!(received, board);
        // Forward's own inbound stays empty.
        assert!(forward.inbound.try_recv().is_err());
    }

    #[test]
    fn test_reports_reach_coordinator() {
        let (coordinator, forward, backward) = create_links();

        forward
            .reports
            .send(WorkerReport::Exhausted {
                direction: SearchDirection::Forward,
                expanded: 7,
            })
            .unwrap();
        backward
            .reports
            .send(WorkerReport::Stopped {
                direction: SearchDirection::Backward,
                expanded: 3,
            })
            .unwrap();

        let first = coordinator.reports.recv().unwrap();
        let second = coordinator.reports.recv().unwrap();
        assert_eq!(first.direction(), SearchDirection::Forward);
        assert_eq!(first.expanded(), 7);
        assert_eq!(second.direction(), SearchDirection::Backward);
    }
}
