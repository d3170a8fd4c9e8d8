//! Priority queue of discovered-but-unexpanded boards.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::puzzle::Board;

/// Min-heap over f = g + h. Ties break on the heuristic (deeper nodes first
/// among equal f), then arbitrarily; callers must only rely on heap order.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Ranked>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, board: Board) {
        self.heap.push(Ranked(board));
    }

    /// Remove and return a board with the lowest estimated total cost.
    pub fn pop(&mut self) -> Option<Board> {
        self.heap.pop().map(|ranked| ranked.0)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[derive(Debug)]
struct Ranked(Board);

impl Ranked {
    fn key(&self) -> (usize, u32) {
        (self.0.estimate(), self.0.heuristic())
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reverse for lowest-f-first popping.
        other.key().cmp(&self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{Anchor, Direction};

    fn scored(tiles: &[u32], anchor: &Anchor, padding: usize) -> Board {
        let mut b = Board::from_tiles(tiles.to_vec(), 2, 2).unwrap();
        for _ in 0..padding {
            // Walk the blank up or down to pad g; an even padding restores
            // the original grid.
            b = b
                .shifted(Direction::North)
                .or_else(|| b.shifted(Direction::South))
                .unwrap();
        }
        b.scored(anchor)
    }

    #[test]
    fn test_pops_in_nondecreasing_f_order() {
        let goal = Board::goal_of(2, 2);
        let anchor = Anchor::new(&goal);
        let mut frontier = Frontier::new();

        frontier.push(scored(&[1, 2, 3, 0], &anchor, 0)); // f = 0
        frontier.push(scored(&[0, 2, 1, 3], &anchor, 0)); // f = h
        frontier.push(scored(&[1, 2, 0, 3], &anchor, 0)); // f = 1
        frontier.push(scored(&[1, 0, 2, 3], &anchor, 2)); // padded g
        frontier.push(scored(&[1, 2, 3, 0], &anchor, 4)); // g only, h = 0

        let mut last = 0;
        while let Some(board) = frontier.pop() {
            assert!(
                board.estimate() >= last,
                "popped f {} after f {}",
                board.estimate(),
                last
            );
            last = board.estimate();
        }
    }

    #[test]
    fn test_interleaved_push_pop_keeps_heap_order() {
        let goal = Board::goal_of(2, 2);
        let anchor = Anchor::new(&goal);
        let mut frontier = Frontier::new();

        frontier.push(scored(&[1, 0, 2, 3], &anchor, 0));
        frontier.push(scored(&[1, 2, 3, 0], &anchor, 0));
        let first = frontier.pop().unwrap();
        assert_eq!(first.estimate(), 0);

        frontier.push(scored(&[0, 2, 1, 3], &anchor, 0));
        let second = frontier.pop().unwrap();
        let third = frontier.pop().unwrap();
        assert!(second.estimate() <= third.estimate());
    }

    #[test]
    fn test_len_and_empty() {
        let goal = Board::goal_of(2, 2);
        let anchor = Anchor::new(&goal);
        let mut frontier = Frontier::new();
        assert!(frontier.is_empty());

        frontier.push(Board::goal_of(2, 2).scored(&anchor));
        assert_eq!(frontier.len(), 1);
        frontier.pop();
        assert!(frontier.is_empty());
        assert!(frontier.pop().is_none());
    }
}
