//! Board values and the Manhattan heuristic.
//!
//! A [`Board`] is an immutable snapshot of the grid together with the path
//! taken from its own search anchor. Equality and hashing cover the grid
//! contents only, so two structurally independent copies of the same
//! configuration compare and hash equal regardless of how each was reached.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::PuzzleError;
use crate::puzzle::direction::Direction;

/// One sliding-tile configuration.
///
/// Tiles are stored row-major; label `0` is the blank. Every transition
/// produces a new `Board`, never an in-place mutation.
#[derive(Debug, Clone)]
pub struct Board {
    tiles: Vec<u32>,
    height: usize,
    width: usize,
    blank: usize,
    heuristic: u32,
    path: Vec<Direction>,
}

impl Board {
    /// Build a board from row-major labels, validating the permutation
    /// invariant: each label in `0..height*width` appears exactly once.
    pub fn from_tiles(
        tiles: Vec<u32>,
        height: usize,
        width: usize,
    ) -> Result<Self, PuzzleError> {
        let cells = height * width;
        if tiles.len() != cells {
            return Err(PuzzleError::TileCount {
                expected: cells,
                found: tiles.len(),
            });
        }

        let blank = tiles
            .iter()
            .position(|&t| t == 0)
            .ok_or(PuzzleError::MissingBlank)?;

        let mut seen = vec![false; cells];
        for &label in &tiles {
            let idx = label as usize;
            if idx >= cells {
                return Err(PuzzleError::LabelOutOfRange {
                    label,
                    rows: height,
                    cols: width,
                });
            }
            if seen[idx] {
                return Err(PuzzleError::DuplicateLabel(label));
            }
            seen[idx] = true;
        }

        Ok(Self {
            tiles,
            height,
            width,
            blank,
            heuristic: 0,
            path: Vec::new(),
        })
    }

    /// The canonical solved configuration: row-major ascending labels with
    /// the blank in the bottom-right cell.
    pub fn goal_of(height: usize, width: usize) -> Self {
        let cells = height * width;
        let mut tiles: Vec<u32> = (1..cells as u32).collect();
        tiles.push(0);
        Self {
            tiles,
            height,
            width,
            blank: cells - 1,
            heuristic: 0,
            path: Vec::new(),
        }
    }

    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Moves taken from this search's own anchor to reach this state.
    pub fn path(&self) -> &[Direction] {
        &self.path
    }

    /// Path length so far (the g term of the ordering key).
    pub fn cost(&self) -> usize {
        self.path.len()
    }

    /// Manhattan distance to this direction's anchor, as last scored.
    pub fn heuristic(&self) -> u32 {
        self.heuristic
    }

    /// Estimated total cost f = g + h.
    pub fn estimate(&self) -> usize {
        self.path.len() + self.heuristic as usize
    }

    /// True iff this board equals its own anchor. Requires the heuristic
    /// field to already reflect distance to that anchor.
    pub fn at_target(&self) -> bool {
        self.heuristic == 0
    }

    /// Rescore this board against an anchor.
    pub fn scored(mut self, anchor: &Anchor) -> Self {
        self.heuristic = anchor.manhattan(&self.tiles);
        self
    }

    /// Slide the blank one step in `dir`, or `None` if that leaves the grid.
    ///
    /// The returned board's path is extended by `dir`; its heuristic is stale
    /// until rescored, so callers outside tests go through
    /// [`Board::children`].
    pub fn shifted(&self, dir: Direction) -> Option<Self> {
        let row = self.blank / self.width;
        let col = self.blank % self.width;
        let (dr, dc) = dir.delta();

        let new_row = row.checked_add_signed(dr)?;
        let new_col = col.checked_add_signed(dc)?;
        if new_row >= self.height || new_col >= self.width {
            return None;
        }

        let target = new_row * self.width + new_col;
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);

        let mut path = self.path.clone();
        path.push(dir);

        Some(Self {
            tiles,
            height: self.height,
            width: self.width,
            blank: target,
            heuristic: 0,
            path,
        })
    }

    /// All boards one blank move away, scored against `anchor`, each with
    /// this board's path extended by one entry. Between 0 and 4 results.
    pub fn children(&self, anchor: &Anchor) -> Vec<Self> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| self.shifted(dir).map(|b| b.scored(anchor)))
            .collect()
    }

    /// Permutation-parity check against the canonical goal. A fast path
    /// only: the search itself detects unsolvable inputs by exhaustion.
    pub fn is_solvable(&self) -> bool {
        let inversions = self.inversions();
        if self.width % 2 == 1 {
            inversions % 2 == 0
        } else {
            // With even width every vertical blank move flips the inversion
            // parity; the goal keeps the blank on the bottom row.
            let rows_from_bottom = self.height - 1 - self.blank / self.width;
            inversions % 2 == rows_from_bottom % 2
        }
    }

    fn inversions(&self) -> usize {
        let mut count = 0;
        for (i, &a) in self.tiles.iter().enumerate() {
            if a == 0 {
                continue;
            }
            count += self.tiles[i + 1..]
                .iter()
                .filter(|&&b| b != 0 && b < a)
                .count();
        }
        count
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.tiles == other.tiles
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.hash(state);
        self.tiles.hash(state);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pad = (self.tiles.len() - 1).max(1).to_string().len();
        for row in self.tiles.chunks(self.width) {
            for (i, &tile) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                if tile == 0 {
                    write!(f, "{:>pad$}", ".")?;
                } else {
                    write!(f, "{tile:>pad$}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A direction's target configuration plus a label-position table, so each
/// child rescoring is O(cells) instead of O(cells^2).
#[derive(Debug, Clone)]
pub struct Anchor {
    width: usize,
    positions: Vec<(usize, usize)>,
}

impl Anchor {
    pub fn new(target: &Board) -> Self {
        let mut positions = vec![(0, 0); target.tiles.len()];
        for (idx, &label) in target.tiles.iter().enumerate() {
            positions[label as usize] = (idx / target.width, idx % target.width);
        }
        Self {
            width: target.width,
            positions,
        }
    }

    /// Sum over all non-blank tiles of row and column distance between the
    /// tile's position in `tiles` and in the anchor. Zero iff the grids are
    /// identical.
    pub fn manhattan(&self, tiles: &[u32]) -> u32 {
        let mut total = 0usize;
        for (idx, &label) in tiles.iter().enumerate() {
            if label == 0 {
                continue;
            }
            let (tr, tc) = self.positions[label as usize];
            total += (idx / self.width).abs_diff(tr) + (idx % self.width).abs_diff(tc);
        }
        total as u32
    }
}
