//! Blank-movement directions.

use std::fmt;

/// One of the four directions the blank can travel in.
///
/// Deltas are in (row, column) terms with row 0 at the top, so `North` is
/// `(-1, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All four variants, in the order children are generated.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The (row, column) offset of a single step in this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    /// The direction that undoes this one.
    pub fn inverse(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Single-character rendering used in printed paths.
    pub fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Reverse a path and map every step through its inverse.
///
/// A path recorded walking away from an anchor becomes, under `invert_path`,
/// a path walking back toward that anchor. Involutive: applying it twice
/// returns the original path.
pub fn invert_path(path: &[Direction]) -> Vec<Direction> {
    path.iter().rev().map(|d| d.inverse()).collect()
}

/// Render a path as one letter per move, e.g. `ESSW`.
pub fn render_path(path: &[Direction]) -> String {
    path.iter().map(|d| d.letter()).collect()
}
