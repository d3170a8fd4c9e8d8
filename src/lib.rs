//! Bidirectional heuristic solver for sliding-tile (n-puzzle) boards.
//!
//! Two searches run concurrently, one forward from the start configuration
//! and one backward from the goal, each guided by the Manhattan distance to
//! its own target. They exchange expanded boards over channels and join at
//! the first configuration both have seen.
//!
//! ```no_run
//! use bislide::puzzle::parse_board;
//! use bislide::search::{solve, SearchConfig, SolveOutcome};
//!
//! let start = parse_board("2\n1 2\n0 3\n").unwrap();
//! let report = solve(&start, &SearchConfig::default());
//! match report.outcome {
//!     SolveOutcome::Solved(solution) => println!("{solution}"),
//!     SolveOutcome::Unsolvable => println!("unsolvable"),
//! }
//! ```

pub mod error;
pub mod puzzle;
pub mod search;

pub use error::PuzzleError;
