//! Heuristic search over board configurations.

pub mod bidir;
pub mod config;
pub mod frontier;
pub mod result;

pub use bidir::{solve, SearchDirection};
pub use config::SearchConfig;
pub use frontier::Frontier;
pub use result::{SearchStatistics, Solution, SolveOutcome, SolveReport};
