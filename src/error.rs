//! Load-time validation errors.
//!
//! Everything here is fatal and reported before any search starts. An
//! unsolvable puzzle is not an error; see [`crate::search::SolveOutcome`].

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while reading and validating a puzzle file.
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// The file could not be read at all.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The header line is missing or does not parse as dimensions.
    #[error("malformed dimension header: {0:?}")]
    BadHeader(String),

    /// A token in the board body does not parse as a tile label.
    #[error("malformed tile label: {0:?}")]
    BadLabel(String),

    /// The board body holds the wrong number of labels for the header.
    #[error("expected {expected} tile labels, found {found}")]
    TileCount { expected: usize, found: usize },

    /// A label falls outside `0..rows*cols`.
    #[error("tile label {label} out of range for a {rows}x{cols} board")]
    LabelOutOfRange {
        label: u32,
        rows: usize,
        cols: usize,
    },

    /// A label appears more than once.
    #[error("duplicate tile label {0}")]
    DuplicateLabel(u32),

    /// No blank (`0`) cell is present.
    #[error("no blank (0) tile present")]
    MissingBlank,
}
