//! Puzzle file parsing.
//!
//! Format: a header line with the grid dimensions, then the tile labels in
//! row-major order, whitespace-separated. A single header token means a
//! square board; two tokens are rows then columns. Label `0` is the blank.

use std::fs;
use std::path::Path;

use crate::error::PuzzleError;
use crate::puzzle::board::Board;

/// Read and validate a puzzle file.
pub fn load_board(path: &Path) -> Result<Board, PuzzleError> {
    let text = fs::read_to_string(path).map_err(|source| PuzzleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_board(&text)
}

/// Parse puzzle text. All validation happens here, before any search runs.
pub fn parse_board(text: &str) -> Result<Board, PuzzleError> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());
    let header = lines
        .next()
        .ok_or_else(|| PuzzleError::BadHeader(String::new()))?;

    let dims: Vec<usize> = header
        .split_whitespace()
        .map(|tok| tok.parse::<usize>())
        .collect::<Result<_, _>>()
        .map_err(|_| PuzzleError::BadHeader(header.to_string()))?;

    let (height, width) = match dims.as_slice() {
        [n] => (*n, *n),
        [rows, cols] => (*rows, *cols),
        _ => return Err(PuzzleError::BadHeader(header.to_string())),
    };
    if height == 0 || width == 0 || height.checked_mul(width).is_none() {
        return Err(PuzzleError::BadHeader(header.to_string()));
    }

    // Sized by what the file actually holds; from_tiles checks the count.
    let mut tiles = Vec::new();
    for line in lines {
        for tok in line.split_whitespace() {
            let label = tok
                .parse::<u32>()
                .map_err(|_| PuzzleError::BadLabel(tok.to_string()))?;
            tiles.push(label);
        }
    }

    Board::from_tiles(tiles, height, width)
}
