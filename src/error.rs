//! Error types for the oxo crate

use thiserror::Error;

/// Main error type for the oxo crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board string has {got} cells, expected {expected}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid cell character '{character}' at position {position}")]
    InvalidCellCharacter { character: char, position: usize },

    #[error("invalid piece counts: X={x_count}, O={o_count} (X opens, so X must equal O or lead by one)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
