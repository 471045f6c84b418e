//! Error types for the minesweeper AI crate

use thiserror::Error;

use crate::board::Point;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: {point} is already occupied")]
    InvalidMove { point: Point },

    #[error("{point} is outside the {width}x{height} board")]
    OutOfBounds {
        point: Point,
        width: usize,
        height: usize,
    },

    #[error("{point} cannot border {count} mines")]
    InvalidCount { point: Point, count: usize },

    #[error("{point} would be known as both a mine and a safe cell")]
    Contradiction { point: Point },

    #[error("cannot place {mines} mines on a board of {area} cells")]
    TooManyMines { mines: usize, area: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("grid must have {expected} cells, got {got}")]
    InvalidGridLength { expected: usize, got: usize },

    #[error("invalid character '{character}' at position {position}")]
    InvalidGridCharacter { character: char, position: usize },

    #[error("invalid piece counts: X={x_count}, O={o_count} (X moves first)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("game already over")]
    GameOver,

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
