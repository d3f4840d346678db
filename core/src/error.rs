use thiserror::Error;

use crate::{CellCount, Coord, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Mine placed twice at {0:?}")]
    DuplicateMine(Coord2),
    #[error("Expected {expected} mines, got {actual}")]
    MineCountMismatch { expected: CellCount, actual: usize },
    #[error("Grid side {actual} does not match configured board size {expected}")]
    GridSizeMismatch { expected: Coord, actual: Coord },
    #[error("Grid already holds mines")]
    GridNotBlank,
}

/// Reasons a board size / mine count pair cannot start a game.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board size must be positive")]
    EmptyBoard,
    #[error("Mine count must be positive")]
    NoMines,
    #[error("Board size {requested} is larger than the supported maximum")]
    BoardTooLarge { requested: u32 },
    #[error("Too many mines: {mines} requested but the board only has {cells} cells")]
    TooManyMines { mines: u32, cells: u32 },
}

pub type Result<T> = core::result::Result<T, GameError>;
