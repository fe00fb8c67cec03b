//! Crate-level error types.
//!
//! Rule rejections (a blocked move, nothing to place) are not failures and
//! live next to the rules that produce them; see [`crate::rules`] and
//! [`crate::session::ActionError`]. The errors here cover configuration and
//! persistence.

use thiserror::Error;

use crate::core::{BlockKind, Difficulty};

/// Invalid or unparsable configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown difficulty key {0:?}")]
    UnknownDifficulty(String),

    #[error("board size {size} is below the minimum of {min}")]
    BoardTooSmall { size: usize, min: usize },

    #[error("board size {size} is above the maximum of {max}")]
    BoardTooLarge { size: usize, max: usize },

    #[error("no depth bands configured")]
    NoBands,

    #[error("depth band {index} has no positive weights")]
    InvalidBand { index: usize },

    #[error("roster has no monster kinds with positive weight")]
    NoMonsters,

    #[error("monster kind {0} is not in the active block roster")]
    InactiveMonster(BlockKind),

    #[error("roster must include stone and empty")]
    MissingBaseBlocks,

    #[error("{difficulty} asks for {requested} monsters but only {capacity} cells are outside the safe zone")]
    TooManyMonsters {
        difficulty: Difficulty,
        requested: usize,
        capacity: usize,
    },

    #[error("{name} must be within 0..=1, got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Best-time persistence failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Any error surfaced while building or driving a game.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, GameError>;
