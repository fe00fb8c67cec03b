//! # mine-monsters
//!
//! The engine of a grid-based mining game: the player digs through a square
//! board of blocks, collects resources, survives hazards and must eliminate
//! every monster before a countdown runs out.
//!
//! ## Design Principles
//!
//! 1. **Presentation-free**: the engine never draws, plays audio or reads
//!    input. It consumes intents and timer ticks and emits a [`GameEvent`]
//!    stream for an adapter to render.
//!
//! 2. **Configuration over convention**: the block roster, depth bands,
//!    difficulty presets and every rule constant live in [`GameConfig`].
//!    Mining behavior comes from a data-driven table built from it.
//!
//! 3. **Deterministic**: all randomness flows from a seeded [`GameRng`], so
//!    a seed reproduces every board and every loot roll.
//!
//! ## Architecture
//!
//! - **Explicit session value**: a [`Session`] owns the board, timer and
//!   win/loss bookkeeping. No globals.
//!
//! - **Single-writer queue**: the [`Game`] driver applies intents and ticks
//!   one at a time, and timer tokens carry a generation so a reset cancels
//!   every pending tick.
//!
//! - **Persistent grid**: the board is an `im::Vector`, so snapshots clone in
//!   O(1).
//!
//! ## Modules
//!
//! - `core`: positions, blocks, grid, inventory, world, RNG, configuration
//! - `board`: board generation
//! - `rules`: the interaction resolver and monster step
//! - `events`: the event stream
//! - `session`: state machine, timer, persistence, input queue
//! - `error`: configuration and persistence errors

pub mod board;
pub mod core;
pub mod error;
pub mod events;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    BlockKind, DepthBand, Difficulty, DifficultyConfig, Direction, GameConfig, GameRng, Grid, Inventory, Item,
    Position, Roster, Rules, World,
};

pub use crate::board::{generate, BoardGenerator};

pub use crate::rules::{
    Blast, DetonateRejected, Explosive, MineOutcome, MiningRule, MiningTable, MoveRejected, PlaceRejected, Resolver,
};

pub use crate::events::{Cause, EventLog, GameEvent};

pub use crate::session::{
    ActionError, BestTimeStore, Game, Input, Intent, JsonFileStore, MemoryStore, Session, SessionState, Snapshot,
    TimerToken,
};

pub use crate::error::{ConfigError, GameError, StoreError};
