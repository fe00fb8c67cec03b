//! Core engine types: positions, blocks, grid, inventory, world, RNG, configuration.
//!
//! This module contains the building blocks shared by the generator, the
//! rules and the session. Games configure behavior via `GameConfig` rather
//! than modifying the core.

pub mod block;
pub mod config;
pub mod grid;
pub mod inventory;
pub mod position;
pub mod rng;
pub mod world;

pub use block::BlockKind;
pub use config::{
    DepthBand, Difficulty, DifficultyConfig, DifficultyPresets, GameConfig, MonsterWeight, Roster, Rules,
};
pub use grid::Grid;
pub use inventory::{Inventory, Item};
pub use position::{Direction, Position};
pub use rng::GameRng;
pub use world::{PartialMines, World};
