//! Board generation: safe zone, exact monster placement, depth-banded terrain.

pub mod generator;

pub use generator::{generate, BoardGenerator};
