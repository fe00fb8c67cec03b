//! Serializable session view.

use serde::{Deserialize, Serialize};

use crate::core::{Difficulty, Grid, Inventory, Position};

use super::state::SessionState;

/// Everything a presentation adapter needs to draw the game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub difficulty: Difficulty,
    pub state: SessionState,
    pub grid: Grid,
    pub player: Position,
    pub inventory: Inventory,
    /// Clamped at zero.
    pub health: i32,
    pub time_left: u32,
    pub best_time: Option<u32>,
    pub monsters_remaining: usize,
}

impl Snapshot {
    /// Render the board with the player drawn as `@`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.grid.size() * (self.grid.size() + 1));
        for (pos, kind) in self.grid.iter() {
            out.push(if pos == self.player { '@' } else { kind.glyph() });
            if pos.x as usize == self.grid.size() - 1 {
                out.push('\n');
            }
        }
        out
    }
}
