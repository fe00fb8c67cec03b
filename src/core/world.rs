//! The mutable play state the rules operate on.
//!
//! `World` is everything a single action can touch: the grid, where the
//! player stands, the backtrack slot, half-mined cells, the inventory and
//! health. Timer and win/loss bookkeeping live one level up in
//! [`Session`](crate::session::Session).

use rustc_hash::FxHashMap;

use super::block::BlockKind;
use super::grid::Grid;
use super::inventory::Inventory;
use super::position::Position;

/// Multi-hit bookkeeping: position → hits still required.
///
/// A position is present only while its block is still being broken.
pub type PartialMines = FxHashMap<Position, u8>;

/// Mutable play state.
#[derive(Clone, Debug)]
pub struct World {
    pub grid: Grid,

    /// Where the player stands.
    pub player: Position,

    /// The last `Empty` cell the player walked off, which may be stepped back
    /// onto once even from a non-Empty cell.
    pub previous: Option<Position>,

    pub partial: PartialMines,

    pub inventory: Inventory,

    /// Raw health. May go negative internally; anything `<= 0` is death.
    pub health: i32,
}

impl World {
    /// Create a world around an existing grid.
    #[must_use]
    pub fn new(grid: Grid, player: Position, inventory: Inventory, health: i32) -> Self {
        Self {
            grid,
            player,
            previous: None,
            partial: PartialMines::default(),
            inventory,
            health,
        }
    }

    /// The block under the player.
    #[must_use]
    pub fn current_block(&self) -> BlockKind {
        self.grid.get(self.player).unwrap_or(BlockKind::Empty)
    }

    /// Whether the player is dead.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}
