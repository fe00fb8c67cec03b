//! Putting a carried block back on the board.

use thiserror::Error;

use crate::core::{BlockKind, Direction, Item, Position, World};
use crate::events::{EventLog, GameEvent};

use super::engine::Resolver;

/// Items that can be placed, highest priority first.
pub const PLACEMENT_PRIORITY: [Item; 4] = [Item::Iron, Item::Diamond, Item::Tnt, Item::AntimatterTnt];

/// Why a placement was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlaceRejected {
    #[error("{0} is off the board")]
    OutOfBounds(Position),

    #[error("{0} is not empty")]
    Occupied(Position),

    #[error("nothing to place")]
    NothingToPlace,
}

impl Resolver {
    /// Place the highest-priority carried block on the adjacent cell in
    /// `direction`.
    ///
    /// A placed diamond ore counts as already hit once.
    ///
    /// # Errors
    ///
    /// Returns why the placement was refused; nothing is spent.
    pub fn place(
        &self,
        world: &mut World,
        direction: Direction,
        log: &mut EventLog,
    ) -> Result<BlockKind, PlaceRejected> {
        let target = world.player.step(direction);
        match world.grid.get(target) {
            None => return Err(PlaceRejected::OutOfBounds(target)),
            Some(BlockKind::Empty) => {}
            Some(_) => return Err(PlaceRejected::Occupied(target)),
        }

        let (item, kind) = PLACEMENT_PRIORITY
            .into_iter()
            .filter_map(|item| item.placed_block().map(|kind| (item, kind)))
            .filter(|&(_, kind)| self.roster().is_active(kind))
            .find(|&(item, _)| world.inventory.count(item) > 0)
            .ok_or(PlaceRejected::NothingToPlace)?;

        world.inventory.take(item);
        world.grid.set(target, kind);
        if kind == BlockKind::DiamondOre && self.rules().diamond_hits > 1 {
            world.partial.insert(target, 1);
        }

        log.push(GameEvent::ItemSpent { item, count: world.inventory.count(item) });
        log.push(GameEvent::BlockChanged { pos: target, kind });
        tracing::debug!(%target, %kind, "block placed");
        Ok(kind)
    }
}
