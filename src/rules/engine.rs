//! The interaction resolver.
//!
//! `Resolver` owns the rule constants, the roster and the mining table, and
//! applies single actions to a [`World`]. Each action lives in its own file:
//! - `mining.rs`: mining the block under the player
//! - `movement.rs`: stepping to an adjacent cell
//! - `monsters.rs`: the per-move monster pursuit pass
//! - `placement.rs`: putting an inventory block back on the board
//! - `explosion.rs`: detonating carried explosives
//!
//! The resolver never decides win/loss; it reports what happened and the
//! session applies the state machine.

use crate::core::{BlockKind, GameConfig, Item, Position, Roster, Rules, World};
use crate::events::{Cause, EventLog, GameEvent};

use super::table::MiningTable;

/// Applies player and monster actions to a world.
#[derive(Clone, Debug)]
pub struct Resolver {
    rules: Rules,
    roster: Roster,
    table: MiningTable,
}

impl Resolver {
    /// Build a resolver for a configuration.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            rules: config.rules.clone(),
            roster: config.roster.clone(),
            table: MiningTable::new(&config.rules, &config.roster),
        }
    }

    /// Rule constants.
    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Active roster.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The mining table.
    #[must_use]
    pub fn table(&self) -> &MiningTable {
        &self.table
    }

    /// Mutable access to the mining table, for custom rule sets.
    pub fn table_mut(&mut self) -> &mut MiningTable {
        &mut self.table
    }

    /// Whether `kind` is a monster.
    #[must_use]
    pub fn is_monster(&self, kind: BlockKind) -> bool {
        self.roster.is_monster(kind)
    }

    /// Live monsters on the board.
    #[must_use]
    pub fn monsters_remaining(&self, world: &World) -> usize {
        world.grid.count(|k| self.roster.is_monster(k))
    }

    /// The elimination check: no monster-kind cell remains.
    #[must_use]
    pub fn all_monsters_eliminated(&self, world: &World) -> bool {
        self.monsters_remaining(world) == 0
    }
}

/// Add one item, reporting it if a cap did not swallow it.
pub(crate) fn gain(world: &mut World, log: &mut EventLog, item: Item) -> bool {
    let added = world.inventory.add(item);
    if added {
        log.push(GameEvent::ItemGained { item, count: world.inventory.count(item) });
    }
    added
}

/// Deal damage. Returns `true` if the player is now dead.
pub(crate) fn hurt(world: &mut World, log: &mut EventLog, amount: i32, cause: Cause) -> bool {
    world.health -= amount;
    log.push(GameEvent::Damaged { amount, cause, health: world.health });
    world.is_dead()
}

/// Restore health, uncapped.
pub(crate) fn heal(world: &mut World, log: &mut EventLog, amount: i32) {
    world.health += amount;
    log.push(GameEvent::Healed { amount, health: world.health });
}

/// Turn a cell into Empty and drop any partial-mine entry for it.
pub(crate) fn clear(world: &mut World, log: &mut EventLog, pos: Position) {
    world.partial.remove(&pos);
    if world.grid.set(pos, BlockKind::Empty).is_some_and(|old| old != BlockKind::Empty) {
        log.push(GameEvent::BlockChanged { pos, kind: BlockKind::Empty });
    }
}
