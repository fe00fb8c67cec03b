//! Mining the block under the player.

use crate::core::{BlockKind, GameRng, World};
use crate::events::{Cause, EventLog, GameEvent};

use super::engine::{clear, gain, heal, hurt, Resolver};
use super::table::MiningRule;

/// Result of one mining action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MineOutcome {
    /// Nothing there to mine.
    Nothing,
    /// The block cannot be mined (water).
    Rejected,
    /// A multi-hit block took a hit and still stands.
    Cracked { hits_left: u8 },
    /// The block broke; the cell is now Empty.
    Mined { kind: BlockKind },
    /// A monster was slain; the cell is now Empty.
    Slain { kind: BlockKind },
    /// An unarmed swing at a monster; it hit back and stays.
    Repelled { kind: BlockKind },
    /// The player died. The cell is left as it was.
    Died { cause: Cause },
}

impl Resolver {
    /// Mine the block at the player's position.
    pub fn mine(&self, world: &mut World, rng: &mut GameRng, log: &mut EventLog) -> MineOutcome {
        let pos = world.player;
        let kind = world.current_block();

        match self.table().rule(kind) {
            MiningRule::Inert => MineOutcome::Nothing,
            MiningRule::Impervious => {
                tracing::debug!(%pos, %kind, "block cannot be mined");
                MineOutcome::Rejected
            }
            MiningRule::Break => {
                clear(world, log, pos);
                MineOutcome::Mined { kind }
            }
            MiningRule::Collect { item } => {
                gain(world, log, item);
                clear(world, log, pos);
                MineOutcome::Mined { kind }
            }
            MiningRule::MultiHit { hits, item, bonus } => {
                let hits_left = world
                    .partial
                    .get(&pos)
                    .copied()
                    .unwrap_or(hits)
                    .saturating_sub(1);
                if hits_left > 0 {
                    world.partial.insert(pos, hits_left);
                    log.push(GameEvent::BlockCracked { pos, hits_left });
                    tracing::debug!(%pos, %kind, hits_left, "block cracked");
                    return MineOutcome::Cracked { hits_left };
                }

                gain(world, log, item);
                if let Some((bonus, chance)) = bonus {
                    if rng.gen_bool(chance) && gain(world, log, bonus) {
                        tracing::debug!(%pos, %bonus, "bonus drop");
                    }
                }
                clear(world, log, pos);
                MineOutcome::Mined { kind }
            }
            MiningRule::Hazard { item, damage, cause } => {
                if let Some(item) = item {
                    gain(world, log, item);
                }
                if hurt(world, log, damage, cause) {
                    return MineOutcome::Died { cause };
                }
                clear(world, log, pos);
                MineOutcome::Mined { kind }
            }
            MiningRule::Heal { item, amount } => {
                gain(world, log, item);
                heal(world, log, amount);
                clear(world, log, pos);
                MineOutcome::Mined { kind }
            }
            MiningRule::Hostile { damage } => {
                if world.inventory.has_sword {
                    clear(world, log, pos);
                    log.push(GameEvent::MonsterEliminated { pos, kind });
                    return MineOutcome::Slain { kind };
                }
                if hurt(world, log, damage, Cause::Monster) {
                    return MineOutcome::Died { cause: Cause::Monster };
                }
                MineOutcome::Repelled { kind }
            }
        }
    }
}
