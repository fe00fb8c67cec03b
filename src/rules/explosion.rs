//! Detonating carried explosives.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{BlockKind, Direction, GameRng, Item, Position, World};
use crate::events::{Cause, EventLog, GameEvent};

use super::engine::{clear, hurt, Resolver};

/// A carried explosive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Explosive {
    Tnt,
    Antimatter,
}

impl Explosive {
    /// The inventory item spent by detonating.
    #[must_use]
    pub const fn item(self) -> Item {
        match self {
            Explosive::Tnt => Item::Tnt,
            Explosive::Antimatter => Item::AntimatterTnt,
        }
    }
}

/// Why a detonation was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DetonateRejected {
    #[error("{0} is off the board")]
    OutOfBounds(Position),

    #[error("no {0} to detonate")]
    NoExplosive(Item),
}

/// The aftermath of a blast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Blast {
    pub center: Position,
    pub radius: i32,
    /// Non-monster cells turned Empty.
    pub cleared: usize,
    pub monsters_killed: usize,
    pub player_hit: bool,
    pub player_killed: bool,
}

impl Resolver {
    /// Detonate one carried explosive on the adjacent cell in `direction`.
    ///
    /// Every monster inside the blast square dies; other blocks break with
    /// the explosive's clear chance. The player's own cell is never cleared,
    /// but an antimatter blast that reaches it hurts.
    ///
    /// # Errors
    ///
    /// Returns why the detonation was refused; nothing is spent.
    pub fn detonate(
        &self,
        world: &mut World,
        explosive: Explosive,
        direction: Direction,
        rng: &mut GameRng,
        log: &mut EventLog,
    ) -> Result<Blast, DetonateRejected> {
        let center = world.player.step(direction);
        if !world.grid.contains(center) {
            return Err(DetonateRejected::OutOfBounds(center));
        }
        let item = explosive.item();
        if !world.inventory.take(item) {
            return Err(DetonateRejected::NoExplosive(item));
        }
        log.push(GameEvent::ItemSpent { item, count: world.inventory.count(item) });

        let rules = self.rules();
        let (radius, clear_chance) = match explosive {
            Explosive::Tnt => (rules.tnt_blast_radius, rules.tnt_clear_chance),
            Explosive::Antimatter => (rules.antimatter_blast_radius, rules.antimatter_clear_chance),
        };
        log.push(GameEvent::Exploded { center, radius });

        let mut blast = Blast {
            center,
            radius,
            cleared: 0,
            monsters_killed: 0,
            player_hit: false,
            player_killed: false,
        };

        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let pos = center.offset(dx, dy);
                let Some(kind) = world.grid.get(pos) else {
                    continue;
                };

                if pos == world.player {
                    if explosive == Explosive::Antimatter {
                        blast.player_hit = true;
                        blast.player_killed |=
                            hurt(world, log, rules.antimatter_blast_damage, Cause::Antimatter);
                    }
                    continue;
                }

                if self.is_monster(kind) {
                    clear(world, log, pos);
                    log.push(GameEvent::MonsterEliminated { pos, kind });
                    blast.monsters_killed += 1;
                } else if kind != BlockKind::Empty && rng.gen_bool(clear_chance) {
                    clear(world, log, pos);
                    blast.cleared += 1;
                }
            }
        }

        tracing::debug!(
            %center,
            radius,
            cleared = blast.cleared,
            monsters = blast.monsters_killed,
            "explosive detonated"
        );
        Ok(blast)
    }
}
