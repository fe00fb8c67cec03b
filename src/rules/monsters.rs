//! Monster pursuit.
//!
//! Runs once after every successful player move. Monsters within aggro range
//! take one step along the axis with the larger distance to the player
//! (vertical on ties). A step onto the player is an attack; a step onto an
//! Empty cell is a move; anything else leaves the monster where it is. A
//! monster sharing the player's cell has no axis to follow and tries to step up.
//!
//! Monsters act in row-major order of where they stood when the pass began,
//! and each acts at most once per pass.

use smallvec::SmallVec;

use crate::core::{BlockKind, Position, World};
use crate::events::{Cause, EventLog, GameEvent};

use super::engine::{hurt, Resolver};

/// What happened during one monster pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonsterReport {
    /// `(from, to)` for every monster that moved.
    pub moves: SmallVec<[(Position, Position); 8]>,
    /// Number of attacks that landed.
    pub attacks: u32,
    /// The pass ended early because the player died.
    pub player_killed: bool,
}

impl Resolver {
    /// Where a monster at `origin` wants to go, if it is close enough to care.
    #[must_use]
    pub fn pursuit_step(&self, origin: Position, player: Position) -> Option<Position> {
        if origin.manhattan(player) > self.rules().aggro_range {
            return None;
        }
        let dx = player.x - origin.x;
        let dy = player.y - origin.y;
        let step = if dx.abs() > dy.abs() {
            origin.offset(dx.signum(), 0)
        } else if dy > 0 {
            origin.offset(0, 1)
        } else {
            origin.offset(0, -1)
        };
        Some(step)
    }

    /// Run one pursuit pass over every live monster.
    pub fn step_monsters(&self, world: &mut World, log: &mut EventLog) -> MonsterReport {
        let mut report = MonsterReport::default();
        let monsters = world.grid.find_all(|k| self.is_monster(k));

        for origin in monsters {
            let Some(kind) = world.grid.get(origin).filter(|&k| self.is_monster(k)) else {
                continue;
            };
            let Some(dest) = self.pursuit_step(origin, world.player) else {
                continue;
            };

            if dest == world.player {
                report.attacks += 1;
                tracing::debug!(%origin, %kind, "monster attacks");
                if hurt(world, log, self.rules().monster_damage, Cause::MonsterAttack) {
                    report.player_killed = true;
                    return report;
                }
            } else if world.grid.get(dest) == Some(BlockKind::Empty) {
                world.grid.set(dest, kind);
                world.grid.set(origin, BlockKind::Empty);
                log.push(GameEvent::MonsterMoved { from: origin, to: dest });
                report.moves.push((origin, dest));
            }
        }

        report
    }
}
