//! The data-driven mining table.
//!
//! Each active block kind maps to one [`MiningRule`] describing what mining
//! it does. The table is built once from `Rules` + `Roster`, so narrowing the
//! roster (dropping iron ore, a monster kind, ...) never touches the
//! resolver's control flow.

use rustc_hash::FxHashMap;

use crate::core::{BlockKind, Item, Roster, Rules};
use crate::events::Cause;

/// What mining a block does.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MiningRule {
    /// Nothing to mine (an already-empty cell).
    Inert,

    /// Cannot be mined; the attempt is silently rejected (water).
    Impervious,

    /// Breaks into Empty with no other effect.
    Break,

    /// Breaks into Empty and yields one `item`.
    Collect { item: Item },

    /// Needs `hits` mining actions. The last one yields `item` and may roll a
    /// `bonus` item with the given probability.
    MultiHit {
        hits: u8,
        item: Item,
        bonus: Option<(Item, f64)>,
    },

    /// Yields `item` (if any) and deals `damage`. Breaks only if the player
    /// survives.
    Hazard {
        item: Option<Item>,
        damage: i32,
        cause: Cause,
    },

    /// Yields `item` and restores `amount` health, uncapped.
    Heal { item: Item, amount: i32 },

    /// A monster: slain if the player holds a sword, otherwise it hits back
    /// for `damage` and stays put.
    Hostile { damage: i32 },
}

/// Block kind → mining rule for every active kind.
#[derive(Clone, Debug)]
pub struct MiningTable {
    rules: FxHashMap<BlockKind, MiningRule>,
}

impl MiningTable {
    /// Build the table for a roster.
    #[must_use]
    pub fn new(rules: &Rules, roster: &Roster) -> Self {
        let table = roster
            .blocks
            .iter()
            .map(|&kind| {
                let rule = if roster.is_monster(kind) {
                    MiningRule::Hostile { damage: rules.monster_damage }
                } else {
                    Self::terrain_rule(kind, rules)
                };
                (kind, rule)
            })
            .collect();
        Self { rules: table }
    }

    fn terrain_rule(kind: BlockKind, rules: &Rules) -> MiningRule {
        match kind {
            BlockKind::Empty => MiningRule::Inert,
            BlockKind::Water => MiningRule::Impervious,
            BlockKind::IronOre => MiningRule::Collect { item: Item::Iron },
            BlockKind::Wool => MiningRule::Collect { item: Item::Wool },
            BlockKind::DiamondOre => MiningRule::MultiHit {
                hits: rules.diamond_hits,
                item: Item::Diamond,
                bonus: Some((Item::DiamondSword, rules.sword_drop_chance)),
            },
            BlockKind::Tnt => MiningRule::Hazard {
                item: Some(Item::Tnt),
                damage: rules.tnt_damage,
                cause: Cause::Tnt,
            },
            BlockKind::AntimatterTnt => MiningRule::Hazard {
                item: Some(Item::AntimatterTnt),
                damage: rules.antimatter_damage,
                cause: Cause::Antimatter,
            },
            BlockKind::Lava => MiningRule::Hazard {
                item: None,
                damage: rules.lava_damage,
                cause: Cause::Lava,
            },
            BlockKind::GoldenApple => MiningRule::Heal {
                item: Item::GoldenApple,
                amount: rules.golden_apple_heal,
            },
            // A monster-shaped kind that the roster does not treat as a
            // monster is plain terrain.
            BlockKind::Stone
            | BlockKind::Wood
            | BlockKind::Cobblestone
            | BlockKind::Glass
            | BlockKind::Dirt
            | BlockKind::Monster
            | BlockKind::Zombie
            | BlockKind::Creeper => MiningRule::Break,
        }
    }

    /// The rule for `kind`; kinds outside the roster are inert.
    #[must_use]
    pub fn rule(&self, kind: BlockKind) -> MiningRule {
        self.rules.get(&kind).copied().unwrap_or(MiningRule::Inert)
    }

    /// Override the rule for one kind.
    pub fn set_rule(&mut self, kind: BlockKind, rule: MiningRule) {
        self.rules.insert(kind, rule);
    }
}
