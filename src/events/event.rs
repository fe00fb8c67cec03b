//! Game event types.

use serde::{Deserialize, Serialize};

use crate::core::{BlockKind, Difficulty, Item, Position};

/// What dealt damage or ended the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cause {
    /// Mining a TNT block.
    Tnt,
    /// Mining an antimatter TNT block, or standing in an antimatter blast.
    Antimatter,
    /// Mining lava.
    Lava,
    /// Mining a monster without a sword.
    Monster,
    /// A pursuing monster reached the player.
    MonsterAttack,
    /// The countdown ran out with monsters left.
    Timeout,
}

impl Cause {
    /// Stable kebab-case label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Cause::Tnt => "tnt",
            Cause::Antimatter => "antimatter",
            Cause::Lava => "lava",
            Cause::Monster => "monster",
            Cause::MonsterAttack => "monster-attack",
            Cause::Timeout => "timeout",
        }
    }
}

impl std::fmt::Display for Cause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Something observable happened.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A cell now holds `kind`.
    BlockChanged { pos: Position, kind: BlockKind },

    PlayerMoved { from: Position, to: Position },

    /// A multi-hit block took a hit but did not break.
    BlockCracked { pos: Position, hits_left: u8 },

    /// The player lost health. `health` is the raw value afterwards.
    Damaged { amount: i32, cause: Cause, health: i32 },

    /// The player gained health.
    Healed { amount: i32, health: i32 },

    ItemGained { item: Item, count: u32 },

    ItemSpent { item: Item, count: u32 },

    MonsterMoved { from: Position, to: Position },

    MonsterEliminated { pos: Position, kind: BlockKind },

    /// A placed explosive went off.
    Exploded { center: Position, radius: i32 },

    /// The countdown was armed by the first action.
    TimerStarted { time_limit: u32 },

    TimerTick { remaining: u32 },

    GameWon { elapsed_seconds: u32, is_new_record: bool },

    GameLost { cause: Cause },

    /// A fresh board was dealt.
    SessionReset { difficulty: Difficulty },
}

/// An append-only buffer of events produced while resolving inputs.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events not yet drained.
    #[must_use]
    pub fn pending(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take every pending event, leaving the log empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of pending events matching `pred`.
    pub fn count(&self, pred: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}
