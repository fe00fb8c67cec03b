//! Block vocabulary.
//!
//! `BlockKind` names every terrain or content type a cell can hold. Which
//! kinds actually appear in a game, and which of them count as monsters, is
//! decided by the [`Roster`](super::Roster), not by this enum.

use serde::{Deserialize, Serialize};

/// The content of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    Stone,
    IronOre,
    DiamondOre,
    Lava,
    /// A mined-out cell. The only kind the player may walk away from and
    /// the only kind monsters may walk into.
    Empty,
    Wood,
    Tnt,
    AntimatterTnt,
    Water,
    Cobblestone,
    Monster,
    Zombie,
    Creeper,
    Glass,
    Dirt,
    Wool,
    GoldenApple,
}

impl BlockKind {
    /// Every block kind.
    pub const ALL: [BlockKind; 17] = [
        BlockKind::Stone,
        BlockKind::IronOre,
        BlockKind::DiamondOre,
        BlockKind::Lava,
        BlockKind::Empty,
        BlockKind::Wood,
        BlockKind::Tnt,
        BlockKind::AntimatterTnt,
        BlockKind::Water,
        BlockKind::Cobblestone,
        BlockKind::Monster,
        BlockKind::Zombie,
        BlockKind::Creeper,
        BlockKind::Glass,
        BlockKind::Dirt,
        BlockKind::Wool,
        BlockKind::GoldenApple,
    ];

    /// Stable kebab-case name, matching the serialized form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BlockKind::Stone => "stone",
            BlockKind::IronOre => "iron-ore",
            BlockKind::DiamondOre => "diamond-ore",
            BlockKind::Lava => "lava",
            BlockKind::Empty => "empty",
            BlockKind::Wood => "wood",
            BlockKind::Tnt => "tnt",
            BlockKind::AntimatterTnt => "antimatter-tnt",
            BlockKind::Water => "water",
            BlockKind::Cobblestone => "cobblestone",
            BlockKind::Monster => "monster",
            BlockKind::Zombie => "zombie",
            BlockKind::Creeper => "creeper",
            BlockKind::Glass => "glass",
            BlockKind::Dirt => "dirt",
            BlockKind::Wool => "wool",
            BlockKind::GoldenApple => "golden-apple",
        }
    }

    /// Single-character glyph for text rendering.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            BlockKind::Stone => '#',
            BlockKind::IronOre => 'i',
            BlockKind::DiamondOre => 'D',
            BlockKind::Lava => '~',
            BlockKind::Empty => '.',
            BlockKind::Wood => 'w',
            BlockKind::Tnt => 't',
            BlockKind::AntimatterTnt => 'T',
            BlockKind::Water => '=',
            BlockKind::Cobblestone => 'c',
            BlockKind::Monster => 'M',
            BlockKind::Zombie => 'Z',
            BlockKind::Creeper => 'C',
            BlockKind::Glass => 'g',
            BlockKind::Dirt => 'd',
            BlockKind::Wool => 'o',
            BlockKind::GoldenApple => 'A',
        }
    }

    /// Whether this is the mined-out kind.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, BlockKind::Empty)
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
