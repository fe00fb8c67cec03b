//! Collected resources and the diamond sword.

use serde::{Deserialize, Serialize};

use super::block::BlockKind;

/// A collectible resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Item {
    Iron,
    Diamond,
    Tnt,
    AntimatterTnt,
    Wool,
    GoldenApple,
    DiamondSword,
}

impl Item {
    /// The block this item turns back into when placed, if it can be placed.
    #[must_use]
    pub const fn placed_block(self) -> Option<BlockKind> {
        match self {
            Item::Iron => Some(BlockKind::IronOre),
            Item::Diamond => Some(BlockKind::DiamondOre),
            Item::Tnt => Some(BlockKind::Tnt),
            Item::AntimatterTnt => Some(BlockKind::AntimatterTnt),
            _ => None,
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Item::Iron => "iron",
            Item::Diamond => "diamond",
            Item::Tnt => "tnt",
            Item::AntimatterTnt => "antimatter-tnt",
            Item::Wool => "wool",
            Item::GoldenApple => "golden-apple",
            Item::DiamondSword => "diamond-sword",
        };
        f.write_str(name)
    }
}

/// The player's resource counts.
///
/// Counts are unsigned and can only be spent when positive. Swords are capped
/// at `sword_cap`; gains beyond it are dropped silently.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub iron: u32,
    pub diamond: u32,
    pub tnt: u32,
    pub antimatter_tnt: u32,
    pub wool: u32,
    pub golden_apple: u32,
    diamond_swords: u8,
    sword_cap: u8,
    /// Whether the player can slay monsters. Starts `true`; scripted setups
    /// may clear it to exercise unarmed combat.
    pub has_sword: bool,
}

impl Inventory {
    /// A fresh inventory holding `starting_swords` swords (clamped to the cap).
    #[must_use]
    pub fn new(starting_swords: u8, sword_cap: u8) -> Self {
        let diamond_swords = starting_swords.min(sword_cap);
        Self {
            iron: 0,
            diamond: 0,
            tnt: 0,
            antimatter_tnt: 0,
            wool: 0,
            golden_apple: 0,
            diamond_swords,
            sword_cap,
            has_sword: diamond_swords > 0,
        }
    }

    /// Number of diamond swords held.
    #[must_use]
    pub fn diamond_swords(&self) -> u8 {
        self.diamond_swords
    }

    /// Current count of `item`.
    #[must_use]
    pub fn count(&self, item: Item) -> u32 {
        match item {
            Item::Iron => self.iron,
            Item::Diamond => self.diamond,
            Item::Tnt => self.tnt,
            Item::AntimatterTnt => self.antimatter_tnt,
            Item::Wool => self.wool,
            Item::GoldenApple => self.golden_apple,
            Item::DiamondSword => u32::from(self.diamond_swords),
        }
    }

    /// Add one `item`. Returns `false` if a cap swallowed the gain.
    pub fn add(&mut self, item: Item) -> bool {
        let slot = match item {
            Item::Iron => &mut self.iron,
            Item::Diamond => &mut self.diamond,
            Item::Tnt => &mut self.tnt,
            Item::AntimatterTnt => &mut self.antimatter_tnt,
            Item::Wool => &mut self.wool,
            Item::GoldenApple => &mut self.golden_apple,
            Item::DiamondSword => {
                if self.diamond_swords >= self.sword_cap {
                    return false;
                }
                self.diamond_swords += 1;
                self.has_sword = true;
                return true;
            }
        };
        *slot = slot.saturating_add(1);
        true
    }

    /// Spend one `item`. Returns `false` (and changes nothing) if none is held.
    ///
    /// Swords are never spent.
    pub fn take(&mut self, item: Item) -> bool {
        let slot = match item {
            Item::Iron => &mut self.iron,
            Item::Diamond => &mut self.diamond,
            Item::Tnt => &mut self.tnt,
            Item::AntimatterTnt => &mut self.antimatter_tnt,
            Item::Wool => &mut self.wool,
            Item::GoldenApple => &mut self.golden_apple,
            Item::DiamondSword => return false,
        };
        match slot.checked_sub(1) {
            Some(left) => {
                *slot = left;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_inventory() {
        let inv = Inventory::new(1, 3);
        assert_eq!(inv.diamond_swords(), 1);
        assert!(inv.has_sword);
        assert_eq!(inv.count(Item::Diamond), 0);

        let unarmed = Inventory::new(0, 3);
        assert!(!unarmed.has_sword);
    }

    #[test]
    fn test_sword_cap() {
        let mut inv = Inventory::new(1, 3);
        assert!(inv.add(Item::DiamondSword));
        assert!(inv.add(Item::DiamondSword));
        assert!(!inv.add(Item::DiamondSword));
        assert_eq!(inv.diamond_swords(), 3);
    }

    #[test]
    fn test_take_never_goes_negative() {
        let mut inv = Inventory::new(1, 3);
        assert!(!inv.take(Item::Tnt));
        assert_eq!(inv.tnt, 0);

        inv.add(Item::Tnt);
        assert!(inv.take(Item::Tnt));
        assert!(!inv.take(Item::Tnt));
        assert!(!inv.take(Item::DiamondSword));
        assert_eq!(inv.diamond_swords(), 1);
    }

    #[test]
    fn test_placed_block() {
        assert_eq!(Item::Iron.placed_block(), Some(BlockKind::IronOre));
        assert_eq!(Item::Wool.placed_block(), None);
    }
}
