//! Game configuration types.
//!
//! Games are configured at startup by providing:
//! - `Rules`: every damage, heal, drop and range constant
//! - `Roster`: which block kinds exist and which of them are monsters
//! - `DepthBand`: the per-band block probability tables
//! - `DifficultyConfig`: time limit, golden-apple abundance and monster count
//!   for each named `Difficulty`
//! - `GameConfig`: combines all configuration
//!
//! The resolver and generator never hardcode a block roster - they ask the
//! configuration.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::block::BlockKind;
use crate::error::ConfigError;

/// Named difficulty level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Parse a difficulty key leniently.
    ///
    /// Case-insensitive; anything unrecognized falls back to
    /// [`Difficulty::Medium`].
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        key.parse().unwrap_or_else(|_| {
            tracing::warn!(key, "unknown difficulty key, falling back to medium");
            Difficulty::Medium
        })
    }

    /// Lowercase key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownDifficulty(s.to_string()))
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-difficulty parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    /// Countdown start value, in seconds.
    pub time_limit: u32,

    /// Probability (0..=1) that a golden apple rolled by a depth band is
    /// actually placed; otherwise Stone is placed instead.
    pub golden_apple_reduction: f64,

    /// Exact number of monsters placed on a fresh board.
    pub total_monster_count: usize,
}

/// The three difficulty presets.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DifficultyPresets {
    pub easy: DifficultyConfig,
    pub medium: DifficultyConfig,
    pub hard: DifficultyConfig,
}

impl DifficultyPresets {
    /// Look up the preset for `difficulty`.
    #[must_use]
    pub fn get(&self, difficulty: Difficulty) -> &DifficultyConfig {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }
}

impl Default for DifficultyPresets {
    fn default() -> Self {
        Self {
            easy: DifficultyConfig {
                time_limit: 180,
                golden_apple_reduction: 1.0,
                total_monster_count: 5,
            },
            medium: DifficultyConfig {
                time_limit: 120,
                golden_apple_reduction: 0.6,
                total_monster_count: 8,
            },
            hard: DifficultyConfig {
                time_limit: 60,
                golden_apple_reduction: 0.3,
                total_monster_count: 12,
            },
        }
    }
}

/// Rule constants used by the resolver and the monster step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    pub starting_health: i32,
    pub tnt_damage: i32,
    pub antimatter_damage: i32,
    pub lava_damage: i32,
    /// Damage from mining a monster unarmed, and from a monster's attack.
    pub monster_damage: i32,
    pub golden_apple_heal: i32,
    /// Mining actions needed to break diamond ore.
    pub diamond_hits: u8,
    pub sword_drop_chance: f64,
    pub sword_cap: u8,
    pub starting_swords: u8,
    /// Manhattan distance within which monsters pursue the player.
    pub aggro_range: u32,
    pub tnt_blast_radius: i32,
    pub tnt_clear_chance: f64,
    pub antimatter_blast_radius: i32,
    pub antimatter_clear_chance: f64,
    /// Damage to the player when caught inside an antimatter blast.
    pub antimatter_blast_damage: i32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            starting_health: 10,
            tnt_damage: 4,
            antimatter_damage: 20,
            lava_damage: 2,
            monster_damage: 3,
            golden_apple_heal: 5,
            diamond_hits: 2,
            sword_drop_chance: 0.1,
            sword_cap: 3,
            starting_swords: 1,
            aggro_range: 5,
            tnt_blast_radius: 1,
            tnt_clear_chance: 0.7,
            antimatter_blast_radius: 2,
            antimatter_clear_chance: 0.9,
            antimatter_blast_damage: 20,
        }
    }
}

/// A monster kind and its relative placement weight.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonsterWeight {
    pub kind: BlockKind,
    pub weight: f32,
}

/// The active block vocabulary.
///
/// Block kinds not listed in `blocks` are never generated (Stone is placed
/// instead) and have no mining rule. Kinds listed in `monsters` are the
/// monster kinds; they pursue the player and count towards elimination.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub blocks: Vec<BlockKind>,
    pub monsters: Vec<MonsterWeight>,
}

impl Roster {
    /// The full vocabulary: iron ore, wool and three monster kinds.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            blocks: BlockKind::ALL.to_vec(),
            monsters: vec![
                MonsterWeight { kind: BlockKind::Monster, weight: 0.4 },
                MonsterWeight { kind: BlockKind::Zombie, weight: 0.3 },
                MonsterWeight { kind: BlockKind::Creeper, weight: 0.3 },
            ],
        }
    }

    /// The reduced vocabulary: no iron ore, no wool, no creepers.
    #[must_use]
    pub fn modern() -> Self {
        Self {
            blocks: BlockKind::ALL
                .into_iter()
                .filter(|k| !matches!(k, BlockKind::IronOre | BlockKind::Wool | BlockKind::Creeper))
                .collect(),
            monsters: vec![
                MonsterWeight { kind: BlockKind::Monster, weight: 0.5 },
                MonsterWeight { kind: BlockKind::Zombie, weight: 0.5 },
            ],
        }
    }

    /// Whether `kind` is part of this roster.
    #[must_use]
    pub fn is_active(&self, kind: BlockKind) -> bool {
        self.blocks.contains(&kind)
    }

    /// Whether `kind` is a monster under this roster.
    #[must_use]
    pub fn is_monster(&self, kind: BlockKind) -> bool {
        self.monsters.iter().any(|m| m.kind == kind)
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::classic()
    }
}

/// A horizontal slice of the board with its own block probabilities.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DepthBand {
    /// Exclusive lower edge of the band, as a fraction of board height.
    /// A row `y` belongs to the first band with `y < until * board_size`.
    pub until: f64,

    /// Relative weights; they need not sum to 1.
    pub weights: Vec<(BlockKind, f32)>,
}

impl DepthBand {
    /// Create a band.
    pub fn new(until: f64, weights: Vec<(BlockKind, f32)>) -> Self {
        Self { until, weights }
    }

    /// The four default bands: surface, middle, deep and bottom.
    #[must_use]
    pub fn defaults() -> Vec<DepthBand> {
        use BlockKind::*;
        vec![
            DepthBand::new(
                0.2,
                vec![(Stone, 0.3), (Wood, 0.2), (Dirt, 0.15), (Glass, 0.15), (IronOre, 0.1), (GoldenApple, 0.1)],
            ),
            DepthBand::new(
                0.53,
                vec![
                    (Stone, 0.2),
                    (Wood, 0.15),
                    (Cobblestone, 0.15),
                    (Dirt, 0.15),
                    (Wool, 0.1),
                    (IronOre, 0.1),
                    (DiamondOre, 0.05),
                    (GoldenApple, 0.1),
                ],
            ),
            DepthBand::new(
                0.8,
                vec![
                    (Stone, 0.25),
                    (IronOre, 0.15),
                    (DiamondOre, 0.2),
                    (Tnt, 0.1),
                    (AntimatterTnt, 0.05),
                    (Water, 0.1),
                    (Glass, 0.1),
                    (GoldenApple, 0.05),
                ],
            ),
            DepthBand::new(
                1.0,
                vec![
                    (Stone, 0.2),
                    (IronOre, 0.15),
                    (DiamondOre, 0.15),
                    (Lava, 0.15),
                    (Tnt, 0.1),
                    (AntimatterTnt, 0.05),
                    (Glass, 0.1),
                    (GoldenApple, 0.1),
                ],
            ),
        ]
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board.
    pub board_size: usize,

    pub rules: Rules,

    pub roster: Roster,

    /// Depth bands, top first.
    pub bands: Vec<DepthBand>,

    pub difficulties: DifficultyPresets,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 15,
            rules: Rules::default(),
            roster: Roster::default(),
            bands: DepthBand::defaults(),
            difficulties: DifficultyPresets::default(),
        }
    }
}

impl GameConfig {
    /// Smallest supported board: a safe zone plus a ring around it.
    pub const MIN_BOARD_SIZE: usize = 5;
    /// Largest supported side length; keeps cell counts and `i32` coordinates in range.
    pub const MAX_BOARD_SIZE: usize = 256;

    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Replace the rule constants.
    #[must_use]
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// Replace the roster.
    #[must_use]
    pub fn with_roster(mut self, roster: Roster) -> Self {
        self.roster = roster;
        self
    }

    /// Replace the depth bands.
    #[must_use]
    pub fn with_bands(mut self, bands: Vec<DepthBand>) -> Self {
        self.bands = bands;
        self
    }

    /// Replace one difficulty preset.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty, config: DifficultyConfig) -> Self {
        match difficulty {
            Difficulty::Easy => self.difficulties.easy = config,
            Difficulty::Medium => self.difficulties.medium = config,
            Difficulty::Hard => self.difficulties.hard = config,
        }
        self
    }

    /// Parameters for `difficulty`.
    #[must_use]
    pub fn difficulty(&self, difficulty: Difficulty) -> &DifficultyConfig {
        self.difficulties.get(difficulty)
    }

    /// Radius of the square safe zone around the board center.
    #[must_use]
    pub fn safe_zone_radius(&self) -> usize {
        (self.board_size / 5).max(1)
    }

    /// Number of cells outside the safe zone (clipped to the board).
    #[must_use]
    pub fn placeable_cells(&self) -> usize {
        let side = (2 * self.safe_zone_radius() + 1).min(self.board_size);
        self.board_size
            .saturating_mul(self.board_size)
            .saturating_sub(side.saturating_mul(side))
    }

    /// Index of the depth band containing `row`.
    ///
    /// Rows beyond the last band's edge belong to the last band.
    #[must_use]
    pub fn band_for_row(&self, row: usize) -> Option<&DepthBand> {
        let height = self.board_size as f64;
        self.bands
            .iter()
            .find(|b| (row as f64) < b.until * height)
            .or_else(|| self.bands.last())
    }

    /// Parse a configuration from JSON. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the result fails
    /// [`validate`](Self::validate).
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check internal consistency.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < Self::MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall {
                size: self.board_size,
                min: Self::MIN_BOARD_SIZE,
            });
        }
        if self.board_size > Self::MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge {
                size: self.board_size,
                max: Self::MAX_BOARD_SIZE,
            });
        }

        if self.bands.is_empty() {
            return Err(ConfigError::NoBands);
        }
        for (index, band) in self.bands.iter().enumerate() {
            let valid = band.weights.iter().all(|&(_, w)| w >= 0.0 && w.is_finite())
                && band.weights.iter().map(|&(_, w)| w).sum::<f32>() > 0.0;
            if !valid {
                return Err(ConfigError::InvalidBand { index });
            }
        }

        if self.roster.monsters.is_empty()
            || self.roster.monsters.iter().all(|m| m.weight <= 0.0)
        {
            return Err(ConfigError::NoMonsters);
        }
        if let Some(m) = self.roster.monsters.iter().find(|m| !self.roster.is_active(m.kind)) {
            return Err(ConfigError::InactiveMonster(m.kind));
        }
        if !self.roster.is_active(BlockKind::Empty) || !self.roster.is_active(BlockKind::Stone) {
            return Err(ConfigError::MissingBaseBlocks);
        }

        let capacity = self.placeable_cells();
        for difficulty in Difficulty::ALL {
            let preset = self.difficulty(difficulty);
            if preset.total_monster_count > capacity {
                return Err(ConfigError::TooManyMonsters {
                    difficulty,
                    requested: preset.total_monster_count,
                    capacity,
                });
            }
            if !(0.0..=1.0).contains(&preset.golden_apple_reduction) {
                return Err(ConfigError::InvalidProbability {
                    name: "golden_apple_reduction",
                    value: preset.golden_apple_reduction,
                });
            }
        }

        for (name, value) in [
            ("sword_drop_chance", self.rules.sword_drop_chance),
            ("tnt_clear_chance", self.rules.tnt_clear_chance),
            ("antimatter_clear_chance", self.rules.antimatter_clear_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability { name, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.board_size, 15);
        assert_eq!(config.safe_zone_radius(), 3);
        assert_eq!(config.placeable_cells(), 225 - 49);
    }

    #[test]
    fn test_difficulty_presets() {
        let config = GameConfig::default();
        assert_eq!(config.difficulty(Difficulty::Easy).time_limit, 180);
        assert_eq!(config.difficulty(Difficulty::Medium).time_limit, 120);
        assert_eq!(config.difficulty(Difficulty::Hard).time_limit, 60);
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("EASY".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(" hard ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!(matches!(
            "nightmare".parse::<Difficulty>(),
            Err(ConfigError::UnknownDifficulty(_))
        ));

        assert_eq!(Difficulty::from_key("Easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_key("nightmare"), Difficulty::Medium);
        assert_eq!(Difficulty::from_key(""), Difficulty::Medium);
    }

    #[test]
    fn test_band_for_row_matches_classic_rows() {
        let config = GameConfig::default();
        let band_index = |row| {
            let band = config.band_for_row(row).unwrap();
            config.bands.iter().position(|b| b == band).unwrap()
        };

        assert_eq!(band_index(0), 0);
        assert_eq!(band_index(2), 0);
        assert_eq!(band_index(3), 1);
        assert_eq!(band_index(7), 1);
        assert_eq!(band_index(8), 2);
        assert_eq!(band_index(11), 2);
        assert_eq!(band_index(12), 3);
        assert_eq!(band_index(14), 3);
    }

    #[test]
    fn test_roster_membership() {
        let classic = Roster::classic();
        assert!(classic.is_monster(BlockKind::Creeper));
        assert!(classic.is_active(BlockKind::IronOre));
        assert!(!classic.is_monster(BlockKind::Stone));

        let modern = Roster::modern();
        assert!(!modern.is_monster(BlockKind::Creeper));
        assert!(!modern.is_active(BlockKind::Wool));
        assert!(modern.is_monster(BlockKind::Zombie));
    }

    #[test]
    fn test_validate_rejects_small_board() {
        let config = GameConfig::default().with_board_size(3);
        assert!(matches!(config.validate(), Err(ConfigError::BoardTooSmall { .. })));
    }

    #[test]
    fn test_validate_rejects_huge_board() {
        let config = GameConfig::default().with_board_size(GameConfig::MAX_BOARD_SIZE + 1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BoardTooLarge { size: 257, max: 256 })
        ));
        assert!(GameConfig::default().with_board_size(GameConfig::MAX_BOARD_SIZE).validate().is_ok());

        let err = GameConfig::from_json_str(r#"{ "board_size": 8589934592 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::BoardTooLarge { size: 8_589_934_592, .. }));
    }

    #[test]
    fn test_validate_rejects_too_many_monsters() {
        let config = GameConfig::default().with_difficulty(
            Difficulty::Hard,
            DifficultyConfig {
                time_limit: 60,
                golden_apple_reduction: 0.3,
                total_monster_count: 500,
            },
        );
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooManyMonsters { difficulty: Difficulty::Hard, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_inactive_monster() {
        let mut roster = Roster::modern();
        roster.monsters.push(MonsterWeight { kind: BlockKind::Creeper, weight: 1.0 });
        let config = GameConfig::default().with_roster(roster);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InactiveMonster(BlockKind::Creeper))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_band() {
        let config = GameConfig::default().with_bands(vec![DepthBand::new(1.0, vec![])]);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidBand { index: 0 })));
    }

    #[test]
    fn test_json_partial_override() {
        let config = GameConfig::from_json_str(r#"{ "board_size": 20 }"#).unwrap();
        assert_eq!(config.board_size, 20);
        assert_eq!(config.rules, Rules::default());
        assert_eq!(config.safe_zone_radius(), 4);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = GameConfig::default().with_roster(Roster::modern());
        let json = serde_json::to_string(&config).unwrap();
        let parsed = GameConfig::from_json_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_json_malformed() {
        assert!(matches!(GameConfig::from_json_str("{ nope"), Err(ConfigError::Json(_))));
    }
}
