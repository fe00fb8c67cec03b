//! Board generation tests.
//!
//! Every generated board must carry the exact monster count for its
//! difficulty and a harmless safe zone around the spawn.

use mine_monsters::board::{generate, BoardGenerator};
use mine_monsters::core::{BlockKind, Difficulty, GameConfig, GameRng, Roster};
use proptest::prelude::*;

fn is_harmful(kind: BlockKind, roster: &Roster) -> bool {
    roster.is_monster(kind)
        || matches!(
            kind,
            BlockKind::Lava | BlockKind::Tnt | BlockKind::AntimatterTnt | BlockKind::Water
        )
}

fn difficulty_strategy() -> impl Strategy<Value = Difficulty> {
    prop_oneof![Just(Difficulty::Easy), Just(Difficulty::Medium), Just(Difficulty::Hard)]
}

// =============================================================================
// Invariants Over Random Seeds
// =============================================================================

proptest! {
    #[test]
    fn prop_monster_count_is_exact(seed in any::<u64>(), difficulty in difficulty_strategy()) {
        let config = GameConfig::default();
        let grid = generate(&config, difficulty, seed).unwrap();
        let monsters = grid.count(|k| config.roster.is_monster(k));
        prop_assert_eq!(monsters, config.difficulty(difficulty).total_monster_count);
    }

    #[test]
    fn prop_safe_zone_is_harmless(seed in any::<u64>(), difficulty in difficulty_strategy()) {
        let config = GameConfig::default();
        let generator = BoardGenerator::new(&config).unwrap();
        let grid = generator.generate(difficulty, &mut GameRng::new(seed));

        for pos in grid.positions().filter(|&p| generator.in_safe_zone(p)) {
            let kind = grid.get(pos).unwrap();
            prop_assert!(!is_harmful(kind, &config.roster), "{} at {}", kind, pos);
        }
    }

    #[test]
    fn prop_board_sizes(size in 5usize..30, seed in 0u64..1000) {
        let config = GameConfig::default().with_board_size(size);
        // Small boards cannot hold every preset's monsters
        prop_assume!(config.validate().is_ok());

        let grid = generate(&config, Difficulty::Easy, seed).unwrap();
        prop_assert_eq!(grid.size(), size);
        prop_assert_eq!(grid.iter().count(), size * size);
    }
}

// =============================================================================
// Depth Bands
// =============================================================================

/// Lava only appears in the bottom band of the default configuration.
#[test]
fn test_lava_only_in_bottom_band() {
    let config = GameConfig::default();
    for seed in 0..25 {
        let grid = generate(&config, Difficulty::Hard, seed).unwrap();
        for (pos, kind) in grid.iter() {
            if kind == BlockKind::Lava {
                assert!(pos.y >= 12, "lava at {pos} above the bottom band");
            }
        }
    }
}

/// A single-kind band fills everything outside the safe zone and the monsters.
#[test]
fn test_custom_band() {
    let config = GameConfig::default().with_bands(vec![mine_monsters::core::DepthBand::new(
        1.0,
        vec![(BlockKind::Glass, 1.0)],
    )]);
    let generator = BoardGenerator::new(&config).unwrap();
    let grid = generator.generate(Difficulty::Medium, &mut GameRng::new(5));

    for (pos, kind) in grid.iter() {
        if generator.in_safe_zone(pos) {
            assert_eq!(kind, BlockKind::Stone);
        } else {
            assert!(kind == BlockKind::Glass || config.roster.is_monster(kind));
        }
    }
    assert_eq!(grid.count(|k| k == BlockKind::Glass), config.placeable_cells() - 8);
}

// =============================================================================
// Configuration
// =============================================================================

/// Configurations loaded from JSON drive generation.
#[test]
fn test_json_config_generation() {
    let config = GameConfig::from_json_str(
        r#"{
            "board_size": 11,
            "difficulties": {
                "easy":   { "time_limit": 90, "golden_apple_reduction": 1.0, "total_monster_count": 2 },
                "medium": { "time_limit": 60, "golden_apple_reduction": 0.5, "total_monster_count": 4 },
                "hard":   { "time_limit": 30, "golden_apple_reduction": 0.0, "total_monster_count": 6 }
            }
        }"#,
    )
    .unwrap();

    let grid = generate(&config, Difficulty::Hard, 99).unwrap();
    assert_eq!(grid.size(), 11);
    assert_eq!(grid.count(|k| config.roster.is_monster(k)), 6);
    assert_eq!(grid.count(|k| k == BlockKind::GoldenApple), 0);
}

/// The modern roster only ever places its two monster kinds.
#[test]
fn test_modern_roster_monsters() {
    let config = GameConfig::default().with_roster(Roster::modern());
    for seed in 0..20 {
        let grid = generate(&config, Difficulty::Hard, seed).unwrap();
        assert_eq!(grid.count(|k| k == BlockKind::Creeper), 0);
        assert_eq!(
            grid.count(|k| matches!(k, BlockKind::Monster | BlockKind::Zombie)),
            12
        );
    }
}
