//! Board generation.
//!
//! Generation runs in three passes over a grid of unfilled cells:
//!
//! 1. The safe zone around the board center is filled with Stone.
//! 2. Exactly `total_monster_count` monsters are placed by rejection
//!    sampling over the cells outside the safe zone. Monsters go down before
//!    any other terrain, so every non-safe cell is still unfilled and
//!    eligible; the capacity check in [`GameConfig::validate`] makes this
//!    terminate.
//! 3. Every remaining cell is rolled from the depth band of its row.
//!
//! The player's spawn cell is *not* cleared here; the session does that.

use crate::core::{BlockKind, Difficulty, GameConfig, GameRng, Grid, Position};
use crate::error::ConfigError;

/// Generates boards from a configuration.
#[derive(Clone, Copy, Debug)]
pub struct BoardGenerator<'a> {
    config: &'a GameConfig,
}

impl<'a> BoardGenerator<'a> {
    /// Create a generator, validating the configuration first.
    ///
    /// # Errors
    ///
    /// Returns the configuration's validation error.
    pub fn new(config: &'a GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a generator for a configuration that already passed
    /// [`GameConfig::validate`].
    pub(crate) const fn validated(config: &'a GameConfig) -> Self {
        Self { config }
    }

    /// Whether `pos` lies in the safe zone.
    #[must_use]
    pub fn in_safe_zone(&self, pos: Position) -> bool {
        let center = (self.config.board_size / 2) as i32;
        let radius = self.config.safe_zone_radius() as i32;
        (pos.x - center).abs() <= radius && (pos.y - center).abs() <= radius
    }

    /// Generate a board for `difficulty`, drawing all randomness from `rng`.
    pub fn generate(&self, difficulty: Difficulty, rng: &mut GameRng) -> Grid {
        let size = self.config.board_size;
        let preset = self.config.difficulty(difficulty);
        let positions: Vec<Position> = Grid::filled(size, BlockKind::Empty).positions().collect();

        let mut cells: Vec<Option<BlockKind>> = positions
            .iter()
            .map(|&pos| self.in_safe_zone(pos).then_some(BlockKind::Stone))
            .collect();

        let monster_weights: Vec<f32> = self.config.roster.monsters.iter().map(|m| m.weight).collect();
        let mut placed = 0;
        while placed < preset.total_monster_count {
            let index = rng.gen_range_usize(0..cells.len());
            if cells[index].is_some() {
                continue;
            }
            let kind = rng
                .choose_weighted(&monster_weights)
                .map_or(BlockKind::Monster, |i| self.config.roster.monsters[i].kind);
            cells[index] = Some(kind);
            placed += 1;
        }

        for (cell, pos) in cells.iter_mut().zip(&positions) {
            if cell.is_none() {
                *cell = Some(self.roll_terrain(pos.y as usize, preset.golden_apple_reduction, rng));
            }
        }

        let grid = Grid::from_cells(size, cells.into_iter().map(|c| c.unwrap_or(BlockKind::Stone)).collect())
            .unwrap_or_else(|| Grid::filled(size, BlockKind::Stone));

        tracing::debug!(
            size,
            %difficulty,
            monsters = placed,
            "generated board"
        );
        grid
    }

    /// Roll one terrain block for a cell in `row`.
    fn roll_terrain(&self, row: usize, golden_apple_reduction: f64, rng: &mut GameRng) -> BlockKind {
        let Some(band) = self.config.band_for_row(row) else {
            return BlockKind::Stone;
        };
        let weights: Vec<f32> = band.weights.iter().map(|&(_, w)| w).collect();
        let kind = rng
            .choose_weighted(&weights)
            .map_or(BlockKind::Stone, |i| band.weights[i].0);

        let roster = &self.config.roster;
        match kind {
            BlockKind::GoldenApple if !rng.gen_bool(golden_apple_reduction) => BlockKind::Stone,
            // Monster counts are exact, so bands never add extra monsters
            k if roster.is_monster(k) || !roster.is_active(k) => BlockKind::Stone,
            k => k,
        }
    }
}

/// Generate a board from a bare seed.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn generate(config: &GameConfig, difficulty: Difficulty, seed: u64) -> Result<Grid, ConfigError> {
    let generator = BoardGenerator::new(config)?;
    Ok(generator.generate(difficulty, &mut GameRng::new(seed)))
}
