//! The square board of blocks.
//!
//! Cells are stored row-major in an `im::Vector`, so cloning a grid for a
//! snapshot is O(1) and later mutation only copies the touched chunk.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::block::BlockKind;
use super::position::Position;

/// A `size × size` matrix of [`BlockKind`]s.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vector<BlockKind>,
}

impl Grid {
    /// Create a grid with every cell set to `fill`.
    #[must_use]
    pub fn filled(size: usize, fill: BlockKind) -> Self {
        Self {
            size,
            cells: std::iter::repeat(fill).take(size * size).collect(),
        }
    }

    /// Build a grid from row-major cells.
    ///
    /// Returns `None` unless `cells.len() == size * size`.
    #[must_use]
    pub fn from_cells(size: usize, cells: Vec<BlockKind>) -> Option<Self> {
        (cells.len() == size * size).then(|| Self {
            size,
            cells: cells.into_iter().collect(),
        })
    }

    /// Parse a grid from rows of [`BlockKind::glyph`] characters.
    ///
    /// Intended for tests and scripted setups. Returns `None` if the rows are
    /// not square or contain an unknown glyph.
    #[must_use]
    pub fn from_glyphs(rows: &[&str]) -> Option<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let before = cells.len();
            for c in row.chars() {
                cells.push(BlockKind::ALL.into_iter().find(|k| k.glyph() == c)?);
            }
            if cells.len() - before != size {
                return None;
            }
        }
        Self::from_cells(size, cells)
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The cell at the center of the board.
    #[must_use]
    pub fn center(&self) -> Position {
        let c = (self.size / 2) as i32;
        Position::new(c, c)
    }

    /// Whether `pos` lies inside the board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        let size = self.size as i32;
        (0..size).contains(&pos.x) && (0..size).contains(&pos.y)
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.y as usize * self.size + pos.x as usize)
    }

    /// The block at `pos`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<BlockKind> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Replace the block at `pos`, returning the previous one.
    ///
    /// Out-of-bounds writes are ignored and return `None`.
    pub fn set(&mut self, pos: Position, kind: BlockKind) -> Option<BlockKind> {
        let i = self.index(pos)?;
        Some(std::mem::replace(&mut self.cells[i], kind))
    }

    /// Every position, row-major (top to bottom, left to right).
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size as i32;
        (0..size).flat_map(move |y| (0..size).map(move |x| Position::new(x, y)))
    }

    /// Every `(position, block)` pair, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, BlockKind)> + '_ {
        self.positions().zip(self.cells.iter().copied())
    }

    /// Positions whose block satisfies `pred`, row-major.
    pub fn find_all(&self, mut pred: impl FnMut(BlockKind) -> bool) -> Vec<Position> {
        self.iter().filter(|&(_, k)| pred(k)).map(|(p, _)| p).collect()
    }

    /// Number of cells whose block satisfies `pred`.
    pub fn count(&self, mut pred: impl FnMut(BlockKind) -> bool) -> usize {
        self.cells.iter().filter(|&&k| pred(k)).count()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, kind) in self.cells.iter().enumerate() {
            write!(f, "{}", kind.glyph())?;
            if (i + 1) % self.size == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
