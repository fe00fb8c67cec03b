//! Stepping the player to an adjacent cell.
//!
//! The player may only leave an Empty cell, with one exception: from a
//! non-Empty cell they may step back onto the last Empty cell they left.
//! Moving never mines, and stepping onto a hazard does not trigger it.

use thiserror::Error;

use crate::core::{BlockKind, Direction, Position, World};
use crate::events::{EventLog, GameEvent};

use super::engine::Resolver;

/// Why a move was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveRejected {
    #[error("{0} is off the board")]
    OutOfBounds(Position),

    #[error("cannot leave a non-empty cell")]
    Blocked,

    #[error("water at {0} is impassable")]
    Impassable(Position),
}

/// A successful move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Moved {
    pub from: Position,
    pub to: Position,
    /// Whether the one-shot backtrack exception was used.
    pub backtracked: bool,
}

impl Resolver {
    /// Move the player one cell in `direction`.
    ///
    /// # Errors
    ///
    /// Returns why the move was refused; the world is left untouched.
    pub fn move_player(
        &self,
        world: &mut World,
        direction: Direction,
        log: &mut EventLog,
    ) -> Result<Moved, MoveRejected> {
        let from = world.player;
        let to = from.step(direction);

        let target = world.grid.get(to).ok_or(MoveRejected::OutOfBounds(to))?;

        let leaving_empty = world.current_block().is_empty();
        let backtracked = !leaving_empty && world.previous == Some(to);
        if !leaving_empty && !backtracked {
            return Err(MoveRejected::Blocked);
        }

        if target == BlockKind::Water {
            return Err(MoveRejected::Impassable(to));
        }

        if leaving_empty {
            world.previous = Some(from);
        }
        world.player = to;
        if backtracked {
            world.previous = None;
        }

        log.push(GameEvent::PlayerMoved { from, to });
        tracing::debug!(%from, %to, backtracked, "player moved");
        Ok(Moved { from, to, backtracked })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, Grid, Inventory};

    fn world(rows: &[&str], player: Position) -> World {
        World::new(Grid::from_glyphs(rows).unwrap(), player, Inventory::new(1, 3), 10)
    }

    #[test]
    fn test_move_from_empty() {
        let resolver = Resolver::new(&GameConfig::default());
        let mut w = world(&["#####", "#####", "##.##", "#####", "#####"], Position::new(2, 2));

        let moved = resolver.move_player(&mut w, Direction::Up, &mut EventLog::new()).unwrap();
        assert_eq!(moved.to, Position::new(2, 1));
        assert!(!moved.backtracked);
        assert_eq!(w.previous, Some(Position::new(2, 2)));
    }

    #[test]
    fn test_blocked_from_non_empty() {
        let resolver = Resolver::new(&GameConfig::default());
        let mut w = world(&["#####", "#####", "#####", "#####", "#####"], Position::new(2, 2));

        let err = resolver.move_player(&mut w, Direction::Left, &mut EventLog::new()).unwrap_err();
        assert_eq!(err, MoveRejected::Blocked);
        assert_eq!(w.player, Position::new(2, 2));
    }

    #[test]
    fn test_out_of_bounds() {
        let resolver = Resolver::new(&GameConfig::default());
        let mut w = world(&[".####", "#####", "#####", "#####", "#####"], Position::new(0, 0));

        let err = resolver.move_player(&mut w, Direction::Up, &mut EventLog::new()).unwrap_err();
        assert_eq!(err, MoveRejected::OutOfBounds(Position::new(0, -1)));
    }

    #[test]
    fn test_water_impassable() {
        let resolver = Resolver::new(&GameConfig::default());
        let mut w = world(&["#####", "##=##", "##.##", "#####", "#####"], Position::new(2, 2));

        let err = resolver.move_player(&mut w, Direction::Up, &mut EventLog::new()).unwrap_err();
        assert_eq!(err, MoveRejected::Impassable(Position::new(2, 1)));
        assert_eq!(w.previous, None);
    }

    #[test]
    fn test_hazard_not_triggered_by_stepping() {
        let resolver = Resolver::new(&GameConfig::default());
        let mut w = world(&["#####", "##~##", "##.##", "#####", "#####"], Position::new(2, 2));

        resolver.move_player(&mut w, Direction::Up, &mut EventLog::new()).unwrap();
        assert_eq!(w.health, 10);
        assert_eq!(w.current_block(), BlockKind::Lava);
    }
}
