//! Session state machine scenarios.

use mine_monsters::core::{BlockKind, Difficulty, Direction, GameConfig, Grid, Position};
use mine_monsters::events::{Cause, GameEvent};
use mine_monsters::rules::{Explosive, MineOutcome};
use mine_monsters::session::{ActionError, Intent, Session, SessionState};

fn session(difficulty: Difficulty) -> Session {
    Session::new(GameConfig::default(), difficulty, 2024).unwrap()
}

/// Put `kind` under the player.
fn stand_on(session: &mut Session, kind: BlockKind) {
    let pos = session.player_position();
    session.world_mut().grid.set(pos, kind);
}

/// Replace every monster but the one at `keep` with stone.
fn leave_one_monster(session: &mut Session, keep: Position) {
    let monsters = session.grid().find_all(|k| session.resolver().is_monster(k));
    for pos in monsters.into_iter().filter(|&p| p != keep) {
        session.world_mut().grid.set(pos, BlockKind::Stone);
    }
}

fn count(events: &[GameEvent], pred: impl Fn(&GameEvent) -> bool) -> usize {
    events.iter().filter(|e| pred(e)).count()
}

// =============================================================================
// Mining Scenarios
// =============================================================================

/// Medium, fresh session, golden apple at full health.
#[test]
fn test_golden_apple_scenario() {
    let mut s = session(Difficulty::Medium);
    stand_on(&mut s, BlockKind::GoldenApple);

    s.mine().unwrap();
    assert_eq!(s.health(), 15);
    assert_eq!(s.inventory().golden_apple, 1);
    assert_eq!(s.grid().get(s.player_position()), Some(BlockKind::Empty));
    assert_eq!(s.state(), SessionState::Running);
}

#[test]
fn test_tnt_scenario() {
    let mut s = session(Difficulty::Medium);
    stand_on(&mut s, BlockKind::Tnt);
    s.mine().unwrap();
    assert_eq!(s.health(), 6);
    assert_eq!(s.state(), SessionState::Running);
}

/// Antimatter takes health to -10 internally and ends the session.
#[test]
fn test_antimatter_scenario() {
    let mut s = session(Difficulty::Medium);
    stand_on(&mut s, BlockKind::AntimatterTnt);

    let outcome = s.mine().unwrap();
    assert_eq!(outcome, MineOutcome::Died { cause: Cause::Antimatter });
    assert_eq!(s.world().health, -10);
    assert_eq!(s.health(), 0);
    assert_eq!(s.state(), SessionState::Lost { cause: Cause::Antimatter });
    assert_eq!(s.state().to_string(), "lost (antimatter)");
    assert!(s.timer_token().is_none());

    let events = s.drain_events();
    assert_eq!(count(&events, |e| matches!(e, GameEvent::GameLost { cause: Cause::Antimatter })), 1);
    assert_eq!(s.mine(), Err(ActionError::SessionOver));
}

/// Unarmed player swings at a zombie.
#[test]
fn test_unarmed_zombie_scenario() {
    let mut s = session(Difficulty::Medium);
    stand_on(&mut s, BlockKind::Zombie);
    s.world_mut().inventory.has_sword = false;

    s.mine().unwrap();
    assert_eq!(s.health(), 7);
    assert_eq!(s.grid().get(s.player_position()), Some(BlockKind::Zombie));
}

#[test]
fn test_diamond_scenario() {
    let mut s = session(Difficulty::Medium);
    stand_on(&mut s, BlockKind::DiamondOre);
    let pos = s.player_position();

    s.mine().unwrap();
    assert_eq!(s.grid().get(pos), Some(BlockKind::DiamondOre));
    assert!(s.world().partial.contains_key(&pos));

    s.mine().unwrap();
    assert_eq!(s.inventory().diamond, 1);
    assert!(s.world().partial.is_empty());
    assert_eq!(s.grid().get(pos), Some(BlockKind::Empty));
}

// =============================================================================
// Victory
// =============================================================================

/// Repeated elimination checks produce a single victory.
#[test]
fn test_victory_is_idempotent() {
    let mut s = session(Difficulty::Easy);
    let pos = s.player_position();
    leave_one_monster(&mut s, pos);
    stand_on(&mut s, BlockKind::Creeper);

    let outcome = s.mine().unwrap();
    assert_eq!(outcome, MineOutcome::Slain { kind: BlockKind::Creeper });
    assert!(s.check_elimination());
    assert!(s.check_elimination());

    let events = s.drain_events();
    assert_eq!(count(&events, |e| matches!(e, GameEvent::GameWon { .. })), 1);
    assert!(events.contains(&GameEvent::GameWon { elapsed_seconds: 0, is_new_record: true }));
    assert_eq!(s.state(), SessionState::Won { elapsed_seconds: 0 });
    assert_eq!(s.best_time(), Some(0));
    assert!(s.timer_token().is_none());
}

/// Elapsed time is the time limit minus what is left.
#[test]
fn test_elapsed_time_from_countdown() {
    let mut s = session(Difficulty::Hard).with_best_time(Some(10));
    let corner = Position::new(0, 0);
    leave_one_monster(&mut s, corner);
    s.world_mut().grid.set(corner, BlockKind::Zombie);
    s.mine().unwrap();

    for _ in 0..12 {
        let token = s.timer_token().unwrap();
        assert!(s.tick(token));
    }
    assert_eq!(s.time_left(), 48);

    // Swap the far monster for one under the player and slay it
    s.world_mut().grid.set(corner, BlockKind::Stone);
    stand_on(&mut s, BlockKind::Monster);
    s.mine().unwrap();
    assert_eq!(s.state(), SessionState::Won { elapsed_seconds: 12 });
    assert_eq!(s.best_time(), Some(10));
    assert!(s.drain_events().contains(&GameEvent::GameWon { elapsed_seconds: 12, is_new_record: false }));
}

/// An explosion that kills the last monster wins.
#[test]
fn test_detonation_victory() {
    let mut s = session(Difficulty::Easy);
    let above = s.player_position().offset(0, -1);
    leave_one_monster(&mut s, above);
    s.world_mut().grid.set(above, BlockKind::Zombie);
    s.world_mut().inventory.tnt = 1;

    let blast = s.detonate(Explosive::Tnt, Direction::Up).unwrap();
    assert_eq!(blast.monsters_killed, 1);
    assert!(matches!(s.state(), SessionState::Won { .. }));
}

// =============================================================================
// Monster Attacks
// =============================================================================

/// A weakened player steps next to a zombie, which attacks and ends the game.
#[test]
fn test_monster_attack_scenario() {
    let mut s = session(Difficulty::Medium);
    let start = s.player_position();
    let next = start.offset(1, 0);
    let zombie = start.offset(2, 0);
    {
        let world = s.world_mut();
        world.grid = Grid::filled(15, BlockKind::Stone);
        world.grid.set(start, BlockKind::Empty);
        world.grid.set(next, BlockKind::Empty);
        world.grid.set(zombie, BlockKind::Zombie);
        world.health = 3;
    }

    s.move_player(Direction::Right).unwrap();
    assert_eq!(s.player_position(), next);
    assert_eq!(s.health(), 0);
    assert_eq!(s.state(), SessionState::Lost { cause: Cause::MonsterAttack });
    assert!(s.timer_token().is_none());
    assert_eq!(s.grid().get(zombie), Some(BlockKind::Zombie));

    let events = s.drain_events();
    assert_eq!(count(&events, |e| matches!(e, GameEvent::GameLost { .. })), 1);
    assert_eq!(
        count(&events, |e| matches!(e, GameEvent::GameLost { cause: Cause::MonsterAttack })),
        1
    );
    assert_eq!(count(&events, |e| matches!(e, GameEvent::GameWon { .. })), 0);

    assert!(matches!(s.mine(), Err(ActionError::SessionOver)));
}

// =============================================================================
// Timer
// =============================================================================

/// Running out of time with monsters left loses, and the timer stops.
#[test]
fn test_timeout_scenario() {
    let mut s = session(Difficulty::Hard);
    s.mine().unwrap();
    assert_eq!(s.monsters_remaining(), 12);

    let mut last = None;
    while let Some(token) = s.timer_token() {
        assert!(s.tick(token));
        last = Some(token);
    }

    assert_eq!(s.time_left(), 0);
    assert_eq!(s.state(), SessionState::Lost { cause: Cause::Timeout });

    let events = s.drain_events();
    assert_eq!(count(&events, |e| matches!(e, GameEvent::TimerTick { .. })), 60);
    assert_eq!(count(&events, |e| matches!(e, GameEvent::GameLost { cause: Cause::Timeout })), 1);

    // No further ticks are accepted
    assert!(!s.tick(last.unwrap()));
    assert!(s.drain_events().is_empty());
}

/// A tick scheduled before a reset never touches the new session.
#[test]
fn test_stale_tick_after_reset() {
    let mut s = session(Difficulty::Medium);
    s.mine().unwrap();
    let stale = s.timer_token().unwrap();

    s.reset();
    assert_eq!(s.state(), SessionState::NotStarted);
    assert!(!s.tick(stale));

    s.mine().unwrap();
    assert!(!s.tick(stale));
    assert_eq!(s.time_left(), 120);
}

/// The timer stays dormant until the first action.
#[test]
fn test_timer_dormant_until_action() {
    let mut s = session(Difficulty::Easy);
    assert!(s.timer_token().is_none());
    assert_eq!(s.time_left(), 180);

    s.apply(Intent::Move(Direction::Up)).unwrap();
    assert_eq!(s.state(), SessionState::Running);
    assert!(s.timer_token().is_some());
}

// =============================================================================
// Intents
// =============================================================================

/// Difficulty changes deal a fresh board with the new preset.
#[test]
fn test_change_difficulty_intent() {
    let mut s = session(Difficulty::Easy);
    s.apply(Intent::ChangeDifficulty(Difficulty::Hard)).unwrap();
    assert_eq!(s.difficulty(), Difficulty::Hard);
    assert_eq!(s.time_left(), 60);
    assert_eq!(s.monsters_remaining(), 12);
    assert!(s.drain_events().contains(&GameEvent::SessionReset { difficulty: Difficulty::Hard }));
}

/// Reset restores every per-board value.
#[test]
fn test_reset_restores_defaults() {
    let mut s = session(Difficulty::Medium);
    stand_on(&mut s, BlockKind::Tnt);
    s.mine().unwrap();
    s.world_mut().previous = Some(Position::new(0, 0));

    s.apply(Intent::Reset).unwrap();
    assert_eq!(s.health(), 10);
    assert_eq!(s.inventory().tnt, 0);
    assert_eq!(s.world().previous, None);
    assert!(s.world().partial.is_empty());
    assert_eq!(s.grid().get(s.player_position()), Some(BlockKind::Empty));
}

/// Placement does not start the timer or move monsters.
#[test]
fn test_place_does_not_arm() {
    let mut s = session(Difficulty::Medium);
    let above = s.player_position().offset(0, -1);
    s.world_mut().grid.set(above, BlockKind::Empty);
    s.world_mut().inventory.iron = 1;

    s.apply(Intent::Place(Direction::Up)).unwrap();
    assert_eq!(s.grid().get(above), Some(BlockKind::IronOre));
    assert_eq!(s.state(), SessionState::NotStarted);
}
