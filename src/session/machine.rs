//! The session state machine.
//!
//! A [`Session`] owns one board, the timer and the win/loss bookkeeping. It
//! applies one intent or one tick at a time; the [`Game`](super::Game)
//! driver serializes those through a queue.

use crate::board::BoardGenerator;
use crate::core::{
    BlockKind, Difficulty, Direction, GameConfig, GameRng, Grid, Inventory, Position, World,
};
use crate::error::ConfigError;
use crate::events::{Cause, EventLog, GameEvent};
use crate::rules::{Blast, Explosive, MineOutcome, Moved, Resolver};

use super::intent::{ActionError, Intent};
use super::snapshot::Snapshot;
use super::state::SessionState;
use super::timer::{Timer, TimerToken};

/// One player's game on one board.
#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    resolver: Resolver,
    difficulty: Difficulty,
    world: World,
    state: SessionState,
    timer: Timer,
    has_won: bool,
    best_time: Option<u32>,
    /// Loot and blast rolls draw from this; every board is dealt from a fork.
    rng: GameRng,
    events: EventLog,
}

impl Session {
    /// Start a session on a freshly generated board.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails validation.
    pub fn new(config: GameConfig, difficulty: Difficulty, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = GameRng::new(seed);
        let world = Self::deal(&config, difficulty, &mut rng);
        let session = Self {
            resolver: Resolver::new(&config),
            difficulty,
            world,
            state: SessionState::NotStarted,
            timer: Timer::new(config.difficulty(difficulty).time_limit),
            has_won: false,
            best_time: None,
            rng,
            events: EventLog::new(),
            config,
        };
        tracing::info!(%difficulty, seed, "session created");
        Ok(session)
    }

    /// Seed the persisted best time.
    #[must_use]
    pub fn with_best_time(mut self, best_time: Option<u32>) -> Self {
        self.best_time = best_time;
        self
    }

    /// Apply one intent.
    ///
    /// # Errors
    ///
    /// Returns why the intent was refused. A refused intent changes nothing.
    pub fn apply(&mut self, intent: Intent) -> Result<(), ActionError> {
        match intent {
            Intent::Move(direction) => self.move_player(direction).map(drop),
            Intent::Mine => self.mine().map(drop),
            Intent::Place(direction) => self.place(direction).map(drop),
            Intent::Detonate(explosive, direction) => self.detonate(explosive, direction).map(drop),
            Intent::ChangeDifficulty(difficulty) => {
                self.change_difficulty(difficulty);
                Ok(())
            }
            Intent::Reset => {
                self.reset();
                Ok(())
            }
        }
    }

    /// Mine the block under the player. Always starts the timer.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::SessionOver`] once the session has ended.
    pub fn mine(&mut self) -> Result<MineOutcome, ActionError> {
        self.ensure_playable()?;
        self.arm();

        let outcome = self.resolver.mine(&mut self.world, &mut self.rng, &mut self.events);
        match outcome {
            MineOutcome::Died { cause } => self.lose(cause),
            _ => {
                self.check_elimination();
            }
        }
        Ok(outcome)
    }

    /// Step the player, then let the monsters pursue.
    ///
    /// # Errors
    ///
    /// Returns the movement rejection, or [`ActionError::SessionOver`].
    pub fn move_player(&mut self, direction: Direction) -> Result<Moved, ActionError> {
        self.ensure_playable()?;
        let moved = self.resolver.move_player(&mut self.world, direction, &mut self.events)?;
        self.arm();

        let report = self.resolver.step_monsters(&mut self.world, &mut self.events);
        if report.player_killed {
            self.lose(Cause::MonsterAttack);
        } else {
            self.check_elimination();
        }
        Ok(moved)
    }

    /// Place a carried block next to the player.
    ///
    /// # Errors
    ///
    /// Returns the placement rejection, or [`ActionError::SessionOver`].
    pub fn place(&mut self, direction: Direction) -> Result<BlockKind, ActionError> {
        self.ensure_playable()?;
        Ok(self.resolver.place(&mut self.world, direction, &mut self.events)?)
    }

    /// Detonate a carried explosive next to the player.
    ///
    /// # Errors
    ///
    /// Returns the detonation rejection, or [`ActionError::SessionOver`].
    pub fn detonate(&mut self, explosive: Explosive, direction: Direction) -> Result<Blast, ActionError> {
        self.ensure_playable()?;
        let blast = self.resolver.detonate(
            &mut self.world,
            explosive,
            direction,
            &mut self.rng,
            &mut self.events,
        )?;
        self.arm();

        if blast.player_killed {
            self.lose(Cause::Antimatter);
        } else {
            self.check_elimination();
        }
        Ok(blast)
    }

    /// Switch difficulty and deal a new board.
    pub fn change_difficulty(&mut self, difficulty: Difficulty) {
        tracing::info!(from = %self.difficulty, to = %difficulty, "difficulty changed");
        self.difficulty = difficulty;
        self.reset();
    }

    /// Deal a new board at the current difficulty.
    ///
    /// The timer stops and stays dormant until the next action; any tick
    /// scheduled before the reset is ignored.
    pub fn reset(&mut self) {
        self.timer.reset(self.time_limit());
        self.state = SessionState::NotStarted;
        self.has_won = false;
        self.world = Self::deal(&self.config, self.difficulty, &mut self.rng);
        self.events.push(GameEvent::SessionReset { difficulty: self.difficulty });
        tracing::info!(difficulty = %self.difficulty, "session reset");
    }

    /// Apply one timer tick.
    ///
    /// Returns `false` if the tick was stale or the session is not running.
    pub fn tick(&mut self, token: TimerToken) -> bool {
        if !self.state.is_running() || !self.timer.accepts(token) {
            tracing::debug!(generation = token.generation(), "stale tick ignored");
            return false;
        }

        let remaining = self.timer.tick();
        self.events.push(GameEvent::TimerTick { remaining });
        if remaining == 0 && !self.check_elimination() {
            self.lose(Cause::Timeout);
        }
        true
    }

    /// Token for the next tick the host should schedule, while running.
    #[must_use]
    pub fn timer_token(&self) -> Option<TimerToken> {
        self.timer.token()
    }

    /// Run the elimination check.
    ///
    /// Returns `true` if no monsters remain. Victory and its side effects
    /// fire at most once per board no matter how often this runs.
    pub fn check_elimination(&mut self) -> bool {
        if !self.resolver.all_monsters_eliminated(&self.world) {
            return false;
        }
        if self.has_won || matches!(self.state, SessionState::Lost { .. }) {
            return true;
        }

        self.has_won = true;
        self.timer.stop();
        let elapsed_seconds = self.time_limit().saturating_sub(self.timer.time_left());
        let is_new_record = self.best_time.map_or(true, |best| elapsed_seconds < best);
        if is_new_record {
            self.best_time = Some(elapsed_seconds);
        }

        self.state = SessionState::Won { elapsed_seconds };
        self.events.push(GameEvent::GameWon { elapsed_seconds, is_new_record });
        tracing::info!(elapsed_seconds, is_new_record, "all monsters eliminated");
        true
    }

    /// Take every event produced since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    /// Events produced since the last drain.
    #[must_use]
    pub fn pending_events(&self) -> &[GameEvent] {
        self.events.pending()
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.world.grid
    }

    #[must_use]
    pub fn player_position(&self) -> Position {
        self.world.player
    }

    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        &self.world.inventory
    }

    /// Health for display, never below zero.
    #[must_use]
    pub fn health(&self) -> i32 {
        self.world.health.max(0)
    }

    #[must_use]
    pub fn time_left(&self) -> u32 {
        self.timer.time_left()
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn best_time(&self) -> Option<u32> {
        self.best_time
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    #[must_use]
    pub fn monsters_remaining(&self) -> usize {
        self.resolver.monsters_remaining(&self.world)
    }

    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct access to the play state, for scenario setup.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// A serializable view for presentation adapters.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            difficulty: self.difficulty,
            state: self.state,
            grid: self.world.grid.clone(),
            player: self.world.player,
            inventory: self.world.inventory.clone(),
            health: self.health(),
            time_left: self.time_left(),
            best_time: self.best_time,
            monsters_remaining: self.monsters_remaining(),
        }
    }

    fn time_limit(&self) -> u32 {
        self.config.difficulty(self.difficulty).time_limit
    }

    fn ensure_playable(&self) -> Result<(), ActionError> {
        if self.state.is_over() {
            return Err(ActionError::SessionOver);
        }
        Ok(())
    }

    /// Start the countdown on the first action.
    fn arm(&mut self) {
        if self.state != SessionState::NotStarted {
            return;
        }
        let time_limit = self.time_limit();
        self.timer.start(time_limit);
        self.state = SessionState::Running;
        self.events.push(GameEvent::TimerStarted { time_limit });
        tracing::info!(difficulty = %self.difficulty, time_limit, "session started");
    }

    fn lose(&mut self, cause: Cause) {
        if self.state.is_over() {
            return;
        }
        self.timer.stop();
        self.state = SessionState::Lost { cause };
        self.events.push(GameEvent::GameLost { cause });
        tracing::info!(%cause, "session lost");
    }

    /// Generate a board and put the player on its cleared center.
    fn deal(config: &GameConfig, difficulty: Difficulty, rng: &mut GameRng) -> World {
        let mut board_rng = rng.fork();
        let mut grid = BoardGenerator::validated(config).generate(difficulty, &mut board_rng);
        let spawn = grid.center();
        grid.set(spawn, BlockKind::Empty);

        let rules = &config.rules;
        let inventory = Inventory::new(rules.starting_swords, rules.sword_cap);
        World::new(grid, spawn, inventory, rules.starting_health)
    }
}
