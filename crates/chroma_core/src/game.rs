//! The Chroma Shift state machine.
//!
//! A [`ChromaGame`] owns the current [`Session`] (grid, player, phase and
//! elapsed time) and the [`BestTimes`] list. Starting or resetting replaces
//! the session wholesale with a freshly generated one; best times survive.
//!
//! Phases:
//! - `Idle` - not started; actions and ticks are ignored
//! - `Playing` - moves, color cycles and ticks are accepted
//! - `Won` - the goal was reached; actions and ticks are ignored

use crate::action::{ActionOutcome, PlayerAction};
use crate::best_times::BestTimes;
use crate::generator::GridGenerator;
use crate::grid::{Grid, GridLayout};
use crate::types::{Color, Direction, Position};
use crate::view::GameView;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Elapsed time added by one timer tick.
pub const DEFAULT_TICK: Duration = Duration::from_millis(100);

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Not started.
    #[default]
    Idle,
    /// Started and not yet won.
    Playing,
    /// The goal was reached.
    Won,
}

impl GamePhase {
    /// The `started` flag: true only while playing.
    pub const fn is_started(self) -> bool {
        matches!(self, GamePhase::Playing)
    }

    /// The `won` flag.
    pub const fn is_won(self) -> bool {
        matches!(self, GamePhase::Won)
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            GamePhase::Idle => "Ready",
            GamePhase::Playing => "Playing",
            GamePhase::Won => "Won",
        }
    }
}

/// Where the player stands and which color they wear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PlayerState {
    /// Current cell.
    pub position: Position,
    /// Current color.
    pub color: Color,
}

/// Everything that is rebuilt on start and reset.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Session {
    /// The grid for this session.
    grid: Grid,
    /// Player position and color.
    player: PlayerState,
    /// Lifecycle phase.
    phase: GamePhase,
    /// Time accumulated while playing.
    elapsed: Duration,
}

impl Session {
    fn new(grid: Grid, phase: GamePhase) -> Self {
        Self {
            grid,
            player: PlayerState::default(),
            phase,
            elapsed: Duration::ZERO,
        }
    }
}

/// The game: current session, best times, and the generator that paints
/// new grids.
pub struct ChromaGame {
    layout: GridLayout,
    generator: Box<dyn GridGenerator>,
    tick: Duration,
    session: Session,
    best_times: BestTimes,
}

impl ChromaGame {
    /// Creates an idle game with a freshly generated grid.
    #[instrument(skip(generator))]
    pub fn new(layout: GridLayout, generator: impl GridGenerator + 'static) -> Self {
        let mut generator: Box<dyn GridGenerator> = Box::new(generator);
        let grid = generator.generate(&layout);
        info!("Game created");
        Self {
            layout,
            generator,
            tick: DEFAULT_TICK,
            session: Session::new(grid, GamePhase::Idle),
            best_times: BestTimes::default(),
        }
    }

    /// Sets the elapsed time added per tick.
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Sets how many best times are kept. Clears any recorded times.
    pub fn with_best_times_capacity(mut self, capacity: usize) -> Self {
        self.best_times = BestTimes::new(capacity);
        self
    }

    /// Starts a new session on a fresh grid.
    ///
    /// Ignored while a session is already being played.
    #[instrument(skip(self), fields(phase = ?self.session.phase))]
    pub fn start(&mut self) -> ActionOutcome {
        if self.session.phase == GamePhase::Playing {
            return ActionOutcome::Ignored;
        }
        self.session = Session::new(self.generator.generate(&self.layout), GamePhase::Playing);
        info!("Session started");
        ActionOutcome::NewSession
    }

    /// Abandons the current session and returns to idle on a fresh grid.
    #[instrument(skip(self), fields(phase = ?self.session.phase))]
    pub fn reset(&mut self) -> ActionOutcome {
        self.session = Session::new(self.generator.generate(&self.layout), GamePhase::Idle);
        info!("Session reset");
        ActionOutcome::NewSession
    }

    /// Applies a player action. Anything that is not allowed is ignored.
    #[instrument(skip(self), fields(phase = ?self.session.phase))]
    pub fn apply(&mut self, action: PlayerAction) -> ActionOutcome {
        if self.session.phase != GamePhase::Playing {
            return ActionOutcome::Ignored;
        }
        match action {
            PlayerAction::Move(direction) => self.move_player(direction),
            PlayerAction::CycleColor => self.cycle_color(),
        }
    }

    /// Advances the elapsed time by one tick while playing.
    pub fn tick(&mut self) -> ActionOutcome {
        if self.session.phase != GamePhase::Playing {
            return ActionOutcome::Ignored;
        }
        self.session.elapsed += self.tick;
        ActionOutcome::Ticked
    }

    fn move_player(&mut self, direction: Direction) -> ActionOutcome {
        let player = self.session.player;
        let Some(candidate) = player.position.step(direction) else {
            return ActionOutcome::Ignored;
        };
        if !self.session.grid.admits(candidate, player.color) {
            return ActionOutcome::Ignored;
        }

        self.session.player.position = candidate;
        debug!(%candidate, %direction, "Player moved");

        if candidate == self.session.grid.goal() {
            self.session.phase = GamePhase::Won;
            let elapsed = self.session.elapsed;
            let rank = self.best_times.record(elapsed);
            info!(elapsed = ?elapsed, ?rank, "Goal reached");
            return ActionOutcome::Won;
        }
        ActionOutcome::Moved
    }

    fn cycle_color(&mut self) -> ActionOutcome {
        let color = self.session.player.color.next();
        self.session.player.color = color;
        debug!(%color, "Player recolored");
        ActionOutcome::Recolored
    }

    /// Borrowed view of everything a renderer shows.
    pub fn view(&self) -> GameView<'_> {
        GameView::new(&self.session, &self.best_times)
    }

    /// Current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current phase.
    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    /// Best times recorded so far.
    pub fn best_times(&self) -> &BestTimes {
        &self.best_times
    }

    /// Layout used for every generated grid.
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Elapsed time added per tick.
    pub fn tick_period(&self) -> Duration {
        self.tick
    }
}

impl std::fmt::Debug for ChromaGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChromaGame")
            .field("layout", &self.layout)
            .field("tick", &self.tick)
            .field("session", &self.session)
            .field("best_times", &self.best_times)
            .finish_non_exhaustive()
    }
}
