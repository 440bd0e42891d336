//! The single-consumer event loop that drives a game.

use super::events::{Command, SessionEvent};
use super::sink::RenderSink;
use super::timer::TickTimer;
use chroma_core::{ActionOutcome, ChromaGame};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, trace};

/// Whether the loop keeps going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep processing events.
    Continue,
    /// The user asked to leave.
    Quit,
}

/// Owns the game, its tick timer, and the render sink.
///
/// At most one [`TickTimer`] exists at a time, and only while the game is
/// being played. Starting, resetting, or winning drops the old timer
/// before anything else happens, so stale ticks can never reach the new
/// session.
pub struct SessionController<S> {
    game: ChromaGame,
    sink: S,
    tx: mpsc::UnboundedSender<SessionEvent>,
    rx: mpsc::UnboundedReceiver<SessionEvent>,
    timer: Option<TickTimer>,
    next_generation: u64,
}

impl<S: RenderSink> SessionController<S> {
    /// Creates a controller around an idle game.
    pub fn new(game: ChromaGame, sink: S) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            game,
            sink,
            tx,
            rx,
            timer: None,
            next_generation: 0,
        }
    }

    /// Sender for input sources.
    pub fn sender(&self) -> mpsc::UnboundedSender<SessionEvent> {
        self.tx.clone()
    }

    /// The game being driven.
    pub fn game(&self) -> &ChromaGame {
        &self.game
    }

    /// True while a tick timer is running.
    pub fn timer_active(&self) -> bool {
        self.timer.is_some()
    }

    /// Draws the current state.
    pub fn render(&mut self) -> anyhow::Result<()> {
        let view = self.game.view();
        self.sink.render(&view)
    }

    /// Renders once, then handles events until a quit command arrives.
    ///
    /// The sink stays owned by the controller afterwards, so the caller
    /// decides when it is torn down (see [`SessionController::into_parts`]).
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> anyhow::Result<()> {
        info!("Session loop starting");
        self.render()?;

        while let Some(event) = self.rx.recv().await {
            if self.handle(event)? == Flow::Quit {
                break;
            }
        }

        self.timer = None;
        info!(best_times = %self.game.view().best_times_label(), "Session loop finished");
        Ok(())
    }

    /// Gives back the game and the sink.
    pub fn into_parts(self) -> (ChromaGame, S) {
        (self.game, self.sink)
    }

    /// Gives back the game, dropping the sink.
    pub fn into_game(self) -> ChromaGame {
        self.game
    }

    /// Applies one event and renders if anything visible changed.
    pub fn handle(&mut self, event: SessionEvent) -> anyhow::Result<Flow> {
        let outcome = match event {
            SessionEvent::Tick(generation) => {
                let current = self.timer.as_ref().map(TickTimer::generation);
                if current != Some(generation) {
                    trace!(generation, ?current, "Discarding stale tick");
                    return Ok(Flow::Continue);
                }
                self.game.tick()
            }
            SessionEvent::Command(Command::Quit) => {
                info!("Quit requested");
                return Ok(Flow::Quit);
            }
            SessionEvent::Command(Command::Start) => self.game.start(),
            SessionEvent::Command(Command::Reset) => self.game.reset(),
            SessionEvent::Command(Command::Action(action)) => self.game.apply(action),
        };

        if outcome == ActionOutcome::NewSession {
            self.timer = None;
        }
        self.sync_timer();

        if outcome.has_update() {
            self.render()?;
        }
        Ok(Flow::Continue)
    }

    fn sync_timer(&mut self) {
        let playing = self.game.phase().is_started();
        match (&self.timer, playing) {
            (None, true) => {
                let generation = self.next_generation;
                self.next_generation += 1;
                self.timer = Some(TickTimer::spawn(
                    generation,
                    self.game.tick_period(),
                    self.tx.clone(),
                ));
            }
            (Some(timer), false) => {
                debug!(generation = timer.generation(), "Releasing timer");
                self.timer = None;
            }
            _ => {}
        }
    }
}

impl<S> std::fmt::Debug for SessionController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController")
            .field("game", &self.game)
            .field("timer", &self.timer)
            .field("next_generation", &self.next_generation)
            .finish_non_exhaustive()
    }
}
