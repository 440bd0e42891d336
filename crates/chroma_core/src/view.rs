//! Read-only view handed to renderers after every state change.

use crate::best_times::BestTimes;
use crate::game::{GamePhase, Session};
use crate::grid::Grid;
use crate::types::{Color, Position};
use std::time::Duration;

/// Everything needed to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    session: &'a Session,
    best_times: &'a BestTimes,
}

impl<'a> GameView<'a> {
    pub(crate) fn new(session: &'a Session, best_times: &'a BestTimes) -> Self {
        Self {
            session,
            best_times,
        }
    }

    /// The full grid.
    pub fn grid(&self) -> &'a Grid {
        let session: &'a Session = self.session;
        session.grid()
    }

    /// Player position, for highlighting.
    pub fn player_position(&self) -> Position {
        self.session.player().position
    }

    /// Player color, for the swatch.
    pub fn player_color(&self) -> Color {
        self.session.player().color
    }

    /// Current phase.
    pub fn phase(&self) -> GamePhase {
        *self.session.phase()
    }

    /// Elapsed play time.
    pub fn elapsed(&self) -> Duration {
        *self.session.elapsed()
    }

    /// Best times, fastest first.
    pub fn best_times(&self) -> &'a [Duration] {
        let best_times: &'a BestTimes = self.best_times;
        best_times.times()
    }

    /// Elapsed time as seconds with one decimal, e.g. `"12.3"`.
    pub fn elapsed_label(&self) -> String {
        format_seconds(self.elapsed())
    }

    /// Best times as `"1.2s 3.4s"`.
    pub fn best_times_label(&self) -> String {
        self.best_times()
            .iter()
            .map(|t| format!("{}s", format_seconds(*t)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn format_seconds(duration: Duration) -> String {
    format!("{:.1}", duration.as_secs_f64())
}
