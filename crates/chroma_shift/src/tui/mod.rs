//! Terminal UI for Chroma Shift.

mod input;
mod keys;
mod terminal;
mod ui;

pub use input::InputSubscription;
pub use keys::command_for;

use crate::config::GameSettings;
use crate::session::SessionController;
use chroma_core::BestTimes;
use terminal::TerminalSession;
use tracing::info;

/// Plays until the user quits and returns the best times of the run.
///
/// Restores the terminal before returning, on success or failure. The
/// input thread is stopped first so it cannot consume keys meant for the
/// shell.
pub async fn run_tui(settings: &GameSettings) -> anyhow::Result<BestTimes> {
    let game = settings.build_game()?;
    info!(?settings, "Starting Chroma Shift TUI");

    let terminal = TerminalSession::enter()?;
    let mut controller = SessionController::new(game, terminal);
    let input = InputSubscription::spawn(controller.sender());

    let result = controller.run().await;
    input.stop().await;

    let (game, terminal) = controller.into_parts();
    drop(terminal);

    result?;
    Ok(game.best_times().clone())
}
