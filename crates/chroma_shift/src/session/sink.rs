//! Render seam between the controller and whatever draws the game.

use chroma_core::GameView;

/// Receives a fresh view after every observable state change.
pub trait RenderSink {
    /// Draws one frame.
    fn render(&mut self, view: &GameView<'_>) -> anyhow::Result<()>;
}

impl<S: RenderSink + ?Sized> RenderSink for Box<S> {
    fn render(&mut self, view: &GameView<'_>) -> anyhow::Result<()> {
        (**self).render(view)
    }
}
