//! Keyboard subscription feeding the session channel.

use super::keys::command_for;
use crate::session::SessionEvent;
use crossterm::event::{self, Event};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, instrument};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Polls the terminal for key presses on a blocking thread and forwards
/// decoded commands.
///
/// [`InputSubscription::stop`] waits for the thread to exit. Dropping the
/// subscription only signals it, and the thread exits within one poll
/// interval.
#[derive(Debug)]
pub struct InputSubscription {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl InputSubscription {
    /// Starts forwarding key presses to `tx`.
    #[instrument(skip(tx))]
    pub fn spawn(tx: mpsc::UnboundedSender<SessionEvent>) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);

        let handle = tokio::task::spawn_blocking(move || {
            while !flag.load(Ordering::Relaxed) {
                match event::poll(POLL_INTERVAL) {
                    Ok(false) => continue,
                    Ok(true) => {}
                    Err(e) => {
                        error!(error = %e, "Terminal poll failed");
                        break;
                    }
                }
                let key = match event::read() {
                    Ok(Event::Key(key)) => key,
                    Ok(_) => continue,
                    Err(e) => {
                        error!(error = %e, "Terminal read failed");
                        break;
                    }
                };
                let Some(command) = command_for(key) else {
                    continue;
                };
                debug!(?command, "Key command");
                if tx.send(SessionEvent::Command(command)).is_err() {
                    break;
                }
            }
            debug!("Input subscription finished");
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// True once the polling thread has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Signals the polling thread and waits until it has exited, so no
    /// further key press is consumed.
    #[instrument(skip(self))]
    pub async fn stop(mut self) {
        self.stop.store(true, Ordering::Relaxed);
        let Some(handle) = self.handle.take() else {
            return;
        };
        if let Err(e) = handle.await {
            error!(error = %e, "Input thread failed");
        }
    }
}

impl Drop for InputSubscription {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
