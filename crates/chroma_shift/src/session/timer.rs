//! Cancellable periodic tick source.

use super::events::SessionEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info, instrument};

/// Sends [`SessionEvent::Tick`] every period until dropped.
///
/// Each timer carries a generation number so the controller can discard
/// ticks that were already queued when it was replaced.
#[derive(Debug)]
pub struct TickTimer {
    generation: u64,
    handle: JoinHandle<()>,
}

impl TickTimer {
    /// Spawns the timer. The first tick fires one period from now.
    #[instrument(skip(tx))]
    pub fn spawn(
        generation: u64,
        period: Duration,
        tx: mpsc::UnboundedSender<SessionEvent>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(SessionEvent::Tick(generation)).is_err() {
                    debug!(generation, "Session gone, timer exiting");
                    break;
                }
            }
        });
        info!(generation, ?period, "Timer started");
        Self { generation, handle }
    }

    /// Generation stamped on every tick.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        self.handle.abort();
        info!(generation = self.generation, "Timer stopped");
    }
}
