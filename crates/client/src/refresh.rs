//! Fixed-interval refresh fallback.
//!
//! The change bus is the primary staleness signal; this loop exists for
//! consumers with no mutation in sight (dashboards) where the backend
//! offers no push channel. It periodically publishes a change
//! notification so subscribed views re-fetch on their usual path.

use std::sync::Arc;
use std::time::Duration;

use wareflow_events::{ChangeBus, ChangeScope, DataChanged};

/// Handle to a running refresh loop; stop it to shut down gracefully.
pub struct RefreshHandle {
    shutdown: Arc<tokio::sync::Notify>,
    task: tokio::task::JoinHandle<()>,
}

impl RefreshHandle {
    /// Signal the loop and wait for it to exit.
    pub async fn stop(self) {
        self.shutdown.notify_one();
        let _ = self.task.await;
    }
}

/// Spawn a loop publishing `scope` change notifications every `period`.
///
/// The first notification fires one full period after spawn; views render
/// from their initial fetch until then.
pub fn spawn_periodic_refresh<B>(bus: B, scope: ChangeScope, period: Duration) -> RefreshHandle
where
    B: ChangeBus + 'static,
{
    let shutdown = Arc::new(tokio::sync::Notify::new());
    let shutdown_signal = shutdown.clone();

    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        // interval's first tick completes immediately; consume it.
        interval.tick().await;

        loop {
            tokio::select! {
                _ = shutdown_signal.notified() => break,
                _ = interval.tick() => {
                    if let Err(err) = bus.publish(DataChanged::now(scope)) {
                        tracing::warn!(?err, "periodic refresh notification failed");
                    }
                }
            }
        }

        tracing::debug!("periodic refresh loop stopped");
    });

    RefreshHandle { shutdown, task }
}
