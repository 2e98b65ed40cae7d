//! In-memory change bus (process-wide fan-out).

use std::sync::{Mutex, mpsc};

use thiserror::Error;

use crate::bus::{ChangeBus, Subscription};
use crate::change::DataChanged;

#[derive(Debug, Error)]
pub enum InMemoryChangeBusError {
    /// Publish failed due to internal lock poisoning.
    #[error("change bus lock poisoned")]
    Poisoned,
}

/// In-memory pub/sub bus for change notifications.
///
/// - No IO / no async
/// - Best-effort fan-out; dead subscribers are dropped while publishing
#[derive(Debug, Default)]
pub struct InMemoryChangeBus {
    subscribers: Mutex<Vec<mpsc::Sender<DataChanged>>>,
}

impl InMemoryChangeBus {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChangeBus for InMemoryChangeBus {
    type Error = InMemoryChangeBusError;

    fn publish(&self, change: DataChanged) -> Result<(), Self::Error> {
        let mut subs = self
            .subscribers
            .lock()
            .map_err(|_| InMemoryChangeBusError::Poisoned)?;

        subs.retain(|tx| tx.send(change).is_ok());

        Ok(())
    }

    fn subscribe(&self) -> Subscription {
        let (tx, rx) = mpsc::channel();

        // If the lock is poisoned we still hand back a subscription; it
        // just never receives notifications.
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(tx);
        }

        Subscription::new(rx)
    }
}
