//! Publish/subscribe contract for change notifications.
//!
//! Intentionally lightweight: broadcast semantics (every subscriber sees
//! every notification), best-effort delivery, no persistence. A missed
//! notification costs at most one stale render until the next refresh, so
//! consumers treat notifications as a hint, not a ledger.

use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use crate::change::DataChanged;

/// A subscription to the change stream.
///
/// Designed for single-threaded consumption; each subscriber view holds
/// its own subscription and drains it from its own event loop.
#[derive(Debug)]
pub struct Subscription {
    receiver: Receiver<DataChanged>,
}

impl Subscription {
    pub fn new(receiver: Receiver<DataChanged>) -> Self {
        Self { receiver }
    }

    /// Block until the next notification.
    pub fn recv(&self) -> Result<DataChanged, std::sync::mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a notification without blocking.
    pub fn try_recv(&self) -> Result<DataChanged, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a notification.
    pub fn recv_timeout(
        &self,
        timeout: Duration,
    ) -> Result<DataChanged, std::sync::mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}

/// Change-notification bus (pub/sub abstraction).
///
/// `publish()` can fail; callers treat that as non-fatal because the mutation
/// that triggered the notification has already succeeded remotely.
pub trait ChangeBus: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, change: DataChanged) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription;
}

impl<B> ChangeBus for Arc<B>
where
    B: ChangeBus + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, change: DataChanged) -> Result<(), Self::Error> {
        (**self).publish(change)
    }

    fn subscribe(&self) -> Subscription {
        (**self).subscribe()
    }
}
