//! Relay<T> - Event Streaming
//!
//! Non-lossy fan-out of events to every live stream subscriber.

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Event relay delivering a clone of each event to every subscribed stream.
///
/// Relay names follow the `{source}_{event}_relay` pattern:
///
/// ```rust
/// use frontend::reactive_actors::Relay;
///
/// struct TagStoreEvents {
///     tags_loaded_relay: Relay<usize>,
///     store_reset_relay: Relay<()>,
/// }
/// ```
pub struct Relay<T> {
    subscribers: Arc<Mutex<Vec<UnboundedSender<T>>>>,
}

impl<T> Relay<T>
where
    T: Clone + Send + 'static,
{
    pub fn new() -> Self {
        Relay {
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Creates a subscription stream for this relay.
    ///
    /// Every stream receives every event sent after it was created.
    /// Dropping the stream unsubscribes it on the next send.
    pub fn subscribe(&self) -> UnboundedReceiver<T> {
        let (sender, receiver) = mpsc::unbounded();
        self.lock().push(sender);
        receiver
    }

    /// Sends an event to all active subscribers.
    ///
    /// With no subscribers the event is dropped (fire-and-forget).
    pub fn send(&self, value: T) {
        self.lock()
            .retain(|sender| sender.unbounded_send(value.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        let mut subscribers = self.lock();
        subscribers.retain(|sender| !sender.is_closed());
        subscribers.len()
    }

    /// True when no live stream is listening.
    pub fn is_closed(&self) -> bool {
        self.subscriber_count() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Vec<UnboundedSender<T>>> {
        self.subscribers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Clone for Relay<T> {
    fn clone(&self) -> Self {
        Relay {
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

impl<T> Default for Relay<T>
where
    T: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

// Debug implementation that doesn't expose internal channel details
impl<T> std::fmt::Debug for Relay<T>
where
    T: Clone + Send + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Relay")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
