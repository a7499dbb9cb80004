//! Actor<T> - Swappable State Container
//!
//! Holds one value behind a `Mutable<T>` and announces every replacement to
//! synchronous listeners, change streams and signals.

use crate::reactive_actors::subscription::Listeners;
use crate::reactive_actors::{Relay, Subscription};
use futures::channel::mpsc::UnboundedReceiver;
use futures_signals::signal::{Mutable, MutableSignalCloned};

/// State container with point-in-time snapshot reads and change notification.
///
/// Writers replace or edit the value; readers take a snapshot when notified.
/// Notifications carry no payload, so a listener always reads the latest
/// state rather than a possibly stale event value.
///
/// ## Usage Pattern
///
/// ```rust
/// use frontend::reactive_actors::Actor;
///
/// let teams = Actor::new(Vec::<String>::new());
/// let _subscription = teams.subscribe({
///     let teams = teams.clone();
///     move || println!("{} teams", teams.snapshot().len())
/// });
///
/// teams.set(vec!["best-team-na".to_string()]);
/// ```
pub struct Actor<T> {
    state: Mutable<T>,
    listeners: Listeners,
    state_changed_relay: Relay<()>,
}

impl<T> Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(initial: T) -> Self {
        Actor {
            state: Mutable::new(initial),
            listeners: Listeners::default(),
            state_changed_relay: Relay::new(),
        }
    }

    /// Point-in-time copy of the current state.
    pub fn snapshot(&self) -> T {
        self.state.get_cloned()
    }

    /// Reads the current state without cloning it.
    pub fn read<U>(&self, f: impl FnOnce(&T) -> U) -> U {
        f(&self.state.lock_ref())
    }

    /// Replaces the state wholesale and notifies.
    pub fn set(&self, value: T) {
        self.state.set(value);
        self.notify();
    }

    /// Edits the state in place and notifies once the edit is finished.
    pub fn update_mut(&self, f: impl FnOnce(&mut T)) {
        {
            let mut state = self.state.lock_mut();
            f(&mut state);
        }
        self.notify();
    }

    /// Edits the state in place under one lock and notifies only when `f`
    /// reports a change.
    pub fn update_mut_if(&self, f: impl FnOnce(&mut T) -> bool) -> bool {
        let changed = {
            let mut state = self.state.lock_mut();
            f(&mut state)
        };
        if changed {
            self.notify();
        }
        changed
    }

    /// Registers a listener called after every change.
    ///
    /// The listener stays registered for as long as the returned handle lives.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.listeners.add(listener)
    }

    /// Stream yielding `()` once per change made after this call.
    pub fn changes(&self) -> UnboundedReceiver<()> {
        self.state_changed_relay.subscribe()
    }

    /// Signal of the current value, starting with the state at call time.
    pub fn signal(&self) -> MutableSignalCloned<T> {
        self.state.signal_cloned()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // State lock is already released here; listeners read fresh snapshots.
    fn notify(&self) {
        self.listeners.notify();
        self.state_changed_relay.send(());
    }
}

impl<T> Clone for Actor<T> {
    fn clone(&self) -> Self {
        Actor {
            state: self.state.clone(),
            listeners: self.listeners.clone(),
            state_changed_relay: self.state_changed_relay.clone(),
        }
    }
}

impl<T> Default for Actor<T>
where
    T: Clone + Default + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> std::fmt::Debug for Actor<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Actor")
            .field("current_state", &*self.state.lock_ref())
            .finish()
    }
}
