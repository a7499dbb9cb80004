//! Listener registry with scoped subscription handles.

use indexmap::IndexMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

type Listener = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct ListenerTable {
    next_id: u64,
    entries: IndexMap<u64, Listener>,
}

/// Change listeners of one state container, called in registration order.
#[derive(Clone, Default)]
pub(crate) struct Listeners {
    table: Arc<Mutex<ListenerTable>>,
}

impl Listeners {
    pub(crate) fn add<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut table = lock(&self.table);
        let id = table.next_id;
        table.next_id += 1;
        table.entries.insert(id, Arc::new(listener));
        Subscription {
            id,
            table: Arc::downgrade(&self.table),
        }
    }

    /// Calls every listener registered at the time of the call.
    ///
    /// The registry lock is released before any listener runs, so listeners
    /// may subscribe, unsubscribe or read other containers.
    pub(crate) fn notify(&self) {
        let current: Vec<Listener> = lock(&self.table).entries.values().cloned().collect();
        for listener in current {
            listener();
        }
    }

    pub(crate) fn len(&self) -> usize {
        lock(&self.table).entries.len()
    }
}

/// Keeps a listener registered. Dropping the handle releases it.
#[must_use = "dropping a Subscription immediately unregisters its listener"]
pub struct Subscription {
    id: u64,
    table: Weak<Mutex<ListenerTable>>,
}

impl Subscription {
    pub fn unsubscribe(self) {}

    /// False once the observed container itself has been dropped.
    pub fn is_active(&self) -> bool {
        self.table
            .upgrade()
            .is_some_and(|table| lock(&table).entries.contains_key(&self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(table) = self.table.upgrade() {
            lock(&table).entries.shift_remove(&self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

fn lock(table: &Mutex<ListenerTable>) -> MutexGuard<'_, ListenerTable> {
    table.lock().unwrap_or_else(PoisonError::into_inner)
}
