//! Keyed callback lists shared by the in-memory frame tree and pose bus

use std::cell::{Cell, RefCell};

/// Identifies one subscription so it can be cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

struct Entry<H> {
    id: SubscriptionId,
    key: String,
    handler: H,
}

/// Handlers keyed by name, safe to modify from inside a running handler.
pub(crate) struct Subscribers<H> {
    entries: RefCell<Vec<Entry<H>>>,
    /// Removals requested while the entry was out for notification
    removed: RefCell<Vec<SubscriptionId>>,
    next_id: Cell<u64>,
}

impl<H> Default for Subscribers<H> {
    fn default() -> Self {
        Self {
            entries: RefCell::new(Vec::new()),
            removed: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }
}

impl<H> Subscribers<H> {
    pub(crate) fn add(&self, key: &str, handler: H) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.entries.borrow_mut().push(Entry {
            id,
            key: key.to_string(),
            handler,
        });
        id
    }

    pub(crate) fn remove(&self, id: SubscriptionId) {
        let mut entries = self.entries.borrow_mut();
        match entries.iter().position(|entry| entry.id == id) {
            Some(index) => {
                entries.remove(index);
            }
            None => self.removed.borrow_mut().push(id),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Run `call` on every handler registered under `key`, returning how
    /// many ran. Handlers may add, remove or notify while running; a nested
    /// notification does not reach the handlers of the outer one.
    pub(crate) fn notify(&self, key: &str, mut call: impl FnMut(&mut H)) -> usize {
        let mut running = std::mem::take(&mut *self.entries.borrow_mut());
        let mut reached = 0;
        for entry in running.iter_mut().filter(|entry| entry.key == key) {
            call(&mut entry.handler);
            reached += 1;
        }

        let mut entries = self.entries.borrow_mut();
        running.append(&mut entries);
        let removed = std::mem::take(&mut *self.removed.borrow_mut());
        running.retain(|entry| !removed.contains(&entry.id));
        *entries = running;
        reached
    }
}
