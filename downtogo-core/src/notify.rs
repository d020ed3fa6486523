//! Change notification with explicit subscriber handles.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn()>;

/// Insertion-ordered list of listeners that are called on every change.
///
/// Listeners are called synchronously. A listener may subscribe or
/// unsubscribe (itself or others) while being called: listeners added during
/// a round are first called on the next round, listeners removed during a
/// round are not called again.
#[derive(Default)]
pub struct Notifier {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, Listener)>>,
}

impl Notifier {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Register `listener`. It stays registered until the returned handle is
    /// unsubscribed or dropped.
    pub fn subscribe(self: &Rc<Self>, listener: impl Fn() + 'static) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));

        Subscription {
            notifier: Rc::downgrade(self),
            id,
        }
    }

    /// Call every registered listener once, in registration order.
    pub fn notify(&self) {
        let round: Vec<(u64, Listener)> = self
            .listeners
            .borrow()
            .iter()
            .map(|(id, l)| (*id, Rc::clone(l)))
            .collect();

        for (id, listener) in round {
            if self.contains(id) {
                listener();
            }
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn contains(&self, id: u64) -> bool {
        self.listeners.borrow().iter().any(|(l, _)| *l == id)
    }

    fn remove(&self, id: u64) {
        // Dropping a listener can drop Subscriptions it owns, which call back
        // into remove(), so the borrow must end before the drop.
        let removed: Vec<(u64, Listener)> = {
            let mut listeners = self.listeners.borrow_mut();
            let (removed, kept) = listeners.drain(..).partition(|(l, _)| *l == id);
            *listeners = kept;
            removed
        };
        drop(removed);
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("listeners", &self.len())
            .finish()
    }
}

/// Handle to a registered listener.
///
/// Dropping the handle unsubscribes the listener; call [`Subscription::detach`]
/// to keep it registered for as long as the notifier lives.
#[must_use = "dropping a Subscription unsubscribes its listener"]
#[derive(Debug)]
pub struct Subscription {
    notifier: Weak<Notifier>,
    id: u64,
}

impl Subscription {
    /// Remove this listener. Calling it again has no further effect.
    pub fn unsubscribe(&self) {
        if let Some(notifier) = self.notifier.upgrade() {
            notifier.remove(self.id);
        }
    }

    /// Keep the listener registered without holding on to the handle.
    pub fn detach(mut self) {
        self.notifier = Weak::new();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
