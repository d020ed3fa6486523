//! Which events the current user is Going to or Down To Go to.
//!
//! [`MembershipStore`] is the single source of truth for the user's intent.
//! Views hold a shared reference to one store, read from it, and subscribe to
//! be told when it changes. Every mutation is written through the injected
//! [`Storage`] before listeners run.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::event_id::EventId;
use crate::notify::{Notifier, Subscription};
use crate::storage::Storage;

/// Storage key holding the JSON array of Going event ids.
pub const GOING_KEY: &str = "userEventsGoing";

/// Storage key holding the JSON array of Down To Go event ids.
pub const DOWN_TO_GO_KEY: &str = "userEventsDownToGo";

/// The two ways a user can mark an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intent {
    Going,
    DownToGo,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Intent::Going => write!(f, "Going"),
            Intent::DownToGo => write!(f, "Down To Go"),
        }
    }
}

/// Going and Down To Go sets. An id is never in both.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MembershipState {
    going: BTreeSet<EventId>,
    down_to_go: BTreeSet<EventId>,
}

impl MembershipState {
    /// Build a state from two id lists. Ids present in both lists end up
    /// Down To Go only.
    pub fn from_parts(
        going: impl IntoIterator<Item = EventId>,
        down_to_go: impl IntoIterator<Item = EventId>,
    ) -> Self {
        let down_to_go: BTreeSet<EventId> = down_to_go.into_iter().collect();
        let going = going
            .into_iter()
            .filter(|id| !down_to_go.contains(id))
            .collect();

        MembershipState { going, down_to_go }
    }

    pub fn set_going(&mut self, event_id: &str, is_going: bool) {
        if is_going {
            self.going.insert(EventId::from(event_id));
            self.down_to_go.remove(event_id);
        } else {
            self.going.remove(event_id);
        }
    }

    pub fn set_down_to_go(&mut self, event_id: &str, is_down_to_go: bool) {
        if is_down_to_go {
            self.down_to_go.insert(EventId::from(event_id));
            self.going.remove(event_id);
        } else {
            self.down_to_go.remove(event_id);
        }
    }

    pub fn is_going(&self, event_id: &str) -> bool {
        self.going.contains(event_id)
    }

    pub fn is_down_to_go(&self, event_id: &str) -> bool {
        self.down_to_go.contains(event_id)
    }

    pub fn intent(&self, event_id: &str) -> Option<Intent> {
        if self.is_going(event_id) {
            Some(Intent::Going)
        } else if self.is_down_to_go(event_id) {
            Some(Intent::DownToGo)
        } else {
            None
        }
    }

    pub fn going(&self) -> impl Iterator<Item = &EventId> {
        self.going.iter()
    }

    pub fn down_to_go(&self) -> impl Iterator<Item = &EventId> {
        self.down_to_go.iter()
    }
}

/// Shared, observable store of the user's Going / Down To Go marks.
///
/// Mutations never fail: storage problems are logged and the in-memory state
/// stays authoritative for the rest of the process.
pub struct MembershipStore<S: Storage> {
    state: RefCell<MembershipState>,
    storage: S,
    notifier: Rc<Notifier>,
}

impl<S: Storage> MembershipStore<S> {
    /// Create a store, hydrating both sets from `storage`. Missing or
    /// malformed values start out empty.
    pub fn load(storage: S) -> Self {
        let going = read_ids(&storage, GOING_KEY);
        let down_to_go = read_ids(&storage, DOWN_TO_GO_KEY);

        let state = MembershipState::from_parts(going, down_to_go);

        tracing::debug!(
            going = state.going.len(),
            down_to_go = state.down_to_go.len(),
            "Loaded event memberships"
        );

        MembershipStore {
            state: RefCell::new(state),
            storage,
            notifier: Notifier::new(),
        }
    }

    /// Mark or unmark `event_id` as Going. Marking also clears Down To Go.
    pub fn set_going(&self, event_id: &str, is_going: bool) {
        self.state.borrow_mut().set_going(event_id, is_going);
        tracing::debug!(event_id, is_going, "Updated Going");
        self.commit();
    }

    /// Mark or unmark `event_id` as Down To Go. Marking also clears Going.
    pub fn set_down_to_go(&self, event_id: &str, is_down_to_go: bool) {
        self.state.borrow_mut().set_down_to_go(event_id, is_down_to_go);
        tracing::debug!(event_id, is_down_to_go, "Updated Down To Go");
        self.commit();
    }

    pub fn is_going(&self, event_id: &str) -> bool {
        self.state.borrow().is_going(event_id)
    }

    pub fn is_down_to_go(&self, event_id: &str) -> bool {
        self.state.borrow().is_down_to_go(event_id)
    }

    pub fn intent(&self, event_id: &str) -> Option<Intent> {
        self.state.borrow().intent(event_id)
    }

    /// Snapshot of the Going ids, sorted.
    pub fn going_event_ids(&self) -> Vec<EventId> {
        self.state.borrow().going().cloned().collect()
    }

    /// Snapshot of the Down To Go ids, sorted.
    pub fn down_to_go_event_ids(&self) -> Vec<EventId> {
        self.state.borrow().down_to_go().cloned().collect()
    }

    pub fn snapshot(&self) -> MembershipState {
        self.state.borrow().clone()
    }

    /// Register `listener` to run after every mutation.
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> Subscription {
        self.notifier.subscribe(listener)
    }

    fn commit(&self) {
        self.save();
        // The state borrow is released here so listeners can read the store.
        self.notifier.notify();
    }

    // Two independent writes. An interruption between them can leave the
    // keys out of step; load() resolves any overlap.
    fn save(&self) {
        let state = self.state.borrow();
        write_ids(&self.storage, GOING_KEY, state.going());
        write_ids(&self.storage, DOWN_TO_GO_KEY, state.down_to_go());
    }
}

impl<S: Storage> fmt::Debug for MembershipStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("MembershipStore")
            .field("state", &self.state.borrow())
            .field("listeners", &self.notifier.len())
            .finish()
    }
}

fn read_ids<S: Storage>(storage: &S, key: &str) -> Vec<EventId> {
    let Some(raw) = storage.get(key) else {
        return Vec::new();
    };

    match serde_json::from_str::<Vec<EventId>>(&raw) {
        Ok(ids) => ids,
        Err(e) => {
            tracing::warn!(key, error = %e, "Ignoring malformed stored event ids");
            Vec::new()
        }
    }
}

fn write_ids<'a, S: Storage>(storage: &S, key: &str, ids: impl Iterator<Item = &'a EventId>) {
    let ids: Vec<&EventId> = ids.collect();

    let json = match serde_json::to_string(&ids) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!(key, error = %e, "Could not serialize event ids");
            return;
        }
    };

    if let Err(e) = storage.set(key, &json) {
        tracing::warn!(key, error = %e, "Could not persist event ids");
    }
}
