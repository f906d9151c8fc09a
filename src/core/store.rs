//! # Session Store
//!
//! Single source of truth for session state: any number of readers,
//! mutation only through the declared operations, and synchronous
//! notification to subscribers on every change.
//!
//! ```text
//! set_user / clear_user / set_loading / set_error
//!                  │
//!                  ▼
//!        ┌──────────────────┐  changed?  ┌────────────────┐
//!        │     RwLock       │ ─────────► │ listener table │
//!        │   SessionState   │            │ (called inline)│
//!        └──────────────────┘            └────────────────┘
//! ```
//!
//! All four mutators are total: there is no invalid input and no error
//! type. A mutation that leaves the value identical (repeated
//! `clear_user`, `set_loading(true)` twice in a row) delivers no
//! notification; a changed value delivers exactly one, carrying the
//! full new snapshot, before the mutator returns.
//!
//! The store is constructed once at startup and handed around as
//! `Arc<SessionStore>`. Interior mutability means any holder may read
//! or mutate; there is no designated owner.

use std::sync::{Arc, Mutex, RwLock, Weak};

use log::debug;

use crate::core::state::{SessionState, User};

type Listener = Box<dyn FnMut(&SessionState) + Send>;

#[derive(Default)]
struct ListenerTable {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Shared observable holder for [`SessionState`].
pub struct SessionStore {
    state: RwLock<SessionState>,
    listeners: Arc<Mutex<ListenerTable>>,
}

/// Subscription guard returned by [`SessionStore::subscribe`].
///
/// Dropping it removes the listener; no notifications are delivered
/// after the drop.
pub struct Subscription {
    id: u64,
    table: Weak<Mutex<ListenerTable>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(table) = self.table.upgrade() {
            let mut table = table.lock().expect("listener table lock poisoned");
            table.entries.retain(|(id, _)| *id != self.id);
        }
    }
}

impl SessionStore {
    /// Fresh store: signed out, not loading, no error.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(SessionState::default()),
            listeners: Arc::new(Mutex::new(ListenerTable::default())),
        }
    }

    /// Snapshot of the current value. Never fails.
    pub fn get(&self) -> SessionState {
        self.state
            .read()
            .expect("session state lock poisoned")
            .clone()
    }

    /// Register a listener called with the full new value after every
    /// change. The listener runs inline with the mutating call, so keep
    /// it cheap.
    pub fn subscribe(&self, listener: impl FnMut(&SessionState) + Send + 'static) -> Subscription {
        let mut table = self.listeners.lock().expect("listener table lock poisoned");
        let id = table.next_id;
        table.next_id += 1;
        table.entries.push((id, Box::new(listener)));
        Subscription {
            id,
            table: Arc::downgrade(&self.listeners),
        }
    }

    /// Replace the signed-in user and clear any previous error.
    ///
    /// Success wipes out a prior failure; the loading flag is untouched.
    pub fn set_user(&self, user: User) {
        debug!("store: set_user id={}", user.id);
        self.mutate(|state| {
            state.user = Some(user);
            state.error = None;
        });
    }

    /// Sign out: user and error both go to `None`, loading untouched.
    pub fn clear_user(&self) {
        debug!("store: clear_user");
        self.mutate(|state| {
            state.user = None;
            state.error = None;
        });
    }

    /// Set only the loading flag.
    pub fn set_loading(&self, is_loading: bool) {
        self.mutate(|state| state.is_loading = is_loading);
    }

    /// Set or clear only the error message.
    pub fn set_error(&self, error: Option<String>) {
        self.mutate(|state| state.error = error);
    }

    /// Apply `f` under the write lock, then notify listeners with the
    /// new snapshot if the value changed. The write lock is released
    /// before listeners run, so a listener may call `get()` freely.
    fn mutate(&self, f: impl FnOnce(&mut SessionState)) {
        let snapshot = {
            let mut state = self.state.write().expect("session state lock poisoned");
            let before = state.clone();
            f(&mut state);
            if *state == before {
                return;
            }
            state.clone()
        };
        let mut table = self.listeners.lock().expect("listener table lock poisoned");
        for (_, listener) in table.entries.iter_mut() {
            listener(&snapshot);
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
