//! The store that owns the current state and the subscriber registry.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;
#[cfg(feature = "no_std")]
use alloc::vec::Vec;

use core::marker::PhantomData;

use log::{debug, trace};
use portable_atomic_util::Arc;
use spin::Mutex;
use thiserror::Error;

use crate::Reducer;

/// Error raised when the store is used outside its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// An action was dispatched while the store was still uninitialized.
    ///
    /// This is a wiring defect in the hosting application: [`Store::initialize`]
    /// must run before the first [`Store::dispatch`]. It is surfaced to the
    /// caller and never recovered automatically.
    #[error("action dispatched before the store was initialized")]
    NotInitialized,
}

type BoxedListener<State> = Box<dyn FnMut(&State)>;

struct ListenerSlot<State> {
    id: u64,
    listener: BoxedListener<State>,
}

type ListenerRegistry<State> = Arc<Mutex<Vec<ListenerSlot<State>>>>;

/// Unsubscribe capability returned by [`Store::subscribe`].
///
/// Consuming it with [`unsubscribe`](Self::unsubscribe) removes the listener.
/// Dropping the handle without calling it leaves the subscription live for
/// the lifetime of the store.
pub struct Subscription<State> {
    registry: ListenerRegistry<State>,
    id: u64,
}

impl<State> Subscription<State> {
    /// Remove the listener this subscription refers to.
    ///
    /// Subsequent dispatches will never invoke the listener again.
    pub fn unsubscribe(self) {
        self.registry.lock().retain(|slot| slot.id != self.id);
        trace!("store: subscriber {} removed", self.id);
    }
}

/// The state container at the center of the unidirectional data flow.
///
/// The store exclusively owns the current state; every other component sees
/// read-only snapshots. It is a two-state machine: Uninitialized at
/// construction, Active from [`initialize`](Self::initialize) onward and for
/// the rest of the process lifetime.
///
/// All operations are synchronous and run to completion on the single
/// logical thread that owns the store. [`dispatch`](Self::dispatch) is not
/// reentrant: a listener must not dispatch, subscribe, or unsubscribe from
/// within its notification.
///
/// # Type Parameters
///
/// * `State` - The state type owned by the store
/// * `Action` - The action type the reducer understands
/// * `R` - The reducer implementation (implements [`Reducer`])
pub struct Store<State, Action, R>
where
    R: Reducer<State, Action>,
{
    reducer: R,
    state: Option<State>,
    listeners: ListenerRegistry<State>,
    next_listener_id: u64,
    _action: PhantomData<Action>,
}

impl<State, Action, R> Store<State, Action, R>
where
    R: Reducer<State, Action>,
{
    /// Create an Uninitialized store around the given reducer.
    pub fn new(reducer: R) -> Self {
        Store {
            reducer,
            state: None,
            listeners: Arc::new(Mutex::new(Vec::new())),
            next_listener_id: 0,
            _action: PhantomData,
        }
    }

    /// Transition Uninitialized → Active by asking the reducer for the
    /// default state.
    ///
    /// Calling this on an Active store is a no-op. Calling it at all is the
    /// responsibility of the hosting application, not of this core.
    pub fn initialize(&mut self) {
        if self.state.is_some() {
            debug!("store: initialize called on an active store, ignoring");
            return;
        }
        self.state = Some(self.reducer.init());
        debug!("store: initialized");
    }

    /// Current state snapshot, or `None` while Uninitialized.
    ///
    /// Never blocks.
    pub fn state(&self) -> Option<&State> {
        self.state.as_ref()
    }

    /// Apply an action to the current state.
    ///
    /// Synchronously runs the reducer. When it returns a new state, the
    /// store replaces the current state and then notifies every subscriber,
    /// in subscription order, with a snapshot of the fully-updated state.
    /// When the reducer returns `None` the state is untouched and no
    /// notification fires; the reducer is the sole authority on whether a
    /// transition happened.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotInitialized`] when called before
    /// [`initialize`](Self::initialize).
    pub fn dispatch(&mut self, action: Action) -> Result<(), StoreError> {
        let current = self.state.as_ref().ok_or(StoreError::NotInitialized)?;
        trace!("store: dispatching action");
        match self.reducer.reduce(current, &action) {
            Some(next) => {
                self.state = Some(next);
                self.notify();
            }
            None => trace!("store: action produced no transition"),
        }
        Ok(())
    }

    /// Register a listener invoked after every state transition.
    ///
    /// Safe to call before or after [`initialize`](Self::initialize).
    /// Listeners are invoked in the order they registered. The returned
    /// [`Subscription`] removes the listener when consumed.
    pub fn subscribe<F>(&mut self, listener: F) -> Subscription<State>
    where
        F: FnMut(&State) + 'static,
    {
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        self.listeners.lock().push(ListenerSlot {
            id,
            listener: Box::new(listener),
        });
        trace!("store: subscriber {} registered", id);
        Subscription {
            registry: Arc::clone(&self.listeners),
            id,
        }
    }

    fn notify(&self) {
        let Some(state) = self.state.as_ref() else {
            return;
        };
        let mut listeners = self.listeners.lock();
        trace!("store: notifying {} subscriber(s)", listeners.len());
        for slot in listeners.iter_mut() {
            (slot.listener)(state);
        }
    }
}
