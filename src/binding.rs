//! Glue that binds a store to a view through the subscription mechanism.

use core::marker::PhantomData;

use log::{debug, trace};
use portable_atomic_util::Arc;
use spin::Mutex;

use crate::{ActionEmitter, Reducer, Store, StoreError, Subscription, View};

/// Binds a [`Store`] to a [`View`].
///
/// The binding wires the full unidirectional loop: user interaction →
/// [`ActionEmitter::emit`] → queued action → [`Store::dispatch`] → reducer →
/// subscriber notification → `present` → [`View::render`]. Rendering runs
/// through the store's own subscription, so the view observes exactly the
/// state transitions every other subscriber does.
///
/// The binding owns the store; hand out [`emitter`](Self::emitter) handles to
/// whatever translates user events into actions.
///
/// # Type Parameters
///
/// * `State` - The state type owned by the store
/// * `Action` - The action type queued by the emitter
/// * `Props` - The renderable representation derived from state
/// * `R` - The reducer implementation (implements [`Reducer`])
/// * `P` - The presenter deriving `Props` from a state snapshot
/// * `V` - The view implementation (implements [`View`])
pub struct Binding<State, Action, Props, R, P, V>
where
    Action: Send + 'static,
    R: Reducer<State, Action>,
    P: Fn(&State, &ActionEmitter<Action>) -> Props + Clone + 'static,
    V: View<Props> + 'static,
{
    store: Store<State, Action, R>,
    emitter: ActionEmitter<Action>,
    requests: flume::Receiver<Action>,
    view: Arc<Mutex<V>>,
    present: P,
    _subscription: Subscription<State>,
    _props: PhantomData<Props>,
}

impl<State, Action, Props, R, P, V> Binding<State, Action, Props, R, P, V>
where
    Action: Send + 'static,
    R: Reducer<State, Action>,
    P: Fn(&State, &ActionEmitter<Action>) -> Props + Clone + 'static,
    V: View<Props> + 'static,
{
    /// Wire a store, a presenter, and a view together.
    ///
    /// The store may be Uninitialized; [`mount`](Self::mount) takes care of
    /// initialization. The view is subscribed to the store immediately, so
    /// it renders on every subsequent transition.
    pub fn new(mut store: Store<State, Action, R>, present: P, view: V) -> Self {
        let (sender, requests) = flume::unbounded();
        let emitter = ActionEmitter::new(sender);
        let view = Arc::new(Mutex::new(view));

        let subscription = {
            let view = Arc::clone(&view);
            let emitter = emitter.clone();
            let present = present.clone();
            store.subscribe(move |state| view.lock().render(present(state, &emitter)))
        };

        Binding {
            store,
            emitter,
            requests,
            view,
            present,
            _subscription: subscription,
            _props: PhantomData,
        }
    }

    /// Initialize the store and render the initial frame.
    pub fn mount(&mut self) {
        self.store.initialize();
        if let Some(state) = self.store.state() {
            debug!("binding: rendering initial frame");
            self.view.lock().render((self.present)(state, &self.emitter));
        }
    }

    /// Dispatch every queued action, returning how many were processed.
    ///
    /// This is the deterministic driver for hosts that own their own event
    /// loop, and for tests.
    pub fn pump(&mut self) -> Result<usize, StoreError> {
        let mut processed = 0;
        while let Ok(action) = self.requests.try_recv() {
            self.store.dispatch(action)?;
            processed += 1;
        }
        if processed > 0 {
            trace!("binding: processed {} queued action(s)", processed);
        }
        Ok(processed)
    }

    /// Mount, then block dispatching queued actions as they arrive.
    ///
    /// Returns when every emitter handle has been dropped.
    pub fn run(&mut self) -> Result<(), StoreError> {
        self.mount();
        loop {
            match self.requests.recv() {
                Ok(action) => self.store.dispatch(action)?,
                Err(_) => break, // channel closed
            }
        }
        Ok(())
    }

    /// A fresh emitter handle for translating user events into actions.
    pub fn emitter(&self) -> ActionEmitter<Action> {
        self.emitter.clone()
    }

    /// Current state snapshot, or `None` before [`mount`](Self::mount).
    pub fn state(&self) -> Option<&State> {
        self.store.state()
    }
}
