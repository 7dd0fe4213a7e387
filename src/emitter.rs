//! Action emitter for embedding dispatch requests in props callbacks.

use flume::Sender;
use log::trace;

/// Clone-able handle that queues actions for the owning [`Binding`](crate::Binding).
///
/// Props callbacks cannot hold a mutable borrow of the store, so user
/// interactions go through this handle instead: `emit` queues the action on
/// a channel and the binding dispatches it on its own turn.
///
/// `ActionEmitter` wraps a channel sender, making it cheap to clone and safe
/// to hand to another thread.
pub struct ActionEmitter<Action: Send>(pub(crate) Sender<Action>);

impl<Action: Send> Clone for ActionEmitter<Action> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<Action: Send> ActionEmitter<Action> {
    /// Create a new emitter from a channel sender.
    pub(crate) fn new(sender: Sender<Action>) -> Self {
        Self(sender)
    }

    /// Queue an action for dispatch.
    ///
    /// An emit after the binding has gone away is silently dropped.
    pub fn emit(&self, action: Action) {
        trace!("emitter: queueing action");
        self.0.send(action).ok();
    }
}
