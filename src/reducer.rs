//! Reduction contract shared by the store and every domain instance.

/// Reduction contract: a pure mapping from the current state and an action
/// to the next state.
///
/// Implementations must be pure and deterministic: no observable side
/// effects beyond incidental logging, and the same inputs always produce
/// the same output. The input state is borrowed immutably, so in-place
/// mutation is impossible by construction.
///
/// See the [crate-level documentation](crate) for a complete example.
pub trait Reducer<State, Action> {
    /// Produce the state the store starts from.
    ///
    /// Called exactly once, by [`Store::initialize`](crate::Store::initialize),
    /// when the store transitions from Uninitialized to Active.
    fn init(&self) -> State;

    /// Reduce an action against the current state.
    ///
    /// Returns `Some(next)` when the action causes a transition, or `None`
    /// when it does not. An action the reducer does not handle is a `None`,
    /// never an error: the store leaves the current state untouched and
    /// skips subscriber notification.
    ///
    /// # Arguments
    ///
    /// * `state` - The current state snapshot
    /// * `action` - The action to apply
    fn reduce(&self, state: &State, action: &Action) -> Option<State>;
}
