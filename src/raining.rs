//! The rain domain: one boolean flag and the toggle that flips it.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;

use log::trace;

#[cfg(not(feature = "no_std"))]
use crate::ActionEmitter;
use crate::Reducer;

/// Label rendered next to the checkbox.
pub const CHECKBOX_LABEL: &str = "Is it raining?";

/// The sole piece of session state: whether it is currently raining.
///
/// Owned exclusively by the [`Store`](crate::Store); everything else sees
/// read-only snapshots. Defaults to "not raining".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RainState {
    pub raining: bool,
}

/// Actions the rain reducer understands.
///
/// A closed set: an unrecognized rain action is unrepresentable. The unit
/// variant constructor is the action factory; it takes no inputs, carries no
/// payload, and cannot fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RainAction {
    /// The user requested a toggle. A pure control message, not configuration.
    Toggle,
}

/// Reducer for the rain domain: [`RainAction::Toggle`] negates the flag.
pub struct RainReducer;

impl Reducer<RainState, RainAction> for RainReducer {
    fn init(&self) -> RainState {
        RainState::default()
    }

    fn reduce(&self, state: &RainState, action: &RainAction) -> Option<RainState> {
        match action {
            RainAction::Toggle => {
                trace!("raining: toggle, raining was {}", state.raining);
                Some(RainState {
                    raining: !state.raining,
                })
            }
        }
    }
}

/// Props for the checkbox control.
pub struct CheckboxProps {
    pub label: &'static str,
    pub checked: bool,
    /// Invoked when the user toggles the checkbox.
    pub on_toggle: Box<dyn Fn()>,
}

#[cfg(not(feature = "no_std"))]
/// Derive checkbox props from the current rain state.
///
/// The embedded callback queues a [`RainAction::Toggle`] through the emitter,
/// closing the loop from user interaction back to dispatch.
pub fn checkbox_props(state: &RainState, emitter: &ActionEmitter<RainAction>) -> CheckboxProps {
    let emitter = emitter.clone();
    CheckboxProps {
        label: CHECKBOX_LABEL,
        checked: state.raining,
        on_toggle: Box::new(move || emitter.emit(RainAction::Toggle)),
    }
}
