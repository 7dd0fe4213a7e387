#![cfg_attr(feature = "no_std", no_std)]

//! A tiny unidirectional-data-flow state container with `no_std` support.
//!
//! One store owns the state, a pure reducer computes transitions, and
//! subscribers are notified synchronously after every transition. The
//! shipped domain is deliberately minimal: a single "is it raining" flag
//! toggled by a checkbox.
//!
//! ## Example
//!
//! ```rust
//! use raincheck::{
//!     checkbox_props, Binding, CheckboxProps, RainAction, RainReducer, RainState, Store, View,
//! };
//!
//! struct ConsoleView;
//!
//! impl View<CheckboxProps> for ConsoleView {
//!     fn render(&mut self, props: CheckboxProps) {
//!         println!("{} [{}]", props.label, if props.checked { "x" } else { " " });
//!     }
//! }
//!
//! let store = Store::new(RainReducer);
//! let mut binding = Binding::new(store, checkbox_props, ConsoleView);
//! binding.mount();
//! assert_eq!(binding.state(), Some(&RainState { raining: false }));
//!
//! // The user clicks the checkbox: the props callback queues a toggle,
//! // which the binding dispatches on its next turn.
//! binding.emitter().emit(RainAction::Toggle);
//! binding.pump().unwrap();
//! assert_eq!(binding.state(), Some(&RainState { raining: true }));
//! ```

#[cfg(feature = "no_std")]
extern crate alloc;

// Module declarations
#[cfg(not(feature = "no_std"))]
mod binding;
#[cfg(not(feature = "no_std"))]
mod emitter;
mod raining;
mod reducer;
mod store;
mod view;

// Public re-exports
#[cfg(not(feature = "no_std"))]
pub use binding::Binding;
#[cfg(not(feature = "no_std"))]
pub use emitter::ActionEmitter;
#[cfg(not(feature = "no_std"))]
pub use raining::checkbox_props;
pub use raining::{CheckboxProps, RainAction, RainReducer, RainState, CHECKBOX_LABEL};
pub use reducer::Reducer;
pub use store::{Store, StoreError, Subscription};
pub use view::View;

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use view::TestView;
