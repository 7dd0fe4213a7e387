use raincheck::{RainAction, RainReducer, RainState, Reducer, Store};

#[test]
fn given_the_default_state_init_should_not_be_raining() {
    assert_eq!(RainReducer.init(), RainState { raining: false });
}

#[test]
fn given_a_toggle_should_negate_the_flag() {
    let wet = RainReducer.reduce(&RainState { raining: false }, &RainAction::Toggle);
    assert_eq!(wet, Some(RainState { raining: true }));

    let dry = RainReducer.reduce(&RainState { raining: true }, &RainAction::Toggle);
    assert_eq!(dry, Some(RainState { raining: false }));
}

#[test]
fn given_the_same_inputs_reduce_should_be_deterministic_and_not_mutate() {
    let state = RainState { raining: false };

    let first = RainReducer.reduce(&state, &RainAction::Toggle);
    let second = RainReducer.reduce(&state, &RainAction::Toggle);

    assert_eq!(first, second);
    assert_eq!(state, RainState { raining: false });
}

#[test]
fn given_two_dispatched_toggles_should_return_to_the_default_state() {
    let mut store = Store::new(RainReducer);
    store.initialize();

    store.dispatch(RainAction::Toggle).unwrap();
    assert_eq!(store.state(), Some(&RainState { raining: true }));

    store.dispatch(RainAction::Toggle).unwrap();
    assert_eq!(store.state(), Some(&RainState { raining: false }));
}
