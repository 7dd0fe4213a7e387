use std::sync::{Arc, Mutex};

use raincheck::{RainAction, RainReducer, RainState, Store};

use super::{Counter, CounterEvent, CounterReducer};

#[test]
fn given_three_subscribers_should_notify_in_subscription_order() {
    let mut store = Store::new(RainReducer);
    store.initialize();

    let calls: Arc<Mutex<Vec<(&str, bool)>>> = Arc::new(Mutex::new(Vec::new()));
    for tag in ["a", "b", "c"] {
        let calls = Arc::clone(&calls);
        store.subscribe(move |state: &RainState| calls.lock().unwrap().push((tag, state.raining)));
    }

    store.dispatch(RainAction::Toggle).unwrap();

    // Each subscriber observed the post-toggle state, in registration order.
    assert_eq!(
        *calls.lock().unwrap(),
        vec![("a", true), ("b", true), ("c", true)]
    );
}

#[test]
fn given_a_subscriber_registered_before_initialize_should_still_notify() {
    let mut store = Store::new(RainReducer);

    let calls = Arc::new(Mutex::new(Vec::new()));
    {
        let calls = Arc::clone(&calls);
        store.subscribe(move |state: &RainState| calls.lock().unwrap().push(state.raining));
    }

    store.initialize();
    store.dispatch(RainAction::Toggle).unwrap();

    assert_eq!(*calls.lock().unwrap(), vec![true]);
}

#[test]
fn given_an_unsubscribed_listener_should_never_notify_it_again() {
    let mut store = Store::new(RainReducer);
    store.initialize();

    let calls = Arc::new(Mutex::new(Vec::new()));
    let subscription = {
        let calls = Arc::clone(&calls);
        store.subscribe(move |state: &RainState| calls.lock().unwrap().push(state.raining))
    };
    let surviving_calls = Arc::new(Mutex::new(Vec::new()));
    {
        let surviving_calls = Arc::clone(&surviving_calls);
        store.subscribe(move |state: &RainState| {
            surviving_calls.lock().unwrap().push(state.raining)
        });
    }

    store.dispatch(RainAction::Toggle).unwrap();
    subscription.unsubscribe();
    store.dispatch(RainAction::Toggle).unwrap();

    assert_eq!(*calls.lock().unwrap(), vec![true]);
    assert_eq!(*surviving_calls.lock().unwrap(), vec![true, false]);
}

#[test]
fn given_an_unhandled_action_should_leave_state_and_subscribers_untouched() {
    let mut store = Store::new(CounterReducer);
    store.initialize();

    let notifications = Arc::new(Mutex::new(0u32));
    {
        let notifications = Arc::clone(&notifications);
        store.subscribe(move |_: &Counter| *notifications.lock().unwrap() += 1);
    }

    store.dispatch(CounterEvent::Ping).unwrap();

    assert_eq!(store.state(), Some(&Counter { value: 0 }));
    assert_eq!(*notifications.lock().unwrap(), 0);
}
