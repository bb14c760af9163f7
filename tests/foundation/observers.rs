//! Integration tests for the observer primitive
//!
//! Tests subscription lifecycle and notification ordering.

use std::cell::RefCell;
use std::rc::Rc;

use wargrid_foundation::Observers;

#[test]
fn callbacks_run_in_subscription_order() {
    let mut observers: Observers<&str> = Observers::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    let first = Rc::clone(&log);
    observers.subscribe(move |e| first.borrow_mut().push(format!("first:{e}")));
    let second = Rc::clone(&log);
    observers.subscribe(move |e| second.borrow_mut().push(format!("second:{e}")));

    observers.notify(&"tick");

    assert_eq!(*log.borrow(), vec!["first:tick", "second:tick"]);
}

#[test]
fn unsubscribed_callbacks_stop_receiving() {
    let mut observers: Observers<()> = Observers::new();
    let count = Rc::new(RefCell::new(0));

    let sink = Rc::clone(&count);
    let id = observers.subscribe(move |()| *sink.borrow_mut() += 1);

    observers.notify(&());
    assert!(observers.unsubscribe(id));
    observers.notify(&());

    assert_eq!(*count.borrow(), 1);
}

#[test]
fn unsubscribe_is_idempotent_about_missing_ids() {
    let mut observers: Observers<()> = Observers::new();
    let id = observers.subscribe(|()| {});
    assert!(observers.unsubscribe(id));
    assert!(!observers.unsubscribe(id));
}

#[test]
fn stateful_callbacks_may_mutate_their_captures() {
    let mut observers: Observers<i64> = Observers::new();
    let mut total = 0;
    let sum = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&sum);
    observers.subscribe(move |e| {
        total += e;
        *sink.borrow_mut() = total;
    });

    observers.notify(&2);
    observers.notify(&3);

    assert_eq!(*sum.borrow(), 5);
}

#[test]
fn len_tracks_live_subscriptions() {
    let mut observers: Observers<()> = Observers::new();
    assert!(observers.is_empty());
    let a = observers.subscribe(|()| {});
    let _b = observers.subscribe(|()| {});
    assert_eq!(observers.len(), 2);
    observers.unsubscribe(a);
    assert_eq!(observers.len(), 1);
}
