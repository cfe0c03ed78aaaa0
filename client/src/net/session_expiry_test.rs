use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[test]
fn notify_without_handler_returns_false() {
    clear_handler();
    assert!(!notify());
}

#[test]
fn notify_runs_registered_handler() {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    set_handler(move || counter.set(counter.get() + 1));

    assert!(notify());
    assert!(notify());
    assert_eq!(calls.get(), 2);
}

#[test]
fn set_handler_replaces_previous() {
    let first = Rc::new(Cell::new(false));
    let second = Rc::new(Cell::new(false));
    let first_flag = first.clone();
    let second_flag = second.clone();
    set_handler(move || first_flag.set(true));
    set_handler(move || second_flag.set(true));

    notify();
    assert!(!first.get());
    assert!(second.get());
}

#[test]
fn clear_handler_disables_notify() {
    set_handler(|| {});
    clear_handler();
    assert!(!notify());
}

#[test]
fn handler_may_reregister_itself() {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    set_handler(move || {
        counter.set(counter.get() + 1);
        clear_handler();
    });
    assert!(notify());
    assert!(!notify());
    assert_eq!(calls.get(), 1);
}
