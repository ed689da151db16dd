use super::*;

use std::cell::Cell;

#[test]
fn register_then_flush_runs_each_cleanup_once() {
    let registry = PollingRegistry::new();
    let calls = Rc::new(Cell::new(0));

    for _ in 0..3 {
        let calls = Rc::clone(&calls);
        registry.register(move || calls.set(calls.get() + 1));
    }
    assert_eq!(registry.len(), 3);

    registry.flush_all();
    assert_eq!(calls.get(), 3);
    assert!(registry.is_empty());
}

#[test]
fn second_flush_is_a_noop() {
    let registry = PollingRegistry::new();
    let calls = Rc::new(Cell::new(0));
    {
        let calls = Rc::clone(&calls);
        registry.register(move || calls.set(calls.get() + 1));
    }

    registry.flush_all();
    registry.flush_all();
    assert_eq!(calls.get(), 1);
}

#[test]
fn flush_preserves_registration_order() {
    let registry = PollingRegistry::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    for label in ["first", "second", "third"] {
        let order = Rc::clone(&order);
        registry.register(move || order.borrow_mut().push(label));
    }

    registry.flush_all();
    assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
}

#[test]
fn cleanup_may_register_into_the_next_session() {
    // A cleanup that re-registers lands in the (now empty) registry and
    // survives for the next flush, not the current one.
    let registry = PollingRegistry::new();
    let late = Rc::new(Cell::new(false));
    {
        let registry2 = registry.clone();
        let late = Rc::clone(&late);
        registry.register(move || {
            let late = Rc::clone(&late);
            registry2.register(move || late.set(true));
        });
    }

    registry.flush_all();
    assert!(!late.get());
    assert_eq!(registry.len(), 1);

    registry.flush_all();
    assert!(late.get());
}

#[test]
fn clones_share_the_same_registry() {
    let registry = PollingRegistry::new();
    let handle = registry.clone();
    let calls = Rc::new(Cell::new(0));
    {
        let calls = Rc::clone(&calls);
        handle.register(move || calls.set(calls.get() + 1));
    }

    registry.flush_all();
    assert_eq!(calls.get(), 1);
    assert!(handle.is_empty());
}
