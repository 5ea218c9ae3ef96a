use super::*;

#[test]
fn new_lock_is_not_held() {
    let lock = ScrollLock::new();
    assert!(!lock.is_held());
}

#[test]
fn acquire_takes_the_lock() {
    let mut lock = ScrollLock::new();
    assert!(lock.acquire());
    assert!(lock.is_held());
}

#[test]
fn repeated_acquire_is_absorbed() {
    let mut lock = ScrollLock::new();
    assert!(lock.acquire());
    assert!(!lock.acquire());
    assert!(lock.is_held());
}

#[test]
fn release_returns_the_lock() {
    let mut lock = ScrollLock::new();
    assert!(lock.acquire());
    assert!(lock.release());
    assert!(!lock.is_held());
}

#[test]
fn release_without_acquire_is_absorbed() {
    let mut lock = ScrollLock::new();
    assert!(!lock.release());
    assert!(!lock.is_held());
}

#[test]
fn acquire_release_round_trip_restores_initial_state() {
    let mut lock = ScrollLock::new();
    assert!(lock.acquire());
    assert!(lock.release());
    assert!(!lock.is_held());
    // A second full cycle behaves identically.
    assert!(lock.acquire());
    assert!(lock.release());
    assert!(!lock.is_held());
}
