use super::*;

#[test]
fn first_acquire_wins() {
    let guard = InitGuard::default();
    assert!(guard.try_acquire());
}

#[test]
fn second_acquire_is_blocked() {
    let guard = InitGuard::default();
    assert!(guard.try_acquire());
    assert!(!guard.try_acquire());
}

#[test]
fn clones_share_the_flag() {
    let guard = InitGuard::default();
    let clone = guard.clone();
    assert!(clone.try_acquire());
    assert!(!guard.try_acquire());
}

#[test]
fn separate_guards_are_independent() {
    let first = InitGuard::default();
    let second = InitGuard::default();
    assert!(first.try_acquire());
    assert!(second.try_acquire());
}
