use super::*;

#[test]
fn new_guard_is_mounted() {
    assert!(MountGuard::new().is_mounted());
}

#[test]
fn mark_unmounted_is_seen_by_clones() {
    let guard = MountGuard::new();
    let task_copy = guard.clone();
    guard.mark_unmounted();
    assert!(!task_copy.is_mounted());
}

#[test]
fn mark_unmounted_is_idempotent() {
    let guard = MountGuard::default();
    guard.mark_unmounted();
    guard.mark_unmounted();
    assert!(!guard.is_mounted());
}
