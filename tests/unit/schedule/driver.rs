use super::*;

#[test]
fn starts_idle() {
    let d = TickDriver::new();
    assert!(d.is_idle());
    assert_eq!(d.pending(), None);
    assert_eq!(d.issued_count(), 0);
}

#[test]
fn new_request_replaces_pending_one() {
    let mut d = TickDriver::new();
    let a = d.request_tick();
    let b = d.request_tick();
    assert_ne!(a, b);
    assert_eq!(d.pending(), Some(b));
    assert_eq!(d.canceled_count(), 1);
    assert!(!d.take_due(a), "superseded id must not fire");
    assert!(d.take_due(b));
    assert!(d.is_idle());
}

#[test]
fn cancel_is_idempotent() {
    let mut d = TickDriver::new();
    let a = d.request_tick();
    assert_eq!(d.cancel(), Some(a));
    assert_eq!(d.cancel(), None);
    assert_eq!(d.canceled_count(), 1);
    assert!(!d.take_due(a));
}

#[test]
fn ids_are_monotonic() {
    let mut d = TickDriver::new();
    let ids: Vec<_> = (0..5)
        .map(|_| {
            let id = d.request_tick();
            assert!(d.take_due(id));
            id
        })
        .collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(d.canceled_count(), 0);
}
