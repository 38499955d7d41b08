//! Integration tests for injected resolution policies.
//!
//! The default policy takes the last appended active value; a custom policy
//! may fold over *all* active contributions instead, e.g. concatenating
//! them onto the root or taking a maximum.

use value_coordinator::{Coordinated, Providing, ValueCoordinator, ValueProvider};

#[test]
fn test_merging_policy_concatenates_active_values() {
    let merging = ValueCoordinator::with_policy("a".to_string(), |root, active| {
        active.iter().fold(root.clone(), |merged, value| merged + value)
    });
    assert_eq!(merging.value(), "a");

    let b = ValueProvider::new("b".to_string());
    b.attach_to(&merging);
    assert_eq!(merging.value(), "ab");

    let c = ValueProvider::new("c".to_string());
    c.attach_to(&merging);
    assert_eq!(merging.value(), "abc");

    b.detach();
    c.detach();
    assert_eq!(merging.value(), "a");
}

#[test]
fn test_merging_policy_through_scoped_bindings() {
    let merging = Coordinated::from_coordinator(ValueCoordinator::with_policy(
        "a".to_string(),
        |root: &String, active: &[String]| {
            active.iter().fold(root.clone(), |merged, value| merged + value)
        },
    ));
    assert_eq!(merging.get(), "a");

    {
        let b = Providing::new("b".to_string());
        b.attach_to(merging.coordinator());
        assert_eq!(merging.get(), "ab");

        let c = Providing::new("c".to_string());
        c.attach_to(merging.coordinator());
        assert_eq!(merging.get(), "abc");
    }

    assert_eq!(merging.get(), "a");
}

#[test]
fn test_merging_policy_skips_inactive_values() {
    let merging = ValueCoordinator::with_policy("a".to_string(), |root, active| {
        active.iter().fold(root.clone(), |merged, value| merged + value)
    });
    let b = ValueProvider::new("b".to_string());
    let silent = ValueProvider::with_active("x".to_string(), false);
    let c = ValueProvider::new("c".to_string());
    b.attach_to(&merging);
    silent.attach_to(&merging);
    c.attach_to(&merging);

    assert_eq!(merging.value(), "abc");
}

#[test]
fn test_maximizing_policy() {
    let maximizing = ValueCoordinator::with_policy(5i32, |root, active| {
        active.iter().fold(*root, |max, value| max.max(*value))
    });
    assert_eq!(maximizing.value(), 5);

    {
        let low = Providing::new(1i32);
        low.attach_to(&maximizing);
        // Root still dominates: 5 > 1.
        assert_eq!(maximizing.value(), 5);

        let high = Providing::new(10i32);
        high.attach_to(&maximizing);
        assert_eq!(maximizing.value(), 10);
    }

    assert_eq!(maximizing.value(), 5);
}

#[test]
fn test_policy_applies_to_root_writes_too() {
    let merging = ValueCoordinator::with_policy("a".to_string(), |root, active| {
        active.iter().fold(root.clone(), |merged, value| merged + value)
    });
    let b = ValueProvider::new("b".to_string());
    b.attach_to(&merging);

    merging.set_value("A".to_string());
    assert_eq!(merging.value(), "Ab");
}

#[test]
fn test_default_policy_is_last_active_wins() {
    let coordinator = ValueCoordinator::new(0i32);
    let older = ValueProvider::new(1i32);
    let newer = ValueProvider::new(2i32);
    older.attach_to(&coordinator);
    newer.attach_to(&coordinator);
    assert_eq!(coordinator.value(), 2);
}
