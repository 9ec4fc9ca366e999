//! Error handling and edge case tests.

use subscription_registry::{
    Host, Identity, Registry, RegistryError, SubscriptionId, SubscriptionPayload, Timestamp,
};

struct TestHost {
    caller: Identity,
    now: Timestamp,
}

impl TestHost {
    fn new(caller: &str, now: u64) -> Self {
        Self {
            caller: Identity::new(caller),
            now: Timestamp(now),
        }
    }
}

impl Host for TestHost {
    fn caller(&self) -> Identity {
        self.caller.clone()
    }

    fn now(&self) -> Timestamp {
        self.now
    }
}

fn payload() -> SubscriptionPayload {
    SubscriptionPayload {
        price: 100.0,
        days: 30,
    }
}

// --- NotFound ---

#[test]
fn test_get_nonexistent_id() {
    let registry = Registry::new();
    let host = TestHost::new("alice", 1000);

    let result = registry.get(&host, SubscriptionId::random());
    assert!(matches!(result, Err(RegistryError::NotFound(_))));
}

#[test]
fn test_cancel_nonexistent_id() {
    let mut registry = Registry::new();
    let host = TestHost::new("alice", 1000);

    let result = registry.cancel(&host, SubscriptionId::random());
    assert!(matches!(result, Err(RegistryError::NotFound(_))));
}

#[test]
fn test_renew_nonexistent_id() {
    let mut registry = Registry::new();
    let host = TestHost::new("alice", 1000);

    let result = registry.renew(&host, SubscriptionId::random(), 50.0);
    assert!(matches!(result, Err(RegistryError::NotFound(_))));
}

#[test]
fn test_withdraw_nonexistent_id() {
    let mut registry = Registry::new();
    let owner = TestHost::new("owner", 0);
    registry.initialize(&owner);

    // Missing record reports NotFound even for the owner.
    let result = registry.withdraw(&owner, SubscriptionId::random());
    assert!(matches!(result, Err(RegistryError::NotFound(_))));
}

#[test]
fn test_get_after_cancel_is_not_found() {
    let mut registry = Registry::new();
    let host = TestHost::new("alice", 1000);

    let sub = registry.create(&host, payload());
    registry.cancel(&host, sub.id).unwrap();

    let result = registry.get(&host, sub.id);
    assert!(matches!(result, Err(RegistryError::NotFound(_))));
}

// --- Unauthorized ---

#[test]
fn test_get_by_non_subscriber() {
    let mut registry = Registry::new();
    let alice = TestHost::new("alice", 1000);
    let bob = TestHost::new("bob", 1000);

    let sub = registry.create(&alice, payload());

    let result = registry.get(&bob, sub.id);
    assert!(matches!(result, Err(RegistryError::Unauthorized(_))));
}

#[test]
fn test_cancel_by_non_subscriber() {
    let mut registry = Registry::new();
    let alice = TestHost::new("alice", 1000);
    let bob = TestHost::new("bob", 1000);

    let sub = registry.create(&alice, payload());

    let result = registry.cancel(&bob, sub.id);
    assert!(matches!(result, Err(RegistryError::Unauthorized(_))));

    // The record is still live.
    assert!(registry.get(&alice, sub.id).is_ok());
}

#[test]
fn test_renew_by_non_subscriber() {
    let mut registry = Registry::new();
    let alice = TestHost::new("alice", 1000);
    let bob = TestHost::new("bob", 1000);

    let sub = registry.create(&alice, payload());

    let result = registry.renew(&bob, sub.id, 50.0);
    assert!(matches!(result, Err(RegistryError::Unauthorized(_))));

    // Price and expiry are untouched after the failed renew.
    let fetched = registry.get(&alice, sub.id).unwrap();
    assert_eq!(fetched.price, sub.price);
    assert_eq!(fetched.expiry_date, sub.expiry_date);
}

#[test]
fn test_owner_cannot_read_another_subscribers_record() {
    // Strict subscriber equality on get: no owner override.
    let mut registry = Registry::new();
    let owner = TestHost::new("owner", 0);
    let alice = TestHost::new("alice", 1000);

    registry.initialize(&owner);
    let sub = registry.create(&alice, payload());

    let result = registry.get(&owner, sub.id);
    assert!(matches!(result, Err(RegistryError::Unauthorized(_))));
}

#[test]
fn test_withdraw_by_subscriber_is_unauthorized() {
    let mut registry = Registry::new();
    let owner = TestHost::new("owner", 0);
    let alice = TestHost::new("alice", 1000);

    registry.initialize(&owner);
    let sub = registry.create(&alice, payload());

    let result = registry.withdraw(&alice, sub.id);
    assert!(matches!(result, Err(RegistryError::Unauthorized(_))));

    // Price untouched after the failed withdrawal.
    assert_eq!(registry.get(&alice, sub.id).unwrap().price, 100.0);
}

// --- Error display ---

#[test]
fn test_error_messages_name_the_offender() {
    let registry = Registry::new();
    let host = TestHost::new("alice", 1000);

    let id = SubscriptionId::random();
    let err = registry.get(&host, id).unwrap_err();
    assert_eq!(err.to_string(), format!("Subscription not found: {}", id));

    let err = RegistryError::Unauthorized(Identity::new("mallory"));
    assert_eq!(err.to_string(), "Not authorized: mallory");
}
