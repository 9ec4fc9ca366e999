//! The subscription registry: owner singleton, keyed store, and operations.

use crate::error::{RegistryError, Result};
use crate::host::Host;
use crate::types::{
    Identity, Subscription, SubscriptionId, SubscriptionPayload, SUBSCRIPTION_EXPIRY,
};
use std::collections::HashMap;
use tracing::debug;

/// In-memory store of subscription records.
///
/// One logical request runs to completion before the next begins, so the
/// store carries no locking. State is lost on process restart; durability
/// is the embedder's concern.
///
/// Authorization is per record: the creating `subscriber` may get, cancel,
/// and renew it. Withdrawal is reserved for the registry owner, the
/// identity captured by the first [`initialize`](Registry::initialize)
/// call.
#[derive(Default)]
pub struct Registry {
    /// Registry owner. Captured at most once; `None` until initialized.
    owner: Option<Identity>,

    /// Live records by id.
    subscriptions: HashMap<SubscriptionId, Subscription>,

    /// Ids in insertion order. Listings iterate this, not the map.
    order: Vec<SubscriptionId>,
}

impl Registry {
    /// Create an empty, uninitialized registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the caller as the registry owner.
    ///
    /// Only the first call records anything; later calls leave the owner
    /// untouched and still report success.
    pub fn initialize(&mut self, host: &dyn Host) -> &'static str {
        if self.owner.is_none() {
            let owner = host.caller();
            debug!(owner = %owner, "registry owner captured");
            self.owner = Some(owner);
        }
        "initialized"
    }

    /// Create a subscription for the caller.
    ///
    /// `price` and `days` are copied from the payload unvalidated;
    /// negative or zero values are stored as-is. The expiry window is
    /// [`SUBSCRIPTION_EXPIRY`], regardless of `days`.
    pub fn create(&mut self, host: &dyn Host, payload: SubscriptionPayload) -> Subscription {
        let created_at = host.now();
        let subscription = Subscription {
            id: host.new_id(),
            subscriber: host.caller(),
            price: payload.price,
            days: payload.days,
            expiry_date: created_at.advance(SUBSCRIPTION_EXPIRY),
            created_at,
            updated_at: None,
        };

        debug!(
            id = %subscription.id,
            subscriber = %subscription.subscriber,
            "subscription created"
        );

        self.order.push(subscription.id);
        self.subscriptions
            .insert(subscription.id, subscription.clone());
        subscription
    }

    /// Get a subscription by id. Only its subscriber may read it.
    pub fn get(&self, host: &dyn Host, id: SubscriptionId) -> Result<Subscription> {
        let subscription = self
            .subscriptions
            .get(&id)
            .ok_or(RegistryError::NotFound(id))?;

        let caller = host.caller();
        if subscription.subscriber != caller {
            return Err(RegistryError::Unauthorized(caller));
        }
        Ok(subscription.clone())
    }

    /// All subscriptions created by the given identity, in insertion order.
    ///
    /// Not restricted to the subscriber: any caller may query any
    /// identity's records.
    pub fn list_by_subscriber(&self, subscriber: &Identity) -> Vec<Subscription> {
        self.iter_in_order()
            .filter(|sub| sub.subscriber == *subscriber)
            .cloned()
            .collect()
    }

    /// Every live subscription, in insertion order. Unrestricted.
    pub fn list_all(&self) -> Vec<Subscription> {
        self.iter_in_order().cloned().collect()
    }

    /// Cancel a subscription: remove it from the store entirely.
    ///
    /// Returns the record's last state. Only its subscriber may cancel.
    pub fn cancel(&mut self, host: &dyn Host, id: SubscriptionId) -> Result<Subscription> {
        let subscription = self
            .subscriptions
            .get(&id)
            .ok_or(RegistryError::NotFound(id))?;

        let caller = host.caller();
        if subscription.subscriber != caller {
            return Err(RegistryError::Unauthorized(caller));
        }

        let removed = self
            .subscriptions
            .remove(&id)
            .ok_or(RegistryError::NotFound(id))?;
        self.order.retain(|entry| *entry != id);

        debug!(id = %id, "subscription cancelled");
        Ok(removed)
    }

    /// Renew a subscription: add `price` to the stored price and push
    /// `expiry_date` out by another [`SUBSCRIPTION_EXPIRY`].
    ///
    /// Only its subscriber may renew. Every other field is left as-is.
    pub fn renew(&mut self, host: &dyn Host, id: SubscriptionId, price: f64) -> Result<Subscription> {
        let caller = host.caller();
        let subscription = self
            .subscriptions
            .get_mut(&id)
            .ok_or(RegistryError::NotFound(id))?;

        if subscription.subscriber != caller {
            return Err(RegistryError::Unauthorized(caller));
        }

        subscription.price += price;
        subscription.expiry_date = subscription.expiry_date.advance(SUBSCRIPTION_EXPIRY);

        debug!(
            id = %id,
            price = subscription.price,
            expiry = subscription.expiry_date.0,
            "subscription renewed"
        );
        Ok(subscription.clone())
    }

    /// Zero out a subscription's price.
    ///
    /// Owner-only: the subscriber cannot withdraw their own record. No
    /// funds move; the price field is bookkeeping.
    pub fn withdraw(&mut self, host: &dyn Host, id: SubscriptionId) -> Result<Subscription> {
        let caller = host.caller();
        let subscription = self
            .subscriptions
            .get_mut(&id)
            .ok_or(RegistryError::NotFound(id))?;

        if self.owner.as_ref() != Some(&caller) {
            return Err(RegistryError::Unauthorized(caller));
        }

        subscription.price = 0.0;

        debug!(id = %id, "subscription funds withdrawn");
        Ok(subscription.clone())
    }

    // --- Accessors ---

    /// The registry owner, if one has been captured.
    pub fn owner(&self) -> Option<&Identity> {
        self.owner.as_ref()
    }

    /// Whether an owner has been captured.
    pub fn is_initialized(&self) -> bool {
        self.owner.is_some()
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Iterate live records in insertion order.
    fn iter_in_order(&self) -> impl Iterator<Item = &Subscription> {
        self.order
            .iter()
            .filter_map(|id| self.subscriptions.get(id))
    }
}
