//! Core types for the subscription registry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Time span added to `expiry_date` at creation and on each renewal
/// (30 days in seconds). Independent of the `days` field on the record.
pub const SUBSCRIPTION_EXPIRY: u64 = 2_592_000;

/// Opaque principal identifier supplied by the host environment.
///
/// Two identities are equal exactly when their canonical string forms
/// are equal.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity(String);

impl Identity {
    pub fn new(s: impl Into<String>) -> Self {
        Identity(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({})", self.0)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Identity(s.to_string())
    }
}

/// Unique identifier for a subscription.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub Uuid);

impl SubscriptionId {
    /// Mint a fresh random id.
    pub fn random() -> Self {
        SubscriptionId(Uuid::new_v4())
    }
}

impl fmt::Debug for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubscriptionId({})", self.0)
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Seconds since Unix epoch.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// Current time.
    pub fn now() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards");
        Timestamp(duration.as_secs())
    }

    /// Advance by a span of seconds. Saturates at the maximum.
    pub fn advance(self, span: u64) -> Self {
        Timestamp(self.0.saturating_add(span))
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.0)
    }
}

/// A single subscription record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Unique identifier (assigned by the registry). Store key.
    pub id: SubscriptionId,

    /// Identity that created the record. Fixed for the record's lifetime;
    /// anchors every authorization check except withdrawal.
    pub subscriber: Identity,

    /// Bookkeeping amount. Incremented on renewal, zeroed on withdrawal.
    pub price: f64,

    /// Duration requested at creation. Not read by any operation afterwards.
    pub days: u32,

    /// When the subscription lapses: `created_at + SUBSCRIPTION_EXPIRY`,
    /// advanced by the same span on each renewal.
    pub expiry_date: Timestamp,

    /// When the record was created.
    pub created_at: Timestamp,

    /// Last modification time. Currently never set by any operation.
    pub updated_at: Option<Timestamp>,
}

/// Input for creating a subscription (before host-assigned fields).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SubscriptionPayload {
    pub price: f64,
    pub days: u32,
}
