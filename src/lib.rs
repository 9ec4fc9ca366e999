//! # Subscription Registry
//!
//! An in-memory registry of subscription records with caller-scoped
//! authorization, designed to run inside a host environment that supplies
//! caller identity and timestamps.
//!
//! ## Core Concepts
//!
//! - **Subscriptions**: Keyed records with price, duration, and expiry
//! - **Subscriber**: The creating identity; sole authority for get/cancel/renew
//! - **Owner**: The identity captured at first initialization; sole
//!   authority for fund withdrawal
//! - **Host**: Trait seam for the environment's identity, clock, and id
//!   primitives
//!
//! ## Example
//!
//! ```
//! use subscription_registry::{Identity, Registry, SubscriptionPayload, SystemHost};
//!
//! let mut registry = Registry::new();
//! let host = SystemHost::new(Identity::new("alice"));
//!
//! registry.initialize(&host);
//!
//! let sub = registry.create(&host, SubscriptionPayload { price: 100.0, days: 30 });
//! let fetched = registry.get(&host, sub.id)?;
//! assert_eq!(fetched.price, 100.0);
//! # Ok::<(), subscription_registry::RegistryError>(())
//! ```

pub mod error;
pub mod host;
pub mod registry;
pub mod types;

// Re-exports
pub use error::{RegistryError, Result};
pub use host::{Host, SystemHost};
pub use registry::Registry;
pub use types::{
    Identity, Subscription, SubscriptionId, SubscriptionPayload, Timestamp, SUBSCRIPTION_EXPIRY,
};
