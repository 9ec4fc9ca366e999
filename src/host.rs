//! Host environment primitives.
//!
//! The registry runs inside an execution environment that already knows
//! who is calling and what time it is. [`Host`] is the seam for those
//! primitives; the registry takes it as an explicit parameter instead of
//! reading ambient globals, so embedders and tests control both.

use crate::types::{Identity, SubscriptionId, Timestamp};

/// Execution-environment collaborators consumed by the registry.
pub trait Host {
    /// Identity of the principal invoking the current operation.
    fn caller(&self) -> Identity;

    /// Current time.
    fn now(&self) -> Timestamp;

    /// Mint a fresh unique subscription id.
    fn new_id(&self) -> SubscriptionId {
        SubscriptionId::random()
    }
}

/// Host backed by the system clock and random v4 ids.
///
/// Carries a fixed identity: the principal this process acts as. Hosts
/// that serve multiple principals should implement [`Host`] themselves
/// and answer `caller()` per request.
pub struct SystemHost {
    identity: Identity,
}

impl SystemHost {
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }
}

impl Host for SystemHost {
    fn caller(&self) -> Identity {
        self.identity.clone()
    }

    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_host_reports_fixed_identity() {
        let host = SystemHost::new(Identity::new("service"));
        assert_eq!(host.caller(), Identity::new("service"));
    }

    #[test]
    fn test_system_host_mints_unique_ids() {
        let host = SystemHost::new(Identity::new("service"));
        assert_ne!(host.new_id(), host.new_id());
    }
}
