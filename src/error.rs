//! Error types for the subscription registry.

use crate::types::{Identity, SubscriptionId};
use thiserror::Error;

/// Main error type for registry operations.
///
/// Both variants are ordinary result values: the registry never panics
/// and never retries on behalf of the caller.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Subscription not found: {0}")]
    NotFound(SubscriptionId),

    #[error("Not authorized: {0}")]
    Unauthorized(Identity),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
