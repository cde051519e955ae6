use async_trait::async_trait;

use crate::shared::{DomainError, UserId};

/// Resolves the authenticated caller from whatever credential the transport
/// carries. Authentication itself happens upstream.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// `credential` is `None` when the request carried nothing.
    /// Fails with `DomainError::Unauthorized` when no user can be resolved.
    async fn resolve(&self, credential: Option<&str>) -> Result<UserId, DomainError>;
}
