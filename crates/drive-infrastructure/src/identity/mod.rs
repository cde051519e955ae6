use async_trait::async_trait;

use crate::config::DEFAULT_USER_HEADER;
use drive_domain::identity::IdentityProvider;
use drive_domain::shared::{DomainError, UserId};

/// Trusts a user id injected by an authenticating gateway in front of the
/// service. The value must be a UUID.
#[derive(Debug, Clone)]
pub struct TrustedHeaderIdentityProvider {
    header_name: String,
}

impl TrustedHeaderIdentityProvider {
    pub fn new(header_name: impl Into<String>) -> Self {
        Self {
            header_name: header_name.into(),
        }
    }
}

impl Default for TrustedHeaderIdentityProvider {
    fn default() -> Self {
        Self::new(DEFAULT_USER_HEADER)
    }
}

#[async_trait]
impl IdentityProvider for TrustedHeaderIdentityProvider {
    async fn resolve(&self, credential: Option<&str>) -> Result<UserId, DomainError> {
        let raw = credential
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                DomainError::Unauthorized(format!("Missing {} header", self.header_name))
            })?;

        UserId::parse(raw).map_err(|_| {
            log::warn!("[identity] rejected malformed {} header", self.header_name);
            DomainError::Unauthorized(format!("Malformed {} header", self.header_name))
        })
    }
}
