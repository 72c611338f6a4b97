//! Secret resolution service.
//!
//! SecretService resolves secrets through a chain of providers in priority order.
//! Default precedence: secrets file > OS keychain > environment.
//!
//! This service depends only on `mbtigen-types` and the `SecretProvider`
//! port -- never on concrete infra implementations.

use tracing::debug;

use crate::repository::secret::DynSecretProvider;
use mbtigen_types::error::RepositoryError;
use mbtigen_types::secret::{Redacted, ResolvedSecret};

/// Service for reading secrets across multiple storage backends.
///
/// Providers are ordered by precedence (first non-empty match wins).
pub struct SecretService {
    providers: Vec<DynSecretProvider>,
}

impl SecretService {
    /// Create a new SecretService with the given provider chain.
    pub fn new(providers: Vec<DynSecretProvider>) -> Self {
        Self { providers }
    }

    /// Resolve a secret by iterating through providers in priority order,
    /// reporting which backend supplied the value.
    ///
    /// Blank values are treated as absent so a stale empty entry in a
    /// higher-priority source does not shadow a real one below it.
    pub async fn resolve(&self, key: &str) -> Result<Option<ResolvedSecret>, RepositoryError> {
        for provider in &self.providers {
            match provider.get_boxed(key).await? {
                Some(value) if !value.trim().is_empty() => {
                    debug!(key, source = %provider.source(), "secret resolved");
                    return Ok(Some(ResolvedSecret {
                        key: key.to_string(),
                        value: Redacted::new(value.trim()),
                        source: provider.source(),
                    }));
                }
                Some(_) => {
                    debug!(key, source = %provider.source(), "ignoring blank secret");
                }
                None => {}
            }
        }
        Ok(None)
    }
}
