//! API credential resolution.
//!
//! The credential is resolved once at startup; a missing key is a startup
//! error rather than a per-request one.

use mbtigen_types::error::CredentialError;
use mbtigen_types::secret::ResolvedSecret;

use crate::service::secret::SecretService;

/// Resolve the API key named `key` through the secret chain.
pub async fn resolve_api_key(
    secrets: &SecretService,
    key: &str,
) -> Result<ResolvedSecret, CredentialError> {
    secrets
        .resolve(key)
        .await?
        .ok_or_else(|| CredentialError::MissingCredential {
            key: key.to_string(),
        })
}
