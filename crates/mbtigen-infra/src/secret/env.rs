//! Environment variable secret provider.
//!
//! A read-only provider that checks the process environment. Values from
//! a `.env` file are visible here once the binary has loaded it.

use mbtigen_core::repository::secret::SecretProvider;
use mbtigen_types::error::RepositoryError;
use mbtigen_types::secret::SecretSource;

/// Environment variable secret provider.
pub struct EnvSecretProvider;

impl EnvSecretProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvSecretProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretProvider for EnvSecretProvider {
    fn source(&self) -> SecretSource {
        SecretSource::Environment
    }

    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        match std::env::var(key) {
            Ok(val) => Ok(Some(val)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            // Secrets must be valid strings; treat as not found
            Err(std::env::VarError::NotUnicode(_)) => Ok(None),
        }
    }
}
