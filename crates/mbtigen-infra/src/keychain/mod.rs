//! OS keychain adapter for secret lookup.
//!
//! Uses the `keyring` crate to read secrets via:
//! - macOS Keychain
//! - Linux Secret Service (GNOME Keyring, KDE Wallet)
//! - Windows Credential Manager

use mbtigen_core::repository::secret::SecretProvider;
use mbtigen_types::error::RepositoryError;
use mbtigen_types::secret::SecretSource;

/// OS keychain secret provider using the `keyring` crate.
///
/// Secrets are stored under one service name with the secret key as the
/// account (e.g., service "mbtigen", account "OPENAI_API_KEY").
pub struct KeychainProvider {
    service_name: String,
}

impl KeychainProvider {
    /// Create a new KeychainProvider with the default service name "mbtigen".
    pub fn new() -> Self {
        Self {
            service_name: "mbtigen".to_string(),
        }
    }

    fn entry(&self, key: &str) -> Result<keyring::Entry, RepositoryError> {
        keyring::Entry::new(&self.service_name, key)
            .map_err(|e| RepositoryError::Query(format!("keychain entry error: {e}")))
    }
}

impl Default for KeychainProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretProvider for KeychainProvider {
    fn source(&self) -> SecretSource {
        SecretSource::Keychain
    }

    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let entry = self.entry(key)?;

        match entry.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            // Headless hosts often have no secret service; fall through to the next source
            Err(keyring::Error::PlatformFailure(e)) | Err(keyring::Error::NoStorageAccess(e)) => {
                tracing::debug!(error = %e, "keychain unavailable, skipping");
                Ok(None)
            }
            Err(e) => Err(RepositoryError::Query(format!("keychain get error: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_service_name() {
        assert_eq!(KeychainProvider::new().service_name, "mbtigen");
        assert_eq!(KeychainProvider::default().service_name, "mbtigen");
    }

    #[test]
    fn test_reports_keychain_source() {
        assert_eq!(KeychainProvider::new().source(), SecretSource::Keychain);
    }
}
