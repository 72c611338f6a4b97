//! Secret chain builder -- wires concrete providers in priority order.
//!
//! Lives in `mbtigen-infra` because it assembles concrete provider
//! implementations. The resulting chain is passed to `SecretService` in
//! `mbtigen-core` via the `DynSecretProvider` abstraction.

use std::path::Path;
use std::sync::Arc;

use mbtigen_core::repository::secret::DynSecretProvider;

use crate::keychain::KeychainProvider;
use crate::secret::env::EnvSecretProvider;
use crate::secret::file::FileSecretProvider;

/// Build the default secret resolution chain.
///
/// The chain is ordered by precedence (first non-empty match wins):
/// 1. `secrets.toml` in the data directory (always included)
/// 2. OS keychain (if `keychain` is Some)
/// 3. Environment variables, including `.env` (if `include_env` is true)
pub fn build_secret_chain(
    data_dir: &Path,
    keychain: Option<KeychainProvider>,
    include_env: bool,
) -> Vec<DynSecretProvider> {
    let mut chain: Vec<DynSecretProvider> = vec![Arc::new(FileSecretProvider::new(data_dir))];

    if let Some(kc) = keychain {
        chain.push(Arc::new(kc));
    }

    if include_env {
        chain.push(Arc::new(EnvSecretProvider::new()));
    }

    chain
}
