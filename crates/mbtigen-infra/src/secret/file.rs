//! `secrets.toml` secret provider.
//!
//! Reads a flat TOML table of `KEY = "value"` pairs from the data
//! directory. The file is read on every lookup; lookups happen once at
//! startup.

use std::path::{Path, PathBuf};

use mbtigen_core::repository::secret::SecretProvider;
use mbtigen_types::error::RepositoryError;
use mbtigen_types::secret::SecretSource;

/// File name of the secrets table inside the data directory.
pub const SECRETS_FILE: &str = "secrets.toml";

/// Secret provider backed by `{data_dir}/secrets.toml`.
pub struct FileSecretProvider {
    path: PathBuf,
}

impl FileSecretProvider {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SECRETS_FILE),
        }
    }
}

impl SecretProvider for FileSecretProvider {
    fn source(&self) -> SecretSource {
        SecretSource::File
    }

    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(RepositoryError::Query(format!(
                    "failed to read {}: {err}",
                    self.path.display()
                )));
            }
        };

        let table = content.parse::<toml::Table>().map_err(|err| {
            RepositoryError::Query(format!("failed to parse {}: {err}", self.path.display()))
        })?;

        Ok(table
            .get(key)
            .and_then(|value| value.as_str())
            .map(str::to_string))
    }
}
