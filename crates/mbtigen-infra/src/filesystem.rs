//! Data directory resolution.

use std::path::PathBuf;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "MBTIGEN_DATA_DIR";

/// Resolve the data directory holding `config.toml` and `secrets.toml`.
///
/// Priority: `MBTIGEN_DATA_DIR`, then `~/.mbtigen`, then `./.mbtigen`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".mbtigen");
    }

    PathBuf::from(".mbtigen")
}
