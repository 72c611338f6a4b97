//! Infrastructure layer for mbtigen.
//!
//! Contains implementations of the ports defined in `mbtigen-core`: the
//! OpenAI-compatible chat and image providers, secret backends (secrets
//! file, OS keychain, environment), and the config/data-dir loaders.

pub mod config;
pub mod filesystem;
pub mod keychain;
pub mod llm;
pub mod secret;
