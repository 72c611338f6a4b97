//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both CLI and REST
//! API. The credential is resolved and the completion client built exactly
//! once, here.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

use mbtigen_core::credential::resolve_api_key;
use mbtigen_core::generation::character::CharacterService;
use mbtigen_core::generation::message::MessageService;
use mbtigen_core::llm::client::CompletionClient;
use mbtigen_core::service::secret::SecretService;
use mbtigen_infra::config::load_global_config;
use mbtigen_infra::keychain::KeychainProvider;
use mbtigen_infra::llm::create_client;
use mbtigen_infra::secret::chain::build_secret_chain;
use mbtigen_types::config::GlobalConfig;
use mbtigen_types::secret::SecretSource;

/// Shared application state holding all services.
///
/// Immutable after construction; cloned cheaply into every handler.
#[derive(Clone)]
pub struct AppState {
    pub message_service: Arc<MessageService>,
    pub character_service: Arc<CharacterService>,
    pub config: Arc<GlobalConfig>,
    pub key_source: SecretSource,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Load config, resolve the API key, and wire the generation services.
    ///
    /// Fails with a `MissingCredential` error before any external call is
    /// made when no source supplies the key.
    pub async fn init(data_dir: PathBuf) -> anyhow::Result<Self> {
        let config = load_global_config(&data_dir).await;
        let secrets = secret_service(&data_dir);

        let key_name = &config.llm.api_key_name;
        let api_key = resolve_api_key(&secrets, key_name).await.with_context(|| {
            format!(
                "API 키를 찾을 수 없습니다. {} 또는 {key_name} 환경 변수를 설정하세요",
                data_dir.join("secrets.toml").display()
            )
        })?;
        let client = create_client(&config.llm, &api_key)?;

        Ok(Self::from_client(client, config, api_key.source, data_dir))
    }

    /// Wire services around an already-built client.
    pub fn from_client(
        client: CompletionClient,
        config: GlobalConfig,
        key_source: SecretSource,
        data_dir: PathBuf,
    ) -> Self {
        let client = Arc::new(client);
        Self {
            message_service: Arc::new(MessageService::new(Arc::clone(&client))),
            character_service: Arc::new(CharacterService::new(client)),
            config: Arc::new(config),
            key_source,
            data_dir,
        }
    }
}

/// The default secret chain: secrets file, OS keychain, environment.
pub fn secret_service(data_dir: &Path) -> SecretService {
    SecretService::new(build_secret_chain(
        data_dir,
        Some(KeychainProvider::new()),
        true,
    ))
}
