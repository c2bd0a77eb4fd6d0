//! Application state wiring all services together.
//!
//! Services are generic over repository/hasher/backend traits; AppState pins
//! them to the concrete infra implementations.

use std::path::Path;
use std::sync::Arc;

use orglead_core::chat::service::ChatService;
use orglead_core::service::account::AccountService;
use orglead_infra::chat::HttpChatBackend;
use orglead_infra::crypto::hash::Argon2CredentialHasher;
use orglead_infra::sqlite::pool::{DatabasePool, default_database_url};
use orglead_infra::sqlite::user::SqliteUserRepository;
use orglead_types::config::{AppConfig, ChatBackendConfig};

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteAccountService = AccountService<SqliteUserRepository, Argon2CredentialHasher>;

pub type ConcreteChatService = ChatService<HttpChatBackend>;

/// Shared application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<ConcreteAccountService>,
    pub chat_service: Arc<ConcreteChatService>,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state: connect to DB, wire services.
    pub async fn init(config: &AppConfig, data_dir: &Path) -> anyhow::Result<Self> {
        let database_url = match &config.database.url {
            Some(url) => url.clone(),
            None => {
                tokio::fs::create_dir_all(data_dir).await?;
                default_database_url(data_dir)
            }
        };

        Self::from_parts(&database_url, &config.chat, Argon2CredentialHasher::new()).await
    }

    /// Wire services from an explicit database URL, chat settings and hasher.
    pub async fn from_parts(
        database_url: &str,
        chat: &ChatBackendConfig,
        hasher: Argon2CredentialHasher,
    ) -> anyhow::Result<Self> {
        let db_pool = DatabasePool::new(database_url).await?;

        let account_service =
            AccountService::new(SqliteUserRepository::new(db_pool.clone()), hasher);
        let chat_service = ChatService::new(HttpChatBackend::new(chat)?);

        tracing::info!(chat_backend = %chat.base_url, "services initialized");

        Ok(Self {
            account_service: Arc::new(account_service),
            chat_service: Arc::new(chat_service),
            db_pool,
        })
    }
}
