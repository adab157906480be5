//! Ride Accounts API
//!
//! Account registration service for a ride-hailing platform:
//! - CPF check-digit validation plus name/email/car-plate format rules
//! - Signup with duplicate-email rejection
//! - Account lookup by identifier
//! - PostgreSQL or in-memory storage backends

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::{AccountServiceTrait, AppState};
use infrastructure::account::{
    AccountService, InMemoryAccountRepository, PostgresAccountRepository,
};
use infrastructure::storage::StorageType;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

/// Create the application state with all services initialized
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_backend =
        StorageType::from_str(&config.storage.backend).unwrap_or(StorageType::Postgres);

    info!("Storage backend: {:?}", storage_backend);

    let account_service: Arc<dyn AccountServiceTrait> = match storage_backend {
        StorageType::Postgres => {
            info!("Connecting to PostgreSQL...");
            let pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .connect(&config.database.url)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;
            info!("PostgreSQL connection established");

            Arc::new(AccountService::new(Arc::new(PostgresAccountRepository::new(
                pool,
            ))))
        }
        StorageType::InMemory => {
            info!("Using in-memory account storage");
            Arc::new(AccountService::new(Arc::new(InMemoryAccountRepository::new())))
        }
    };

    Ok(AppState::new(account_service))
}
