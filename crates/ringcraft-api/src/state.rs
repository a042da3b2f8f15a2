//! Application state wiring the services together.
//!
//! `AppState` pins the core ports to their concrete infra implementations
//! and is shared by the CLI commands and the REST handlers.

use std::path::PathBuf;
use std::sync::Arc;

use ringcraft_infra::config::{ServiceConfig, load_service_config, resolve_data_dir};
use ringcraft_infra::gateway::HttpBuilderDataGateway;
use ringcraft_infra::sqlite::pool::DatabasePool;
use ringcraft_infra::sqlite::settings::SqliteSettingsStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<SqliteSettingsStore>,
    pub gateway: Arc<HttpBuilderDataGateway>,
    pub service_config: ServiceConfig,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: connect to the database, load the
    /// service configuration, wire the gateway.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let db_url = format!(
            "sqlite://{}?mode=rwc",
            data_dir.join("ringcraft.db").display()
        );
        let pool = DatabasePool::new(&db_url).await?;

        let service_config = load_service_config(&data_dir).await;
        let gateway = HttpBuilderDataGateway::new(service_config.builder_data_url.clone());

        Ok(Self {
            settings: Arc::new(SqliteSettingsStore::new(pool)),
            gateway: Arc::new(gateway),
            service_config,
            data_dir,
        })
    }
}
