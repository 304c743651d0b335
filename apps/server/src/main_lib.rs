use std::sync::Arc;

use crate::config::{Config, StorageBackend};
use maintenance_core::{
    assets::{AssetService, AssetServiceTrait},
    work_orders::{WorkOrderService, WorkOrderServiceTrait},
};
use maintenance_storage_memory::{InMemoryAssetRepository, InMemoryWorkOrderRepository};
use maintenance_storage_sqlite::{self as db, AssetRepository, WorkOrderRepository};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub asset_service: Arc<dyn AssetServiceTrait>,
    pub work_order_service: Arc<dyn WorkOrderServiceTrait>,
    pub storage: StorageBackend,
}

pub fn init_tracing() {
    let log_format = std::env::var("MT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Wires repositories and services for the configured backend.
///
/// For SQLite this prepares the file, runs pending migrations and starts the
/// writer; it must be called from inside a Tokio runtime.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let (asset_service, work_order_service): (
        Arc<dyn AssetServiceTrait>,
        Arc<dyn WorkOrderServiceTrait>,
    ) = match config.storage {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage; data is lost on shutdown");
            (
                Arc::new(AssetService::new(Arc::new(InMemoryAssetRepository::new()))),
                Arc::new(WorkOrderService::new(Arc::new(
                    InMemoryWorkOrderRepository::new(),
                ))),
            )
        }
        StorageBackend::Sqlite => {
            let db_path = db::init(&config.db_path)?;
            tracing::info!("Database path in use: {}", db_path);

            let pool = db::create_pool(&db_path, &config.pool)?;
            db::run_migrations(&pool)?;
            let writer = db::spawn_writer((*pool).clone(), config.pool.operation_timeout);

            let asset_repository = Arc::new(AssetRepository::new(pool.clone(), writer.clone()));
            let work_order_repository = Arc::new(WorkOrderRepository::new(pool, writer));
            (
                Arc::new(AssetService::new(asset_repository)),
                Arc::new(WorkOrderService::new(work_order_repository)),
            )
        }
    };

    Ok(Arc::new(AppState {
        asset_service,
        work_order_service,
        storage: config.storage,
    }))
}
