pub mod router;
pub mod state;

use std::sync::Arc;

use crate::config::{AlertsConfig, StoreKind};
use crate::error::{AlertError, Result};
use crate::provider::file::FileAlertStore;
use crate::provider::memory::MemoryAlertStore;
use crate::provider::AlertStore;
use crate::service::AlertService;

/// Open the store selected by the configuration.
pub async fn open_store(config: &AlertsConfig) -> Result<Arc<dyn AlertStore>> {
    let store: Arc<dyn AlertStore> = match config.store {
        StoreKind::Memory => Arc::new(MemoryAlertStore::new()),
        StoreKind::File => Arc::new(FileAlertStore::open(&config.data_file).await?),
    };
    Ok(store)
}

/// Start the HTTP server with the given configuration.
pub async fn start(config: AlertsConfig) -> Result<()> {
    let store = open_store(&config).await?;
    tracing::info!(store = store.name(), "Initialized alert store");

    let service = Arc::new(AlertService::from_arc(store));

    let bind_addr = config.bind_address();
    let app_state = state::AppState::new(service, Arc::new(config));

    let app = router::build(app_state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| AlertError::Server(format!("Failed to bind to {bind_addr}: {e}")))?;

    tracing::info!("Server listening on {bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AlertError::Server(format!("Server error: {e}")))?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
