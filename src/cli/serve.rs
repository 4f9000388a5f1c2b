use std::path::PathBuf;

use crate::config::{AlertsConfig, StoreKind};
use crate::error::Result;
use crate::server;

/// Execute the `serve` command: start the HTTP server.
pub async fn execute(
    host: Option<String>,
    port: Option<u16>,
    store: Option<StoreKind>,
    data_file: Option<PathBuf>,
) -> Result<()> {
    let mut config = AlertsConfig::load()?;

    // Override config with CLI arguments
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(store) = store {
        config.store = store;
    }
    if let Some(data_file) = data_file {
        config.data_file = data_file;
    }

    println!("A3S Alerts server starting...");
    println!(
        "Listening on http://{}{}",
        config.bind_address(),
        config.normalized_prefix()
    );
    println!("Press Ctrl+C to stop");

    server::start(config).await
}
