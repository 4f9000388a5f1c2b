use std::sync::Arc;

use crate::config::AlertsConfig;
use crate::service::AlertService;

/// Shared application state accessible to all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AlertService>,
    pub config: Arc<AlertsConfig>,
}

impl AppState {
    pub fn new(service: Arc<AlertService>, config: Arc<AlertsConfig>) -> Self {
        Self { service, config }
    }
}
