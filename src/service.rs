//! Alert service built on a pluggable store
//!
//! `AlertService` validates input, forwards each operation to an
//! `AlertStore`, and keeps the active alert cache in step with the store
//! after every successful mutation.

use crate::cache::ActiveAlertCache;
use crate::error::Result;
use crate::provider::AlertStore;
use crate::types::{Alert, AlertFields, AlertPage};
use std::sync::Arc;
use tokio::sync::Mutex;

/// High-level alert API backed by a pluggable store
///
/// Mutations hold the write gate across the store call and the cache
/// refresh, so the cache always reflects the store after the most
/// recently completed mutation.
pub struct AlertService {
    store: Arc<dyn AlertStore>,
    cache: ActiveAlertCache,
    write_gate: Mutex<()>,
}

impl AlertService {
    /// Create a new service from a store. The active cache starts empty.
    pub fn new(store: impl AlertStore + 'static) -> Self {
        Self::from_arc(Arc::new(store))
    }

    /// Create a new service from a shared store
    pub fn from_arc(store: Arc<dyn AlertStore>) -> Self {
        Self {
            store,
            cache: ActiveAlertCache::new(),
            write_gate: Mutex::new(()),
        }
    }

    /// Get the store name
    pub fn store_name(&self) -> &str {
        self.store.name()
    }

    /// Get a reference to the underlying store
    pub fn store(&self) -> &dyn AlertStore {
        self.store.as_ref()
    }

    /// Get a handle to the active alert cache
    pub fn cache(&self) -> &ActiveAlertCache {
        &self.cache
    }

    /// Fetch one page of alerts directly from the store
    pub async fn list(&self, limit: u64, offset: u64) -> Result<AlertPage> {
        self.store.list(limit, offset).await.inspect_err(|e| {
            tracing::warn!(limit, offset, error = %e, "Failed to list alerts");
        })
    }

    /// Create an alert and return the refreshed active alerts
    ///
    /// An error from the cache refresh is returned even though the alert
    /// was already stored, so retrying a failed create can insert a
    /// duplicate. Check `list` before retrying.
    pub async fn create(&self, fields: AlertFields) -> Result<Vec<Alert>> {
        fields.validate()?;
        let _gate = self.write_gate.lock().await;

        let name = fields.name.clone();
        self.store.create(fields).await.inspect_err(|e| {
            tracing::warn!(name = %name, error = %e, "Failed to create alert");
        })?;
        tracing::info!(name = %name, "Alert created");

        self.refresh_locked().await
    }

    /// Replace an alert's fields and return the refreshed active alerts
    ///
    /// As with `create`, a refresh error is reported after the store change
    /// has already been applied.
    pub async fn update(&self, id: &str, fields: AlertFields) -> Result<Vec<Alert>> {
        fields.validate()?;
        let _gate = self.write_gate.lock().await;

        self.store.update(id, fields).await.inspect_err(|e| {
            tracing::warn!(alert_id = %id, error = %e, "Failed to update alert");
        })?;
        tracing::info!(alert_id = %id, "Alert updated");

        self.refresh_locked().await
    }

    /// Delete an alert and return the refreshed active alerts
    pub async fn delete(&self, id: &str) -> Result<Vec<Alert>> {
        let _gate = self.write_gate.lock().await;

        self.store.delete(id).await.inspect_err(|e| {
            tracing::warn!(alert_id = %id, error = %e, "Failed to delete alert");
        })?;
        tracing::info!(alert_id = %id, "Alert deleted");

        self.refresh_locked().await
    }

    /// Cached active alerts as of the last successful mutation
    pub async fn active_alerts(&self) -> Vec<Alert> {
        self.cache.snapshot().await
    }

    /// Re-read active alerts from the store into the cache
    pub async fn refresh(&self) -> Result<Vec<Alert>> {
        let _gate = self.write_gate.lock().await;
        self.refresh_locked().await
    }

    // Caller must hold the write gate.
    async fn refresh_locked(&self) -> Result<Vec<Alert>> {
        let active = self.store.active_alerts().await.inspect_err(|e| {
            tracing::warn!(error = %e, "Failed to refresh active alerts; cache left stale");
        })?;
        tracing::debug!(count = active.len(), "Active alert cache refreshed");
        Ok(self.cache.replace(active).await)
    }
}
