//! In-memory alert store for development and testing
//!
//! Keeps alerts in a `Vec` in insertion order. Contents are lost when the
//! store is dropped.

use super::{active, page, AlertStore};
use crate::error::{AlertError, Result};
use crate::types::{Alert, AlertFields, AlertPage};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory alert store
#[derive(Clone, Default)]
pub struct MemoryAlertStore {
    alerts: Arc<RwLock<Vec<Alert>>>,
}

impl MemoryAlertStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored alerts
    pub async fn len(&self) -> usize {
        self.alerts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.alerts.read().await.is_empty()
    }
}

#[async_trait]
impl AlertStore for MemoryAlertStore {
    async fn list(&self, limit: u64, offset: u64) -> Result<AlertPage> {
        let alerts = self.alerts.read().await;
        Ok(page(&alerts, limit, offset))
    }

    async fn create(&self, fields: AlertFields) -> Result<()> {
        let alert = Alert::new(fields);
        tracing::debug!(alert_id = %alert.id, "Alert stored");

        let mut alerts = self.alerts.write().await;
        alerts.push(alert);
        Ok(())
    }

    async fn update(&self, id: &str, fields: AlertFields) -> Result<()> {
        let mut alerts = self.alerts.write().await;
        let alert = alerts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AlertError::NotFound(id.to_string()))?;
        if alert.apply(fields) {
            tracing::debug!(alert_id = %id, "Alert updated in place");
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut alerts = self.alerts.write().await;
        alerts.retain(|a| a.id != id);
        Ok(())
    }

    async fn active_alerts(&self) -> Result<Vec<Alert>> {
        let alerts = self.alerts.read().await;
        Ok(active(&alerts))
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AlertType;

    fn fields(name: &str, active: bool) -> AlertFields {
        AlertFields {
            name: name.to_string(),
            alert_type: AlertType::Info,
            content: format!("{} content", name),
            active,
            allow_dismiss: false,
            registered_only: false,
        }
    }

    #[tokio::test]
    async fn test_create_and_list_newest_first() {
        let store = MemoryAlertStore::new();
        store.create(fields("first", true)).await.unwrap();
        store.create(fields("second", false)).await.unwrap();
        store.create(fields("third", true)).await.unwrap();

        let page = store.list(10, 0).await.unwrap();
        assert_eq!(page.total, 3);
        let names: Vec<_> = page.alerts.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_list_window() {
        let store = MemoryAlertStore::new();
        for i in 0..5 {
            store.create(fields(&format!("a{}", i), true)).await.unwrap();
        }

        let page = store.list(2, 1).await.unwrap();
        assert_eq!(page.total, 5);
        let names: Vec<_> = page.alerts.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["a3", "a2"]);

        let past_end = store.list(10, 10).await.unwrap();
        assert!(past_end.alerts.is_empty());
        assert_eq!(past_end.total, 5);

        let zero = store.list(0, 0).await.unwrap();
        assert!(zero.alerts.is_empty());
        assert_eq!(zero.total, 5);
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let store = MemoryAlertStore::new();
        store.create(fields("old", true)).await.unwrap();
        let id = store.list(1, 0).await.unwrap().alerts[0].id.clone();

        let mut next = fields("new", false);
        next.alert_type = AlertType::Error;
        next.registered_only = true;
        store.update(&id, next).await.unwrap();

        let alert = &store.list(1, 0).await.unwrap().alerts[0];
        assert_eq!(alert.id, id);
        assert_eq!(alert.name, "new");
        assert_eq!(alert.alert_type, AlertType::Error);
        assert!(!alert.active);
        assert!(alert.registered_only);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let store = MemoryAlertStore::new();
        let result = store.update("alert-missing", fields("x", true)).await;
        assert!(matches!(result, Err(AlertError::NotFound(id)) if id == "alert-missing"));
    }

    #[tokio::test]
    async fn test_delete_and_delete_unknown() {
        let store = MemoryAlertStore::new();
        store.create(fields("doomed", true)).await.unwrap();
        let id = store.list(1, 0).await.unwrap().alerts[0].id.clone();

        store.delete("42").await.unwrap();
        assert_eq!(store.len().await, 1);

        store.delete(&id).await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_active_alerts_filter() {
        let store = MemoryAlertStore::new();
        store.create(fields("on-1", true)).await.unwrap();
        store.create(fields("off", false)).await.unwrap();
        store.create(fields("on-2", true)).await.unwrap();

        let active = store.active_alerts().await.unwrap();
        let names: Vec<_> = active.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["on-2", "on-1"]);
        assert!(store.health().await.unwrap());
        assert_eq!(store.name(), "memory");
    }
}
