//! Active alert cache
//!
//! Holds the set of alerts currently flagged active, as last read from the
//! store. The cache is only ever replaced wholesale; it never merges.

use crate::types::Alert;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared snapshot of the active alerts
#[derive(Clone, Default)]
pub struct ActiveAlertCache {
    alerts: Arc<RwLock<Vec<Alert>>>,
}

impl ActiveAlertCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached list, returning a copy of what was stored
    pub async fn replace(&self, alerts: Vec<Alert>) -> Vec<Alert> {
        let mut cached = self.alerts.write().await;
        *cached = alerts;
        cached.clone()
    }

    /// Current cached list
    pub async fn snapshot(&self) -> Vec<Alert> {
        self.alerts.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.alerts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.alerts.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AlertFields, AlertType};

    fn alert(name: &str) -> Alert {
        Alert::new(AlertFields {
            name: name.to_string(),
            alert_type: AlertType::Success,
            content: "ok".to_string(),
            active: true,
            allow_dismiss: true,
            registered_only: false,
        })
    }

    #[tokio::test]
    async fn test_starts_empty() {
        let cache = ActiveAlertCache::new();
        assert!(cache.is_empty().await);
        assert!(cache.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn test_replace_does_not_merge() {
        let cache = ActiveAlertCache::new();
        cache.replace(vec![alert("a"), alert("b")]).await;
        assert_eq!(cache.len().await, 2);

        let c = alert("c");
        let stored = cache.replace(vec![c.clone()]).await;
        assert_eq!(stored, vec![c.clone()]);
        assert_eq!(cache.snapshot().await, vec![c]);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let cache = ActiveAlertCache::new();
        let reader = cache.clone();
        cache.replace(vec![alert("shared")]).await;
        assert_eq!(reader.snapshot().await[0].name, "shared");
    }
}
