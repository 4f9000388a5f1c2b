//! Alert store trait — the persistence abstraction behind the API
//!
//! All storage backends (in-memory, JSON file, SQL, etc.) implement
//! `AlertStore` so the request handlers never depend on how alerts are
//! kept.

use crate::error::Result;
use crate::types::{Alert, AlertFields, AlertPage};
use async_trait::async_trait;

pub mod file;
pub mod memory;

/// Core trait for alert persistence backends
///
/// Field values arrive already validated; implementations own id
/// assignment and timestamps.
#[async_trait]
pub trait AlertStore: Send + Sync {
    /// Fetch one page of alerts, newest first, with the total row count
    async fn list(&self, limit: u64, offset: u64) -> Result<AlertPage>;

    /// Insert a new alert
    async fn create(&self, fields: AlertFields) -> Result<()>;

    /// Replace every mutable field of an existing alert
    ///
    /// Returns `AlertError::NotFound` when no alert has the given id.
    async fn update(&self, id: &str, fields: AlertFields) -> Result<()>;

    /// Delete an alert. Deleting an unknown id succeeds without effect.
    async fn delete(&self, id: &str) -> Result<()>;

    /// All alerts currently flagged active, newest first
    async fn active_alerts(&self) -> Result<Vec<Alert>>;

    /// Store name (e.g., "memory", "file")
    fn name(&self) -> &str;

    /// Health check — returns true if the store is reachable
    ///
    /// Default implementation issues an empty list query.
    async fn health(&self) -> Result<bool> {
        self.list(0, 0).await.map(|_| true)
    }
}

/// Slice a newest-first page out of an insertion-ordered list
pub(crate) fn page(alerts: &[Alert], limit: u64, offset: u64) -> AlertPage {
    let total = alerts.len() as u64;
    let offset = usize::try_from(offset).unwrap_or(usize::MAX);
    let limit = usize::try_from(limit).unwrap_or(usize::MAX);

    let alerts = alerts
        .iter()
        .rev()
        .skip(offset)
        .take(limit)
        .cloned()
        .collect();

    AlertPage { alerts, total }
}

/// Filter an insertion-ordered list down to active alerts, newest first
pub(crate) fn active(alerts: &[Alert]) -> Vec<Alert> {
    alerts.iter().rev().filter(|a| a.active).cloned().collect()
}
