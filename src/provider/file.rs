//! JSON file-backed alert store
//!
//! Alerts are held in memory and the full list is rewritten to disk after
//! every mutation. Writes go to a temp file first and are renamed into
//! place so a crash never leaves a truncated file behind.

use super::{active, page, AlertStore};
use crate::error::{AlertError, Result};
use crate::types::{Alert, AlertFields, AlertPage};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

/// Alert store persisted as a JSON file
pub struct FileAlertStore {
    path: PathBuf,
    alerts: RwLock<Vec<Alert>>,
}

impl FileAlertStore {
    /// Open the store at `path`, loading existing alerts if the file exists
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let alerts = load(&path).await?;

        tracing::info!(
            path = %path.display(),
            count = alerts.len(),
            "Alert file store opened"
        );

        Ok(Self {
            path,
            alerts: RwLock::new(alerts),
        })
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `change` to a copy of the alert list, persist it, then commit.
    ///
    /// `change` reports whether it modified anything; unchanged lists are
    /// not rewritten. The in-memory list is left untouched if the change or
    /// the write fails.
    async fn mutate<F>(&self, change: F) -> Result<()>
    where
        F: FnOnce(&mut Vec<Alert>) -> Result<bool> + Send,
    {
        let mut alerts = self.alerts.write().await;
        let mut next = alerts.clone();
        if !change(&mut next)? {
            return Ok(());
        }
        save(&self.path, &next).await?;
        *alerts = next;
        Ok(())
    }
}

async fn load(path: &Path) -> Result<Vec<Alert>> {
    if !tokio::fs::try_exists(path).await? {
        return Ok(Vec::new());
    }

    let json = tokio::fs::read_to_string(path).await.map_err(|e| {
        AlertError::Store(format!(
            "Failed to read alert file {}: {}",
            path.display(),
            e
        ))
    })?;

    serde_json::from_str(&json).map_err(|e| {
        AlertError::Store(format!(
            "Failed to parse alert file {}: {}",
            path.display(),
            e
        ))
    })
}

async fn save(path: &Path, alerts: &[Alert]) -> Result<()> {
    let json = serde_json::to_string_pretty(alerts)?;
    let tmp_path = path.with_extension("tmp");

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            AlertError::Store(format!(
                "Failed to create alert directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    tokio::fs::write(&tmp_path, json).await.map_err(|e| {
        AlertError::Store(format!(
            "Failed to write alert file {}: {}",
            tmp_path.display(),
            e
        ))
    })?;

    tokio::fs::rename(&tmp_path, path).await.map_err(|e| {
        AlertError::Store(format!(
            "Failed to rename alert file {} → {}: {}",
            tmp_path.display(),
            path.display(),
            e
        ))
    })?;

    tracing::debug!(path = %path.display(), count = alerts.len(), "Alerts saved");
    Ok(())
}

#[async_trait]
impl AlertStore for FileAlertStore {
    async fn list(&self, limit: u64, offset: u64) -> Result<AlertPage> {
        let alerts = self.alerts.read().await;
        Ok(page(&alerts, limit, offset))
    }

    async fn create(&self, fields: AlertFields) -> Result<()> {
        self.mutate(|alerts| {
            alerts.push(Alert::new(fields));
            Ok(true)
        })
        .await
    }

    async fn update(&self, id: &str, fields: AlertFields) -> Result<()> {
        self.mutate(|alerts| {
            let alert = alerts
                .iter_mut()
                .find(|a| a.id == id)
                .ok_or_else(|| AlertError::NotFound(id.to_string()))?;
            Ok(alert.apply(fields))
        })
        .await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        if !self.alerts.read().await.iter().any(|a| a.id == id) {
            return Ok(());
        }
        self.mutate(|alerts| {
            alerts.retain(|a| a.id != id);
            Ok(true)
        })
        .await
    }

    async fn active_alerts(&self) -> Result<Vec<Alert>> {
        let alerts = self.alerts.read().await;
        Ok(active(&alerts))
    }

    fn name(&self) -> &str {
        "file"
    }
}
