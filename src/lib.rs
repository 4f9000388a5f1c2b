//! # a3s-alerts
//!
//! Global notice (alert) management for the A3S ecosystem.
//!
//! ## Overview
//!
//! `a3s-alerts` serves list/create/update/delete over alerts through an
//! HTTP API and keeps a shared cache of the currently active alerts.
//! Storage is pluggable: swap the in-memory or JSON-file store for any
//! other `AlertStore` without touching the handlers.
//!
//! ## Quick Start
//!
//! ```rust
//! use a3s_alerts::{AlertFields, AlertService, AlertType, MemoryAlertStore};
//!
//! # async fn example() -> a3s_alerts::Result<()> {
//! let service = AlertService::new(MemoryAlertStore::new());
//!
//! let active = service
//!     .create(AlertFields {
//!         name: "Maintenance".into(),
//!         alert_type: AlertType::Warning,
//!         content: "DB down 10pm".into(),
//!         active: true,
//!         allow_dismiss: true,
//!         registered_only: false,
//!     })
//!     .await?;
//!
//! println!("{} active alert(s)", active.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **AlertStore** trait — persistence abstraction all backends implement
//! - **AlertService** — validation, store calls, and active cache refresh
//! - **ActiveAlertCache** — shared snapshot of active alerts
//! - **api** — axum handlers and the standard response envelope

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod dirs;
pub mod error;
pub mod provider;
pub mod server;
pub mod service;
pub mod types;

// Re-export core types
pub use cache::ActiveAlertCache;
pub use config::{AlertsConfig, StoreKind};
pub use error::{AlertError, Result};
pub use provider::AlertStore;
pub use service::AlertService;
pub use types::{Alert, AlertFields, AlertPage, AlertType, ListQuery, Pagination};

// Re-export stores for convenience
pub use provider::file::FileAlertStore;
pub use provider::memory::MemoryAlertStore;
