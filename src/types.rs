//! Core alert types
//!
//! All types use camelCase JSON serialization for wire compatibility
//! with existing notice clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AlertError, Result};

/// Maximum length of an alert name, in characters
pub const MAX_NAME_LEN: usize = 256;

/// Category of a global notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertType {
    Error,
    Info,
    New,
    Success,
    Warning,
}

impl AlertType {
    /// All known alert types, in wire order
    pub const ALL: [AlertType; 5] = [
        AlertType::Error,
        AlertType::Info,
        AlertType::New,
        AlertType::Success,
        AlertType::Warning,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::Error => "ERROR",
            AlertType::Info => "INFO",
            AlertType::New => "NEW",
            AlertType::Success => "SUCCESS",
            AlertType::Warning => "WARNING",
        }
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AlertType {
    type Err = AlertError;

    fn from_str(s: &str) -> Result<Self> {
        AlertType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| AlertError::BadRequest(format!("unknown alert type '{}'", s)))
    }
}

/// A global notice shown to application users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Store-assigned identifier (alert-<uuid>)
    pub id: String,

    /// Short label
    pub name: String,

    /// Notice category
    #[serde(rename = "type")]
    pub alert_type: AlertType,

    /// Free-text body
    pub content: String,

    /// Whether the alert is currently surfaced to clients
    pub active: bool,

    /// Whether a client may dismiss the alert locally
    pub allow_dismiss: bool,

    /// Whether the alert is shown only to authenticated sessions
    pub registered_only: bool,

    pub created_date: DateTime<Utc>,

    pub updated_date: DateTime<Utc>,
}

impl Alert {
    /// Create a new alert with a generated id and current timestamps
    pub fn new(fields: AlertFields) -> Self {
        let now = Utc::now();
        Self {
            id: format!("alert-{}", uuid::Uuid::new_v4()),
            name: fields.name,
            alert_type: fields.alert_type,
            content: fields.content,
            active: fields.active,
            allow_dismiss: fields.allow_dismiss,
            registered_only: fields.registered_only,
            created_date: now,
            updated_date: now,
        }
    }

    /// Mutable fields as currently stored
    pub fn fields(&self) -> AlertFields {
        AlertFields {
            name: self.name.clone(),
            alert_type: self.alert_type,
            content: self.content.clone(),
            active: self.active,
            allow_dismiss: self.allow_dismiss,
            registered_only: self.registered_only,
        }
    }

    /// Replace every mutable field, keeping id and creation time.
    ///
    /// `updated_date` only moves when a value actually changes, so applying
    /// the same fields twice leaves the alert identical. Returns whether
    /// anything changed.
    pub fn apply(&mut self, fields: AlertFields) -> bool {
        if self.fields() == fields {
            return false;
        }
        self.name = fields.name;
        self.alert_type = fields.alert_type;
        self.content = fields.content;
        self.active = fields.active;
        self.allow_dismiss = fields.allow_dismiss;
        self.registered_only = fields.registered_only;
        self.updated_date = Utc::now();
        true
    }
}

/// The mutable fields of an alert, as accepted by create and update
///
/// All six keys are required with their exact JSON types. Other keys, such
/// as the `id` and dates of an alert echoed back by a client, are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertFields {
    pub name: String,

    #[serde(rename = "type")]
    pub alert_type: AlertType,

    pub content: String,

    pub active: bool,

    pub allow_dismiss: bool,

    pub registered_only: bool,
}

impl AlertFields {
    /// Check value constraints the type system does not cover
    pub fn validate(&self) -> Result<()> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AlertError::BadRequest("name must not be empty".into()));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(AlertError::BadRequest(format!(
                "name must be at most {} characters",
                MAX_NAME_LEN
            )));
        }
        if self.content.trim().is_empty() {
            return Err(AlertError::BadRequest("content must not be empty".into()));
        }
        Ok(())
    }
}

/// Pagination window for list requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Max number of results to return
    pub limit: u64,

    /// Starting row, usually a multiple of `limit`
    pub offset: u64,
}

/// Pagination metadata returned alongside a page of results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Total number of rows regardless of window
    pub count: u64,
    pub offset: u64,
    pub limit: u64,
}

/// One page of alerts plus the total row count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertPage {
    pub alerts: Vec<Alert>,
    pub total: u64,
}
