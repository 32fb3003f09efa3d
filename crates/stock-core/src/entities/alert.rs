use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AlertStatus, AlertType};

/// A stock or manual alert.
///
/// The list endpoint enriches alerts with the related item title and the
/// creating/resolving user emails; single-alert responses omit those fields,
/// so they all default to `None`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Alert {
    pub id: i64,
    pub alert_type: AlertType,
    #[serde(default)]
    pub item_id: Option<i64>,
    pub message: String,
    pub status: AlertStatus,
    #[serde(default)]
    pub created_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resolved_by: Option<i64>,
    #[serde(default)]
    pub item_title: Option<String>,
    #[serde(default)]
    pub created_by_email: Option<String>,
    #[serde(default)]
    pub resolved_by_email: Option<String>,
}

/// Payload for creating a manual alert.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewAlert {
    #[serde(default)]
    pub item_id: Option<i64>,
    pub alert_type: AlertType,
    pub message: String,
}
