use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An append-only audit trail entry, produced by the backend and read-only
/// to the console.
///
/// `action` and `entity_type` are free-form server strings (`"UPDATE_ROLE"`,
/// `"ITEM"`, ...) rather than enums — the set is owned by the backend and
/// grows without client releases.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditLogEntry {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub action: String,
    pub entity_type: String,
    #[serde(default)]
    pub entity_id: Option<i64>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub details: Option<String>,
}
