use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Response of `GET /dashboard/stats`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardStats {
    pub item_stats: Vec<ItemActivity>,
    pub summary: DashboardSummary,
}

/// Quantity trend for one of the most-active items.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ItemActivity {
    pub item_id: i64,
    pub title: String,
    pub current_quantity: i64,
    pub history: Vec<QuantityPoint>,
}

/// One reconstructed point on an item's quantity timeline.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuantityPoint {
    pub timestamp: DateTime<Utc>,
    pub quantity: i64,
}

/// Headline counters for the dashboard cards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_items: u64,
    pub low_stock: u64,
    pub out_of_stock: u64,
    pub active_alerts: u64,
}
