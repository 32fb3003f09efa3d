use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::AuditLogEntry;

/// Response of `GET /reports/monthly`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MonthlyReport {
    pub report_date: DateTime<Utc>,
    pub month: u32,
    pub year: i32,
    pub stats: ReportStats,
    pub category_breakdown: Vec<CategoryBreakdown>,
    pub activities: Vec<AuditLogEntry>,
}

/// Snapshot totals over the whole inventory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ReportStats {
    pub total_items: u64,
    pub total_inventory_value: f64,
    pub low_stock_count: u64,
}

/// Per-category stock count and value.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CategoryBreakdown {
    pub category: String,
    pub item_count: u64,
    pub value: f64,
}
