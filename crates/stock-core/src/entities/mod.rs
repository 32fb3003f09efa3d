//! Entity structs for the Stockpile inventory domain.
//!
//! Read-side structs mirror the backend's response schemas; write-side
//! structs (`New*`, `Update*`) mirror its request schemas. All derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and
//! wire-contract validation.

mod alert;
mod audit;
mod dashboard;
mod item;
mod report;
mod user;

pub use alert::{Alert, NewAlert};
pub use audit::AuditLogEntry;
pub use dashboard::{DashboardStats, DashboardSummary, ItemActivity, QuantityPoint};
pub use item::{Item, NewItem, QuantityUpdate, UpdateItem};
pub use report::{CategoryBreakdown, MonthlyReport, ReportStats};
pub use user::{NewUser, RoleUpdate, User};
