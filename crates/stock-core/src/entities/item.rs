use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A stocked inventory item.
///
/// `price` and `quantity` are whole units; the backend stores both as
/// integers.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: i64,
    pub quantity: i64,
    pub category: String,
}

/// Payload for item creation and for each bulk-import row.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewItem {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: i64,
    pub quantity: i64,
    pub category: String,
}

/// Full-edit payload. Quantity is deliberately absent — after creation it
/// only moves through the dedicated quantity endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UpdateItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl UpdateItem {
    /// An update with every field unset is a no-op the server would accept
    /// but the console refuses to send.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.category.is_none()
    }
}

/// Body of the narrow quantity-only update path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuantityUpdate {
    pub quantity: i64,
}
