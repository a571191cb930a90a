//! Core types for itemdesk

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Item ID type.
///
/// Signed so that any integer a client sends is a valid lookup key.
pub type ItemId = i64;

/// A catalogue record held by the item store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[schema(example = json!({
    "id": 1,
    "name": "Example Item",
    "description": "This is an example item",
    "price": 42.99
}))]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

/// Payload for creating an item.
///
/// `id` is accepted but never used: the store always assigns its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[schema(example = json!({
    "name": "Example Item",
    "description": "This is an example item",
    "price": 42.99
}))]
pub struct NewItem {
    #[serde(default)]
    pub id: Option<ItemId>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

impl NewItem {
    pub fn new(name: impl Into<String>, description: Option<&str>, price: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.map(str::to_string),
            price,
        }
    }
}

/// A contact-form submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[schema(example = json!({
    "name": "John Doe",
    "email": "john@example.com",
    "subject": "Product Inquiry",
    "message": "I would like more information about your product."
}))]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
