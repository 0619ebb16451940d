//! Core category domain types.

use serde::{Deserialize, Serialize};

use crate::database_id::DatabaseId;

/// Database identifier for a category.
pub type CategoryId = DatabaseId;

/// A category for grouping recipes (e.g., 'Dessert', 'Appetizer').
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Category {
    /// The ID given to the category by the database.
    pub id: CategoryId,
    /// The display name, not necessarily unique.
    pub name: String,
}

/// Request body for category creation and editing.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryForm {
    pub name: String,
}

/// Confirmation that a category was deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDeleted {
    pub message: String,
    pub id: CategoryId,
}
