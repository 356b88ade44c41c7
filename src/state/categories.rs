#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use crate::net::types::{Category, CategoryType};

/// Categories page state.
#[derive(Clone, Debug, Default)]
pub struct CategoriesState {
    pub items: Vec<Category>,
    pub loading: bool,
}

/// Chip styling for a category type (income green, expense red).
pub fn chip_class(kind: CategoryType) -> &'static str {
    match kind {
        CategoryType::Income => "chip chip--income",
        CategoryType::Expense => "chip chip--expense",
    }
}

/// Plain record mirroring the add/edit dialog fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryForm {
    pub name: String,
    pub kind: CategoryType,
}

impl CategoryForm {
    /// Form seeded from an existing row for editing.
    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            kind: category.kind,
        }
    }

    /// Build the request body for create/update.
    ///
    /// # Errors
    ///
    /// Returns the message to surface when the name is blank.
    pub fn payload(&self) -> Result<serde_json::Value, &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Enter a name.");
        }
        Ok(serde_json::json!({
            "name": name,
            "type": self.kind.as_str(),
        }))
    }
}
