#[cfg(test)]
#[path = "transactions_test.rs"]
mod transactions_test;

use crate::net::types::{Category, Transaction};

/// Transactions page state backed by two independent GETs.
#[derive(Clone, Debug, Default)]
pub struct TransactionsState {
    pub items: Vec<Transaction>,
    pub categories: Vec<Category>,
    pub loading: bool,
}

/// Resolve the category name shown in a transaction row.
///
/// Prefers the denormalized name the backend embeds in list rows, falling
/// back to a lookup by id against the fetched category list.
pub fn category_name<'a>(tx: &'a Transaction, categories: &'a [Category]) -> &'a str {
    if let Some(name) = tx.category.as_deref() {
        return name;
    }
    tx.category_id
        .and_then(|id| categories.iter().find(|c| c.id == id))
        .map_or("", |c| c.name.as_str())
}

/// Plain record mirroring the add/edit dialog fields.
///
/// All fields are kept as entered text; parsing happens in [`TransactionForm::payload`]
/// so invalid input surfaces as a message instead of being silently dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionForm {
    pub amount: String,
    pub description: String,
    pub date: String,
    pub category_id: String,
}

impl TransactionForm {
    /// Blank form for a new transaction, dated today.
    pub fn empty(today: &str) -> Self {
        Self {
            date: today.to_owned(),
            ..Self::default()
        }
    }

    /// Form seeded from an existing row for editing.
    pub fn from_transaction(tx: &Transaction) -> Self {
        Self {
            amount: tx.amount.to_string(),
            description: tx.description.clone(),
            date: crate::util::dates::display_date(&tx.date).to_owned(),
            category_id: tx.category_id.map(|id| id.to_string()).unwrap_or_default(),
        }
    }

    /// Build the request body for create/update.
    ///
    /// # Errors
    ///
    /// Returns the field-level message to surface when the amount does not
    /// parse, no category is selected, or the date is empty.
    pub fn payload(&self) -> Result<serde_json::Value, &'static str> {
        let Ok(amount) = self.amount.trim().parse::<f64>() else {
            return Err("Enter a valid amount.");
        };
        let Ok(category_id) = self.category_id.trim().parse::<i64>() else {
            return Err("Select a category.");
        };
        if self.date.trim().is_empty() {
            return Err("Enter a date.");
        }
        Ok(serde_json::json!({
            "amount": amount,
            "description": self.description,
            "date": self.date.trim(),
            "category_id": category_id,
        }))
    }
}
