//! Wire types for the finance backend's JSON API.
//!
//! All entities are owned by the backend; the client deserializes them for
//! display and never mutates or caches them beyond page-local state.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Whether a category collects income or spending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryType {
    Income,
    #[default]
    Expense,
}

impl CategoryType {
    /// Wire value, also used for chip text.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Capitalized form for select options.
    pub fn label(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

/// A transaction category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CategoryType,
}

/// A single transaction as served by the backend list endpoint.
///
/// The backend denormalizes `category` / `category_type` into list rows;
/// both are accepted when present, but `category_id` is the canonical
/// reference used to resolve names client-side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    /// ISO-8601 timestamp; only the calendar-date part is displayed.
    pub date: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub category_type: Option<CategoryType>,
}

/// Server-computed balance totals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
}

/// One (category, aggregated amount) pair of the expense distribution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategorySlice {
    pub category: String,
    pub amount: f64,
}

/// Per-month income and expense totals as parallel ordered lists.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrends {
    pub months: Vec<String>,
    #[serde(default)]
    pub income: Vec<f64>,
    #[serde(default)]
    pub expenses: Vec<f64>,
}

impl MonthlyTrends {
    /// Elementwise `income - expenses`, truncated to the shorter list.
    pub fn balance_series(&self) -> Vec<f64> {
        self.income
            .iter()
            .zip(&self.expenses)
            .map(|(income, expenses)| income - expenses)
            .collect()
    }
}
