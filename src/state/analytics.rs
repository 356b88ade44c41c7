#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use crate::net::types::{BalanceSummary, CategorySlice, MonthlyTrends};

/// Combined analytics payload shown by the dashboard and analytics pages.
///
/// The three fields are replaced together after an all-or-nothing parallel
/// fetch; a failed join leaves all of them untouched.
#[derive(Clone, Debug)]
pub struct AnalyticsState {
    pub balance: Option<BalanceSummary>,
    pub distribution: Vec<CategorySlice>,
    pub trends: Option<MonthlyTrends>,
    pub loading: bool,
}

impl Default for AnalyticsState {
    fn default() -> Self {
        // Pages fetch on mount, so the first paint is the loading state.
        Self {
            balance: None,
            distribution: Vec::new(),
            trends: None,
            loading: true,
        }
    }
}

/// Time-range filter on the analytics page.
///
/// Changing the selection is the only non-mount fetch trigger; the value is
/// not forwarded to the backend (the endpoints take no parameters).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeRange {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl TimeRange {
    pub const ALL: [Self; 4] = [Self::Week, Self::Month, Self::Quarter, Self::Year];

    /// Select option value.
    pub fn value(self) -> &'static str {
        match self {
            Self::Week => "7",
            Self::Month => "30",
            Self::Quarter => "90",
            Self::Year => "365",
        }
    }

    /// Select option label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Week => "Last 7 days",
            Self::Month => "Last 30 days",
            Self::Quarter => "Last 90 days",
            Self::Year => "Last year",
        }
    }

    /// Number of days the range covers.
    pub fn days(self) -> u32 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
            Self::Year => 365,
        }
    }

    /// Parse a select option value, falling back to the default range.
    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|range| range.value() == value)
            .unwrap_or_default()
    }
}
