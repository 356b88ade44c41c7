//! Captioned currency figure used by the dashboard and analytics pages.

use leptos::prelude::*;

/// A single summary card with a tone-modified value.
#[component]
pub fn SummaryCard(label: &'static str, value: String, tone: &'static str) -> impl IntoView {
    view! {
        <div class="summary-card">
            <span class="summary-card__label">{label}</span>
            <span class=format!("summary-card__value {tone}")>{value}</span>
        </div>
    }
}
