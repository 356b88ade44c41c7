//! Dashboard page: balance summary cards plus trend and distribution charts.

use leptos::prelude::*;

use crate::components::charts::{LineChart, PieChart, distribution_entries, income_expense_series};
use crate::components::error_alert::ErrorAlert;
use crate::components::spinner::Spinner;
use crate::components::summary_card::SummaryCard;
use crate::state::analytics::AnalyticsState;
use crate::util::chart;
use crate::util::currency;

/// Landing page — three parallel analytics fetches joined all-or-nothing.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let analytics = RwSignal::new(AnalyticsState::default());
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        load_dashboard(analytics, error);
    });

    let cards = move || {
        let balance = analytics.get().balance.unwrap_or_default();
        let (income, expenses, net) = currency::summary_values(&balance);
        view! {
            <div class="summary-grid">
                <SummaryCard
                    label="Total Income"
                    value=income
                    tone="summary-card__value--positive"
                />
                <SummaryCard
                    label="Total Expenses"
                    value=expenses
                    tone="summary-card__value--negative"
                />
                <SummaryCard label="Balance" value=net tone=currency::tone_class(balance.balance)/>
            </div>
        }
    };

    let charts = move || {
        let state = analytics.get();
        let trends = state.trends.unwrap_or_default();
        let slices = chart::pie_slices(&distribution_entries(&state.distribution));
        view! {
            <div class="chart-grid">
                <section class="panel panel--wide">
                    <h2 class="panel__title">"Monthly Trends"</h2>
                    <LineChart labels=trends.months.clone() series=income_expense_series(&trends)/>
                </section>
                <section class="panel">
                    <h2 class="panel__title">"Expense Distribution"</h2>
                    <PieChart slices=slices/>
                </section>
            </div>
        }
    };

    view! {
        <div class="dashboard-page">
            <ErrorAlert error=error/>
            <Show when=move || !analytics.get().loading fallback=move || view! { <Spinner/> }>
                {cards}
                {charts}
            </Show>
        </div>
    }
}

fn load_dashboard(analytics: RwSignal<AnalyticsState>, error: RwSignal<Option<String>>) {
    analytics.update(|s| s.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_analytics().await {
            Ok((balance, distribution, trends)) => analytics.update(|s| {
                s.balance = Some(balance);
                s.distribution = distribution;
                s.trends = Some(trends);
                s.loading = false;
            }),
            Err(err) => {
                error.set(Some(err.into_message()));
                analytics.update(|s| s.loading = false);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = error;
    }
}
