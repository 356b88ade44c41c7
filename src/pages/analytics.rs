//! Analytics page: time-range filter, summary cards, and three charts.

use leptos::prelude::*;

use crate::components::charts::{
    BarChart, LineChart, PieChart, distribution_entries, income_expense_series,
};
use crate::components::error_alert::ErrorAlert;
use crate::components::spinner::Spinner;
use crate::components::summary_card::SummaryCard;
use crate::state::analytics::{AnalyticsState, TimeRange};
use crate::util::chart;
use crate::util::currency;

/// Analytics page — same fetch fan-out as the dashboard, re-issued whenever
/// the time-range select changes.
#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let analytics = RwSignal::new(AnalyticsState::default());
    let error = RwSignal::new(None::<String>);
    let range = RwSignal::new(TimeRange::default());

    Effect::new(move || {
        // Subscribe to the range so a new selection triggers a fresh fetch.
        let _ = range.get();
        load_analytics(analytics, error);
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
                    <h2 class="panel__title">"Income vs Expenses Trend"</h2>
                    <LineChart labels=trends.months.clone() series=income_expense_series(&trends)/>
                </section>
                <section class="panel">
                    <h2 class="panel__title">"Expense Distribution"</h2>
                    <PieChart slices=slices/>
                </section>
                <section class="panel panel--full">
                    <h2 class="panel__title">"Monthly Balance"</h2>
                    <BarChart labels=trends.months.clone() values=trends.balance_series()/>
                </section>
            </div>
        }
    };

    view! {
        <div class="analytics-page">
            <ErrorAlert error=error/>
            <header class="page-header">
                <h1 class="page-header__title">"Analytics"</h1>
                <label class="page-header__filter">
                    "Time Range"
                    <select on:change=move |ev| {
                        range.set(TimeRange::from_value(&event_target_value(&ev)));
                    }>
                        {TimeRange::ALL
                            .into_iter()
                            .map(|r| {
                                view! {
                                    <option value=r.value() selected=move || range.get() == r>
                                        {r.label()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            </header>
            <Show when=move || !analytics.get().loading fallback=move || view! { <Spinner/> }>
                {cards}
                {charts}
            </Show>
        </div>
    }
}

fn load_analytics(analytics: RwSignal<AnalyticsState>, error: RwSignal<Option<String>>) {
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
