//! Inline-SVG chart components.
//!
//! Each component takes already-reshaped labels and values; geometry comes
//! from the pure helpers in [`crate::util::chart`]. Pages rebuild these
//! components whenever their display state is replaced, so no signals are
//! threaded through.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use leptos::prelude::*;

use crate::net::types::{CategorySlice, MonthlyTrends};
use crate::util::chart::{
    self, EXPENSE_COLOR, EXPENSE_FILL, INCOME_COLOR, INCOME_FILL, LineSeries, PieSlice, PlotRect,
};

const LINE_PLOT: PlotRect = PlotRect { x: 50.0, y: 20.0, width: 570.0, height: 230.0 };
const BAR_PLOT: PlotRect = PlotRect { x: 50.0, y: 20.0, width: 570.0, height: 230.0 };
const PIE_CENTER: f64 = 120.0;
const PIE_RADIUS: f64 = 100.0;
const AXIS_STEPS: usize = 4;

/// Income and expense line series from the monthly trends payload.
pub fn income_expense_series(trends: &MonthlyTrends) -> Vec<LineSeries> {
    vec![
        LineSeries {
            label: "Income".to_owned(),
            color: INCOME_COLOR,
            fill: INCOME_FILL,
            values: trends.income.clone(),
        },
        LineSeries {
            label: "Expenses".to_owned(),
            color: EXPENSE_COLOR,
            fill: EXPENSE_FILL,
            values: trends.expenses.clone(),
        },
    ]
}

/// (label, value) entries for the expense distribution pie.
pub fn distribution_entries(slices: &[CategorySlice]) -> Vec<(String, f64)> {
    slices
        .iter()
        .map(|slice| (slice.category.clone(), slice.amount))
        .collect()
}

/// Multi-series line chart with an area fill per series.
#[component]
pub fn LineChart(labels: Vec<String>, series: Vec<LineSeries>) -> impl IntoView {
    let max = chart::nice_upper_bound(chart::series_max(&series));
    let ticks = chart::axis_ticks(max, AXIS_STEPS);
    let label_count = labels.len();

    view! {
        <div class="chart chart--line">
            <svg viewBox="0 0 640 300" role="img">
                {ticks
                    .iter()
                    .map(|tick| {
                        let y = chart::y_position(*tick, max, LINE_PLOT);
                        view! {
                            <line
                                class="chart__gridline"
                                x1=format!("{:.2}", LINE_PLOT.x)
                                x2=format!("{:.2}", LINE_PLOT.x + LINE_PLOT.width)
                                y1=format!("{y:.2}")
                                y2=format!("{y:.2}")
                            ></line>
                            <text
                                class="chart__tick"
                                x=format!("{:.2}", LINE_PLOT.x - 8.0)
                                y=format!("{:.2}", y + 4.0)
                                text-anchor="end"
                            >
                                {chart::format_tick(*tick)}
                            </text>
                        }
                    })
                    .collect::<Vec<_>>()}
                {labels
                    .iter()
                    .enumerate()
                    .map(|(index, label)| {
                        let x = chart::x_position(index, label_count, LINE_PLOT);
                        view! {
                            <text
                                class="chart__tick"
                                x=format!("{x:.2}")
                                y=format!("{:.2}", LINE_PLOT.bottom() + 20.0)
                                text-anchor="middle"
                            >
                                {label.clone()}
                            </text>
                        }
                    })
                    .collect::<Vec<_>>()}
                {series
                    .iter()
                    .map(|s| {
                        view! {
                            <path
                                d=chart::area_path(&s.values, max, LINE_PLOT)
                                fill=s.fill
                                stroke="none"
                            ></path>
                            <polyline
                                points=chart::polyline_points(&s.values, max, LINE_PLOT)
                                fill="none"
                                stroke=s.color
                                stroke-width="2"
                            ></polyline>
                        }
                    })
                    .collect::<Vec<_>>()}
            </svg>
            <ul class="chart__legend">
                {series
                    .iter()
                    .map(|s| {
                        view! {
                            <li class="chart__legend-item">
                                <span
                                    class="chart__swatch"
                                    style=format!("background:{}", s.color)
                                ></span>
                                {s.label.clone()}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

/// Pie chart of proportional slices with a legend.
#[component]
pub fn PieChart(slices: Vec<PieSlice>) -> impl IntoView {
    view! {
        <div class="chart chart--pie">
            <svg viewBox="0 0 240 240" role="img">
                {slices
                    .iter()
                    .map(|slice| {
                        view! {
                            <path
                                d=chart::arc_path(
                                    PIE_CENTER,
                                    PIE_CENTER,
                                    PIE_RADIUS,
                                    slice.start_turn,
                                    slice.end_turn,
                                )
                                fill=slice.color
                            ></path>
                        }
                    })
                    .collect::<Vec<_>>()}
            </svg>
            <ul class="chart__legend">
                {slices
                    .iter()
                    .map(|slice| {
                        view! {
                            <li class="chart__legend-item">
                                <span
                                    class="chart__swatch"
                                    style=format!("background:{}", slice.color)
                                ></span>
                                {slice.label.clone()}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

/// Signed bar chart around a zero midline.
#[component]
pub fn BarChart(labels: Vec<String>, values: Vec<f64>) -> impl IntoView {
    let bars = chart::signed_bars(&values, BAR_PLOT);
    let midline = BAR_PLOT.y + BAR_PLOT.height / 2.0;
    let label_count = labels.len();

    view! {
        <div class="chart chart--bar">
            <svg viewBox="0 0 640 300" role="img">
                <line
                    class="chart__midline"
                    x1=format!("{:.2}", BAR_PLOT.x)
                    x2=format!("{:.2}", BAR_PLOT.x + BAR_PLOT.width)
                    y1=format!("{midline:.2}")
                    y2=format!("{midline:.2}")
                ></line>
                {bars
                    .iter()
                    .map(|bar| {
                        view! {
                            <rect
                                x=format!("{:.2}", bar.x)
                                y=format!("{:.2}", bar.y)
                                width=format!("{:.2}", bar.width)
                                height=format!("{:.2}", bar.height)
                                fill=chart::bar_color(bar.positive)
                            ></rect>
                        }
                    })
                    .collect::<Vec<_>>()}
                {labels
                    .iter()
                    .enumerate()
                    .map(|(index, label)| {
                        let slot = BAR_PLOT.width / (label_count.max(1) as f64);
                        let x = BAR_PLOT.x + slot * (index as f64) + slot / 2.0;
                        view! {
                            <text
                                class="chart__tick"
                                x=format!("{x:.2}")
                                y=format!("{:.2}", BAR_PLOT.bottom() + 20.0)
                                text-anchor="middle"
                            >
                                {label.clone()}
                            </text>
                        }
                    })
                    .collect::<Vec<_>>()}
            </svg>
        </div>
    }
}
