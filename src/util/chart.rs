//! Pure geometry for the SVG chart components.
//!
//! Components hand already-reshaped label/value vectors to these helpers
//! and render the returned paths and positions verbatim. Angles are
//! fractions of a full turn starting at 12 o'clock, clockwise.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

/// Slice palette cycled by the pie chart and its legend.
pub const CHART_PALETTE: [&str; 6] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40",
];

pub const INCOME_COLOR: &str = "#4CAF50";
pub const EXPENSE_COLOR: &str = "#F44336";
pub const INCOME_FILL: &str = "rgba(76, 175, 80, 0.1)";
pub const EXPENSE_FILL: &str = "rgba(244, 67, 54, 0.1)";

/// Palette entry for a slice index, wrapping past the end.
pub fn palette_color(index: usize) -> &'static str {
    CHART_PALETTE[index % CHART_PALETTE.len()]
}

/// Axis-aligned plot area inside an SVG viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotRect {
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }
}

/// A labeled data series for the line chart.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSeries {
    pub label: String,
    pub color: &'static str,
    pub fill: &'static str,
    pub values: Vec<f64>,
}

/// One pie wedge with angles as turn fractions.
#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub start_turn: f64,
    pub end_turn: f64,
    pub color: &'static str,
}

/// Proportional pie slices for (label, value) entries.
///
/// Non-positive values are skipped; an empty or zero-total input yields no
/// slices at all.
pub fn pie_slices(entries: &[(String, f64)]) -> Vec<PieSlice> {
    let total: f64 = entries.iter().map(|(_, value)| value.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut slices = Vec::new();
    let mut cursor = 0.0;
    for (label, value) in entries {
        if *value <= 0.0 {
            continue;
        }
        let span = value / total;
        slices.push(PieSlice {
            label: label.clone(),
            value: *value,
            start_turn: cursor,
            end_turn: cursor + span,
            color: palette_color(slices.len()),
        });
        cursor += span;
    }
    slices
}

/// SVG path for a pie wedge between two turn fractions.
pub fn arc_path(cx: f64, cy: f64, radius: f64, start_turn: f64, end_turn: f64) -> String {
    let span = end_turn - start_turn;
    if span >= 1.0 - 1e-9 {
        // A single full-turn wedge collapses to a point, so draw the disc
        // as two half arcs instead.
        let top = cy - radius;
        let bottom = cy + radius;
        return format!(
            "M {cx:.2} {top:.2} A {radius:.2} {radius:.2} 0 1 1 {cx:.2} {bottom:.2} \
             A {radius:.2} {radius:.2} 0 1 1 {cx:.2} {top:.2} Z"
        );
    }
    let (x1, y1) = point_on_circle(cx, cy, radius, start_turn);
    let (x2, y2) = point_on_circle(cx, cy, radius, end_turn);
    let large_arc = i32::from(span > 0.5);
    format!(
        "M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} \
         A {radius:.2} {radius:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z"
    )
}

fn point_on_circle(cx: f64, cy: f64, radius: f64, turn: f64) -> (f64, f64) {
    let angle = turn * std::f64::consts::TAU - std::f64::consts::FRAC_PI_2;
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// Round a raw maximum up the 1/2/5 ladder for axis headroom.
pub fn nice_upper_bound(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    for step in [1.0, 2.0, 5.0] {
        let candidate = step * magnitude;
        if candidate >= raw {
            return candidate;
        }
    }
    10.0 * magnitude
}

/// Largest value across several series (0 when all are empty).
pub fn series_max(series: &[LineSeries]) -> f64 {
    series
        .iter()
        .flat_map(|s| &s.values)
        .fold(0.0, |acc: f64, value| acc.max(*value))
}

/// X pixel for index `i` of `count` evenly spaced points.
///
/// A single point sits in the middle of the plot.
pub fn x_position(index: usize, count: usize, rect: PlotRect) -> f64 {
    if count <= 1 {
        return rect.x + rect.width / 2.0;
    }
    rect.x + rect.width * (index as f64) / ((count - 1) as f64)
}

/// Y pixel for `value` on a `0..=max` axis; the bottom edge is zero.
pub fn y_position(value: f64, max: f64, rect: PlotRect) -> f64 {
    if max <= 0.0 {
        return rect.bottom();
    }
    rect.bottom() - rect.height * (value.clamp(0.0, max) / max)
}

/// `x,y` pairs for an SVG polyline.
pub fn polyline_points(values: &[f64], max: f64, rect: PlotRect) -> String {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            format!(
                "{:.2},{:.2}",
                x_position(index, values.len(), rect),
                y_position(*value, max, rect)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closed path under a series, for the line chart's area fill.
pub fn area_path(values: &[f64], max: f64, rect: PlotRect) -> String {
    if values.is_empty() {
        return String::new();
    }
    let mut path = String::new();
    for (index, value) in values.iter().enumerate() {
        let command = if index == 0 { 'M' } else { 'L' };
        path.push_str(&format!(
            "{command} {:.2} {:.2} ",
            x_position(index, values.len(), rect),
            y_position(*value, max, rect)
        ));
    }
    path.push_str(&format!(
        "L {:.2} {:.2} ",
        x_position(values.len() - 1, values.len(), rect),
        rect.bottom()
    ));
    path.push_str(&format!("L {:.2} {:.2} Z", x_position(0, values.len(), rect), rect.bottom()));
    path
}

/// Evenly spaced tick values from 0 to `max` inclusive.
pub fn axis_ticks(max: f64, steps: usize) -> Vec<f64> {
    if steps == 0 || max <= 0.0 {
        return vec![0.0];
    }
    (0..=steps)
        .map(|step| max * (step as f64) / (steps as f64))
        .collect()
}

/// Short tick label; whole numbers drop the decimals.
pub fn format_tick(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.2}")
    }
}

/// One signed bar of the monthly balance chart.
#[derive(Clone, Debug, PartialEq)]
pub struct SignedBar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub positive: bool,
}

/// Bars on a symmetric axis centered on zero.
///
/// The scale spans `-limit..=limit` where `limit` is the nice bound of the
/// largest magnitude; positive bars grow up from the midline, negative bars
/// grow down.
pub fn signed_bars(values: &[f64], rect: PlotRect) -> Vec<SignedBar> {
    let max_abs = values.iter().fold(0.0, |acc: f64, value| acc.max(value.abs()));
    if max_abs <= 0.0 {
        return Vec::new();
    }
    let limit = nice_upper_bound(max_abs);
    let midline = rect.y + rect.height / 2.0;
    let half = rect.height / 2.0;
    let slot = rect.width / (values.len() as f64);
    let bar_width = slot * 0.6;
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let height = half * (value.abs().min(limit) / limit);
            let x = rect.x + slot * (index as f64) + (slot - bar_width) / 2.0;
            let positive = *value >= 0.0;
            let y = if positive { midline - height } else { midline };
            SignedBar { x, y, width: bar_width, height, positive }
        })
        .collect()
}

/// Bar fill matching the income/expense series colors.
pub fn bar_color(positive: bool) -> &'static str {
    if positive { INCOME_COLOR } else { EXPENSE_COLOR }
}
