use super::*;

fn entries(pairs: &[(&str, f64)]) -> Vec<(String, f64)> {
    pairs.iter().map(|(label, value)| ((*label).to_owned(), *value)).collect()
}

fn rect() -> PlotRect {
    PlotRect { x: 40.0, y: 10.0, width: 100.0, height: 100.0 }
}

#[test]
fn palette_color_wraps_past_the_end() {
    assert_eq!(palette_color(0), "#FF6384");
    assert_eq!(palette_color(5), "#FF9F40");
    assert_eq!(palette_color(6), "#FF6384");
    assert_eq!(palette_color(13), "#36A2EB");
}

#[test]
fn pie_slices_are_proportional_and_contiguous() {
    let slices = pie_slices(&entries(&[("Food", 30.0), ("Rent", 60.0), ("Fun", 10.0)]));
    assert_eq!(slices.len(), 3);
    assert!((slices[0].end_turn - 0.3).abs() < 1e-9);
    assert!((slices[1].start_turn - 0.3).abs() < 1e-9);
    assert!((slices[1].end_turn - 0.9).abs() < 1e-9);
    assert!((slices[2].end_turn - 1.0).abs() < 1e-9);
    assert_eq!(slices[0].color, "#FF6384");
    assert_eq!(slices[1].color, "#36A2EB");
}

#[test]
fn pie_slices_skip_non_positive_values() {
    let slices = pie_slices(&entries(&[("Refund", -5.0), ("Food", 10.0), ("Zero", 0.0)]));
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].label, "Food");
    assert!((slices[0].start_turn).abs() < 1e-9);
    assert!((slices[0].end_turn - 1.0).abs() < 1e-9);
}

#[test]
fn pie_slices_of_empty_or_zero_total_are_empty() {
    assert!(pie_slices(&[]).is_empty());
    assert!(pie_slices(&entries(&[("A", 0.0), ("B", -1.0)])).is_empty());
}

#[test]
fn arc_path_draws_wedges_from_center() {
    let path = arc_path(120.0, 120.0, 100.0, 0.0, 0.25);
    assert!(path.starts_with("M 120.00 120.00 L 120.00 20.00 "));
    assert!(path.contains("A 100.00 100.00 0 0 1 220.00 120.00"));
    assert!(path.ends_with('Z'));
}

#[test]
fn arc_path_uses_large_arc_flag_past_half_turn() {
    let path = arc_path(120.0, 120.0, 100.0, 0.0, 0.75);
    assert!(path.contains(" 0 1 1 "));
}

#[test]
fn arc_path_renders_a_full_disc_for_a_single_slice() {
    let path = arc_path(120.0, 120.0, 100.0, 0.0, 1.0);
    assert!(path.starts_with("M 120.00 20.00 A"));
    assert!(path.contains("120.00 220.00"));
    assert!(path.ends_with('Z'));
}

#[test]
fn nice_upper_bound_climbs_the_1_2_5_ladder() {
    assert!((nice_upper_bound(7.3) - 10.0).abs() < 1e-9);
    assert!((nice_upper_bound(12.0) - 20.0).abs() < 1e-9);
    assert!((nice_upper_bound(43.0) - 50.0).abs() < 1e-9);
    assert!((nice_upper_bound(85.0) - 100.0).abs() < 1e-9);
    assert!((nice_upper_bound(100.0) - 100.0).abs() < 1e-9);
    assert!((nice_upper_bound(430.0) - 500.0).abs() < 1e-9);
}

#[test]
fn nice_upper_bound_of_degenerate_input_is_one() {
    assert!((nice_upper_bound(0.0) - 1.0).abs() < 1e-9);
    assert!((nice_upper_bound(-3.0) - 1.0).abs() < 1e-9);
    assert!((nice_upper_bound(f64::NAN) - 1.0).abs() < 1e-9);
}

#[test]
fn series_max_spans_all_series() {
    let series = vec![
        LineSeries {
            label: "Income".to_owned(),
            color: INCOME_COLOR,
            fill: INCOME_FILL,
            values: vec![100.0, 250.0],
        },
        LineSeries {
            label: "Expenses".to_owned(),
            color: EXPENSE_COLOR,
            fill: EXPENSE_FILL,
            values: vec![400.0, 50.0],
        },
    ];
    assert!((series_max(&series) - 400.0).abs() < 1e-9);
    assert!((series_max(&[])).abs() < 1e-9);
}

#[test]
fn x_position_spaces_points_evenly() {
    let r = rect();
    assert!((x_position(0, 3, r) - 40.0).abs() < 1e-9);
    assert!((x_position(1, 3, r) - 90.0).abs() < 1e-9);
    assert!((x_position(2, 3, r) - 140.0).abs() < 1e-9);
}

#[test]
fn x_position_centers_a_single_point() {
    assert!((x_position(0, 1, rect()) - 90.0).abs() < 1e-9);
}

#[test]
fn y_position_maps_zero_to_bottom_and_max_to_top() {
    let r = rect();
    assert!((y_position(0.0, 200.0, r) - 110.0).abs() < 1e-9);
    assert!((y_position(200.0, 200.0, r) - 10.0).abs() < 1e-9);
    assert!((y_position(50.0, 200.0, r) - 85.0).abs() < 1e-9);
}

#[test]
fn y_position_clamps_out_of_range_values() {
    let r = rect();
    assert!((y_position(-10.0, 200.0, r) - 110.0).abs() < 1e-9);
    assert!((y_position(900.0, 200.0, r) - 10.0).abs() < 1e-9);
    assert!((y_position(5.0, 0.0, r) - 110.0).abs() < 1e-9);
}

#[test]
fn polyline_points_renders_pairs() {
    let points = polyline_points(&[0.0, 200.0], 200.0, rect());
    assert_eq!(points, "40.00,110.00 140.00,10.00");
}

#[test]
fn area_path_closes_down_to_the_baseline() {
    let path = area_path(&[0.0, 200.0], 200.0, rect());
    assert!(path.starts_with("M 40.00 110.00 L 140.00 10.00 "));
    assert!(path.ends_with("L 140.00 110.00 L 40.00 110.00 Z"));
    assert_eq!(area_path(&[], 200.0, rect()), "");
}

#[test]
fn axis_ticks_run_from_zero_to_max() {
    let ticks = axis_ticks(100.0, 4);
    assert_eq!(ticks, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    assert_eq!(axis_ticks(0.0, 4), vec![0.0]);
    assert_eq!(axis_ticks(100.0, 0), vec![0.0]);
}

#[test]
fn format_tick_drops_decimals_for_whole_numbers() {
    assert_eq!(format_tick(25.0), "25");
    assert_eq!(format_tick(12.5), "12.50");
    assert_eq!(format_tick(0.0), "0");
}

#[test]
fn signed_bars_split_around_the_midline() {
    let bars = signed_bars(&[100.0, -50.0], rect());
    assert_eq!(bars.len(), 2);
    // limit = nice_upper_bound(100) = 100, midline y = 60, half = 50
    assert!(bars[0].positive);
    assert!((bars[0].height - 50.0).abs() < 1e-9);
    assert!((bars[0].y - 10.0).abs() < 1e-9);
    assert!(!bars[1].positive);
    assert!((bars[1].height - 25.0).abs() < 1e-9);
    assert!((bars[1].y - 60.0).abs() < 1e-9);
}

#[test]
fn signed_bars_center_within_their_slots() {
    let bars = signed_bars(&[10.0, 20.0], rect());
    // slot = 50, bar width = 30, gap = 10 each side
    assert!((bars[0].width - 30.0).abs() < 1e-9);
    assert!((bars[0].x - 50.0).abs() < 1e-9);
    assert!((bars[1].x - 100.0).abs() < 1e-9);
}

#[test]
fn signed_bars_of_all_zero_input_are_empty() {
    assert!(signed_bars(&[0.0, 0.0], rect()).is_empty());
    assert!(signed_bars(&[], rect()).is_empty());
}

#[test]
fn bar_color_matches_series_colors() {
    assert_eq!(bar_color(true), INCOME_COLOR);
    assert_eq!(bar_color(false), EXPENSE_COLOR);
}
