use super::*;

#[test]
fn analytics_state_starts_loading_with_no_data() {
    let s = AnalyticsState::default();
    assert!(s.loading);
    assert!(s.balance.is_none());
    assert!(s.distribution.is_empty());
    assert!(s.trends.is_none());
}

#[test]
fn time_range_defaults_to_thirty_days() {
    assert_eq!(TimeRange::default(), TimeRange::Month);
    assert_eq!(TimeRange::default().days(), 30);
}

#[test]
fn time_range_values_and_labels() {
    assert_eq!(TimeRange::Week.value(), "7");
    assert_eq!(TimeRange::Week.label(), "Last 7 days");
    assert_eq!(TimeRange::Month.label(), "Last 30 days");
    assert_eq!(TimeRange::Quarter.label(), "Last 90 days");
    assert_eq!(TimeRange::Year.label(), "Last year");
    assert_eq!(TimeRange::Year.days(), 365);
}

#[test]
fn time_range_round_trips_through_select_values() {
    for range in TimeRange::ALL {
        assert_eq!(TimeRange::from_value(range.value()), range);
    }
}

#[test]
fn time_range_falls_back_to_default_on_unknown_value() {
    assert_eq!(TimeRange::from_value("14"), TimeRange::Month);
    assert_eq!(TimeRange::from_value(""), TimeRange::Month);
}
