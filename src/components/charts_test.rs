use super::*;

#[test]
fn income_expense_series_carries_both_series_in_order() {
    let trends = MonthlyTrends {
        months: vec!["2024-01".to_owned(), "2024-02".to_owned()],
        income: vec![1000.0, 1200.0],
        expenses: vec![400.0, 900.0],
    };
    let series = income_expense_series(&trends);
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].label, "Income");
    assert_eq!(series[0].color, INCOME_COLOR);
    assert_eq!(series[0].values, vec![1000.0, 1200.0]);
    assert_eq!(series[1].label, "Expenses");
    assert_eq!(series[1].color, EXPENSE_COLOR);
    assert_eq!(series[1].values, vec![400.0, 900.0]);
}

#[test]
fn income_expense_series_of_empty_trends_has_empty_values() {
    let series = income_expense_series(&MonthlyTrends::default());
    assert!(series[0].values.is_empty());
    assert!(series[1].values.is_empty());
}

#[test]
fn distribution_entries_preserve_order_and_amounts() {
    let slices = vec![
        CategorySlice { category: "Food".to_owned(), amount: 120.5 },
        CategorySlice { category: "Rent".to_owned(), amount: 800.0 },
    ];
    let entries = distribution_entries(&slices);
    assert_eq!(entries, vec![("Food".to_owned(), 120.5), ("Rent".to_owned(), 800.0)]);
}
