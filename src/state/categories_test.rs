use super::*;

#[test]
fn categories_state_defaults() {
    let s = CategoriesState::default();
    assert!(s.items.is_empty());
    assert!(!s.loading);
}

#[test]
fn chip_class_maps_income_and_expense() {
    assert_eq!(chip_class(CategoryType::Income), "chip chip--income");
    assert_eq!(chip_class(CategoryType::Expense), "chip chip--expense");
}

#[test]
fn empty_form_defaults_to_expense() {
    let form = CategoryForm::default();
    assert!(form.name.is_empty());
    assert_eq!(form.kind, CategoryType::Expense);
}

#[test]
fn form_from_category_mirrors_fields() {
    let category = Category { id: 1, name: "Salary".to_owned(), kind: CategoryType::Income };
    let form = CategoryForm::from_category(&category);
    assert_eq!(form.name, "Salary");
    assert_eq!(form.kind, CategoryType::Income);
}

#[test]
fn payload_trims_name_and_carries_type() {
    let form = CategoryForm { name: "  Food  ".to_owned(), kind: CategoryType::Expense };
    let payload = form.payload().unwrap();
    assert_eq!(payload["name"], "Food");
    assert_eq!(payload["type"], "expense");
}

#[test]
fn payload_rejects_blank_name() {
    let form = CategoryForm { name: "   ".to_owned(), kind: CategoryType::Income };
    assert_eq!(form.payload(), Err("Enter a name."));
}
