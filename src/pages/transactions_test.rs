use super::*;

#[test]
fn transaction_path_formats_item_endpoint() {
    assert_eq!(transaction_path(7), "/transactions/7");
}

#[test]
fn dialog_title_depends_on_edit_state() {
    assert_eq!(dialog_title(None), "Add Transaction");
    assert_eq!(dialog_title(Some(7)), "Edit Transaction");
}

#[test]
fn submit_label_depends_on_edit_state() {
    assert_eq!(submit_label(None), "Add");
    assert_eq!(submit_label(Some(7)), "Update");
}
