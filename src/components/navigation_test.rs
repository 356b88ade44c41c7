use super::*;

#[test]
fn nav_links_cover_all_four_routes() {
    let hrefs: Vec<&str> = NAV_LINKS.iter().map(|(href, _)| *href).collect();
    assert_eq!(hrefs, vec!["/", "/transactions", "/categories", "/analytics"]);
}

#[test]
fn nav_links_carry_page_labels() {
    let labels: Vec<&str> = NAV_LINKS.iter().map(|(_, label)| *label).collect();
    assert_eq!(labels, vec!["Dashboard", "Transactions", "Categories", "Analytics"]);
}
