//! Top navigation bar linking the four app routes.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;

const NAV_LINKS: [(&str, &str); 4] = [
    ("/", "Dashboard"),
    ("/transactions", "Transactions"),
    ("/categories", "Categories"),
    ("/analytics", "Analytics"),
];

/// Fixed top bar with the brand title and one link per page.
#[component]
pub fn Navigation() -> impl IntoView {
    view! {
        <nav class="nav">
            <span class="nav__brand">"Finance Tracker"</span>
            <div class="nav__links">
                {NAV_LINKS
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <a class="nav__link" href=href>
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </nav>
    }
}
