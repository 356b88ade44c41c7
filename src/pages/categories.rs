//! Categories page: list with type chips, add/edit dialog, and delete.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use leptos::prelude::*;

use crate::components::error_alert::ErrorAlert;
use crate::components::spinner::Spinner;
use crate::net::types::{Category, CategoryType};
use crate::state::categories::{CategoriesState, CategoryForm, chip_class};

#[cfg(any(test, feature = "hydrate"))]
fn category_path(id: i64) -> String {
    format!("/categories/{id}")
}

fn dialog_title(editing: Option<i64>) -> &'static str {
    if editing.is_some() { "Edit Category" } else { "Add Category" }
}

fn submit_label(editing: Option<i64>) -> &'static str {
    if editing.is_some() { "Update" } else { "Add" }
}

fn kind_from_value(value: &str) -> CategoryType {
    if value == "income" { CategoryType::Income } else { CategoryType::Expense }
}

/// Categories page — name/type table plus create/update/delete flows, each
/// followed by a full list re-fetch.
#[component]
pub fn CategoriesPage() -> impl IntoView {
    let state = RwSignal::new(CategoriesState::default());
    let error = RwSignal::new(None::<String>);
    let show_dialog = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<i64>);
    let form = RwSignal::new(CategoryForm::default());
    let form_error = RwSignal::new(None::<String>);

    Effect::new(move || {
        load_categories(state, error);
    });

    let open_add = move |_| {
        editing_id.set(None);
        form.set(CategoryForm::default());
        form_error.set(None);
        show_dialog.set(true);
    };

    let open_edit = Callback::new(move |category: Category| {
        editing_id.set(Some(category.id));
        form.set(CategoryForm::from_category(&category));
        form_error.set(None);
        show_dialog.set(true);
    });

    let close_dialog = Callback::new(move |()| {
        show_dialog.set(false);
        editing_id.set(None);
    });

    let submit = Callback::new(move |()| {
        let payload = match form.get_untracked().payload() {
            Ok(payload) => payload,
            Err(message) => {
                form_error.set(Some(message.to_owned()));
                return;
            }
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match editing_id.get_untracked() {
                Some(id) => crate::net::api::put::<Category>(&category_path(id), &payload)
                    .await
                    .map(|_| ()),
                None => crate::net::api::post::<Category>("/categories", &payload)
                    .await
                    .map(|_| ()),
            };
            match result {
                Ok(()) => {
                    show_dialog.set(false);
                    editing_id.set(None);
                    load_categories(state, error);
                }
                Err(err) => form_error.set(Some(err.into_message())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    });

    let on_delete = Callback::new(move |id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete(&category_path(id)).await {
                Ok(()) => load_categories(state, error),
                Err(err) => error.set(Some(err.into_message())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="categories-page">
            <ErrorAlert error=error/>
            <header class="page-header">
                <h1 class="page-header__title">"Categories"</h1>
                <button class="btn btn--primary" on:click=open_add>
                    "Add Category"
                </button>
            </header>
            <Show when=move || !state.get().loading fallback=move || view! { <Spinner/> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Type"</th>
                            <th class="data-table__num">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            state
                                .get()
                                .items
                                .iter()
                                .map(|category| {
                                    let edit_row = category.clone();
                                    let delete_id = category.id;
                                    view! {
                                        <tr>
                                            <td>{category.name.clone()}</td>
                                            <td>
                                                <span class=chip_class(category.kind)>
                                                    {category.kind.as_str()}
                                                </span>
                                            </td>
                                            <td class="data-table__num">
                                                <button
                                                    class="btn btn--ghost"
                                                    on:click=move |_| open_edit.run(edit_row.clone())
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--ghost"
                                                    on:click=move |_| on_delete.run(delete_id)
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
            <Show when=move || show_dialog.get()>
                <CategoryDialog
                    form=form
                    form_error=form_error
                    editing_id=editing_id
                    on_cancel=close_dialog
                    on_submit=submit
                />
            </Show>
        </div>
    }
}

/// Modal dialog shared by the add and edit flows.
#[component]
fn CategoryDialog(
    form: RwSignal<CategoryForm>,
    form_error: RwSignal<Option<String>>,
    editing_id: RwSignal<Option<i64>>,
    on_cancel: Callback<()>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || dialog_title(editing_id.get())}</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Type"
                    <select
                        class="dialog__input"
                        on:change=move |ev| {
                            form.update(|f| f.kind = kind_from_value(&event_target_value(&ev)));
                        }
                    >
                        {[CategoryType::Income, CategoryType::Expense]
                            .into_iter()
                            .map(|kind| {
                                view! {
                                    <option
                                        value=kind.as_str()
                                        selected=move || form.get().kind == kind
                                    >
                                        {kind.label()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <Show when=move || form_error.get().is_some()>
                    <p class="dialog__error">{move || form_error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_submit.run(())>
                        {move || submit_label(editing_id.get())}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn load_categories(state: RwSignal<CategoriesState>, error: RwSignal<Option<String>>) {
    state.update(|s| s.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::get::<Vec<Category>>("/categories").await {
            Ok(items) => state.update(|s| {
                s.items = items;
                s.loading = false;
            }),
            Err(err) => {
                error.set(Some(err.into_message()));
                state.update(|s| s.loading = false);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = error;
    }
}
