//! Transactions page: list, add/edit dialog, and delete actions.

#[cfg(test)]
#[path = "transactions_test.rs"]
mod transactions_test;

use leptos::prelude::*;

use crate::components::error_alert::ErrorAlert;
use crate::components::spinner::Spinner;
use crate::net::types::Transaction;
use crate::state::transactions::{TransactionForm, TransactionsState, category_name};
use crate::util::currency;
use crate::util::dates;

#[cfg(any(test, feature = "hydrate"))]
fn transaction_path(id: i64) -> String {
    format!("/transactions/{id}")
}

fn dialog_title(editing: Option<i64>) -> &'static str {
    if editing.is_some() { "Edit Transaction" } else { "Add Transaction" }
}

fn submit_label(editing: Option<i64>) -> &'static str {
    if editing.is_some() { "Update" } else { "Add" }
}

/// Transactions page — table of rows plus create/update/delete flows, each
/// followed by a full list re-fetch.
#[component]
pub fn TransactionsPage() -> impl IntoView {
    let state = RwSignal::new(TransactionsState::default());
    let error = RwSignal::new(None::<String>);
    let show_dialog = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<i64>);
    let form = RwSignal::new(TransactionForm::default());
    let form_error = RwSignal::new(None::<String>);

    Effect::new(move || {
        load_transactions(state, error);
        load_categories(state, error);
    });

    let open_add = move |_| {
        editing_id.set(None);
        form.set(TransactionForm::empty(&dates::today()));
        form_error.set(None);
        show_dialog.set(true);
    };

    let open_edit = Callback::new(move |tx: Transaction| {
        editing_id.set(Some(tx.id));
        form.set(TransactionForm::from_transaction(&tx));
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
                Some(id) => crate::net::api::put::<Transaction>(&transaction_path(id), &payload)
                    .await
                    .map(|_| ()),
                None => crate::net::api::post::<Transaction>("/transactions", &payload)
                    .await
                    .map(|_| ()),
            };
            match result {
                Ok(()) => {
                    show_dialog.set(false);
                    editing_id.set(None);
                    load_transactions(state, error);
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
            match crate::net::api::delete(&transaction_path(id)).await {
                Ok(()) => load_transactions(state, error),
                Err(err) => error.set(Some(err.into_message())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="transactions-page">
            <ErrorAlert error=error/>
            <header class="page-header">
                <h1 class="page-header__title">"Transactions"</h1>
                <button class="btn btn--primary" on:click=open_add>
                    "Add Transaction"
                </button>
            </header>
            <Show when=move || !state.get().loading fallback=move || view! { <Spinner/> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Category"</th>
                            <th>"Description"</th>
                            <th class="data-table__num">"Amount"</th>
                            <th class="data-table__num">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let s = state.get();
                            s.items
                                .iter()
                                .map(|tx| {
                                    let edit_row = tx.clone();
                                    let delete_id = tx.id;
                                    view! {
                                        <tr>
                                            <td>{dates::display_date(&tx.date).to_owned()}</td>
                                            <td>{category_name(tx, &s.categories).to_owned()}</td>
                                            <td>{tx.description.clone()}</td>
                                            <td class="data-table__num">
                                                {currency::format_amount(tx.amount)}
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
                <TransactionDialog
                    form=form
                    form_error=form_error
                    editing_id=editing_id
                    state=state
                    on_cancel=close_dialog
                    on_submit=submit
                />
            </Show>
        </div>
    }
}

/// Modal dialog shared by the add and edit flows.
#[component]
fn TransactionDialog(
    form: RwSignal<TransactionForm>,
    form_error: RwSignal<Option<String>>,
    editing_id: RwSignal<Option<i64>>,
    state: RwSignal<TransactionsState>,
    on_cancel: Callback<()>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || dialog_title(editing_id.get())}</h2>
                <label class="dialog__label">
                    "Amount"
                    <input
                        class="dialog__input"
                        type="number"
                        step="0.01"
                        prop:value=move || form.get().amount
                        on:input=move |ev| form.update(|f| f.amount = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.get().description
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Date"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || form.get().date
                        on:input=move |ev| form.update(|f| f.date = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Category"
                    <select
                        class="dialog__input"
                        on:change=move |ev| {
                            form.update(|f| f.category_id = event_target_value(&ev));
                        }
                    >
                        <option value="" selected=move || form.get().category_id.is_empty()>
                            "Select a category"
                        </option>
                        {move || {
                            state
                                .get()
                                .categories
                                .iter()
                                .map(|category| {
                                    let value = category.id.to_string();
                                    let selected_value = value.clone();
                                    view! {
                                        <option
                                            value=value
                                            selected=move || {
                                                form.get().category_id == selected_value
                                            }
                                        >
                                            {category.name.clone()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
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

fn load_transactions(state: RwSignal<TransactionsState>, error: RwSignal<Option<String>>) {
    state.update(|s| s.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::get::<Vec<Transaction>>("/transactions").await {
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

fn load_categories(state: RwSignal<TransactionsState>, error: RwSignal<Option<String>>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::get::<Vec<crate::net::types::Category>>("/categories").await {
            Ok(categories) => state.update(|s| s.categories = categories),
            Err(err) => error.set(Some(err.into_message())),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, error);
    }
}
