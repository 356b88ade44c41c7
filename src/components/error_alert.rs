//! Dismissible top-of-screen alert for normalized request errors.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
const AUTO_DISMISS: std::time::Duration = std::time::Duration::from_secs(6);

/// Error banner bound to a page's error signal.
///
/// Shows whenever the signal holds a message; dismissed by the close
/// control or automatically after six seconds (browser only). Auto-dismiss
/// leaves a newer message alone.
#[component]
pub fn ErrorAlert(error: RwSignal<Option<String>>) -> impl IntoView {
    Effect::new(move || {
        let Some(current) = error.get() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(AUTO_DISMISS).await;
            if error.get_untracked().as_deref() == Some(current.as_str()) {
                error.set(None);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = current;
    });

    view! {
        <Show when=move || error.get().is_some()>
            <div class="alert alert--error" role="alert">
                <span class="alert__message">{move || error.get().unwrap_or_default()}</span>
                <button class="alert__dismiss" aria-label="Dismiss" on:click=move |_| error.set(None)>
                    "\u{00d7}"
                </button>
            </div>
        </Show>
    }
}
