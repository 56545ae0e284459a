//! Error banner with a retry action.

use leptos::prelude::*;

use crate::messages;

#[component]
pub fn ErrorMessage(#[prop(into)] message: Signal<String>, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="drawer__error" role="alert" aria-live="polite">
            <p class="drawer__error-message">{move || message.get()}</p>
            <button class="drawer__retry" on:click=move |_| on_retry.run(()) aria-label=messages::RETRY>
                {messages::RETRY}
            </button>
        </div>
    }
}
