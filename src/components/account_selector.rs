//! Account dropdown.
//!
//! Renders nothing when there are no accounts; the drawer shows an empty-state
//! notice instead.

#[cfg(test)]
#[path = "account_selector_test.rs"]
mod account_selector_test;

use leptos::prelude::*;

use crate::messages;
use crate::net::types::Account;
use crate::state::accounts::AccountsState;
use crate::util::format::account_label;

/// Dropdown over the loaded accounts; emits the chosen id.
#[component]
pub fn AccountSelector(accounts: RwSignal<AccountsState>, on_change: Callback<String>) -> impl IntoView {
    let has_accounts = move || !accounts.with(|s| s.accounts.is_empty());
    let placeholder = move || accounts.with(selected_label);

    view! {
        <Show when=has_accounts>
            <div class="account-select">
                <select
                    class="account-select__input"
                    aria-label=messages::ACCOUNT_SELECT_LABEL
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        if !value.is_empty() {
                            on_change.run(value);
                        }
                    }
                >
                    <option value="" disabled=true selected=move || accounts.with(|s| s.selected_account().is_none())>
                        {placeholder}
                    </option>
                    {move || {
                        let state = accounts.get();
                        let selected = state.selected_account_id.clone();
                        state
                            .accounts
                            .into_iter()
                            .map(|account| {
                                let is_selected = selected.as_deref() == Some(account.id.as_str());
                                let label = option_label(&account);
                                view! {
                                    <option value=account.id selected=is_selected>
                                        {label}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
        </Show>
    }
}

fn option_label(account: &Account) -> String {
    account_label(&account.kind, &account.id)
}

/// Placeholder text: the selected account's label, falling back to the first
/// account, or a prompt when nothing can be shown.
fn selected_label(state: &AccountsState) -> String {
    if state.selected_account_id.is_none() {
        return messages::SELECT_ACCOUNT.to_owned();
    }
    state
        .selected_account()
        .or_else(|| state.accounts.first())
        .map_or_else(|| messages::SELECT_ACCOUNT.to_owned(), option_label)
}
