//! Reactive driver for the account list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads accounts once on mount and again on every retry. Transitions live in
//! `state::accounts`; this module only owns the signal and the async fetch.

#[cfg(test)]
#[path = "accounts_test.rs"]
mod accounts_test;

use leptos::prelude::*;

#[cfg(not(feature = "csr"))]
use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::state::accounts::AccountsState;
use crate::state::session::Session;

/// Account state plus the actions components may trigger.
#[derive(Clone, Copy)]
pub struct AccountsHandle {
    pub state: RwSignal<AccountsState>,
    /// Re-run the fetch-and-reconcile sequence.
    pub retry: Callback<()>,
    /// Select an account by id.
    pub select: Callback<String>,
}

/// Create account state and start the initial load.
pub fn use_accounts(session: Session, client: ApiClient) -> AccountsHandle {
    let state = RwSignal::new(AccountsState::default());

    let load_session = session.clone();
    let retry = Callback::new(move |()| {
        let Some(seq) = state.try_update(AccountsState::begin_load) else {
            return;
        };
        #[cfg(feature = "csr")]
        {
            let session = load_session.clone();
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_accounts(&client).await;
                let chosen = state
                    .try_update(|s| s.finish_load(seq, result, &session))
                    .flatten();
                if let Some(account_id) = chosen {
                    session.announce_account(&account_id);
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &client;
            state.try_update(|s| s.finish_load(seq, Err(ApiError::Unavailable), &load_session));
        }
    });

    let select = Callback::new(move |account_id: String| {
        let changed = state.try_update(|s| s.select(&account_id)).unwrap_or(false);
        if changed {
            session.select_account(&account_id);
        }
    });

    retry.run(());

    AccountsHandle { state, retry, select }
}
