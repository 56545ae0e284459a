//! Account list and selection state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by `hooks::accounts`, which drives the fetch and calls back into
//! these transitions. Everything here is synchronous so the reconciliation
//! rules can be exercised without a browser.
//!
//! DESIGN
//! ======
//! A failed load never clears a selection: the persisted account keeps the
//! rest of the page navigable while the banner offers a retry. Each load is
//! tagged with a sequence number and results from a superseded load are
//! dropped.

#[cfg(test)]
#[path = "accounts_test.rs"]
mod accounts_test;

use crate::net::error::ApiError;
use crate::net::types::Account;
use crate::state::session::Session;

/// Lifecycle of the account list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccountsStatus {
    #[default]
    Loading,
    /// At least one account loaded.
    Ready,
    /// The service returned no accounts.
    Empty,
    /// The last load failed; `error` holds the message.
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountsState {
    pub accounts: Vec<Account>,
    pub selected_account_id: Option<String>,
    pub status: AccountsStatus,
    pub error: Option<String>,
    /// Sequence number of the most recent load.
    pub load_seq: u64,
}

impl AccountsState {
    /// Enter `Loading` and return the sequence number for this load.
    pub fn begin_load(&mut self) -> u64 {
        self.load_seq += 1;
        self.status = AccountsStatus::Loading;
        self.error = None;
        self.load_seq
    }

    /// Apply a fetch result for load `seq`, persisting any new selection.
    ///
    /// Returns the account id that was selected and persisted, so the caller
    /// can announce it once the state update has finished. Results for a
    /// superseded `seq` are ignored and return `None`.
    pub fn finish_load(
        &mut self,
        seq: u64,
        result: Result<Vec<Account>, ApiError>,
        session: &Session,
    ) -> Option<String> {
        if seq != self.load_seq {
            log::debug!("dropping stale account load {seq} (current {})", self.load_seq);
            return None;
        }
        let stored = session.account_id();
        match result {
            Ok(accounts) => {
                let chosen = pick_account(&accounts, stored.as_deref()).map(str::to_owned);
                self.accounts = accounts;
                self.error = None;
                self.selected_account_id.clone_from(&chosen);
                match chosen {
                    Some(id) => {
                        self.status = AccountsStatus::Ready;
                        session.store_account_id(&id).then_some(id)
                    }
                    None => {
                        self.status = AccountsStatus::Empty;
                        None
                    }
                }
            }
            Err(err) => {
                match err.status() {
                    Some(status) => log::error!("account service answered {status}: {err}"),
                    None => log::error!("failed to load accounts: {err}"),
                }
                self.error = Some(err.to_string());
                self.status = AccountsStatus::Failed;
                if stored.is_some() {
                    self.selected_account_id = stored;
                }
                None
            }
        }
    }

    /// Record a user selection. Returns `false` if it was already selected.
    pub fn select(&mut self, account_id: &str) -> bool {
        if self.selected_account_id.as_deref() == Some(account_id) {
            return false;
        }
        self.selected_account_id = Some(account_id.to_owned());
        true
    }

    pub fn is_loading(&self) -> bool {
        self.status == AccountsStatus::Loading
    }

    /// Whether the error banner replaces the account list.
    pub fn show_error(&self) -> bool {
        self.error.is_some() && self.accounts.is_empty()
    }

    /// Whether the "no accounts" notice is shown.
    pub fn show_empty(&self) -> bool {
        !self.is_loading() && !self.show_error() && self.accounts.is_empty()
    }

    pub fn selected_account(&self) -> Option<&Account> {
        let id = self.selected_account_id.as_deref()?;
        self.accounts.iter().find(|a| a.id == id)
    }
}

/// Choose which account to select: the stored id when it still exists in
/// `accounts`, otherwise the first account.
pub fn pick_account<'a>(accounts: &'a [Account], stored: Option<&str>) -> Option<&'a str> {
    stored
        .and_then(|id| accounts.iter().find(|a| a.id == id))
        .or_else(|| accounts.first())
        .map(|a| a.id.as_str())
}
