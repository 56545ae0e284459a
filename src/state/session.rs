//! Session context shared by every part of the drawer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Bundles the key-value store and the signal bus behind one cloneable handle,
//! passed to the root component as a prop. The storage key names are a
//! contract with sibling micro-frontends and must not change.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use crate::routes;
use crate::util::broadcast::{Broadcast, DrawerSignal};
use crate::util::nav;
use crate::util::storage::{self, KeyValueStore};

/// Storage key for the selected account id.
pub const ACCOUNT_ID_KEY: &str = "accountId";
/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the greeting name.
pub const USER_NAME_KEY: &str = "userName";

/// Storage + bus handle for the signed-in browser session.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn KeyValueStore>,
    bus: Broadcast,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("bus", &self.bus).finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(store: Arc<dyn KeyValueStore>, bus: Broadcast) -> Self {
        Self { store, bus }
    }

    pub fn bus(&self) -> &Broadcast {
        &self.bus
    }

    pub fn account_id(&self) -> Option<String> {
        storage::read(self.store.as_ref(), ACCOUNT_ID_KEY)
    }

    /// Persist `account_id` without announcing it. Returns whether it was stored.
    pub fn store_account_id(&self, account_id: &str) -> bool {
        storage::write(self.store.as_ref(), ACCOUNT_ID_KEY, account_id)
    }

    /// Announce a persisted selection to the rest of the page.
    pub fn announce_account(&self, account_id: &str) {
        self.bus.publish(DrawerSignal::AccountSelected {
            account_id: account_id.to_owned(),
        });
    }

    /// Persist `account_id` and, once stored, announce it.
    pub fn select_account(&self, account_id: &str) -> bool {
        let stored = self.store_account_id(account_id);
        if stored {
            self.announce_account(account_id);
        }
        stored
    }

    /// Bearer token, ignoring blank values.
    pub fn token(&self) -> Option<String> {
        storage::read(self.store.as_ref(), TOKEN_KEY).filter(|t| !t.trim().is_empty())
    }

    pub fn clear_token(&self) -> bool {
        storage::remove(self.store.as_ref(), TOKEN_KEY)
    }

    pub fn user_name(&self) -> Option<String> {
        storage::read(self.store.as_ref(), USER_NAME_KEY)
    }

    /// Wipe all persisted state, including keys owned by sibling apps.
    pub fn clear_all(&self) -> bool {
        storage::clear(self.store.as_ref())
    }

    /// Sign out: wipe storage and send the host to the auth route.
    ///
    /// Navigates even when the wipe fails. Returns the route navigated to.
    pub fn logout(&self) -> &'static str {
        if !self.clear_all() {
            log::warn!("logout could not clear storage");
        }
        nav::navigate_to_url(routes::AUTH);
        routes::AUTH
    }
}
