use super::*;
use crate::state::accounts::AccountsStatus;
use crate::state::session::ACCOUNT_ID_KEY;
use crate::util::broadcast::{Broadcast, DrawerSignal};
use crate::util::storage::{KeyValueStore, MemoryStore};
use std::sync::{Arc, Mutex};

fn session_with(store: &MemoryStore) -> Session {
    Session::new(Arc::new(store.clone()), Broadcast::new())
}

fn record_selections(session: &Session) -> Arc<Mutex<Vec<String>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    session.bus().subscribe(move |signal| {
        if let DrawerSignal::AccountSelected { account_id } = signal {
            sink.lock().unwrap().push(account_id.clone());
        }
    });
    seen
}

#[test]
fn native_load_settles_as_failed() {
    let owner = Owner::new();
    owner.with(|| {
        let store = MemoryStore::new();
        let session = session_with(&store);
        let client = ApiClient::new("http://localhost:8080", session.clone());

        let accounts = use_accounts(session, client);

        let state = accounts.state.get_untracked();
        assert_eq!(state.status, AccountsStatus::Failed);
        assert!(state.show_error());
        assert_eq!(state.selected_account_id, None);
    });
}

#[test]
fn failed_load_keeps_stored_selection() {
    let owner = Owner::new();
    owner.with(|| {
        let store = MemoryStore::with_entries([(ACCOUNT_ID_KEY, "acc-7")]);
        let session = session_with(&store);
        let client = ApiClient::new("http://localhost:8080", session.clone());

        let accounts = use_accounts(session, client);

        assert_eq!(
            accounts.state.with_untracked(|s| s.selected_account_id.clone()),
            Some("acc-7".to_owned())
        );
    });
}

#[test]
fn select_persists_and_announces_once_per_change() {
    let owner = Owner::new();
    owner.with(|| {
        let store = MemoryStore::new();
        let session = session_with(&store);
        let seen = record_selections(&session);
        let client = ApiClient::new("http://localhost:8080", session.clone());
        let accounts = use_accounts(session, client);

        accounts.select.run("acc-1".to_owned());
        accounts.select.run("acc-1".to_owned());
        accounts.select.run("acc-2".to_owned());

        assert_eq!(*seen.lock().unwrap(), vec!["acc-1".to_owned(), "acc-2".to_owned()]);
        assert_eq!(store.get(ACCOUNT_ID_KEY).unwrap(), Some("acc-2".to_owned()));
        assert_eq!(
            accounts.state.with_untracked(|s| s.selected_account_id.clone()),
            Some("acc-2".to_owned())
        );
    });
}

#[test]
fn retry_starts_a_new_load() {
    let owner = Owner::new();
    owner.with(|| {
        let store = MemoryStore::new();
        let session = session_with(&store);
        let client = ApiClient::new("http://localhost:8080", session.clone());
        let accounts = use_accounts(session, client);
        let first = accounts.state.with_untracked(|s| s.load_seq);

        accounts.retry.run(());

        assert_eq!(accounts.state.with_untracked(|s| s.load_seq), first + 1);
        assert_eq!(accounts.state.with_untracked(|s| s.status), AccountsStatus::Failed);
    });
}
