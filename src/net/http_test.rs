use super::*;
use crate::util::broadcast::Broadcast;
use crate::util::storage::{KeyValueStore, MemoryStore};
use std::sync::Arc;

fn client_with(store: &MemoryStore, base: &str) -> ApiClient {
    ApiClient::new(base, Session::new(Arc::new(store.clone()), Broadcast::new()))
}

#[test]
fn endpoint_joins_base_and_path() {
    let client = client_with(&MemoryStore::new(), "http://localhost:8080/");
    assert_eq!(client.endpoint("/account"), "http://localhost:8080/account");
    assert_eq!(client.endpoint("account"), "http://localhost:8080/account");
}

#[test]
fn authorization_uses_bearer_token() {
    let store = MemoryStore::with_entries([("token", "abc.def")]);
    let client = client_with(&store, "http://localhost:8080");
    assert_eq!(client.authorization(), Some("Bearer abc.def".to_owned()));
}

#[test]
fn authorization_absent_without_token() {
    let client = client_with(&MemoryStore::new(), "http://localhost:8080");
    assert_eq!(client.authorization(), None);
}

#[test]
fn reject_401_clears_token() {
    let store = MemoryStore::with_entries([("token", "stale"), ("accountId", "acc-1")]);
    let client = client_with(&store, "http://localhost:8080");

    let err = client.reject(401, "Unauthorized\n");

    assert_eq!(err, ApiError::Unauthorized { body: "Unauthorized".into() });
    assert_eq!(client.authorization(), None);
    assert_eq!(store.get("accountId").unwrap(), Some("acc-1".to_owned()));
}

#[test]
fn reject_other_status_keeps_token() {
    let store = MemoryStore::with_entries([("token", "live")]);
    let client = client_with(&store, "http://localhost:8080");

    let err = client.reject(503, "Service Unavailable");

    assert_eq!(err.status(), Some(503));
    assert_eq!(client.authorization(), Some("Bearer live".to_owned()));
}

#[cfg(not(feature = "csr"))]
#[test]
fn get_json_is_unavailable_outside_browser() {
    let client = client_with(&MemoryStore::new(), "http://localhost:8080");
    let result = futures::executor::block_on(client.get_json::<serde_json::Value>("/account"));
    assert_eq!(result, Err(ApiError::Unavailable));
}
