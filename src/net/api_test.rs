use super::*;
use crate::state::session::Session;
use crate::util::broadcast::Broadcast;
use crate::util::storage::MemoryStore;
use std::sync::Arc;

fn client() -> ApiClient {
    ApiClient::new(
        "http://localhost:8080",
        Session::new(Arc::new(MemoryStore::new()), Broadcast::new()),
    )
}

#[test]
fn accounts_endpoint_formats_expected_url() {
    assert_eq!(client().endpoint(ACCOUNTS_PATH), "http://localhost:8080/account");
}

#[cfg(not(feature = "csr"))]
#[test]
fn fetch_accounts_surfaces_client_error() {
    let result = futures::executor::block_on(fetch_accounts(&client()));
    assert_eq!(result, Err(ApiError::Unavailable));
}
