//! Account service calls.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::http::ApiClient;
use super::types::{Account, AccountResponse};

pub(crate) const ACCOUNTS_PATH: &str = "/account";

/// Fetch the signed-in user's accounts via `GET /account`.
///
/// An empty list is a valid answer, not an error.
///
/// # Errors
///
/// Returns an error if the request fails, the service answers with a
/// non-success status, or the body does not decode.
pub async fn fetch_accounts(client: &ApiClient) -> Result<Vec<Account>, ApiError> {
    let resp: AccountResponse = client.get_json(ACCOUNTS_PATH).await?;
    Ok(resp.into_accounts())
}
