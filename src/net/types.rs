//! Wire DTOs for the account service.
//!
//! DESIGN
//! ======
//! Field names mirror the service's camelCase JSON so serde stays lossless.
//! `transactions` and `cards` ride along in the same payload but the drawer
//! never reads them, so they stay untyped.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A bank account belonging to the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Opaque account identifier.
    pub id: String,
    /// Account type label shown in the dropdown (e.g. `"Conta Corrente"`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Owner of the account.
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Envelope returned by `GET /account`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AccountResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub result: AccountResult,
}

/// `result` payload of [`AccountResponse`].
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AccountResult {
    #[serde(default)]
    pub account: Option<Vec<Account>>,
    #[serde(default)]
    pub transactions: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub cards: Option<Vec<serde_json::Value>>,
}

impl AccountResponse {
    /// Accounts in service order; a missing or `null` list is empty.
    pub fn into_accounts(self) -> Vec<Account> {
        self.result.account.unwrap_or_default()
    }
}
