//! Authenticated JSON client for the account service.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: requests fail with [`ApiError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Every failure is normalized into an [`ApiError`]. A 401 means the stored
//! token is dead: it is cleared and the host is sent to the auth route before
//! the error reaches the caller.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::routes;
use crate::state::session::Session;

/// HTTP wrapper bound to a base URL and the current session.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            session,
        }
    }

    /// Absolute URL for a service `path` (leading `/` optional).
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// `Authorization` header value for the stored token, if any.
    pub fn authorization(&self) -> Option<String> {
        self.session.token().map(|t| format!("Bearer {t}"))
    }

    /// Turn a non-success response into an error, invalidating the session on 401.
    pub fn reject(&self, status: u16, body: &str) -> ApiError {
        let err = ApiError::from_status(status, body.trim());
        if err.is_unauthorized() {
            log::warn!("session token rejected, redirecting to {}", routes::AUTH);
            self.session.clear_token();
        }
        err
    }

    /// `GET path` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a body
    /// that does not decode as `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = self.endpoint(path);
            let mut request =
                gloo_net::http::Request::get(&url).header("Content-Type", "application/json");
            if let Some(auth) = self.authorization() {
                request = request.header("Authorization", &auth);
            }
            let resp = request
                .send()
                .await
                .map_err(|e| ApiError::transport(e.to_string()))?;
            if !resp.ok() {
                let status = resp.status();
                let body = match resp.text().await {
                    Ok(text) if !text.trim().is_empty() => text,
                    _ => resp.status_text(),
                };
                let err = self.reject(status, &body);
                if err.is_unauthorized() {
                    crate::util::nav::navigate_to_url(routes::AUTH);
                }
                return Err(err);
            }
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }
}
