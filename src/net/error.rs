//! Typed failures for HTTP calls.
//!
//! Display strings are shown verbatim in the error banner.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

const TRANSPORT_FALLBACK: &str = "Erro ao buscar contas";

/// Errors produced by the HTTP client wrapper.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS).
    #[error("{0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("Erro na requisição: {status} {body}")]
    Status { status: u16, body: String },

    /// The session token was rejected; the user must sign in again.
    #[error("Erro na requisição: 401 {body}")]
    Unauthorized { body: String },

    /// The response body did not match the expected schema.
    #[error("Resposta inválida do servidor: {0}")]
    Decode(String),

    /// HTTP is only available in browser builds.
    #[error("Requisição indisponível fora do navegador")]
    Unavailable,
}

impl ApiError {
    /// Wrap a transport failure, falling back to a generic message when the
    /// browser gives none.
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Transport(TRANSPORT_FALLBACK.to_owned())
        } else {
            Self::Transport(message)
        }
    }

    /// Classify a non-success response.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        if status == 401 {
            Self::Unauthorized { body }
        } else {
            Self::Status { status, body }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// HTTP status, when the failure came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Unauthorized { .. } => Some(401),
            Self::Transport(_) | Self::Decode(_) | Self::Unavailable => None,
        }
    }
}
