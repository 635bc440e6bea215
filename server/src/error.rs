//! Proxy error type and its HTTP rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

/// Failures while forwarding a request to the commerce backend.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The forwarded path tries to climb out of the admin API prefix.
    #[error("invalid admin path: {0}")]
    InvalidPath(String),

    /// The backend could not be reached or did not answer in time.
    #[error("backend request failed: {0}")]
    Transport(String),

    /// The backend answered but its body could not be read.
    #[error("backend response body read failed: {0}")]
    ResponseBody(String),
}

impl ProxyError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPath(_) => "E_INVALID_PATH",
            Self::Transport(_) => "E_BACKEND_UNREACHABLE",
            Self::ResponseBody(_) => "E_BACKEND_BODY",
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Self::Transport(_) | Self::ResponseBody(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, code = self.error_code(), "backend proxy failure");
        let body = json!({
            "success": false,
            "error": { "code": self.error_code(), "message": self.to_string() },
        });
        (self.status(), Json(body)).into_response()
    }
}
