//! Failure taxonomy for REST calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why an admin API call did not produce a usable result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (offline, DNS, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("request failed: {0}")]
    Status(u16),
    /// The body did not decode, or the envelope reported `success: false`.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// Called during server-side rendering, where no browser fetch exists.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Short banner text for the UI.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Could not reach the server. Check your connection and try again.".to_owned(),
            Self::Status(401 | 403) => "Your session does not allow this action. Sign in again.".to_owned(),
            Self::Status(404) => "The requested item no longer exists.".to_owned(),
            Self::Status(code) if *code >= 500 => format!("The server failed to handle the request ({code})."),
            Self::Status(code) => format!("The request was refused ({code})."),
            Self::Malformed(_) => "The server sent an unexpected response.".to_owned(),
            Self::Unavailable => "This action is only available in the browser.".to_owned(),
        }
    }
}
