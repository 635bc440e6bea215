//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use storefront_admin_ui::app::ClientConfig;
use storefront_admin_ui::net::api::CommentQueryMode;
use storefront_admin_ui::util::locale::Locale;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;

/// Errors produced while reading host configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set to a value that cannot be used.
    #[error("invalid {var}: {value:?} ({reason})")]
    Invalid { var: &'static str, value: String, reason: &'static str },

    /// The outbound HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    pub port: u16,
    pub backend_url: String,
    pub backend_timeout_secs: u64,
    pub comment_query_mode: CommentQueryMode,
    pub locale: Locale,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            backend_timeout_secs: DEFAULT_BACKEND_TIMEOUT_SECS,
            comment_query_mode: CommentQueryMode::default(),
            locale: Locale::default(),
        }
    }
}

impl AdminConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: default `http://127.0.0.1:8000`, trailing `/` trimmed
    /// - `BACKEND_TIMEOUT_SECS`: default 30, must be positive
    /// - `COMMENT_QUERY_MODE`: `approval_flag` (default) or `status`
    /// - `ADMIN_LOCALE`: `en` (default) or `fa`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AdminConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                value: raw,
                reason: "expected a port number",
            })?,
            None => DEFAULT_PORT,
        };

        let backend_url = parse_backend_url(lookup("BACKEND_URL"))?;

        let backend_timeout_secs = match lookup("BACKEND_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "BACKEND_TIMEOUT_SECS",
                        value: raw,
                        reason: "expected a positive number of seconds",
                    });
                }
            },
            None => DEFAULT_BACKEND_TIMEOUT_SECS,
        };

        let comment_query_mode = match lookup("COMMENT_QUERY_MODE") {
            Some(raw) => CommentQueryMode::parse(&raw).ok_or(ConfigError::Invalid {
                var: "COMMENT_QUERY_MODE",
                value: raw,
                reason: "expected 'approval_flag' or 'status'",
            })?,
            None => CommentQueryMode::default(),
        };

        let locale = match lookup("ADMIN_LOCALE") {
            Some(raw) => parse_locale(&raw).ok_or(ConfigError::Invalid {
                var: "ADMIN_LOCALE",
                value: raw,
                reason: "expected 'en' or 'fa'",
            })?,
            None => Locale::default(),
        };

        Ok(Self { port, backend_url, backend_timeout_secs, comment_query_mode, locale })
    }

    /// The subset of settings rendered into the page for the browser.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig { query_mode: self.comment_query_mode, locale: self.locale }
    }
}

fn parse_backend_url(raw: Option<String>) -> Result<String, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_BACKEND_URL.to_string());
    };
    let trimmed = raw.trim().trim_end_matches('/');
    let has_scheme = trimmed.starts_with("http://") || trimmed.starts_with("https://");
    let has_host = trimmed.split_once("://").is_some_and(|(_, rest)| !rest.is_empty());
    if !has_scheme || !has_host {
        return Err(ConfigError::Invalid {
            var: "BACKEND_URL",
            value: raw,
            reason: "expected an http:// or https:// URL",
        });
    }
    Ok(trimmed.to_string())
}

fn parse_locale(raw: &str) -> Option<Locale> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "en" => Some(Locale::En),
        "fa" => Some(Locale::Fa),
        _ => None,
    }
}
