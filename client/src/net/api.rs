//! REST API helpers for the admin endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Transport failures, non-2xx
//! statuses and undecodable or `success: false` bodies are kept apart so the
//! UI can tell an empty list from a failed fetch.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{ApprovalStatus, Comment};
#[cfg(any(test, feature = "hydrate"))]
use super::types::Envelope;
#[cfg(feature = "hydrate")]
use super::types::ResultPage;
use crate::state::comments::{CommentFilter, ModerationAction};
use crate::state::product_form::ProductForm;

/// Base path of the comment moderation endpoints.
pub const COMMENTS_ENDPOINT: &str = "/api/admin/comments/";

/// Base path of the product endpoints.
pub const PRODUCTS_ENDPOINT: &str = "/api/admin/products/";

/// How the comment filter is encoded in the list query string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CommentQueryMode {
    /// `is_approved=true|false`. Pending and rejected both send `false`, which
    /// the backend cannot tell apart.
    #[default]
    ApprovalFlag,
    /// `status=pending|approved|rejected`.
    Status,
}

impl CommentQueryMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ApprovalFlag => "approval_flag",
            Self::Status => "status",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "approval_flag" => Some(Self::ApprovalFlag),
            "status" => Some(Self::Status),
            _ => None,
        }
    }
}

/// Query string (without `?`) for a filter, `None` when listing everything.
#[must_use]
pub fn comment_list_query(filter: CommentFilter, mode: CommentQueryMode) -> Option<String> {
    let status = filter.status()?;
    Some(match mode {
        CommentQueryMode::ApprovalFlag => {
            let flag = if status == ApprovalStatus::Approved { "true" } else { "false" };
            format!("is_approved={flag}")
        }
        CommentQueryMode::Status => format!("status={}", status.as_str()),
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn comment_list_endpoint(filter: CommentFilter, mode: CommentQueryMode) -> String {
    match comment_list_query(filter, mode) {
        Some(query) => format!("{COMMENTS_ENDPOINT}?{query}"),
        None => COMMENTS_ENDPOINT.to_owned(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn comment_action_endpoint(comment_id: &str, action: ModerationAction) -> String {
    format!(
        "{COMMENTS_ENDPOINT}{}/{}/",
        encode_path_segment(comment_id),
        action.path_segment()
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn product_endpoint(product_id: &str) -> String {
    format!("{PRODUCTS_ENDPOINT}{}/", encode_path_segment(product_id))
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
#[cfg(any(test, feature = "hydrate"))]
fn encode_path_segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

/// Unwrap the `{ success, data }` envelope.
#[cfg(any(test, feature = "hydrate"))]
fn unwrap_envelope<T>(envelope: Envelope<T>) -> Result<T, ApiError> {
    if envelope.success {
        Ok(envelope.data)
    } else {
        Err(ApiError::Malformed("success: false".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
fn check_status(resp: &gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() { Ok(()) } else { Err(ApiError::Status(resp.status())) }
}

/// Fetch the comment list for `filter` from `GET /api/admin/comments/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the status is not 2xx, or
/// the body does not decode into a successful envelope.
pub async fn fetch_comments(filter: CommentFilter, mode: CommentQueryMode) -> Result<Vec<Comment>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = comment_list_endpoint(filter, mode);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&resp)?;
        let body: Envelope<ResultPage<Comment>> = resp
            .json()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))?;
        Ok(unwrap_envelope(body)?.results)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filter, mode);
        Err(ApiError::Unavailable)
    }
}

/// Approve or reject a comment via `PUT /api/admin/comments/{id}/{action}/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the status is not 2xx.
pub async fn moderate_comment(comment_id: &str, action: ModerationAction) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = comment_action_endpoint(comment_id, action);
        let resp = gloo_net::http::Request::put(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&resp)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (comment_id, action);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a product record via `GET /api/admin/products/{id}/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the status is not 2xx, or
/// the body does not decode into a successful envelope.
pub async fn fetch_product(product_id: &str) -> Result<ProductForm, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = product_endpoint(product_id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&resp)?;
        let body: Envelope<ProductForm> = resp
            .json()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))?;
        unwrap_envelope(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = product_id;
        Err(ApiError::Unavailable)
    }
}

/// Save a whole product record via `PUT /api/admin/products/{id}/`.
///
/// The record is normalized first so no negative or non-finite number leaves
/// the browser.
///
/// # Errors
///
/// Returns an [`ApiError`] if encoding fails, the request fails, or the
/// status is not 2xx.
pub async fn save_product(product_id: &str, form: &ProductForm) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = product_endpoint(product_id);
        let resp = gloo_net::http::Request::put(&url)
            .json(&form.normalized())
            .map_err(|e| ApiError::Malformed(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&resp)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (product_id, form);
        Err(ApiError::Unavailable)
    }
}
