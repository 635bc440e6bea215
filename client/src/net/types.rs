//! Wire DTOs for the admin REST endpoints.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON so serde stays schema-driven. The
//! approval status travels as a nullable boolean and is lifted into
//! [`ApprovalStatus`] at the edge.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Moderation state of a review comment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApprovalStatus {
    /// Awaiting a moderation decision (`is_approved: null`).
    #[default]
    Pending,
    /// Visible on the storefront (`is_approved: true`).
    Approved,
    /// Hidden by a moderator (`is_approved: false`).
    Rejected,
}

impl ApprovalStatus {
    /// Lift the backend's nullable flag into a status.
    #[must_use]
    pub fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            None => Self::Pending,
            Some(true) => Self::Approved,
            Some(false) => Self::Rejected,
        }
    }

    /// Lower the status back into the backend's nullable flag.
    #[must_use]
    pub fn as_flag(self) -> Option<bool> {
        match self {
            Self::Pending => None,
            Self::Approved => Some(true),
            Self::Rejected => Some(false),
        }
    }

    /// Lowercase token used by the tri-state `status=` query parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

/// The comment a reply was written against.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParentComment {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub text: String,
}

/// A review comment as returned by `GET /api/admin/comments/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Backend identifier; numeric ids are carried as strings.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Display name of the author.
    #[serde(default)]
    pub user_name: String,
    /// Avatar image URL, if the author has one.
    #[serde(default)]
    pub user_avatar: Option<String>,
    /// Title of the review this comment belongs to.
    #[serde(default)]
    pub review_title: String,
    /// Title of the reviewed product.
    #[serde(default)]
    pub product_title: String,
    /// Comment body.
    #[serde(default)]
    pub text: String,
    /// Nullable approval flag; see [`Comment::status`].
    #[serde(default)]
    pub is_approved: Option<bool>,
    /// Creation timestamp as sent by the backend (ISO 8601).
    #[serde(default)]
    pub created_at: String,
    /// Parent comment for threaded replies.
    #[serde(default)]
    pub parent: Option<ParentComment>,
}

impl Comment {
    #[must_use]
    pub fn status(&self) -> ApprovalStatus {
        ApprovalStatus::from_flag(self.is_approved)
    }
}

/// Standard `{ success, data }` response wrapper used by the admin API.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

/// Paginated result body; only `results` is consumed.
///
/// Decoding is all-or-nothing: one entry with an unusable id fails the whole
/// page, so the list never silently hides a comment it could not address.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResultPage<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(id) if !id.is_empty() => Ok(id),
        serde_json::Value::Number(number) => match number.as_u64() {
            Some(id) => Ok(id.to_string()),
            None => Err(D::Error::custom("expected non-negative integer id")),
        },
        _ => Err(D::Error::custom("expected string or integer id")),
    }
}
