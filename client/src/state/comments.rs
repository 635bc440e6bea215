//! Comment moderation console state.
//!
//! DESIGN
//! ======
//! The page never mutates comment status locally. It asks this state for a
//! [`FetchRequest`], performs the call, and hands the outcome back. Each
//! request carries a monotonically increasing token so a slow response for an
//! older filter cannot overwrite a newer list. Approve/reject actions are
//! tracked per comment so a second click while the first request is in flight
//! is refused.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use std::collections::HashSet;

use crate::net::error::ApiError;
use crate::net::types::{ApprovalStatus, Comment};

/// Which comments the console lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CommentFilter {
    #[default]
    All,
    Pending,
    Approved,
    Rejected,
}

impl CommentFilter {
    pub const ALL: [Self; 4] = [Self::All, Self::Pending, Self::Approved, Self::Rejected];

    /// Status the backend should match, `None` for no filtering.
    #[must_use]
    pub fn status(self) -> Option<ApprovalStatus> {
        match self {
            Self::All => None,
            Self::Pending => Some(ApprovalStatus::Pending),
            Self::Approved => Some(ApprovalStatus::Approved),
            Self::Rejected => Some(ApprovalStatus::Rejected),
        }
    }

    /// Value used by the filter `<select>`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parse a `<select>` value; unknown values list everything.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|filter| filter.as_str() == raw)
            .unwrap_or_default()
    }
}

/// A moderation decision the console can send.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModerationAction {
    Approve,
    Reject,
}

impl ModerationAction {
    /// Trailing path segment of the action endpoint.
    #[must_use]
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }
}

/// A list fetch the page should perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub token: u64,
    pub filter: CommentFilter,
}

/// Moderation console state provided via context.
#[derive(Clone, Debug, Default)]
pub struct CommentsState {
    pub filter: CommentFilter,
    /// Comments in server order.
    pub items: Vec<Comment>,
    pub loading: bool,
    /// `true` once any list fetch has succeeded.
    pub loaded: bool,
    pub error: Option<String>,
    /// Token of the most recently issued list fetch.
    pub latest_token: u64,
    /// Comment ids with an approve/reject request in flight.
    pub in_flight: HashSet<String>,
}

impl CommentsState {
    /// Switch filters. Returns `true` if the selection changed, in which case
    /// the caller issues a fetch.
    pub fn select_filter(&mut self, filter: CommentFilter) -> bool {
        if self.filter == filter {
            return false;
        }
        self.filter = filter;
        true
    }

    /// Issue a token for a list fetch under the current filter.
    pub fn begin_fetch(&mut self) -> FetchRequest {
        self.latest_token += 1;
        self.loading = true;
        FetchRequest { token: self.latest_token, filter: self.filter }
    }

    /// Apply a list response. Returns `false` when the response is stale and
    /// was discarded.
    ///
    /// On failure the previous list stays in place and `error` is set.
    pub fn finish_fetch(&mut self, token: u64, result: Result<Vec<Comment>, ApiError>) -> bool {
        if token != self.latest_token {
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.loaded = true;
                self.error = None;
            }
            Err(e) => self.error = Some(e.user_message()),
        }
        true
    }

    /// Mark an approve/reject request as in flight. Returns `false` if one is
    /// already pending for this comment.
    pub fn begin_action(&mut self, comment_id: &str) -> bool {
        self.in_flight.insert(comment_id.to_owned())
    }

    /// Settle an approve/reject request.
    ///
    /// On success, returns the re-fetch to perform under the filter selected
    /// now, which may differ from the one at click time. On failure, nothing
    /// is re-fetched and the list is left as it was.
    pub fn finish_action(
        &mut self,
        comment_id: &str,
        action: ModerationAction,
        result: Result<(), ApiError>,
    ) -> Option<FetchRequest> {
        self.in_flight.remove(comment_id);
        match result {
            Ok(()) => {
                self.error = None;
                Some(self.begin_fetch())
            }
            Err(e) => {
                self.error = Some(format!("Could not {} comment: {}", action.path_segment(), e.user_message()));
                None
            }
        }
    }

    #[must_use]
    pub fn is_busy(&self, comment_id: &str) -> bool {
        self.in_flight.contains(comment_id)
    }

    /// Approve/reject is offered only while a comment is pending.
    #[must_use]
    pub fn can_moderate(comment: &Comment) -> bool {
        comment.status() == ApprovalStatus::Pending
    }

    /// Whether to show the empty-state message instead of a list.
    #[must_use]
    pub fn show_empty(&self) -> bool {
        !self.loading && self.items.is_empty() && self.error.is_none()
    }
}
