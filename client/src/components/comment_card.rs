//! A single review comment in the moderation list.
//!
//! Approve/reject controls render only for pending comments and are disabled
//! while a request for that comment is in flight.

#[cfg(test)]
#[path = "comment_card_test.rs"]
mod comment_card_test;

use leptos::prelude::*;

use crate::net::types::{ApprovalStatus, Comment};
use crate::state::comments::{CommentsState, ModerationAction};
use crate::util::format::format_created_at;
use crate::util::locale::Locale;

/// BEM class list for the status badge.
pub fn status_badge_class(status: ApprovalStatus) -> &'static str {
    match status {
        ApprovalStatus::Pending => "status-badge status-badge--pending",
        ApprovalStatus::Approved => "status-badge status-badge--approved",
        ApprovalStatus::Rejected => "status-badge status-badge--rejected",
    }
}

/// Uppercased first letter of the author name, `?` when blank.
pub fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

#[component]
pub fn CommentCard(
    comment: Comment,
    #[prop(into)] busy: Signal<bool>,
    on_action: Callback<(String, ModerationAction)>,
    locale: Locale,
) -> impl IntoView {
    let status = comment.status();
    let can_moderate = CommentsState::can_moderate(&comment);
    let initial = avatar_initial(&comment.user_name);
    let created_at = format_created_at(&comment.created_at);

    let avatar = match comment.user_avatar.clone() {
        Some(url) => view! { <img class="comment-card__avatar" src=url alt=""/> }.into_any(),
        None => view! { <span class="comment-card__avatar comment-card__avatar--initial">{initial}</span> }
            .into_any(),
    };

    let parent = comment.parent.clone().map(|parent| {
        view! {
            <blockquote class="comment-card__parent">
                <span class="comment-card__parent-author">{parent.user_name}</span>
                <p class="comment-card__parent-text">{parent.text}</p>
            </blockquote>
        }
    });

    let actions = can_moderate.then(|| {
        let approve_id = comment.id.clone();
        let reject_id = comment.id.clone();
        view! {
            <div class="comment-card__actions">
                <button
                    class="btn btn--primary"
                    disabled=move || busy.get()
                    on:click=move |_| on_action.run((approve_id.clone(), ModerationAction::Approve))
                >
                    "Approve"
                </button>
                <button
                    class="btn btn--danger"
                    disabled=move || busy.get()
                    on:click=move |_| on_action.run((reject_id.clone(), ModerationAction::Reject))
                >
                    "Reject"
                </button>
            </div>
        }
    });

    view! {
        <article class="comment-card" class:comment-card--busy=move || busy.get()>
            <header class="comment-card__header">
                {avatar}
                <div class="comment-card__meta">
                    <span class="comment-card__author">{comment.user_name.clone()}</span>
                    <span class="comment-card__date">{created_at}</span>
                </div>
                <span class=status_badge_class(status)>{locale.status_label(status)}</span>
            </header>
            <p class="comment-card__target">
                <span class="comment-card__review">{comment.review_title.clone()}</span>
                " · "
                <span class="comment-card__product">{comment.product_title.clone()}</span>
            </p>
            {parent}
            <p class="comment-card__text">{comment.text.clone()}</p>
            {actions}
        </article>
    }
}
