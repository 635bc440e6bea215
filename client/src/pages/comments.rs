//! Comment moderation console.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists review comments under the selected filter and lets moderators
//! approve or reject pending ones. All status changes are confirmed by a
//! re-fetch; nothing is flipped locally.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use leptos::prelude::*;

use crate::app::ClientConfig;
use crate::components::comment_card::CommentCard;
use crate::components::comment_filter_bar::{CommentFilterBar, filter_label};
use crate::net::api::CommentQueryMode;
use crate::state::comments::{CommentFilter, CommentsState, FetchRequest, ModerationAction};
use crate::state::ui::UiState;

/// Empty-state text for a successful fetch with no results.
pub fn empty_message(filter: CommentFilter) -> String {
    match filter {
        CommentFilter::All => "No comments yet.".to_owned(),
        other => format!("No {} comments.", filter_label(other).to_lowercase()),
    }
}

/// Perform a list fetch and hand the outcome back to the state.
fn run_fetch(comments: RwSignal<CommentsState>, request: FetchRequest, mode: CommentQueryMode) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_comments(request.filter, mode).await;
        if let Err(e) = &result {
            leptos::logging::warn!("comment list fetch failed: filter={} error={e}", request.filter.as_str());
        }
        let applied = comments.try_update(|s| s.finish_fetch(request.token, result));
        if applied == Some(false) {
            leptos::logging::log!("discarded stale comment list response: token={}", request.token);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (comments, request, mode);
    }
}

fn refresh(comments: RwSignal<CommentsState>, mode: CommentQueryMode) {
    if let Some(request) = comments.try_update(CommentsState::begin_fetch) {
        run_fetch(comments, request, mode);
    }
}

#[component]
pub fn CommentsPage() -> impl IntoView {
    let comments = expect_context::<RwSignal<CommentsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let mode = expect_context::<ClientConfig>().query_mode;

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        refresh(comments, mode);
    });

    let on_filter = Callback::new(move |filter: CommentFilter| {
        if comments.try_update(|s| s.select_filter(filter)) == Some(true) {
            refresh(comments, mode);
        }
    });

    let on_action = Callback::new(move |(comment_id, action): (String, ModerationAction)| {
        if comments.try_update(|s| s.begin_action(&comment_id)) != Some(true) {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::moderate_comment(&comment_id, action).await;
            if let Err(e) = &result {
                leptos::logging::warn!(
                    "comment {} failed: id={comment_id} error={e}",
                    action.path_segment()
                );
            }
            if let Some(Some(request)) = comments.try_update(|s| s.finish_action(&comment_id, action, result)) {
                run_fetch(comments, request, mode);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = comments.try_update(|s| {
                s.finish_action(&comment_id, action, Err(crate::net::error::ApiError::Unavailable))
            });
        }
    });

    let active_filter = Signal::derive(move || comments.with(|s| s.filter));

    view! {
        <div class="comments-page">
            <header class="comments-page__header toolbar">
                <span class="toolbar__title">"Review comments"</span>
                <span class="toolbar__spacer"></span>
                <CommentFilterBar active=active_filter on_select=on_filter/>
            </header>

            <Show when=move || comments.with(|s| s.error.is_some())>
                <p class="comments-page__error" role="alert">
                    {move || comments.with(|s| s.error.clone().unwrap_or_default())}
                    <button class="btn btn--link" on:click=move |_| refresh(comments, mode)>
                        "Retry"
                    </button>
                </p>
            </Show>

            <Show
                when=move || comments.with(|s| s.loaded || s.error.is_some())
                fallback=move || view! { <p class="comments-page__loading">"Loading comments..."</p> }
            >
                <Show
                    when=move || !comments.with(CommentsState::show_empty)
                    fallback=move || {
                        view! {
                            <p class="comments-page__empty">
                                {move || empty_message(comments.with(|s| s.filter))}
                            </p>
                        }
                    }
                >
                    <div class="comments-page__list">
                        {move || {
                            let locale = ui.with(|u| u.locale);
                            comments
                                .get()
                                .items
                                .into_iter()
                                .map(|comment| {
                                    let id = comment.id.clone();
                                    let busy = Signal::derive(move || comments.with(|s| s.is_busy(&id)));
                                    view! {
                                        <CommentCard
                                            comment=comment
                                            busy=busy
                                            on_action=on_action
                                            locale=locale
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}
