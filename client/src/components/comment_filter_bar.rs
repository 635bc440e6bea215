//! Segmented filter control for the moderation list.

use leptos::prelude::*;

use crate::state::comments::CommentFilter;

pub fn filter_label(filter: CommentFilter) -> &'static str {
    match filter {
        CommentFilter::All => "All",
        CommentFilter::Pending => "Pending",
        CommentFilter::Approved => "Approved",
        CommentFilter::Rejected => "Rejected",
    }
}

#[component]
pub fn CommentFilterBar(#[prop(into)] active: Signal<CommentFilter>, on_select: Callback<CommentFilter>) -> impl IntoView {
    view! {
        <div class="filter-bar" role="tablist">
            {CommentFilter::ALL
                .into_iter()
                .map(|filter| {
                    view! {
                        <button
                            class="filter-bar__option"
                            class:filter-bar__option--active=move || active.get() == filter
                            role="tab"
                            aria-selected=move || (active.get() == filter).to_string()
                            data-filter=filter.as_str()
                            on:click=move |_| on_select.run(filter)
                        >
                            {filter_label(filter)}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
