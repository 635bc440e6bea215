//! Tab strip for the product editor sections.
//!
//! Switching tabs only moves the indicator and changes which section renders;
//! it never touches the form record.

#[cfg(test)]
#[path = "product_tabs_test.rs"]
mod product_tabs_test;

use leptos::prelude::*;

use crate::state::ui::{ProductTab, UiState};

/// Inline style positioning the active-tab indicator.
pub fn indicator_style(tab: ProductTab) -> String {
    format!(
        "width: {}%; inset-inline-start: {}%;",
        ProductTab::indicator_width_percent(),
        tab.indicator_offset_percent()
    )
}

#[component]
pub fn ProductTabs() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let active = move || ui.get().product_tab;

    view! {
        <nav class="product-tabs" role="tablist">
            {ProductTab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class="product-tabs__tab"
                            class:product-tabs__tab--active=move || active() == tab
                            role="tab"
                            aria-selected=move || (active() == tab).to_string()
                            on:click=move |_| {
                                ui.update(|u| {
                                    u.select_tab(tab);
                                });
                            }
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
            <span class="product-tabs__indicator" style=move || indicator_style(active())></span>
        </nav>
    }
}
