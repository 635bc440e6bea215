//! Product editor: tabs, sections, and the live preview sidebar.
//!
//! ARCHITECTURE
//! ============
//! The editor owns an in-memory copy of the record handed to it and knows
//! nothing about endpoints. Saving forwards the whole record to the caller's
//! `on_save` callback.

use leptos::prelude::*;

use crate::components::product_preview::ProductPreview;
use crate::components::product_sections::ProductSections;
use crate::components::product_tabs::ProductTabs;
use crate::state::product_form::ProductForm;

#[component]
pub fn ProductEditor(
    initial: ProductForm,
    #[prop(into)] saving: Signal<bool>,
    on_save: Callback<ProductForm>,
) -> impl IntoView {
    let form = RwSignal::new(initial);

    view! {
        <div class="product-editor">
            <div class="product-editor__main">
                <ProductTabs/>
                <ProductSections form=form/>
            </div>
            <ProductPreview form=form saving=saving on_save=on_save/>
        </div>
    }
}
