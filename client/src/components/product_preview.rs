//! Read-only sidebar summarizing the form, with the save action.

#[cfg(test)]
#[path = "product_preview_test.rs"]
mod product_preview_test;

use leptos::prelude::*;

use crate::state::product_form::ProductForm;
use crate::state::ui::UiState;
use crate::util::format::{
    format_months, format_percentage, format_price, format_quantity, group_thousands, margin_percent, sale_price,
};
use crate::util::locale::Locale;

/// `(label, value)` rows shown in the preview panel.
pub fn preview_rows(form: &ProductForm, locale: Locale) -> Vec<(&'static str, String)> {
    let weight = form
        .weight
        .map_or_else(|| locale.not_specified().to_owned(), |w| format!("{} kg", group_thousands(w)));
    vec![
        ("Price", format_price(form.price, locale)),
        ("Sale price", format_price(sale_price(form.price, form.discount_percentage), locale)),
        ("Discount", format_percentage(form.discount_percentage, locale)),
        ("Margin", format_percentage(margin_percent(form.price, form.cost_price), locale)),
        ("Stock", format_quantity(form.stock_quantity, locale)),
        ("In stock", locale.yes_no(form.in_stock).to_owned()),
        ("Weight", weight),
        ("Ships", locale.yes_no(form.requires_shipping).to_owned()),
        ("Warranty", format_months(form.warranty.period_months, locale)),
    ]
}

#[component]
pub fn ProductPreview(
    form: RwSignal<ProductForm>,
    #[prop(into)] saving: Signal<bool>,
    on_save: Callback<ProductForm>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <aside class="product-preview">
            <h2 class="product-preview__title">{move || form.with(|f| f.title.clone())}</h2>
            <dl class="product-preview__rows">
                {move || {
                    let locale = ui.with(|u| u.locale);
                    form.with(|f| preview_rows(f, locale))
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <dt class="product-preview__label">{label}</dt>
                                <dd class="product-preview__value">{value}</dd>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </dl>
            <div class="product-preview__badges">
                <Show when=move || form.with(|f| f.featured)>
                    <span class="badge badge--featured">"Featured"</span>
                </Show>
                <Show when=move || form.with(|f| f.bestseller)>
                    <span class="badge badge--bestseller">"Bestseller"</span>
                </Show>
            </div>
            <button
                class="btn btn--primary product-preview__save"
                disabled=move || saving.get()
                on:click=move |_| on_save.run(form.get_untracked())
            >
                {move || if saving.get() { "Saving..." } else { "Save changes" }}
            </button>
        </aside>
    }
}
