//! The four product editor sections.
//!
//! All sections stay mounted; the inactive ones are hidden so switching tabs
//! loads nothing and keeps focus state.

use leptos::prelude::*;

use crate::components::form_field::{CheckboxField, NumberField, SelectField, TextField};
use crate::state::product_form::{FieldValue, ProductCondition, ProductField as F, ProductForm, WarrantyKind};
use crate::state::ui::{ProductTab, UiState};

fn warranty_options() -> Vec<(&'static str, &'static str)> {
    WarrantyKind::ALL
        .into_iter()
        .map(|kind| {
            let text = match kind {
                WarrantyKind::NoWarranty => "No warranty",
                WarrantyKind::Seller => "Seller warranty",
                WarrantyKind::Manufacturer => "Manufacturer warranty",
                WarrantyKind::Extended => "Extended warranty",
            };
            (kind.as_str(), text)
        })
        .collect()
}

fn condition_options() -> Vec<(&'static str, &'static str)> {
    ProductCondition::ALL
        .into_iter()
        .map(|condition| {
            let text = match condition {
                ProductCondition::New => "New",
                ProductCondition::Used => "Used",
                ProductCondition::Refurbished => "Refurbished",
            };
            (condition.as_str(), text)
        })
        .collect()
}

fn parse_warranty(raw: &str) -> FieldValue {
    FieldValue::Warranty(WarrantyKind::parse(raw))
}

fn parse_condition(raw: &str) -> FieldValue {
    FieldValue::Condition(ProductCondition::parse(raw))
}

/// Wraps a section and hides it unless `tab` is active.
#[component]
fn Section(tab: ProductTab, children: Children) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    view! {
        <section
            class="product-section"
            role="tabpanel"
            aria-label=tab.label()
            hidden=move || ui.with(|u| u.product_tab != tab)
        >
            {children()}
        </section>
    }
}

#[component]
pub fn ProductSections(form: RwSignal<ProductForm>) -> impl IntoView {
    let locale = expect_context::<RwSignal<UiState>>().with_untracked(|u| u.locale);
    let currency = locale.currency();
    let months = locale.months();

    view! {
        <Section tab=ProductTab::Pricing>
            <NumberField form=form field=F::Price label="Price" step="1000" suffix=currency/>
            <NumberField form=form field=F::ComparePrice label="Compare-at price" step="1000" suffix=currency/>
            <NumberField form=form field=F::CostPrice label="Cost price" step="1000" suffix=currency/>
            <NumberField form=form field=F::DiscountPercentage label="Discount" step="0.5" max="100" suffix="%"/>
            <CheckboxField form=form field=F::Featured label="Featured product"/>
            <CheckboxField form=form field=F::Bestseller label="Bestseller"/>
        </Section>

        <Section tab=ProductTab::Inventory>
            <TextField form=form field=F::Sku label="SKU"/>
            <CheckboxField form=form field=F::TrackStock label="Track stock"/>
            <NumberField form=form field=F::StockQuantity label="Stock quantity" step="1"/>
            <NumberField form=form field=F::LowStockThreshold label="Low-stock threshold" step="1"/>
            <NumberField form=form field=F::MaxOrderQuantity label="Max per order" step="1"/>
            <CheckboxField form=form field=F::InStock label="In stock"/>
        </Section>

        <Section tab=ProductTab::Shipping>
            <CheckboxField form=form field=F::RequiresShipping label="Requires shipping"/>
            <NumberField form=form field=F::Weight label="Weight" step="0.01" suffix="kg"/>
            <div class="form-field-group">
                <span class="form-field-group__title">"Dimensions"</span>
                <NumberField form=form field=F::Length label="Length" step="0.1" suffix="cm"/>
                <NumberField form=form field=F::Width label="Width" step="0.1" suffix="cm"/>
                <NumberField form=form field=F::Height label="Height" step="0.1" suffix="cm"/>
            </div>
        </Section>

        <Section tab=ProductTab::Warranty>
            <SelectField
                form=form
                field=F::WarrantyKind
                label="Warranty type"
                options=warranty_options()
                parse=parse_warranty
            />
            <NumberField form=form field=F::WarrantyPeriod label="Warranty period" step="1" max="120" suffix=months/>
            <SelectField
                form=form
                field=F::Condition
                label="Condition"
                options=condition_options()
                parse=parse_condition
            />
        </Section>
    }
}
