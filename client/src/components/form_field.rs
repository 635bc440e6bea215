//! Labeled inputs bound to a single [`ProductField`].
//!
//! Every field writes through `ProductForm::update`/`apply_input`, so the
//! displayed value is always the stored one.

use leptos::prelude::*;

use crate::state::product_form::{FieldValue, FormError, ProductField, ProductForm};

fn report(result: Option<Result<(), FormError>>) {
    if let Some(Err(e)) = result {
        leptos::logging::warn!("form update rejected: {e}");
    }
}

/// Numeric input; parse failures take the field's fallback.
#[component]
pub fn NumberField(
    form: RwSignal<ProductForm>,
    field: ProductField,
    label: &'static str,
    #[prop(optional)] step: Option<&'static str>,
    #[prop(optional)] max: Option<&'static str>,
    #[prop(optional)] suffix: Option<&'static str>,
) -> impl IntoView {
    let id = format!("product-field-{field:?}").to_lowercase();
    let label_for = id.clone();
    view! {
        <div class="form-field">
            <label class="form-field__label" for=label_for>{label}</label>
            <div class="form-field__control">
                <input
                    id=id
                    class="form-field__input"
                    type="number"
                    min="0"
                    max=max
                    step=step.unwrap_or("any")
                    inputmode="decimal"
                    prop:value=move || form.with(|f| f.input_value(field))
                    on:change=move |ev| {
                        let raw = event_target_value(&ev);
                        report(form.try_update(|f| f.apply_input(field, &raw)));
                    }
                />
                {suffix.map(|s| view! { <span class="form-field__suffix">{s}</span> })}
            </div>
        </div>
    }
}

/// Free-text input (SKU).
#[component]
pub fn TextField(form: RwSignal<ProductForm>, field: ProductField, label: &'static str) -> impl IntoView {
    let id = format!("product-field-{field:?}").to_lowercase();
    let label_for = id.clone();
    view! {
        <div class="form-field">
            <label class="form-field__label" for=label_for>{label}</label>
            <input
                id=id
                class="form-field__input"
                type="text"
                prop:value=move || form.with(|f| f.input_value(field))
                on:change=move |ev| {
                    let raw = event_target_value(&ev);
                    report(form.try_update(|f| f.update(field, FieldValue::Text(Some(raw)))));
                }
            />
        </div>
    }
}

/// Checkbox bound to a boolean flag.
#[component]
pub fn CheckboxField(form: RwSignal<ProductForm>, field: ProductField, label: &'static str) -> impl IntoView {
    view! {
        <label class="form-field form-field--checkbox">
            <input
                type="checkbox"
                prop:checked=move || form.with(|f| f.flag(field))
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    report(form.try_update(|f| f.update(field, FieldValue::Flag(checked))));
                }
            />
            <span class="form-field__label">{label}</span>
        </label>
    }
}

/// `<select>` over a fixed set of `(value, label)` options.
#[component]
pub fn SelectField(
    form: RwSignal<ProductForm>,
    field: ProductField,
    label: &'static str,
    options: Vec<(&'static str, &'static str)>,
    parse: fn(&str) -> FieldValue,
) -> impl IntoView {
    let id = format!("product-field-{field:?}").to_lowercase();
    let label_for = id.clone();
    view! {
        <div class="form-field">
            <label class="form-field__label" for=label_for>{label}</label>
            <select
                id=id
                class="form-field__input"
                prop:value=move || form.with(|f| f.input_value(field))
                on:change=move |ev| {
                    let raw = event_target_value(&ev);
                    report(form.try_update(|f| f.update(field, parse(&raw))));
                }
            >
                {options
                    .into_iter()
                    .map(|(value, text)| view! { <option value=value>{text}</option> })
                    .collect::<Vec<_>>()}
            </select>
        </div>
    }
}
